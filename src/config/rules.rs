use crate::core::classifier::{CategoryRule, RuleSet, DEFAULT_RULE_TABLE};
use crate::core::sentiment::SentimentThresholds;
use crate::domain::model::CategoryLabel;
use crate::utils::error::{Result, TriageError};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;

/// Rule-table file format. The category priority order is configuration
/// data, not code, so the tie-break between overlapping keyword sets stays
/// an explicit, testable artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryRuleConfig>,
    #[serde(default)]
    pub sentiment: SentimentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRuleConfig {
    pub label: String,
    pub priority: u32,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentConfig {
    #[serde(default = "default_positive_threshold")]
    pub positive_threshold: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative_threshold: f64,
}

fn default_positive_threshold() -> f64 {
    0.05
}

fn default_negative_threshold() -> f64 {
    -0.05
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            positive_threshold: default_positive_threshold(),
            negative_threshold: default_negative_threshold(),
        }
    }
}

fn default_categories() -> Vec<CategoryRuleConfig> {
    DEFAULT_RULE_TABLE
        .iter()
        .map(|(category, priority, keywords)| CategoryRuleConfig {
            label: category.key().to_string(),
            priority: *priority,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            sentiment: SentimentConfig::default(),
        }
    }
}

impl RulesConfig {
    /// Loads the rule table from a TOML file and validates it.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| TriageError::ConfigError {
            message: format!("failed to read rules file {}: {}", path, e),
        })?;
        let config: RulesConfig =
            toml::from_str(&contents).map_err(|e| TriageError::ConfigError {
                message: format!("failed to parse rules file {}: {}", path, e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Resolves the rule table for a run: the given file, or the built-in
    /// defaults when no file is configured.
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn rule_set(&self) -> Result<RuleSet> {
        let mut rules = Vec::with_capacity(self.categories.len());
        for entry in &self.categories {
            let category =
                CategoryLabel::parse_key(&entry.label).ok_or_else(|| {
                    TriageError::InvalidConfigValue {
                        field: "categories.label".to_string(),
                        value: entry.label.clone(),
                        reason: "unknown category label".to_string(),
                    }
                })?;
            rules.push(CategoryRule {
                category,
                priority: entry.priority,
                keywords: entry.keywords.clone(),
            });
        }
        Ok(RuleSet::new(rules))
    }

    pub fn thresholds(&self) -> SentimentThresholds {
        SentimentThresholds {
            positive: self.sentiment.positive_threshold,
            negative: self.sentiment.negative_threshold,
        }
    }
}

impl Validate for RulesConfig {
    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(TriageError::MissingConfig {
                field: "categories".to_string(),
            });
        }

        let mut priorities = HashSet::new();
        for entry in &self.categories {
            if CategoryLabel::parse_key(&entry.label).is_none() {
                return Err(TriageError::InvalidConfigValue {
                    field: "categories.label".to_string(),
                    value: entry.label.clone(),
                    reason: "unknown category label".to_string(),
                });
            }
            if entry.keywords.is_empty()
                || entry.keywords.iter().any(|k| k.trim().is_empty())
            {
                return Err(TriageError::InvalidConfigValue {
                    field: "categories.keywords".to_string(),
                    value: entry.label.clone(),
                    reason: "keyword list must be non-empty with non-blank entries".to_string(),
                });
            }
            if !priorities.insert(entry.priority) {
                return Err(TriageError::InvalidConfigValue {
                    field: "categories.priority".to_string(),
                    value: entry.priority.to_string(),
                    reason: "priorities must be unique".to_string(),
                });
            }
        }

        validate_range(
            "sentiment.positive_threshold",
            self.sentiment.positive_threshold,
            -1.0,
            1.0,
        )?;
        validate_range(
            "sentiment.negative_threshold",
            self.sentiment.negative_threshold,
            -1.0,
            1.0,
        )?;
        if self.sentiment.negative_threshold >= self.sentiment.positive_threshold {
            return Err(TriageError::InvalidConfigValue {
                field: "sentiment".to_string(),
                value: format!(
                    "{} / {}",
                    self.sentiment.negative_threshold, self.sentiment.positive_threshold
                ),
                reason: "negative_threshold must be below positive_threshold".to_string(),
            });
        }

        Ok(())
    }
}
