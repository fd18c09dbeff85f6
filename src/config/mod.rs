pub mod cli;
pub mod rules;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "support-triage")]
#[command(about = "Classifies customer support messages by category and sentiment")]
pub struct CliConfig {
    /// CSV message source with 'id' and 'message' columns
    #[arg(long, default_value = "messages.csv")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// TOML file overriding the category rule table and sentiment thresholds
    #[arg(long)]
    pub rules_file: Option<String>,

    /// Also write the report, classified messages and summary under the output path
    #[arg(long)]
    pub export: bool,

    /// Truncate message cells beyond this width
    #[arg(long, default_value = "50")]
    pub max_col_width: usize,

    /// Cap the number of table rows shown; remaining rows are elided
    #[arg(long)]
    pub max_rows: Option<usize>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn rules_file(&self) -> Option<&str> {
        self.rules_file.as_deref()
    }

    fn export(&self) -> bool {
        self.export
    }

    fn max_col_width(&self) -> usize {
        self.max_col_width
    }

    fn max_rows(&self) -> Option<usize> {
        self.max_rows
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_path("input", &self.input)?;
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("max_col_width", self.max_col_width, 8)?;
        if let Some(max_rows) = self.max_rows {
            validate_positive_number("max_rows", max_rows, 1)?;
        }
        if let Some(rules_file) = &self.rules_file {
            validate_non_empty_string("rules_file", rules_file)?;
        }
        Ok(())
    }
}
