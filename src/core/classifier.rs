use crate::domain::model::CategoryLabel;

/// Built-in rule table: (category, priority, keywords). Lower priority rank
/// is evaluated first; payment and delivery rules are more specific than the
/// general shipment-status rule, so they take the lower ranks.
pub const DEFAULT_RULE_TABLE: &[(CategoryLabel, u32, &[&str])] = &[
    (
        CategoryLabel::PaymentInvoice,
        1,
        &["payment", "invoice", "pay", "processed", "bill"],
    ),
    (
        CategoryLabel::DeliveryIssue,
        2,
        &["damaged", "missing", "failed", "wrong address", "wet", "missed"],
    ),
    (
        CategoryLabel::ShipmentStatus,
        3,
        &[
            "shipment",
            "status",
            "order",
            "where is",
            "tracking",
            "track",
            "delivery yet",
        ],
    ),
];

/// One keyword-containment rule. Matches when any keyword is a
/// case-insensitive substring of the message.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: CategoryLabel,
    pub priority: u32,
    pub keywords: Vec<String>,
}

/// Ordered rule table. First matching rule in priority order wins, which is
/// the tie-break for messages containing keywords of several categories.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CategoryRule>,
}

impl RuleSet {
    pub fn new(mut rules: Vec<CategoryRule>) -> Self {
        for rule in &mut rules {
            for keyword in &mut rule.keywords {
                *keyword = keyword.to_lowercase();
            }
        }
        rules.sort_by_key(|rule| rule.priority);
        Self { rules }
    }

    /// Maps a message to exactly one category. Total: falls back to
    /// `Unknown` when no rule matches.
    pub fn classify(&self, message: &str) -> CategoryLabel {
        let lowered = message.to_lowercase();
        for rule in &self.rules {
            if rule
                .keywords
                .iter()
                .any(|keyword| lowered.contains(keyword.as_str()))
            {
                return rule.category;
            }
        }
        CategoryLabel::Unknown
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        let rules = DEFAULT_RULE_TABLE
            .iter()
            .map(|(category, priority, keywords)| CategoryRule {
                category: *category,
                priority: *priority,
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();
        Self::new(rules)
    }
}
