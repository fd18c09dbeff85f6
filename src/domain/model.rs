use serde::{Deserialize, Serialize};
use std::fmt;

/// One raw support message as read from the record source. Immutable once read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    pub id: String,
    pub message: String,
}

/// Closed set of triage categories. `Unknown` is the fallback when no
/// keyword rule matches, so classification is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLabel {
    ShipmentStatus,
    DeliveryIssue,
    PaymentInvoice,
    Unknown,
}

impl CategoryLabel {
    /// Human-readable name for reports
    pub fn name(&self) -> &'static str {
        match self {
            CategoryLabel::ShipmentStatus => "Shipment Status",
            CategoryLabel::DeliveryIssue => "Delivery Issue",
            CategoryLabel::PaymentInvoice => "Payment/Invoice",
            CategoryLabel::Unknown => "Unknown",
        }
    }

    /// Short key used in rules files
    pub fn key(&self) -> &'static str {
        match self {
            CategoryLabel::ShipmentStatus => "shipment_status",
            CategoryLabel::DeliveryIssue => "delivery_issue",
            CategoryLabel::PaymentInvoice => "payment_invoice",
            CategoryLabel::Unknown => "unknown",
        }
    }

    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "shipment_status" => Some(CategoryLabel::ShipmentStatus),
            "delivery_issue" => Some(CategoryLabel::DeliveryIssue),
            "payment_invoice" => Some(CategoryLabel::PaymentInvoice),
            "unknown" => Some(CategoryLabel::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Closed set of sentiment labels derived from the compound polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A message record combined with the classifier and labeler outputs.
/// Both label fields are always populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedMessage {
    pub id: String,
    pub message: String,
    pub category: CategoryLabel,
    pub sentiment: SentimentLabel,
}

/// Frequency counts over observed labels, ordered by descending count.
/// Ties keep first-encounter order.
pub type CategorySummary = Vec<(CategoryLabel, usize)>;
pub type SentimentSummary = Vec<(SentimentLabel, usize)>;

/// Output of the transform stage: classified messages in input order plus
/// the summaries recomputed over the full set.
#[derive(Debug, Clone)]
pub struct TriageResult {
    pub messages: Vec<ClassifiedMessage>,
    pub by_category: CategorySummary,
    pub by_sentiment: SentimentSummary,
}

/// How a run ended. `Empty` is the "no messages processed" path and is not
/// an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { summary: String },
    Empty,
}
