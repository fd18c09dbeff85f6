pub mod classifier;
pub mod engine;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod summary;

pub use crate::domain::model::{ClassifiedMessage, MessageRecord, TriageResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, PolarityScorer, Storage};
pub use crate::utils::error::Result;
