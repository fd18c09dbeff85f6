pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::{engine::TriageEngine, pipeline::TriagePipeline};
pub use crate::domain::model::{
    CategoryLabel, ClassifiedMessage, MessageRecord, RunOutcome, SentimentLabel, TriageResult,
};
pub use crate::utils::error::{Result, TriageError};
