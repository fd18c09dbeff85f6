use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("message source not found: {path} (expected a CSV file with 'id' and 'message' columns)")]
    SourceNotFound { path: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl TriageError {
    /// Exit code for the CLI. Missing sources and configuration problems are
    /// usage errors, everything else is a processing failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            TriageError::SourceNotFound { .. }
            | TriageError::ConfigError { .. }
            | TriageError::InvalidConfigValue { .. }
            | TriageError::MissingConfig { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
