use crate::domain::model::{MessageRecord, TriageResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn rules_file(&self) -> Option<&str>;
    fn export(&self) -> bool;
    fn max_col_width(&self) -> usize;
    fn max_rows(&self) -> Option<usize>;
}

/// Polarity scoring capability. Implementations must be deterministic, pure
/// and return a compound score in [-1.0, 1.0]. Constructed once per run and
/// passed by reference into the labeling code.
pub trait PolarityScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<MessageRecord>>;
    async fn transform(&self, records: Vec<MessageRecord>) -> Result<TriageResult>;
    async fn load(&self, result: TriageResult) -> Result<String>;
}
