use crate::core::Pipeline;
use crate::domain::model::RunOutcome;
use crate::utils::error::Result;

/// Drives one batch run: extract, transform, load. Zero extracted records
/// short-circuit to `RunOutcome::Empty` before any report is rendered.
pub struct TriageEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TriageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting triage run");

        let records = self.pipeline.extract().await?;
        tracing::info!("Read {} message records", records.len());

        if records.is_empty() {
            tracing::warn!("No messages were processed");
            return Ok(RunOutcome::Empty);
        }

        let result = self.pipeline.transform(records).await?;
        tracing::info!("Classified {} messages", result.messages.len());

        let summary = self.pipeline.load(result).await?;
        Ok(RunOutcome::Completed { summary })
    }
}
