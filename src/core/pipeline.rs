use crate::core::classifier::RuleSet;
use crate::core::report::{render_report, RenderOptions};
use crate::core::sentiment::{label_sentiment, SentimentThresholds};
use crate::core::summary::aggregate;
use crate::core::{ConfigProvider, Pipeline, PolarityScorer, Storage};
use crate::domain::model::{
    CategoryLabel, ClassifiedMessage, MessageRecord, SentimentLabel, TriageResult,
};
use crate::utils::error::{Result, TriageError};
use serde::Serialize;

pub struct TriagePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    rules: RuleSet,
    thresholds: SentimentThresholds,
    scorer: Box<dyn PolarityScorer>,
}

impl<S: Storage, C: ConfigProvider> TriagePipeline<S, C> {
    pub fn new(
        storage: S,
        config: C,
        rules: RuleSet,
        thresholds: SentimentThresholds,
        scorer: Box<dyn PolarityScorer>,
    ) -> Self {
        Self {
            storage,
            config,
            rules,
            thresholds,
            scorer,
        }
    }
}

#[derive(Serialize)]
struct SummaryExport<'a> {
    total: usize,
    by_category: &'a [(CategoryLabel, usize)],
    by_sentiment: &'a [(SentimentLabel, usize)],
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TriagePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<MessageRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading message source: {}", path);

        let data = match self.storage.read_file(path).await {
            Ok(data) => data,
            Err(TriageError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TriageError::SourceNotFound {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data.as_slice());

        let headers = reader.headers()?.clone();
        let id_index = headers.iter().position(|h| h.trim() == "id");
        let message_index = headers.iter().position(|h| h.trim() == "message");
        let (Some(id_index), Some(message_index)) = (id_index, message_index) else {
            return Err(TriageError::ProcessingError {
                message: format!(
                    "input is missing required columns 'id' and 'message' (found: {})",
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for (row, parsed) in reader.records().enumerate() {
            // header occupies line 1
            let line = row + 2;
            let parsed = match parsed {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!("Skipping unreadable row at line {}: {}", line, e);
                    skipped += 1;
                    continue;
                }
            };

            let id = parsed.get(id_index).map(str::trim).unwrap_or("");
            let message = parsed.get(message_index).map(str::trim).unwrap_or("");
            if id.is_empty() || message.is_empty() {
                tracing::warn!("Skipping row at line {}: missing id or message", line);
                skipped += 1;
                continue;
            }

            records.push(MessageRecord {
                id: id.to_string(),
                message: message.to_string(),
            });
        }

        if skipped > 0 {
            tracing::debug!("Skipped {} malformed rows", skipped);
        }

        Ok(records)
    }

    async fn transform(&self, records: Vec<MessageRecord>) -> Result<TriageResult> {
        let mut messages = Vec::with_capacity(records.len());

        for record in records {
            let category = self.rules.classify(&record.message);
            let sentiment = label_sentiment(&record.message, self.scorer.as_ref(), &self.thresholds);
            tracing::debug!(
                "Message {} classified as {} / {}",
                record.id,
                category,
                sentiment
            );
            messages.push(ClassifiedMessage {
                id: record.id,
                message: record.message,
                category,
                sentiment,
            });
        }

        let (by_category, by_sentiment) = aggregate(&messages);

        Ok(TriageResult {
            messages,
            by_category,
            by_sentiment,
        })
    }

    async fn load(&self, result: TriageResult) -> Result<String> {
        let options = RenderOptions {
            max_col_width: self.config.max_col_width(),
            max_rows: self.config.max_rows(),
        };
        let report = render_report(&result, &options);
        println!("{}", report);

        if self.config.export() {
            let output_path = self.config.output_path();

            let report_path = format!("{}/triage_report.txt", output_path);
            self.storage
                .write_file(&report_path, report.as_bytes())
                .await?;

            let csv_path = format!("{}/classified_messages.csv", output_path);
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["id", "message", "category", "sentiment"])?;
            for message in &result.messages {
                let category = message.category.to_string();
                let sentiment = message.sentiment.to_string();
                writer.write_record([
                    message.id.as_str(),
                    message.message.as_str(),
                    category.as_str(),
                    sentiment.as_str(),
                ])?;
            }
            let csv_bytes = writer
                .into_inner()
                .map_err(|e| TriageError::ProcessingError {
                    message: format!("failed to finalize CSV export: {}", e),
                })?;
            self.storage.write_file(&csv_path, &csv_bytes).await?;

            let summary_path = format!("{}/summary.json", output_path);
            let summary_json = serde_json::to_string_pretty(&SummaryExport {
                total: result.messages.len(),
                by_category: &result.by_category,
                by_sentiment: &result.by_sentiment,
            })?;
            self.storage
                .write_file(&summary_path, summary_json.as_bytes())
                .await?;

            tracing::info!("Exported results under {}", output_path);
        }

        Ok(format!(
            "{} messages triaged into {} categories",
            result.messages.len(),
            result.by_category.len()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sentiment::LexiconScorer;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                TriageError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
        output_path: String,
        export: bool,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
                output_path: "test_output".to_string(),
                export: false,
            }
        }

        fn with_export(input_path: &str) -> Self {
            Self {
                export: true,
                ..Self::new(input_path)
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn rules_file(&self) -> Option<&str> {
            None
        }

        fn export(&self) -> bool {
            self.export
        }

        fn max_col_width(&self) -> usize {
            50
        }

        fn max_rows(&self) -> Option<usize> {
            None
        }
    }

    fn pipeline(
        storage: MockStorage,
        config: MockConfig,
    ) -> TriagePipeline<MockStorage, MockConfig> {
        TriagePipeline::new(
            storage,
            config,
            RuleSet::default(),
            SentimentThresholds::default(),
            Box::new(LexiconScorer::new()),
        )
    }

    const SAMPLE_CSV: &str = "id,message\n\
        1,Where is my order?\n\
        2,My item was damaged\n\
        3,Please confirm the invoice payment\n\
        4,\"Great service, thanks!\"\n";

    #[tokio::test]
    async fn extract_parses_all_rows() {
        let storage = MockStorage::new();
        storage.put_file("messages.csv", SAMPLE_CSV.as_bytes()).await;
        let pipeline = pipeline(storage, MockConfig::new("messages.csv"));

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].message, "Where is my order?");
        assert_eq!(records[3].message, "Great service, thanks!");
    }

    #[tokio::test]
    async fn extract_missing_file_is_source_not_found() {
        let storage = MockStorage::new();
        let pipeline = pipeline(storage, MockConfig::new("absent.csv"));

        let err = pipeline.extract().await.unwrap_err();

        match err {
            TriageError::SourceNotFound { path } => assert_eq!(path, "absent.csv"),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn extract_skips_malformed_rows() {
        let csv = "id,message\n\
            1,Where is my order?\n\
            ,missing id here\n\
            2,\n\
            3\n\
            4,My item was damaged\n";
        let storage = MockStorage::new();
        storage.put_file("messages.csv", csv.as_bytes()).await;
        let pipeline = pipeline(storage, MockConfig::new("messages.csv"));

        let records = pipeline.extract().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "4");
    }

    #[tokio::test]
    async fn extract_rejects_missing_required_columns() {
        let storage = MockStorage::new();
        storage
            .put_file("messages.csv", b"identifier,text\n1,hello\n")
            .await;
        let pipeline = pipeline(storage, MockConfig::new("messages.csv"));

        let err = pipeline.extract().await.unwrap_err();

        match err {
            TriageError::ProcessingError { message } => {
                assert!(message.contains("id"));
                assert!(message.contains("message"));
            }
            other => panic!("expected ProcessingError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn transform_assigns_categories_and_sentiments_in_input_order() {
        let storage = MockStorage::new();
        storage.put_file("messages.csv", SAMPLE_CSV.as_bytes()).await;
        let pipeline = pipeline(storage, MockConfig::new("messages.csv"));

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();

        let categories: Vec<CategoryLabel> =
            result.messages.iter().map(|m| m.category).collect();
        assert_eq!(
            categories,
            vec![
                CategoryLabel::ShipmentStatus,
                CategoryLabel::DeliveryIssue,
                CategoryLabel::PaymentInvoice,
                CategoryLabel::Unknown,
            ]
        );

        assert_eq!(result.messages[3].sentiment, SentimentLabel::Positive);
        assert_ne!(result.messages[1].sentiment, SentimentLabel::Positive);

        let category_total: usize = result.by_category.iter().map(|(_, n)| n).sum();
        let sentiment_total: usize = result.by_sentiment.iter().map(|(_, n)| n).sum();
        assert_eq!(category_total, 4);
        assert_eq!(sentiment_total, 4);
    }

    #[tokio::test]
    async fn transform_empty_input_yields_empty_result() {
        let storage = MockStorage::new();
        let pipeline = pipeline(storage, MockConfig::new("messages.csv"));

        let result = pipeline.transform(Vec::new()).await.unwrap();

        assert!(result.messages.is_empty());
        assert!(result.by_category.is_empty());
        assert!(result.by_sentiment.is_empty());
    }

    #[tokio::test]
    async fn load_without_export_writes_nothing() {
        let storage = MockStorage::new();
        storage.put_file("messages.csv", SAMPLE_CSV.as_bytes()).await;
        let pipeline = pipeline(storage.clone(), MockConfig::new("messages.csv"));

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        let summary = pipeline.load(result).await.unwrap();

        assert_eq!(summary, "4 messages triaged into 4 categories");
        assert!(storage
            .get_file("test_output/triage_report.txt")
            .await
            .is_none());
    }

    #[tokio::test]
    async fn load_with_export_writes_report_csv_and_summary() {
        let storage = MockStorage::new();
        storage.put_file("messages.csv", SAMPLE_CSV.as_bytes()).await;
        let pipeline = pipeline(storage.clone(), MockConfig::with_export("messages.csv"));

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        pipeline.load(result).await.unwrap();

        let report = storage
            .get_file("test_output/triage_report.txt")
            .await
            .expect("report exported");
        let report = String::from_utf8(report).unwrap();
        assert!(report.contains("SUPPORT TRIAGE - RESULTS"));

        let csv_bytes = storage
            .get_file("test_output/classified_messages.csv")
            .await
            .expect("csv exported");
        let csv_text = String::from_utf8(csv_bytes).unwrap();
        assert!(csv_text.starts_with("id,message,category,sentiment"));
        assert!(csv_text.contains("Payment/Invoice"));

        let summary_bytes = storage
            .get_file("test_output/summary.json")
            .await
            .expect("summary exported");
        let summary: serde_json::Value = serde_json::from_slice(&summary_bytes).unwrap();
        assert_eq!(summary["total"], 4);
    }
}
