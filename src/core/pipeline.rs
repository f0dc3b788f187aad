use crate::core::lookup::RecallClient;
use crate::core::{reader, writer};
use crate::core::{ConfigProvider, InputRow, LookupBatch, Pipeline, Storage};
use crate::utils::error::{EtlError, Result};
use reqwest::Client;

pub struct RecallPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: RecallClient,
}

impl<S: Storage, C: ConfigProvider> RecallPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let client = RecallClient::new(Client::new(), &config);
        Self {
            storage,
            config,
            client,
        }
    }

    fn log_failure(&self, id: &str, error: &EtlError) {
        tracing::error!("Error fetching data for {}: {}", id, error);
        if let EtlError::HttpStatusError { status, body } = error {
            tracing::error!("Status: {}", status);
            tracing::error!("Data: {}", body);
            if self.config.debug() {
                let pretty = serde_json::from_str::<serde_json::Value>(body)
                    .and_then(|json| serde_json::to_string_pretty(&json))
                    .unwrap_or_else(|_| body.clone());
                tracing::info!("Full Error Response: {}", pretty);
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for RecallPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<InputRow>> {
        tracing::info!("Reading NHTSA IDs from {}...", self.config.input_path());
        let rows = reader::read_rows(&self.storage, self.config.input_path()).await?;
        tracing::info!("Found {} recalls to process.", rows.len());
        Ok(rows)
    }

    async fn transform(&self, rows: Vec<InputRow>) -> Result<LookupBatch> {
        let total = rows.len();
        let id_column = self.config.id_column();
        let mut batch = LookupBatch::default();

        for (index, row) in rows.iter().enumerate() {
            let Some(id) = row.identifier(id_column) else {
                tracing::error!(
                    "Row {}/{} has no '{}' column, skipping",
                    index + 1,
                    total,
                    id_column
                );
                batch.failed += 1;
                continue;
            };

            tracing::info!("Processing {}/{}: {}", index + 1, total, id);
            batch.attempted += 1;

            match self.client.fetch(id).await {
                Ok(Some(result)) => {
                    batch.push(result);
                    tracing::info!("Successfully retrieved data for {}", id);
                }
                Ok(None) => {
                    batch.missing += 1;
                    tracing::warn!("No results found for NHTSA ID: {}", id);
                }
                Err(e) => {
                    batch.failed += 1;
                    self.log_failure(id, &e);
                }
            }

            // flat pacing, applied after every request
            tokio::time::sleep(self.config.request_delay()).await;
        }

        Ok(batch)
    }

    async fn load(&self, batch: LookupBatch) -> Result<String> {
        let output_path = self.config.output_path();
        writer::write_batch(&self.storage, output_path, &batch).await?;
        tracing::info!(
            "Successfully wrote {} records to {}",
            batch.results.len(),
            output_path
        );
        Ok(output_path.to_string())
    }
}
