use crate::core::Pipeline;
use crate::utils::error::Result;

/// Runs the three phases in order; no phase starts before the previous one finishes.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::debug!("Extracting input rows");
        let rows = self.pipeline.extract().await?;

        tracing::debug!("Looking up {} identifiers", rows.len());
        let batch = self.pipeline.transform(rows).await?;
        tracing::info!(
            "Lookups finished: {} found, {} without results, {} failed",
            batch.results.len(),
            batch.missing,
            batch.failed
        );

        let output_path = self.pipeline.load(batch).await?;
        tracing::debug!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
