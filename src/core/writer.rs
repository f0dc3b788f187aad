use crate::core::{LookupBatch, Storage};
use crate::utils::error::{EtlError, Result};

/// Header row is the batch's `HeaderSet`; one data row per result.
pub fn render_csv(batch: &LookupBatch) -> Result<Vec<u8>> {
    let headers = batch.headers.names();
    // csv quotes empty records as `""`; emit bare blank lines instead
    if batch.headers.is_empty() {
        return Ok("\n".repeat(batch.results.len() + 1).into_bytes());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(headers)?;
    for result in &batch.results {
        writer.write_record(headers.iter().map(|name| result.cell(name)))?;
    }

    writer.flush()?;
    writer.into_inner().map_err(|e| {
        EtlError::IoError(std::io::Error::new(e.error().kind(), e.error().to_string()))
    })
}

/// Refuses to write an empty artifact.
pub async fn write_batch<S: Storage>(storage: &S, path: &str, batch: &LookupBatch) -> Result<()> {
    if batch.results.is_empty() {
        return Err(EtlError::NoResults);
    }

    let data = render_csv(batch)?;
    tracing::debug!("Writing {} bytes to {}", data.len(), path);
    storage.write_file(path, &data).await
}
