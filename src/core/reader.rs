use crate::core::{InputRow, Storage};
use crate::utils::error::Result;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Parses a headed CSV document into rows. Short or long rows are kept;
/// cells without a matching header are dropped. Invalid UTF-8 is decoded
/// lossily so one bad cell does not sink the run.
pub fn parse_rows(data: &[u8]) -> Result<Vec<InputRow>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|header| String::from_utf8_lossy(header).into_owned())
        .collect();
    let mut rows = Vec::new();

    for record in reader.byte_records() {
        let record = record?;
        let data = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| {
                (header.clone(), String::from_utf8_lossy(value).into_owned())
            })
            .collect();
        rows.push(InputRow { data });
    }

    Ok(rows)
}

pub async fn read_rows<S: Storage>(storage: &S, path: &str) -> Result<Vec<InputRow>> {
    let data = storage.read_file(path).await?;
    tracing::debug!("Read {} bytes from {}", data.len(), path);
    parse_rows(&data)
}
