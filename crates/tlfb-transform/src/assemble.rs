//! Final record assembly: CSV rendering and the uploader's record key.

use sha2::Digest;

use tlfb_model::FlatRecord;

use crate::error::{Result, TransformError};

/// Renders the record as a UTF-8 CSV payload: optionally a header line of
/// column names, then the value row, in insertion order. Nothing is
/// reordered or deduplicated here; uniqueness is the expander's invariant.
pub fn render_csv(record: &FlatRecord, with_header: bool) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if with_header {
        writer.write_record(record.iter().map(|(name, _)| name))?;
    }
    writer.write_record(record.iter().map(|(_, value)| value))?;
    let bytes = writer
        .into_inner()
        .map_err(|err| TransformError::Render(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| TransformError::Render(err.to_string()))
}

/// Idempotency key for the external repository: the first 16 hex characters
/// of the SHA-256 of the payload.
pub fn record_key(payload: &str) -> String {
    let digest = sha2::Sha256::digest(payload.as_bytes());
    let mut key = hex::encode(digest);
    key.truncate(16);
    key
}
