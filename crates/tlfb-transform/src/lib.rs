//! TLFB flat-record transform engine.
//!
//! Turns a sparse per-day substance-use calendar into one dense, fixed-schema
//! CSV row. Pipeline stages, each a pure function:
//!
//! - **normalize**: categorical answer text to canonical numeric strings
//!   (with the `-8888`/`-9999` sentinels)
//! - **expand**: the 30-slot day window of per-field columns and per-category
//!   presence vectors
//! - **aggregate**: sentinel-aware sums, day counts, same-day intersections,
//!   averages, and pills-times-dosage totals over the expanded columns
//! - **summary**: the fixed `summ_*` column catalog
//! - **assemble**: CSV rendering and the uploader's idempotency key
//!
//! The engine holds no state across submissions and performs no I/O; it is
//! safe to run concurrently on independent [`SubmissionInput`]s.

pub mod aggregate;
pub mod assemble;
pub mod error;
pub mod expand;
pub mod normalize;
pub mod numeric;
pub mod summary;

use tlfb_model::{FlatRecord, SubmissionInput};

pub use assemble::{record_key, render_csv};
pub use error::{Result, TransformError};
pub use expand::expand;
pub use normalize::normalize_answer;
pub use summary::summarize;

/// The serialized row plus the uploader's idempotency key.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub csv: String,
    pub record_key: String,
}

/// Expands a submission and appends the summary columns.
pub fn flatten(submission: &SubmissionInput) -> Result<FlatRecord> {
    let mut record = expand::expand(submission)?;
    for (name, value) in summary::summarize(&record) {
        record.push(name, value)?;
    }
    Ok(record)
}

/// Full pipeline: expand, summarize, render to CSV, derive the record key.
pub fn transform_submission(
    submission: &SubmissionInput,
    with_header: bool,
) -> Result<TransformOutput> {
    tracing::debug!(
        subid = %submission.subid,
        days = submission.days.len(),
        "transforming submission"
    );
    let record = flatten(submission)?;
    let csv = assemble::render_csv(&record, with_header)?;
    let record_key = assemble::record_key(&csv);
    Ok(TransformOutput { csv, record_key })
}
