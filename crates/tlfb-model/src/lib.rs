//! Data model for the TLFB flattening pipeline.
//!
//! A Timeline Follow-Back (TLFB) submission is a sparse per-day calendar of
//! substance-use answers collected by an external survey wizard. This crate
//! defines the shared types the transform engine operates on:
//!
//! - **submission**: the raw input — per-day answer maps keyed by ISO date
//! - **record**: the flat output — an insertion-ordered column/value list
//! - **sentinel**: the three reserved numeric values (`-8888`, `-9999`, `-8989`)
//! - **fields**: static tables mapping wizard field names to flat-record
//!   column codes, substance categories, and summary-key groupings

pub mod error;
pub mod fields;
pub mod record;
pub mod sentinel;
pub mod submission;

pub use error::{ModelError, Result};
pub use fields::{
    Category, DAY_COLUMNS, DayColumnSpec, ILLEGAL_NAME_FIELDS, RX_NAME_FIELDS, TRACKED_FIELDS,
    TrackedField, day_column,
};
pub use record::{FlatRecord, split_day_suffix};
pub use sentinel::Sentinel;
pub use submission::{DailyRecord, RawDailyAnswer, SubmissionInput, WINDOW_DAYS};
