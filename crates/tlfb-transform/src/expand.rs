//! Day expansion: sparse per-day answers onto the fixed 30-slot schema.

use chrono::{Duration, NaiveDate};

use tlfb_model::{
    Category, DailyRecord, FlatRecord, ILLEGAL_NAME_FIELDS, ModelError, RX_NAME_FIELDS,
    SubmissionInput, TRACKED_FIELDS, TrackedField, WINDOW_DAYS,
};

use crate::error::Result;
use crate::normalize::normalize_answer;

/// Column-name suffixes for the per-category identity duplicates.
const IDENTITY_CATEGORIES: &[&str] = &["alc", "tob", "can", "rx", "illegal"];

/// Expands a submission into identity and per-day columns.
///
/// The output always spans exactly 30 day slots: extra days are truncated
/// (chronologically earliest kept) and missing trailing slots get synthetic
/// dates `last_date + 1, +2, ...` with empty answer sets.
pub fn expand(submission: &SubmissionInput) -> Result<FlatRecord> {
    let window = day_window(submission)?;
    let mut record = FlatRecord::new();

    record.push("pid", &submission.pid)?;
    record.push("cohort", &submission.cohort)?;
    record.push("subid", &submission.subid)?;
    record.push("study", &submission.study)?;
    record.push("timepoint", &submission.timepoint)?;
    for category in IDENTITY_CATEGORIES {
        record.push(format!("pid_{category}"), &submission.pid)?;
    }
    for category in IDENTITY_CATEGORIES {
        record.push(format!("cohort_{category}"), &submission.cohort)?;
    }

    let empty_day = DailyRecord::default();
    for (idx, date) in window.iter().enumerate() {
        let suffix = format!("_d{:02}", idx + 1);
        let day = submission.days.get(date).unwrap_or(&empty_day);

        record.push(format!("subst_bin{suffix}"), presence_vector(day))?;

        let mut rx_names_emitted = false;
        for field in TRACKED_FIELDS {
            if field.category == Category::Prescription && !rx_names_emitted {
                record.push(format!("rx_all_names{suffix}"), rx_all_names(day))?;
                rx_names_emitted = true;
            }
            record.push(format!("{}{suffix}", field.code), field_answer(day, field))?;
        }

        record.push(format!("illegal_all_names{suffix}"), illegal_all_names(day))?;
        record.push(
            format!("illegal_other_names{suffix}"),
            other_substance_names(day),
        )?;
    }

    Ok(record)
}

/// The 30-entry ISO date sequence covered by the output slots: recorded
/// dates first (earliest 30 when over-long), then synthetic continuations of
/// the last recorded date.
pub fn day_window(submission: &SubmissionInput) -> Result<Vec<String>> {
    let mut dates: Vec<String> = submission.days.keys().take(WINDOW_DAYS).cloned().collect();
    let last = dates.last().cloned().ok_or(ModelError::EmptySubmission)?;
    let last_date = NaiveDate::parse_from_str(&last, "%Y-%m-%d")
        .map_err(|_| ModelError::InvalidDate(last))?;
    let mut offset = 0i64;
    while dates.len() < WINDOW_DAYS {
        offset += 1;
        let synthetic = last_date + Duration::days(offset);
        dates.push(synthetic.format("%Y-%m-%d").to_string());
    }
    Ok(dates)
}

/// Seven comma-joined binary flags, one per category, in `Category::ALL`
/// order.
fn presence_vector(day: &DailyRecord) -> String {
    let flags: Vec<&str> = Category::ALL
        .iter()
        .map(|category| {
            if day.any_answered(category.presence_fields()) {
                "1"
            } else {
                "0"
            }
        })
        .collect();
    flags.join(",")
}

/// Resolves one tracked field for one day, falling back to its legacy alias
/// when the canonical name is absent.
fn field_answer(day: &DailyRecord, field: &TrackedField) -> String {
    let raw = day
        .answer(field.field)
        .or_else(|| field.legacy_alias.and_then(|alias| day.answer(alias)));
    match raw {
        None => String::new(),
        Some(text) if field.free_text => text.to_string(),
        Some(text) => normalize_answer(text),
    }
}

/// Names of the prescription fields answered this day, with the free-text
/// other-medication name appended when present.
fn rx_all_names(day: &DailyRecord) -> String {
    let mut names: Vec<&str> = RX_NAME_FIELDS
        .iter()
        .copied()
        .filter(|field| day.answer(field).is_some())
        .collect();
    if let Some(other) = day.answer("other_medicine_name") {
        names.push(other);
    }
    names.join(",")
}

/// Names of the illegal-drug checkboxes ticked this day, plus the free-text
/// other-illegal answer when present.
fn illegal_all_names(day: &DailyRecord) -> String {
    let mut names: Vec<&str> = ILLEGAL_NAME_FIELDS
        .iter()
        .copied()
        .filter(|field| day.answer(field).is_some())
        .collect();
    if let Some(other) = day.answer("other_illegal_drugs") {
        names.push(other);
    }
    names.join(",")
}

/// All repeatable "other substance" answers for the day: `other_substances`,
/// `other_substances1`, ... until the first absent index.
fn other_substance_names(day: &DailyRecord) -> String {
    let mut names = Vec::new();
    let mut field = "other_substances".to_string();
    let mut index = 0usize;
    while let Some(answer) = day.answer(&field) {
        names.push(answer);
        index += 1;
        field = format!("other_substances{index}");
    }
    names.join(",")
}
