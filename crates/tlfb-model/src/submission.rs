//! Raw submission input as accumulated by the external survey wizard.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fixed width of the output day window.
pub const WINDOW_DAYS: usize = 30;

/// One user response to one substance-detail field on one calendar day.
///
/// `answer` holds the stored choice value or free text; `label` and
/// `answer_display` are the human-readable forms the wizard recorded
/// alongside it. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDailyAnswer {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_display: Option<String>,
}

impl RawDailyAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            label: None,
            answer_display: None,
        }
    }
}

/// One calendar day of answers. Sparse by construction: only fields the
/// respondent answered with a non-empty value appear in `substances`, so
/// absence means "not used".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    #[serde(default)]
    pub substances: BTreeMap<String, RawDailyAnswer>,
    #[serde(default)]
    pub submitted: bool,
}

impl DailyRecord {
    /// Returns the stored answer text for a field, if present and non-empty.
    pub fn answer(&self, field: &str) -> Option<&str> {
        self.substances
            .get(field)
            .map(|raw| raw.answer.as_str())
            .filter(|answer| !answer.is_empty())
    }

    /// True if any field from `fields` was answered on this day.
    pub fn any_answered(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.answer(field).is_some())
    }
}

/// A finished calendar for one subject, consumed exactly once by the
/// transform.
///
/// `days` is keyed by ISO date strings, so the `BTreeMap` ordering is both
/// lexical and chronological. `cohort` and `study` arrive already resolved
/// by the caller; the core performs no identity lookups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionInput {
    pub subid: String,
    pub timepoint: String,
    #[serde(default)]
    pub cohort: String,
    #[serde(default)]
    pub study: String,
    /// Submission id, emitted as the `pid` column family.
    pub pid: String,
    #[serde(default)]
    pub days: BTreeMap<String, DailyRecord>,
}

impl SubmissionInput {
    /// Dates with no recorded submission, for caller-side completeness checks.
    pub fn unsubmitted_dates(&self) -> Vec<&str> {
        self.days
            .iter()
            .filter(|(_, day)| !day.submitted)
            .map(|(date, _)| date.as_str())
            .collect()
    }
}
