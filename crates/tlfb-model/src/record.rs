//! The flat output record: an insertion-ordered column/value list.

use std::collections::HashMap;

use crate::error::{ModelError, Result};

/// An ordered mapping of column name to normalized string value.
///
/// Columns are never reordered or deduplicated after insertion; name
/// uniqueness is enforced at insert time and day-suffix cardinality (exactly
/// 30 slots per tracked field) is the expander's invariant.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    columns: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Fails on a duplicate name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(ModelError::DuplicateColumn(name));
        }
        self.index.insert(name.clone(), self.columns.len());
        self.columns.push((name, value.into()));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.columns[i].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Day-suffixed columns only, as `(code, day_suffix, value)` where the
    /// suffix is the trailing `dNN` tag. Identity and summary columns carry
    /// no suffix and are skipped, which keeps aggregation off `pid_*` and
    /// `cohort_*` by construction.
    pub fn day_columns(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.columns.iter().filter_map(|(name, value)| {
            let (code, suffix) = split_day_suffix(name)?;
            Some((code, suffix, value.as_str()))
        })
    }
}

/// Splits `alc_beer_drinks_d07` into `("alc_beer_drinks", "d07")`.
/// Returns `None` for names without a `_dNN` suffix.
pub fn split_day_suffix(name: &str) -> Option<(&str, &str)> {
    let (code, suffix) = name.rsplit_once('_')?;
    let digits = suffix.strip_prefix('d')?;
    if digits.len() == 2 && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some((code, suffix))
    } else {
        None
    }
}
