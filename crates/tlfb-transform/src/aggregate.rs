//! Cross-day aggregation primitives with sentinel-aware arithmetic.
//!
//! Everything here operates on the already-expanded flat per-day columns,
//! never on the nested submission. Columns are selected by summary key via
//! the static table in `tlfb_model::fields`, which reproduces the legacy
//! substring groupings exactly.

use std::collections::BTreeSet;

use tlfb_model::{DayColumnSpec, FlatRecord, Sentinel, WINDOW_DAYS, day_column};

use crate::numeric::{format_float, round10};

/// Keys that denote a cannabis quantity total, for which THC/CBD percentage
/// columns must not contribute.
const CANNABIS_KEYS: &[&str] = &["can", "cann", "cans"];

/// Textual forms that do not count as a real answer when a day count is
/// unknown-aware.
const UNKNOWN_TOKENS: &[&str] = &["-9999", "-8888", "999", "----", "Unknown"];

/// Folds one value into a running sum without letting sentinels corrupt it.
///
/// The first value establishes the baseline verbatim. After that: two
/// sentinels agree or collapse to [`Sentinel::Conflict`]; a real value
/// overrides a sentinel baseline; a sentinel folded onto a real sum is
/// ignored; two reals add, rounded to 10 decimals.
pub fn fold(sum: f64, value: f64, first: bool) -> f64 {
    if first {
        return value;
    }
    match (Sentinel::from_f64(sum), Sentinel::from_f64(value.trunc())) {
        (Some(current), Some(next)) => {
            if current == Sentinel::Conflict || current != next {
                Sentinel::Conflict.as_f64()
            } else {
                value
            }
        }
        (Some(_), None) => round10(value),
        (None, Some(next)) if next != Sentinel::Conflict => sum,
        _ => round10(sum + value),
    }
}

fn key_selects(spec: &DayColumnSpec, key: &str) -> bool {
    spec.keys.contains(&key)
}

/// Whether a column contributes to the sum for `key`: name lists and other-
/// substance columns never do; THC/CBD percentages are excluded from
/// cannabis totals and per-pill dosages from the bare `rx` total.
fn key_sums(spec: &DayColumnSpec, key: &str) -> bool {
    key_selects(spec, key)
        && spec.summable
        && !(CANNABIS_KEYS.contains(&key) && spec.pct)
        && !(key == "rx" && spec.mgpp)
}

/// Sum-aggregate over every day column selected by any of `keys`.
///
/// Returns `""` when no matching non-empty value exists at all, which is
/// distinct from a computed zero. A sentinel-only sum renders as the sentinel
/// token. A value that survives normalization but still fails to parse is
/// reported and skipped rather than aborting the aggregate.
pub fn sum_columns(record: &FlatRecord, keys: &[&str]) -> String {
    let mut sum = 0.0f64;
    let mut first = true;
    let mut found = false;
    for key in keys {
        for (code, _day, value) in record.day_columns() {
            let Some(spec) = day_column(code) else {
                continue;
            };
            if value.is_empty() || !key_sums(spec, key) {
                continue;
            }
            found = true;
            match value.parse::<f64>() {
                Ok(parsed) => {
                    sum = fold(sum, parsed, first);
                    first = false;
                }
                Err(_) => {
                    tracing::error!(column = code, value, "failed to convert aggregate value");
                }
            }
        }
    }
    if !found {
        String::new()
    } else if let Some(sentinel) = Sentinel::from_f64(sum) {
        sentinel.as_str().to_string()
    } else {
        format_float(sum)
    }
}

/// The distinct day tags on which any column selected by `key` holds a
/// non-empty value. Unknown-aware mode skips sentinel answers so only days
/// with a real measurement count.
fn day_set<'a>(record: &'a FlatRecord, key: &str, unknown_aware: bool) -> BTreeSet<&'a str> {
    let mut days = BTreeSet::new();
    for (code, day, value) in record.day_columns() {
        let Some(spec) = day_column(code) else {
            continue;
        };
        if value.is_empty() || !key_selects(spec, key) {
            continue;
        }
        if unknown_aware && UNKNOWN_TOKENS.contains(&value) {
            continue;
        }
        days.insert(day);
    }
    days
}

/// Counts distinct days with a non-empty value in any column selected by any
/// of `keys`.
pub fn day_count(record: &FlatRecord, keys: &[&str], unknown_aware: bool) -> usize {
    let mut days = BTreeSet::new();
    for key in keys {
        days.extend(day_set(record, key, unknown_aware));
    }
    days.len()
}

/// Counts days on which *all* of `keys` were simultaneously in use: the size
/// of the intersection of the per-key day sets.
pub fn same_day_count(record: &FlatRecord, keys: &[&str]) -> usize {
    let mut intersection: Option<BTreeSet<&str>> = None;
    for key in keys {
        let days = day_set(record, key, false);
        intersection = Some(match intersection {
            None => days,
            Some(acc) => acc.intersection(&days).copied().collect(),
        });
    }
    intersection.map_or(0, |days| days.len())
}

/// Sum divided by the unknown-aware day count, rounded to 10 decimals.
/// Empty and sentinel sums pass through unchanged.
pub fn average(record: &FlatRecord, keys: &[&str]) -> String {
    let sum = sum_columns(record, keys);
    if sum.is_empty() {
        return sum;
    }
    if let Some(sentinel) = Sentinel::from_token(&sum) {
        return sentinel.as_str().to_string();
    }
    let Ok(total) = sum.parse::<f64>() else {
        return String::new();
    };
    let days = day_count(record, keys, true);
    if days == 0 {
        return "0.0".to_string();
    }
    format_float(round10(total / days as f64))
}

/// Dosage total for one prescription key: `pills * mg-per-pill` accumulated
/// over every day where both columns are non-empty. Returns `""` when no day
/// contributed.
pub fn mg_total(record: &FlatRecord, key: &str) -> String {
    let mut total = 0.0f64;
    let mut found = false;
    for slot in 1..=WINDOW_DAYS {
        let pills_col = format!("{key}_pills_d{slot:02}");
        let mgpp_col = format!("{key}_mgpp_d{slot:02}");
        let (Some(pills), Some(mgpp)) = (record.get(&pills_col), record.get(&mgpp_col)) else {
            continue;
        };
        if pills.is_empty() || mgpp.is_empty() {
            continue;
        }
        found = true;
        match (pills.parse::<f64>(), mgpp.parse::<f64>()) {
            (Ok(p), Ok(m)) => total += round10(p * m),
            _ => {
                tracing::error!(
                    column = %pills_col,
                    pills,
                    mgpp,
                    "failed to convert dosage values"
                );
            }
        }
    }
    if found { format_float(total) } else { String::new() }
}
