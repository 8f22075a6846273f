use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use tlfb_cli::logging::redact_value;
use tlfb_model::{SubmissionInput, TRACKED_FIELDS};
use tlfb_transform::aggregate::day_count;
use tlfb_transform::{flatten, record_key, render_csv};

use crate::cli::TransformArgs;
use crate::summary::apply_table_style;
use crate::types::{CategoryDays, TransformResult};

/// Summary keys behind each per-category day count shown after a run.
const CATEGORY_KEYS: &[(&str, &[&str])] = &[
    ("Alcohol", &["alc"]),
    ("Tobacco", &["tob"]),
    ("Study cannabis", &["scan"]),
    ("Non-study cannabis", &["ncan"]),
    ("Prescription", &["rx"]),
    ("Illegal", &["illegal"]),
];

pub fn run_transform(args: &TransformArgs) -> Result<TransformResult> {
    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;
    let submission: SubmissionInput = serde_json::from_str(&raw)
        .with_context(|| format!("parse {}", args.input.display()))?;

    let span = info_span!("transform", subid = redact_value(&submission.subid));
    let _guard = span.enter();

    let days_total = submission.days.len();
    let missing = submission.unsubmitted_dates();
    let days_missing = missing.len();
    for date in missing {
        warn!(date, "calendar day was never submitted");
    }
    debug!(
        days = days_total,
        timepoint = %submission.timepoint,
        "flattening calendar"
    );

    let record = flatten(&submission)?;
    let csv = render_csv(&record, !args.no_header)?;
    let key = record_key(&csv);

    match &args.output {
        Some(path) => {
            fs::write(path, &csv).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), record_key = %key, "wrote flat record");
        }
        None => {
            io::stdout()
                .write_all(csv.as_bytes())
                .context("write stdout")?;
        }
    }

    let filled = record
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .count();
    let category_days = CATEGORY_KEYS
        .iter()
        .map(|&(label, keys)| CategoryDays {
            label,
            days: day_count(&record, keys, false),
        })
        .collect();
    let aggregates = record
        .iter()
        .filter(|(name, value)| name.starts_with("summ_") && !value.is_empty())
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();

    Ok(TransformResult {
        subid: submission.subid,
        timepoint: submission.timepoint,
        days_submitted: days_total - days_missing,
        days_missing,
        columns: record.len(),
        filled,
        record_key: key,
        output: args.output.clone(),
        category_days,
        aggregates,
    })
}

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Column", "Category", "Input", "Legacy alias"]);
    apply_table_style(&mut table);
    for field in TRACKED_FIELDS {
        table.add_row(vec![
            field.field,
            field.code,
            field.category.label(),
            if field.free_text { "free text" } else { "quantity" },
            field.legacy_alias.unwrap_or("-"),
        ]);
    }
    println!("{table}");
    Ok(())
}
