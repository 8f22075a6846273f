//! End-to-end transform scenarios and aggregate properties.

use std::collections::BTreeMap;

use proptest::prelude::*;

use tlfb_model::{DailyRecord, FlatRecord, RawDailyAnswer, SubmissionInput};
use tlfb_transform::aggregate::{day_count, fold, same_day_count};
use tlfb_transform::{flatten, record_key, summarize, transform_submission};

fn day(fields: &[(&str, &str)]) -> DailyRecord {
    let mut record = DailyRecord {
        submitted: true,
        ..DailyRecord::default()
    };
    for (field, answer) in fields {
        record
            .substances
            .insert((*field).to_string(), RawDailyAnswer::new(*answer));
    }
    record
}

fn submission(days: Vec<(String, DailyRecord)>) -> SubmissionInput {
    SubmissionInput {
        subid: "S-001".to_string(),
        timepoint: "2".to_string(),
        cohort: "4".to_string(),
        study: "A".to_string(),
        pid: "12345".to_string(),
        days: days.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

fn empty_month() -> SubmissionInput {
    let days = (1..=30)
        .map(|slot| (format!("2024-03-{slot:02}"), day(&[])))
        .collect();
    submission(days)
}

const TOTAL_COLUMNS: usize = 15 + 30 * 44 + 64;

#[test]
fn all_empty_month_yields_empty_summaries() {
    let record = flatten(&empty_month()).unwrap();
    assert_eq!(record.len(), TOTAL_COLUMNS);
    for (name, value) in record.iter() {
        if name.starts_with("summ_total_") || name.starts_with("summ_avg_") {
            assert_eq!(value, "", "{name} should be empty on a no-use month");
        }
        if name.starts_with("subst_bin_") {
            assert_eq!(value, "0,0,0,0,0,0,0");
        }
    }
}

#[test]
fn beer_then_placeholder_scenario() {
    let input = submission(vec![
        ("2024-03-01".to_string(), day(&[("beer", "1 1/2")])),
        ("2024-03-02".to_string(), day(&[("beer", "----")])),
    ]);
    let record = flatten(&input).unwrap();
    // The placeholder day is ignored by the sum but still counts as a day
    // with an answer.
    assert_eq!(record.get("summ_total_alc_all_drinks"), Some("1.5"));
    assert_eq!(record.get("summ_total_alc_all_d"), Some("2"));
    assert_eq!(record.get("summ_avg_alc_all_drinkspd"), Some("1.5"));
}

#[test]
fn opioid_dosage_scenario() {
    let input = submission(vec![(
        "2024-03-01".to_string(),
        day(&[("opioids", "2"), ("opioid_dosage", "5")]),
    )]);
    let record = flatten(&input).unwrap();
    assert_eq!(record.get("summ_total_rx_opd_mg"), Some("10.0"));
    assert_eq!(record.get("summ_total_rx_opd_d"), Some("1"));
    assert_eq!(record.get("summ_total_rx_all_d"), Some("1"));
}

#[test]
fn cannabis_and_alcohol_same_day_scenario() {
    let input = submission(vec![
        (
            "2024-03-01".to_string(),
            day(&[("beer", "2"), ("non_study_cannabis_concentrate", "3")]),
        ),
        ("2024-03-02".to_string(), day(&[("beer", "1")])),
        (
            "2024-03-03".to_string(),
            day(&[("study_cannabis_flower_total_grams", "1/2")]),
        ),
    ]);
    let record = flatten(&input).unwrap();
    assert_eq!(record.get("summ_total_can_all_d"), Some("2"));
    assert_eq!(record.get("summ_total_scan_all_d"), Some("1"));
    assert_eq!(record.get("summ_total_ncan_all_d"), Some("1"));
    assert_eq!(record.get("summ_total_alc_all_d"), Some("2"));
    assert_eq!(record.get("summ_total_canalc_d"), Some("1"));
    assert_eq!(record.get("summ_total_scan_flw_g"), Some("0.5"));
}

#[test]
fn summary_columns_keep_catalog_order() {
    let record = flatten(&empty_month()).unwrap();
    let summary_names: Vec<&str> = record
        .iter()
        .map(|(name, _)| name)
        .filter(|name| name.starts_with("summ_"))
        .collect();
    let expected: Vec<&str> = summarize(&FlatRecord::new())
        .iter()
        .map(|(name, _)| *name)
        .collect();
    assert_eq!(summary_names, expected);
    assert_eq!(summary_names.len(), 64);
    assert_eq!(summary_names.first(), Some(&"summ_total_scan_flw_g"));
    assert_eq!(summary_names.last(), Some(&"summ_total_illegal_all_d"));
}

#[test]
fn csv_payload_has_header_and_one_row() {
    let output = transform_submission(&empty_month(), true).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(output.csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), TOTAL_COLUMNS);
    assert_eq!(&headers[0], "pid");
    assert_eq!(&headers[TOTAL_COLUMNS - 1], "summ_total_illegal_all_d");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), TOTAL_COLUMNS);
    assert_eq!(&rows[0][0], "12345");
}

#[test]
fn record_key_is_stable_and_short() {
    let output = transform_submission(&empty_month(), true).unwrap();
    assert_eq!(output.record_key.len(), 16);
    assert!(output.record_key.chars().all(|ch| ch.is_ascii_hexdigit()));
    assert_eq!(output.record_key, record_key(&output.csv));

    let headerless = transform_submission(&empty_month(), false).unwrap();
    assert_ne!(output.record_key, headerless.record_key);
}

proptest! {
    /// Once a real value is in the sum, no sequence of sentinels moves it.
    #[test]
    fn sentinels_never_disturb_a_real_sum(
        baseline in 0.0f64..1000.0,
        sentinels in proptest::collection::vec(
            prop_oneof![Just(-8888.0f64), Just(-9999.0f64)],
            0..10,
        ),
    ) {
        let mut sum = fold(0.0, baseline, true);
        for sentinel in sentinels {
            sum = fold(sum, sentinel, false);
        }
        prop_assert_eq!(sum, baseline);
    }

    /// Same-day intersections never exceed either category's own day count.
    #[test]
    fn intersection_is_bounded_by_min_day_count(
        beer in proptest::collection::vec(proptest::option::of(1u32..20), 30),
        cigarettes in proptest::collection::vec(proptest::option::of(1u32..20), 30),
    ) {
        let mut record = FlatRecord::new();
        for (idx, (b, c)) in beer.iter().zip(&cigarettes).enumerate() {
            let slot = idx + 1;
            if let Some(value) = b {
                record.push(format!("alc_beer_drinks_d{slot:02}"), value.to_string()).unwrap();
            }
            if let Some(value) = c {
                record.push(format!("tob_cigtts_amt_d{slot:02}"), value.to_string()).unwrap();
            }
        }
        let same = same_day_count(&record, &["alc", "tob"]);
        prop_assert!(same <= day_count(&record, &["alc"], false));
        prop_assert!(same <= day_count(&record, &["tob"], false));
    }
}
