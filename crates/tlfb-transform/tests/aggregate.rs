//! Tests for the aggregation primitives and sentinel arithmetic.

use tlfb_model::FlatRecord;
use tlfb_transform::aggregate::{
    average, day_count, fold, mg_total, same_day_count, sum_columns,
};

fn record(columns: &[(&str, &str)]) -> FlatRecord {
    let mut record = FlatRecord::new();
    for (name, value) in columns {
        record.push(*name, *value).unwrap();
    }
    record
}

#[test]
fn fold_first_value_establishes_baseline() {
    assert_eq!(fold(0.0, 1.5, true), 1.5);
    assert_eq!(fold(0.0, -9999.0, true), -9999.0);
}

#[test]
fn fold_real_sum_ignores_later_sentinels() {
    assert_eq!(fold(5.0, -9999.0, false), 5.0);
    assert_eq!(fold(5.0, -8888.0, false), 5.0);
}

#[test]
fn fold_real_value_overrides_sentinel_baseline() {
    assert_eq!(fold(-9999.0, 2.5, false), 2.5);
    assert_eq!(fold(-8989.0, 4.0, false), 4.0);
}

#[test]
fn fold_matching_sentinels_agree() {
    assert_eq!(fold(-8888.0, -8888.0, false), -8888.0);
    assert_eq!(fold(-9999.0, -9999.0, false), -9999.0);
}

#[test]
fn fold_mixed_sentinels_collide() {
    assert_eq!(fold(-8888.0, -9999.0, false), -8989.0);
    assert_eq!(fold(-9999.0, -8888.0, false), -8989.0);
    // A conflict stays a conflict even against an agreeing sentinel.
    assert_eq!(fold(-8989.0, -9999.0, false), -8989.0);
}

#[test]
fn fold_adds_reals_with_rounding() {
    assert_eq!(fold(1.1, 2.2, false), 3.3);
}

#[test]
fn sum_adds_across_days_and_fields() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "1.5"),
        ("alc_wine_drinks_d01", "2"),
        ("alc_beer_drinks_d02", "1"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "4.5");
}

#[test]
fn sum_skips_name_and_other_columns() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "2"),
        ("alc_other_names_d01", "3"),
        ("alc_other_drinks_d01", "3"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "2.0");
}

#[test]
fn sum_is_empty_when_nothing_matches() {
    let flat = record(&[("alc_beer_drinks_d01", "")]);
    assert_eq!(sum_columns(&flat, &["alc"]), "");
    assert_eq!(sum_columns(&flat, &["tob"]), "");
}

#[test]
fn sum_of_only_sentinels_keeps_the_sentinel() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "-8888"),
        ("alc_beer_drinks_d02", "-8888"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "-8888");
}

#[test]
fn sum_of_conflicting_sentinels_marks_the_conflict() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "-8888"),
        ("alc_beer_drinks_d02", "-9999"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "-8989");
}

#[test]
fn sentinel_after_real_value_is_ignored() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "1.5"),
        ("alc_beer_drinks_d02", "-8888"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "1.5");
    // Both days still count as days with an answer.
    assert_eq!(day_count(&flat, &["alc"], false), 2);
}

#[test]
fn rx_sum_excludes_per_pill_dosage_columns() {
    let flat = record(&[
        ("rx_opd_pills_d01", "2"),
        ("rx_opd_mgpp_d01", "5"),
    ]);
    assert_eq!(sum_columns(&flat, &["rx"]), "2.0");
    // The specific key still sums its own dosage column.
    assert_eq!(sum_columns(&flat, &["rx_opd"]), "7.0");
}

#[test]
fn cannabis_sums_exclude_percentage_columns() {
    let flat = record(&[
        ("ncan_flw_g_d01", "1"),
        ("ncan_flwthc_perc_d01", "20"),
    ]);
    assert_eq!(sum_columns(&flat, &["can"]), "1.0");
    assert_eq!(sum_columns(&flat, &["ncan_flwthc_perc"]), "20.0");
}

#[test]
fn unparseable_values_are_skipped_not_fatal() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "-"),
        ("alc_beer_drinks_d02", "2"),
    ]);
    assert_eq!(sum_columns(&flat, &["alc"]), "2.0");
}

#[test]
fn day_count_counts_distinct_days_once() {
    let flat = record(&[
        ("tob_cigtts_amt_d01", "3"),
        ("tob_ecigs_amt_d01", "1"),
        ("tob_cigtts_amt_d05", "2"),
    ]);
    assert_eq!(day_count(&flat, &["tob"], false), 2);
    assert_eq!(day_count(&flat, &["tob_cigtts"], false), 2);
    assert_eq!(day_count(&flat, &["tob_ecigs"], false), 1);
}

#[test]
fn day_count_includes_name_columns() {
    // Unlike sums, day counts treat a free-text name as a use day.
    let flat = record(&[("rx_all_names_d04", "opioids")]);
    assert_eq!(day_count(&flat, &["rx"], false), 1);
}

#[test]
fn unknown_aware_day_count_skips_sentinel_days() {
    let flat = record(&[
        ("alc_beer_drinks_d01", "2"),
        ("alc_beer_drinks_d02", "-8888"),
        ("alc_beer_drinks_d03", "-9999"),
    ]);
    assert_eq!(day_count(&flat, &["alc"], false), 3);
    assert_eq!(day_count(&flat, &["alc"], true), 1);
}

#[test]
fn same_day_count_intersects_categories() {
    let flat = record(&[
        ("ncan_flw_g_d01", "1"),
        ("alc_beer_drinks_d01", "2"),
        ("ncan_flw_g_d02", "1"),
        ("alc_beer_drinks_d03", "1"),
    ]);
    assert_eq!(same_day_count(&flat, &["can", "alc"]), 1);
}

#[test]
fn same_day_count_is_bounded_by_each_category() {
    let flat = record(&[
        ("ncan_flw_g_d01", "1"),
        ("ncan_flw_g_d02", "1"),
        ("alc_beer_drinks_d02", "2"),
    ]);
    let same = same_day_count(&flat, &["can", "alc"]);
    assert!(same <= day_count(&flat, &["can"], false));
    assert!(same <= day_count(&flat, &["alc"], false));
}

#[test]
fn average_divides_by_real_answer_days() {
    let flat = record(&[
        ("scan_flw_g_d01", "1"),
        ("scan_flw_g_d02", "2"),
        ("scan_flw_g_d03", "-8888"),
    ]);
    // Sum 3.0 over two real days; the sentinel day does not dilute it.
    assert_eq!(average(&flat, &["scan_flw_g"]), "1.5");
}

#[test]
fn average_passes_sentinel_sums_through() {
    let flat = record(&[("scan_flw_g_d01", "-9999")]);
    assert_eq!(average(&flat, &["scan_flw_g"]), "-9999");
}

#[test]
fn average_of_nothing_is_empty() {
    let flat = record(&[("scan_flw_g_d01", "")]);
    assert_eq!(average(&flat, &["scan_flw_g"]), "");
}

#[test]
fn mg_total_multiplies_pills_by_dosage_per_day() {
    let flat = record(&[
        ("rx_opd_pills_d01", "2"),
        ("rx_opd_mgpp_d01", "5"),
        ("rx_opd_pills_d02", "1"),
        ("rx_opd_mgpp_d02", "2.5"),
    ]);
    assert_eq!(mg_total(&flat, "rx_opd"), "12.5");
}

#[test]
fn mg_total_requires_both_columns() {
    let flat = record(&[("rx_opd_pills_d01", "2")]);
    assert_eq!(mg_total(&flat, "rx_opd"), "");
}
