//! Sanity checks for the static schema tables, including a replay of the
//! legacy substring-matching rules they replaced.

use std::collections::HashSet;

use tlfb_model::{Category, DAY_COLUMNS, TRACKED_FIELDS, day_column};

/// Every summary key the aggregate catalog ever passes to a matcher.
const CATALOG_KEYS: &[&str] = &[
    "scan_flw_g",
    "scan_edithc_mg",
    "scan_edicbd_mg",
    "ncan_flw_g",
    "ncan_flwthc_perc",
    "ncan_flwcbd_perc",
    "ncan_edithc_mg",
    "ncan_edicbd_mg",
    "ncan_dab_hits",
    "ncan_dabthc_perc",
    "ncan_dabcbd_perc",
    "ncan_patch_noyes",
    "scan",
    "ncan",
    "can",
    "alc",
    "tob",
    "tob_cigtts",
    "tob_ecigs",
    "tob_chew",
    "tob_cigars",
    "tob_hookah",
    "rx",
    "rx_opd",
    "rx_sleep",
    "rx_mrelax",
    "rx_nsaid",
    "rx_nerv",
    "rx_adhd",
    "rx_other",
    "illegal",
];

#[test]
fn day_column_codes_are_unique() {
    let mut seen = HashSet::new();
    for spec in DAY_COLUMNS {
        assert!(seen.insert(spec.code), "duplicate code {}", spec.code);
    }
}

#[test]
fn tracked_field_codes_have_day_column_specs() {
    for field in TRACKED_FIELDS {
        assert!(
            day_column(field.code).is_some(),
            "no day column spec for {}",
            field.code
        );
    }
}

#[test]
fn key_table_matches_legacy_substring_rules() {
    for spec in DAY_COLUMNS {
        for key in CATALOG_KEYS {
            assert_eq!(
                spec.keys.contains(key),
                spec.code.contains(key),
                "key {:?} vs column {:?}",
                key,
                spec.code
            );
        }
    }
}

#[test]
fn summable_matches_legacy_name_exclusions() {
    for spec in DAY_COLUMNS {
        let matched = CATALOG_KEYS.iter().any(|key| spec.keys.contains(key));
        if !matched {
            // subst_bin: never selected by any summary key.
            continue;
        }
        let legacy_summable = !spec.code.contains("other") && !spec.code.contains("names");
        assert_eq!(
            spec.summable, legacy_summable,
            "summable mismatch for {}",
            spec.code
        );
    }
}

#[test]
fn legacy_aliases_cover_exactly_the_prefixed_fields() {
    for field in TRACKED_FIELDS {
        match field.legacy_alias {
            Some(alias) => {
                assert!(field.field.starts_with("non_study_"), "{}", field.field);
                assert_ne!(alias, field.field);
            }
            None => assert!(!field.field.starts_with("non_study_"), "{}", field.field),
        }
    }
}

#[test]
fn presence_sets_are_disjoint_and_nonempty() {
    let mut seen: HashSet<&str> = HashSet::new();
    for category in Category::ALL {
        let fields = category.presence_fields();
        assert!(!fields.is_empty());
        for field in fields {
            assert!(
                seen.insert(field),
                "field {field} appears in two categories"
            );
        }
    }
}

#[test]
fn percent_and_dosage_flags_are_scoped() {
    for spec in DAY_COLUMNS {
        if spec.pct {
            assert!(spec.code.ends_with("_perc"), "{}", spec.code);
        }
        if spec.mgpp {
            assert!(spec.code.ends_with("_mgpp"), "{}", spec.code);
        }
    }
}
