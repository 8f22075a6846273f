//! Static tables describing the flat-record schema.
//!
//! The legacy pipeline grouped columns by substring containment ("does the
//! column name contain `can`"), which is fragile. These tables make every
//! grouping explicit: each wizard field maps to a column code and category,
//! and each per-day column carries the list of summary keys that select it.
//! The groupings are transcribed so that a table lookup yields exactly what
//! the substring rules used to.

use std::fmt;

/// Top-level substance category; the order here is the order of the flags in
/// the `subst_bin_dNN` presence vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Alcohol,
    Tobacco,
    StudyCannabis,
    NonStudyCannabis,
    Prescription,
    Illegal,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Alcohol,
        Category::Tobacco,
        Category::StudyCannabis,
        Category::NonStudyCannabis,
        Category::Prescription,
        Category::Illegal,
        Category::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Alcohol => "alcohol",
            Category::Tobacco => "tobacco",
            Category::StudyCannabis => "study cannabis",
            Category::NonStudyCannabis => "non-study cannabis",
            Category::Prescription => "prescription",
            Category::Illegal => "illegal",
            Category::Other => "other",
        }
    }

    /// Wizard field names whose presence marks this category as used for the
    /// day. The non-study cannabis set keeps the legacy unprefixed names so
    /// old sessions still raise the flag.
    pub fn presence_fields(self) -> &'static [&'static str] {
        match self {
            Category::Alcohol => &[
                "beer",
                "wine",
                "shots",
                "other_alcohol_name",
                "other_alcohol_quantity",
            ],
            Category::Tobacco => &[
                "cigarettes",
                "ecigs",
                "chew",
                "cigars",
                "hookah",
                "other_tobacco_name",
                "other_tobacco_quantity",
            ],
            Category::StudyCannabis => &[
                "study_cannabis_flower_total_grams",
                "study_cannabis_edible_thc",
                "study_cannabis_edible_cbd",
            ],
            Category::NonStudyCannabis => &[
                "non_study_cannabis_flower_total_grams",
                "non_study_cannabis_flower_or_bud_thc",
                "non_study_cannabis_flower_or_bud_cbd",
                "non_study_cannabis_edible_thc",
                "non_study_cannabis_edible_cbd",
                "non_study_cannabis_concentrate",
                "non_study_cannabis_concentrate_thc",
                "non_study_cannabis_concentrate_cbd",
                "non_study_cannabis_topical_patch",
                "non_study_other_cannabis_name",
                "cannabis_concentrate",
                "cannabis_concentrate_thc",
                "cannabis_concentrate_cbd",
                "cannabis_flower_or_bud",
                "cannabis_flower_or_bud_cbd",
                "cannabis_flower_or_bud_thc",
                "cannabis_edible_thc",
                "cannabis_edible_cbd",
            ],
            Category::Prescription => &[
                "opioids",
                "opioid_dosage",
                "sleep_medication",
                "sleep_medication_dosage",
                "muscle_relaxants",
                "muscle_relaxants_dosage",
                "nsaids",
                "nsaids_dosage",
                "nerve_pain_medicine",
                "nerve_pain_medicine_dosage",
                "adhd_medicine",
                "adhd_medicine_dosage",
                "other_medicine_name",
                "other_medicine",
                "other_medicine_dosage",
            ],
            Category::Illegal => &[
                "cocaine",
                "amphetamine",
                "methamphetamine",
                "mdma",
                "heroin",
                "lsd",
                "mushrooms",
                "peyote",
                "ecstasy",
                "other_illegal_drugs",
            ],
            Category::Other => &["other_substances"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One wizard field that feeds one per-day output column.
#[derive(Debug, Clone, Copy)]
pub struct TrackedField {
    /// Canonical wizard field name.
    pub field: &'static str,
    /// Flat-record column prefix; the day suffix is appended per slot.
    pub code: &'static str,
    pub category: Category,
    /// Free-text fields pass through verbatim; everything else runs the
    /// value normalizer.
    pub free_text: bool,
    /// Pre-split field name looked up when the canonical name is absent.
    /// Applies to exactly the fields that predate the study/non-study split.
    pub legacy_alias: Option<&'static str>,
}

const fn quantity(field: &'static str, code: &'static str, category: Category) -> TrackedField {
    TrackedField {
        field,
        code,
        category,
        free_text: false,
        legacy_alias: None,
    }
}

const fn free_text(field: &'static str, code: &'static str, category: Category) -> TrackedField {
    TrackedField {
        field,
        code,
        category,
        free_text: true,
        legacy_alias: None,
    }
}

const fn aliased(
    field: &'static str,
    code: &'static str,
    category: Category,
    alias: &'static str,
) -> TrackedField {
    TrackedField {
        field,
        code,
        category,
        free_text: false,
        legacy_alias: Some(alias),
    }
}

/// Every directly tracked field, in flat-record emission order.
///
/// `other_alcohol_quantity` intentionally appears twice: the legacy record
/// wrote the same answer under both `alc_other_names` and `alc_other_drinks`.
pub const TRACKED_FIELDS: &[TrackedField] = &[
    quantity("beer", "alc_beer_drinks", Category::Alcohol),
    quantity("wine", "alc_wine_drinks", Category::Alcohol),
    quantity("shots", "alc_hliq_drinks", Category::Alcohol),
    quantity("other_alcohol_quantity", "alc_other_names", Category::Alcohol),
    quantity("other_alcohol_quantity", "alc_other_drinks", Category::Alcohol),
    quantity("cigarettes", "tob_cigtts_amt", Category::Tobacco),
    quantity("ecigs", "tob_ecigs_amt", Category::Tobacco),
    quantity("chew", "tob_chew_amt", Category::Tobacco),
    quantity("cigars", "tob_cigars_amt", Category::Tobacco),
    quantity("hookah", "tob_hookah_amt", Category::Tobacco),
    free_text("other_tobacco_name", "tob_other_names", Category::Tobacco),
    quantity("other_tobacco_quantity", "tob_other_amt", Category::Tobacco),
    quantity(
        "study_cannabis_flower_total_grams",
        "scan_flw_g",
        Category::StudyCannabis,
    ),
    quantity(
        "study_cannabis_edible_thc",
        "scan_edithc_mg",
        Category::StudyCannabis,
    ),
    quantity(
        "study_cannabis_edible_cbd",
        "scan_edicbd_mg",
        Category::StudyCannabis,
    ),
    aliased(
        "non_study_cannabis_flower_total_grams",
        "ncan_flw_g",
        Category::NonStudyCannabis,
        "cannabis_flower_or_bud",
    ),
    aliased(
        "non_study_cannabis_flower_or_bud_thc",
        "ncan_flwthc_perc",
        Category::NonStudyCannabis,
        "cannabis_flower_or_bud_thc",
    ),
    aliased(
        "non_study_cannabis_flower_or_bud_cbd",
        "ncan_flwcbd_perc",
        Category::NonStudyCannabis,
        "cannabis_flower_or_bud_cbd",
    ),
    aliased(
        "non_study_cannabis_edible_thc",
        "ncan_edithc_mg",
        Category::NonStudyCannabis,
        "cannabis_edible_thc",
    ),
    aliased(
        "non_study_cannabis_edible_cbd",
        "ncan_edicbd_mg",
        Category::NonStudyCannabis,
        "cannabis_edible_cbd",
    ),
    aliased(
        "non_study_cannabis_concentrate",
        "ncan_dab_hits",
        Category::NonStudyCannabis,
        "cannabis_concentrate",
    ),
    aliased(
        "non_study_cannabis_concentrate_thc",
        "ncan_dabthc_perc",
        Category::NonStudyCannabis,
        "cannabis_concentrate_thc",
    ),
    aliased(
        "non_study_cannabis_concentrate_cbd",
        "ncan_dabcbd_perc",
        Category::NonStudyCannabis,
        "cannabis_concentrate_cbd",
    ),
    aliased(
        "non_study_cannabis_topical_patch",
        "ncan_patch_noyes",
        Category::NonStudyCannabis,
        "cannabis_topical_patch",
    ),
    TrackedField {
        field: "non_study_other_cannabis_name",
        code: "ncan_other_names",
        category: Category::NonStudyCannabis,
        free_text: true,
        legacy_alias: Some("other_cannabis_name"),
    },
    quantity("opioids", "rx_opd_pills", Category::Prescription),
    quantity("opioid_dosage", "rx_opd_mgpp", Category::Prescription),
    quantity("sleep_medication", "rx_sleep_pills", Category::Prescription),
    quantity("sleep_medication_dosage", "rx_sleep_mgpp", Category::Prescription),
    quantity("muscle_relaxants", "rx_mrelax_pills", Category::Prescription),
    quantity("muscle_relaxants_dosage", "rx_mrelax_mgpp", Category::Prescription),
    quantity("nsaids", "rx_nsaid_pills", Category::Prescription),
    quantity("nsaids_dosage", "rx_nsaid_mgpp", Category::Prescription),
    quantity("nerve_pain_medicine", "rx_nerv_pills", Category::Prescription),
    quantity("nerve_pain_medicine_dosage", "rx_nerv_mgpp", Category::Prescription),
    quantity("adhd_medicine", "rx_adhd_pills", Category::Prescription),
    quantity("adhd_medicine_dosage", "rx_adhd_mgpp", Category::Prescription),
    free_text("other_medicine_name", "rx_other_names", Category::Prescription),
    quantity("other_medicine", "rx_other_pills", Category::Prescription),
    quantity("other_medicine_dosage", "rx_other_mgpp", Category::Prescription),
];

/// Prescription fields whose names are joined into `rx_all_names_dNN`.
pub const RX_NAME_FIELDS: &[&str] = &[
    "opioids",
    "sleep_medication",
    "muscle_relaxants",
    "nsaids",
    "nerve_pain_medicine",
    "adhd_medicine",
];

/// Illegal-drug checkbox fields joined into `illegal_all_names_dNN`.
pub const ILLEGAL_NAME_FIELDS: &[&str] = &[
    "cocaine",
    "amphetamine",
    "methamphetamine",
    "mdma",
    "heroin",
    "lsd",
    "mushrooms",
    "peyote",
    "ecstasy",
];

/// One per-day output column as seen by the aggregator.
#[derive(Debug, Clone, Copy)]
pub struct DayColumnSpec {
    pub code: &'static str,
    /// Summary keys that select this column. A column always carries its own
    /// code plus the category-level keys whose legacy substring matched it.
    pub keys: &'static [&'static str],
    /// Eligible for sum aggregation. Name lists and `*_other_*` columns are
    /// not, matching the legacy `other`/`names` exclusions.
    pub summable: bool,
    /// THC/CBD percentage, left out of cannabis quantity totals.
    pub pct: bool,
    /// Per-pill dosage, left out of totals for the bare `rx` key.
    pub mgpp: bool,
}

const fn col(
    code: &'static str,
    keys: &'static [&'static str],
    summable: bool,
) -> DayColumnSpec {
    DayColumnSpec {
        code,
        keys,
        summable,
        pct: false,
        mgpp: false,
    }
}

const fn pct_col(code: &'static str, keys: &'static [&'static str]) -> DayColumnSpec {
    DayColumnSpec {
        code,
        keys,
        summable: true,
        pct: true,
        mgpp: false,
    }
}

const fn mgpp_col(
    code: &'static str,
    keys: &'static [&'static str],
    summable: bool,
) -> DayColumnSpec {
    DayColumnSpec {
        code,
        keys,
        summable,
        pct: false,
        mgpp: true,
    }
}

/// Every per-day column in emission order, including the derived ones.
pub const DAY_COLUMNS: &[DayColumnSpec] = &[
    col("subst_bin", &["subst_bin"], false),
    col("alc_beer_drinks", &["alc_beer_drinks", "alc"], true),
    col("alc_wine_drinks", &["alc_wine_drinks", "alc"], true),
    col("alc_hliq_drinks", &["alc_hliq_drinks", "alc"], true),
    col("alc_other_names", &["alc_other_names", "alc"], false),
    col("alc_other_drinks", &["alc_other_drinks", "alc"], false),
    col("tob_cigtts_amt", &["tob_cigtts_amt", "tob_cigtts", "tob"], true),
    col("tob_ecigs_amt", &["tob_ecigs_amt", "tob_ecigs", "tob"], true),
    col("tob_chew_amt", &["tob_chew_amt", "tob_chew", "tob"], true),
    col("tob_cigars_amt", &["tob_cigars_amt", "tob_cigars", "tob"], true),
    col("tob_hookah_amt", &["tob_hookah_amt", "tob_hookah", "tob"], true),
    col("tob_other_names", &["tob_other_names", "tob"], false),
    col("tob_other_amt", &["tob_other_amt", "tob"], false),
    col("scan_flw_g", &["scan_flw_g", "scan", "can"], true),
    col("scan_edithc_mg", &["scan_edithc_mg", "scan", "can"], true),
    col("scan_edicbd_mg", &["scan_edicbd_mg", "scan", "can"], true),
    col("ncan_flw_g", &["ncan_flw_g", "ncan", "can"], true),
    pct_col("ncan_flwthc_perc", &["ncan_flwthc_perc", "ncan", "can"]),
    pct_col("ncan_flwcbd_perc", &["ncan_flwcbd_perc", "ncan", "can"]),
    col("ncan_edithc_mg", &["ncan_edithc_mg", "ncan", "can"], true),
    col("ncan_edicbd_mg", &["ncan_edicbd_mg", "ncan", "can"], true),
    col("ncan_dab_hits", &["ncan_dab_hits", "ncan", "can"], true),
    pct_col("ncan_dabthc_perc", &["ncan_dabthc_perc", "ncan", "can"]),
    pct_col("ncan_dabcbd_perc", &["ncan_dabcbd_perc", "ncan", "can"]),
    col("ncan_patch_noyes", &["ncan_patch_noyes", "ncan", "can"], true),
    col("ncan_other_names", &["ncan_other_names", "ncan", "can"], false),
    col("rx_all_names", &["rx_all_names", "rx"], false),
    col("rx_opd_pills", &["rx_opd_pills", "rx_opd", "rx"], true),
    mgpp_col("rx_opd_mgpp", &["rx_opd_mgpp", "rx_opd", "rx"], true),
    col("rx_sleep_pills", &["rx_sleep_pills", "rx_sleep", "rx"], true),
    mgpp_col("rx_sleep_mgpp", &["rx_sleep_mgpp", "rx_sleep", "rx"], true),
    col("rx_mrelax_pills", &["rx_mrelax_pills", "rx_mrelax", "rx"], true),
    mgpp_col("rx_mrelax_mgpp", &["rx_mrelax_mgpp", "rx_mrelax", "rx"], true),
    col("rx_nsaid_pills", &["rx_nsaid_pills", "rx_nsaid", "rx"], true),
    mgpp_col("rx_nsaid_mgpp", &["rx_nsaid_mgpp", "rx_nsaid", "rx"], true),
    col("rx_nerv_pills", &["rx_nerv_pills", "rx_nerv", "rx"], true),
    mgpp_col("rx_nerv_mgpp", &["rx_nerv_mgpp", "rx_nerv", "rx"], true),
    col("rx_adhd_pills", &["rx_adhd_pills", "rx_adhd", "rx"], true),
    mgpp_col("rx_adhd_mgpp", &["rx_adhd_mgpp", "rx_adhd", "rx"], true),
    col("rx_other_names", &["rx_other_names", "rx_other", "rx"], false),
    col("rx_other_pills", &["rx_other_pills", "rx_other", "rx"], false),
    mgpp_col("rx_other_mgpp", &["rx_other_mgpp", "rx_other", "rx"], false),
    col("illegal_all_names", &["illegal_all_names", "illegal"], false),
    col("illegal_other_names", &["illegal_other_names", "illegal"], false),
];

/// Looks up the aggregation spec for a per-day column code.
pub fn day_column(code: &str) -> Option<&'static DayColumnSpec> {
    DAY_COLUMNS.iter().find(|spec| spec.code == code)
}
