//! The fixed `summ_*` aggregate column catalog.
//!
//! Column order is load-bearing: the downstream repository imports rows by
//! position once the header is established, so entries must stay in this
//! exact sequence.

use tlfb_model::FlatRecord;

use crate::aggregate::{average, day_count, mg_total, same_day_count, sum_columns};

/// Renders a day count the same way sums render: no data means `""`, never a
/// filled-in zero.
fn count(record: &FlatRecord, keys: &[&str]) -> String {
    match day_count(record, keys, false) {
        0 => String::new(),
        n => n.to_string(),
    }
}

fn same_days(record: &FlatRecord, keys: &[&str]) -> String {
    match same_day_count(record, keys) {
        0 => String::new(),
        n => n.to_string(),
    }
}

/// Computes every summary column over the expanded per-day columns.
pub fn summarize(record: &FlatRecord) -> Vec<(&'static str, String)> {
    let mut out: Vec<(&'static str, String)> = Vec::with_capacity(64);
    let mut put = |name: &'static str, value: String| out.push((name, value));

    // Study cannabis: flower, then edibles.
    put("summ_total_scan_flw_g", sum_columns(record, &["scan_flw_g"]));
    put("summ_total_scan_flw_d", count(record, &["scan_flw_g"]));
    put("summ_avg_scan_flw_gpd", average(record, &["scan_flw_g"]));

    put(
        "summ_total_scan_edithc_mg",
        sum_columns(record, &["scan_edithc_mg"]),
    );
    put(
        "summ_total_scan_edicbd_mg",
        sum_columns(record, &["scan_edicbd_mg"]),
    );
    put(
        "summ_total_scan_edi_mg",
        sum_columns(record, &["scan_edithc_mg", "scan_edicbd_mg"]),
    );
    put(
        "summ_total_scan_edi_d",
        count(record, &["scan_edithc_mg", "scan_edicbd_mg"]),
    );
    put(
        "summ_avg_scan_edi_mgpd",
        average(record, &["scan_edithc_mg", "scan_edicbd_mg"]),
    );

    // Non-study cannabis: flower, edibles, concentrate, patch.
    put("summ_total_ncan_flw_g", sum_columns(record, &["ncan_flw_g"]));
    put("summ_total_ncan_flw_d", count(record, &["ncan_flw_g"]));
    put("summ_avg_ncan_flw_gpd", average(record, &["ncan_flw_g"]));
    put(
        "summ_avg_ncan_flwthc_perc",
        average(record, &["ncan_flwthc_perc"]),
    );
    put(
        "summ_avg_ncan_flwcbd_perc",
        average(record, &["ncan_flwcbd_perc"]),
    );

    put(
        "summ_total_ncan_edithc_mg",
        sum_columns(record, &["ncan_edithc_mg"]),
    );
    put(
        "summ_total_ncan_edicbd_mg",
        sum_columns(record, &["ncan_edicbd_mg"]),
    );
    put(
        "summ_total_ncan_edi_mg",
        sum_columns(record, &["ncan_edithc_mg", "ncan_edicbd_mg"]),
    );
    put(
        "summ_total_ncan_edi_d",
        count(record, &["ncan_edithc_mg", "ncan_edicbd_mg"]),
    );
    put(
        "summ_avg_ncan_edi_mgpd",
        average(record, &["ncan_edithc_mg", "ncan_edicbd_mg"]),
    );

    put(
        "summ_total_ncan_dab_hits",
        sum_columns(record, &["ncan_dab_hits"]),
    );
    put("summ_total_ncan_dab_d", count(record, &["ncan_dab_hits"]));
    put(
        "summ_avg_ncan_dab_hitspd",
        average(record, &["ncan_dab_hits"]),
    );
    put(
        "summ_avg_ncan_dabthc_perc",
        average(record, &["ncan_dabthc_perc"]),
    );
    put(
        "summ_avg_ncan_dabcbd_perc",
        average(record, &["ncan_dabcbd_perc"]),
    );
    put(
        "summ_total_ncan_patch_d",
        count(record, &["ncan_patch_noyes"]),
    );

    // Study and non-study combined.
    put(
        "summ_total_can_edi_mg",
        sum_columns(
            record,
            &["ncan_edithc_mg", "scan_edithc_mg", "ncan_edicbd_mg", "scan_edicbd_mg"],
        ),
    );
    put(
        "summ_total_can_edi_d",
        count(
            record,
            &["ncan_edithc_mg", "scan_edithc_mg", "ncan_edicbd_mg", "scan_edicbd_mg"],
        ),
    );
    put(
        "summ_avg_can_edi_mgpd",
        average(
            record,
            &["ncan_edithc_mg", "scan_edithc_mg", "ncan_edicbd_mg", "scan_edicbd_mg"],
        ),
    );

    put(
        "summ_total_can_flw_g",
        sum_columns(record, &["ncan_flw_g", "scan_flw_g"]),
    );
    put(
        "summ_total_can_flw_d",
        count(record, &["ncan_flw_g", "scan_flw_g"]),
    );
    put(
        "summ_avg_can_flw_gpd",
        average(record, &["ncan_flw_g", "scan_flw_g"]),
    );

    // Cannabis daily totals.
    put("summ_total_scan_all_d", count(record, &["scan"]));
    put("summ_total_ncan_all_d", count(record, &["ncan"]));
    put("summ_total_can_all_d", count(record, &["can"]));

    // Days with both cannabis and alcohol.
    put("summ_total_canalc_d", same_days(record, &["can", "alc"]));

    // Alcohol.
    put("summ_total_alc_all_drinks", sum_columns(record, &["alc"]));
    put("summ_total_alc_all_d", count(record, &["alc"]));
    put("summ_avg_alc_all_drinkspd", average(record, &["alc"]));

    // Tobacco.
    put(
        "summ_total_tob_cigtts_amt",
        sum_columns(record, &["tob_cigtts"]),
    );
    put(
        "summ_total_tob_ecigs_amt",
        sum_columns(record, &["tob_ecigs"]),
    );
    put("summ_total_tob_chew_amt", sum_columns(record, &["tob_chew"]));
    put(
        "summ_total_tob_cigars_amt",
        sum_columns(record, &["tob_cigars"]),
    );
    put(
        "summ_total_tob_hookah_amt",
        sum_columns(record, &["tob_hookah"]),
    );

    put("summ_total_tob_cigtts_d", count(record, &["tob_cigtts"]));
    put("summ_total_tob_ecigs_d", count(record, &["tob_ecigs"]));
    put("summ_total_tob_chew_d", count(record, &["tob_chew"]));
    put("summ_total_tob_cigars_d", count(record, &["tob_cigars"]));
    put("summ_total_tob_hookah_d", count(record, &["tob_hookah"]));
    put("summ_total_tob_all_d", count(record, &["tob"]));

    // Prescription dosage totals and day counts.
    put("summ_total_rx_opd_mg", mg_total(record, "rx_opd"));
    put("summ_total_rx_sleep_mg", mg_total(record, "rx_sleep"));
    put("summ_total_rx_mrelax_mg", mg_total(record, "rx_mrelax"));
    put("summ_total_rx_nsaid_mg", mg_total(record, "rx_nsaid"));
    put("summ_total_rx_nerv_mg", mg_total(record, "rx_nerv"));
    put("summ_total_rx_adhd_mg", mg_total(record, "rx_adhd"));
    put("summ_total_rx_other_mg", mg_total(record, "rx_other"));

    put("summ_total_rx_opd_d", count(record, &["rx_opd"]));
    put("summ_total_rx_sleep_d", count(record, &["rx_sleep"]));
    put("summ_total_rx_mrelax_d", count(record, &["rx_mrelax"]));
    put("summ_total_rx_nsaid_d", count(record, &["rx_nsaid"]));
    put("summ_total_rx_nerv_d", count(record, &["rx_nerv"]));
    put("summ_total_rx_adhd_d", count(record, &["rx_adhd"]));
    put("summ_total_rx_other_d", count(record, &["rx_other"]));
    put("summ_total_rx_all_d", count(record, &["rx"]));

    // Illegal drugs.
    put("summ_total_illegal_all_d", count(record, &["illegal"]));

    out
}
