//! Numeric helpers shared by the aggregation primitives.

/// Rounds to 10 decimal places, the fixed precision used by all running sums.
pub fn round10(v: f64) -> f64 {
    (v * 1e10).round() / 1e10
}

/// Formats a float the way the downstream repository expects: integral values
/// keep one decimal place (`3.0`), everything else prints its shortest form
/// (`1.5`, `0.75`).
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v == v.trunc() && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}
