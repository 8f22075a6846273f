use std::path::PathBuf;

#[derive(Debug)]
pub struct TransformResult {
    pub subid: String,
    pub timepoint: String,
    pub days_submitted: usize,
    pub days_missing: usize,
    pub columns: usize,
    pub filled: usize,
    pub record_key: String,
    pub output: Option<PathBuf>,
    pub category_days: Vec<CategoryDays>,
    /// Non-empty aggregate columns, in catalog order.
    pub aggregates: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct CategoryDays {
    pub label: &'static str,
    pub days: usize,
}
