//! CLI library components for the TLFB flattener.

pub mod logging;
