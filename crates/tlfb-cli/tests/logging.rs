//! Integration tests for the logging module.

use std::path::Path;

use tlfb_cli::logging::{LogConfig, LogFormat, REDACTED_VALUE, redact_value};

#[test]
fn values_are_redacted_by_default() {
    assert_eq!(redact_value("S-001"), REDACTED_VALUE);
}

#[test]
fn config_builders_set_fields() {
    let config = LogConfig::default()
        .with_format(LogFormat::Json)
        .with_log_file(Some("run.log".into()))
        .with_log_data(true);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.log_file.as_deref(), Some(Path::new("run.log")));
    assert!(config.log_data);
}
