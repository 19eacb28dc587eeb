//! Integration tests for faultcode-common crate.

use faultcode_common::{FaultcodeError, LogFormat, LoggingConfig, Result};

fn read_missing() -> Result<String> {
    let content = std::fs::read_to_string("/definitely/not/here.ftl")?;
    Ok(content)
}

#[test]
fn test_io_errors_convert_with_question_mark() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, FaultcodeError::Io(_)));
    assert!(err.to_string().starts_with("I/O error"));
}

#[test]
fn test_validation_error_carries_field() {
    let err = FaultcodeError::validation_field("unknown locale", "i18n.default_locale");
    match err {
        FaultcodeError::Validation { message, field } => {
            assert_eq!(message, "unknown locale");
            assert_eq!(field.as_deref(), Some("i18n.default_locale"));
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}

#[test]
fn test_logging_config_round_trips_through_json() {
    let config = LoggingConfig {
        level: "faultcode=trace".to_string(),
        format: LogFormat::Compact,
        file_path: Some("faults.log".to_string()),
        include_spans: true,
        include_targets: false,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"compact\""));
    let parsed: LoggingConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);
}
