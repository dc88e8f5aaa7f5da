//! Tests for error module

use maptimeline::error::{OptionExt, TimelineError};
use std::io;
use std::path::PathBuf;

#[test]
fn test_error_display() {
    let err = TimelineError::InputRead {
        path: PathBuf::from("history.json"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };
    assert!(err.to_string().contains("history.json"));
    assert!(err.to_string().contains("no such file"));
}

#[test]
fn test_config_error_display() {
    let err = TimelineError::Config("canvas expects 4 fields".to_string());
    assert_eq!(
        err.to_string(),
        "invalid configuration: canvas expects 4 fields"
    );
}

#[test]
fn test_option_ext() {
    let none: Option<f64> = None;
    let result = none.ok_or_config("missing scale");
    assert!(matches!(result, Err(TimelineError::Config(msg)) if msg == "missing scale"));

    let some = Some(2.0).ok_or_config("unused");
    assert_eq!(some.unwrap(), 2.0);
}
