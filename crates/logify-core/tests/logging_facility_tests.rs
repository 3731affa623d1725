#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{at, harness};
use logify_core::errors::LogifyError;
use logify_core::logging_facility::test_capture::init_test_capture;
use logify_core::{inspect_fn, log_op_end, log_op_error, log_op_start, LogLevel, LoggerOptions};
use logify_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CALLABLE, FIELD_COMPONENT, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_INSPECTION_KIND, FIELD_LEVEL, FIELD_PATH,
    OP_APPEND_LINE, OP_INSPECT,
};
use std::fs;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, level = "warn");

    let starts = capture.lifecycle(op_name, EVENT_START);
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field(FIELD_LEVEL), Some("warn"));
    assert!(starts[0].field(FIELD_COMPONENT).is_some());
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let ends = capture.lifecycle(op_name, EVENT_END);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = LogifyError::Config {
        reason: "bad".to_string(),
    };
    log_op_error!(op_name, &err, duration_ms = 10);

    let errors = capture.lifecycle(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_INVALID_CONFIG"));
    assert_eq!(errors[0].field(FIELD_ERR_KIND), Some("InvalidConfig"));
    assert_eq!(errors[0].level, tracing::Level::WARN);
}

#[test]
fn test_file_append_reports_lifecycle() {
    let capture = init_test_capture();
    let h = harness(LoggerOptions::default());

    h.logger.info_to_file("lifecycle").unwrap();

    let path = h
        .logger
        .log_file_path(LogLevel::Info, &at(2024, 3, 5, 14, 30, 0))
        .display()
        .to_string();
    let starts: Vec<_> = capture
        .lifecycle(OP_APPEND_LINE, EVENT_START)
        .into_iter()
        .filter(|e| e.field(FIELD_PATH) == Some(path.as_str()))
        .collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field(FIELD_LEVEL), Some("info"));
    assert!(!capture.lifecycle(OP_APPEND_LINE, EVENT_END).is_empty());
}

#[test]
fn test_file_append_failure_reports_io_code() {
    let capture = init_test_capture();
    let h = harness(LoggerOptions::default());
    fs::write(h.dir.path().join("debug_logs"), "not a directory").unwrap();

    let err = h.logger.warn_to_file("unwritable").unwrap_err();

    assert!(matches!(err, LogifyError::Io { .. }));
    assert!(capture
        .lifecycle(OP_APPEND_LINE, EVENT_END_ERROR)
        .iter()
        .any(|e| e.field(FIELD_ERR_CODE) == Some("ERR_IO")));
}

#[test]
fn test_absorbed_inspection_failure_is_reported() {
    let capture = init_test_capture();
    let h = harness(LoggerOptions::default());
    let name = "test_absorbed_failure_unique_4";

    let result = inspect_fn(&h.logger, name, || Err::<u8, _>(anyhow::anyhow!("nope")), ());

    assert_eq!(result, None);
    let failure = capture
        .lifecycle(OP_INSPECT, EVENT_END_ERROR)
        .into_iter()
        .find(|e| e.field(FIELD_CALLABLE) == Some(name))
        .expect("end_error event");
    assert_eq!(failure.field(FIELD_ERR_CODE), Some("ERR_TARGET_INVOCATION"));
}

#[test]
fn test_inspection_reports_kind_even_when_trace_is_gated() {
    let capture = init_test_capture();
    let h = harness(LoggerOptions::default().with_level(LogLevel::Error));
    let name = "test_gated_inspection_unique_5";

    inspect_fn(&h.logger, name, |x: u8| x, (1u8,));

    assert!(h.console.lines().is_empty());
    let starts: Vec<_> = capture
        .lifecycle(OP_INSPECT, EVENT_START)
        .into_iter()
        .filter(|e| e.field(FIELD_CALLABLE) == Some(name))
        .collect();
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].field(FIELD_INSPECTION_KIND), Some("FnInspection"));
}
