#![allow(clippy::unwrap_used, clippy::expect_used)]

use attemptlog_core::logging_facility::init::{init, Profile};
use attemptlog_core::logging_facility::test_capture::init_test_capture;
use attemptlog_core::{log_error, log_info, AttemptError, AttemptLogger, Fallback, LoggerConfig};
use attemptlog_core_types::schema::{CHANNEL_ERROR, CHANNEL_INFO, COMPONENT_ATTEMPT_LOGGER};
use tracing::Level;

#[test]
fn test_info_line_reaches_subscriber() {
    let capture = init_test_capture();
    let logger = AttemptLogger::new(&LoggerConfig::default());

    assert!(logger.log_info("tracing_sink_info_unique_1"));

    capture.assert_message_logged(CHANNEL_INFO, "tracing_sink_info_unique_1");
}

#[test]
fn test_error_line_has_error_level_and_component() {
    let capture = init_test_capture();
    let logger = AttemptLogger::new(&LoggerConfig::default());

    logger.log_error("tracing_sink_error_unique_2");

    let events = capture.events();
    let event = events
        .iter()
        .find(|e| {
            e.message
                .as_deref()
                .is_some_and(|m| m.contains("tracing_sink_error_unique_2"))
        })
        .expect("Should have captured the error line");

    assert_eq!(event.level, Level::ERROR);
    assert_eq!(event.channel.as_deref(), Some(CHANNEL_ERROR));
    assert_eq!(event.component.as_deref(), Some(COMPONENT_ATTEMPT_LOGGER));
}

#[test]
fn test_log_attempt_through_tracing_sink() {
    let capture = init_test_capture();
    let logger = AttemptLogger::default();

    let result: Result<i32, AttemptError> =
        logger.log_attempt("tracing_sink_attempt_unique_3", Fallback::Substitute(-1), || {
            Err(AttemptError::msg("tracing_sink_timeout_unique_3"))
        });

    assert_eq!(result, Ok(-1));
    let starts = capture.messages_containing(CHANNEL_INFO, "tracing_sink_attempt_unique_3 ...");
    let descriptions = capture.messages_containing(CHANNEL_ERROR, "tracing_sink_timeout_unique_3");
    let summaries = capture.messages_containing(
        CHANNEL_ERROR,
        "ERROR tracing_sink_attempt_unique_3; result = -1",
    );
    let dones = capture.messages_containing(CHANNEL_INFO, "DONE tracing_sink_attempt_unique_3");

    assert_eq!(starts.len(), 1);
    assert_eq!(descriptions.len(), 1);
    assert!(descriptions[0].ends_with("#<Error: tracing_sink_timeout_unique_3>"));
    assert_eq!(summaries.len(), 1);
    assert!(dones.is_empty());
}

#[test]
fn test_format_macros_write_timestamped_lines() {
    let capture = init_test_capture();
    let logger = AttemptLogger::default();

    log_info!(logger, "tracing_sink_macro_{}_unique_4", "info");
    log_error!(logger, "tracing_sink_macro_{}_unique_4", "error");

    let info = capture.messages_containing(CHANNEL_INFO, "tracing_sink_macro_info_unique_4");
    let error = capture.messages_containing(CHANNEL_ERROR, "tracing_sink_macro_error_unique_4");
    assert_eq!(info.len(), 1);
    assert_eq!(error.len(), 1);
    assert!(info[0].starts_with('['));
}

#[test]
fn test_attempt_diagnostic_event_records_state() {
    let capture = init_test_capture();
    let logger = AttemptLogger::default();

    let before = capture.attempts_ending_in("rethrown");
    let _: Result<(), AttemptError> =
        logger.log_attempt("", Fallback::Rethrow, || Err(AttemptError::msg("diag")));
    let after = capture.attempts_ending_in("rethrown");

    assert!(after > before);
}

#[test]
fn test_capture_installs_after_test_profile_init() {
    init(Profile::Test);
    let capture = init_test_capture();
    let logger = AttemptLogger::default();

    logger.log_info("tracing_sink_after_init_unique_5");

    capture.assert_message_logged(CHANNEL_INFO, "tracing_sink_after_init_unique_5");
}

#[test]
#[should_panic(expected = "Expected message")]
fn test_assert_message_logged_fails_for_missing_message() {
    let capture = init_test_capture();

    capture.assert_message_logged(CHANNEL_INFO, "nonexistent_message_truly_unique_999");
}
