//! Formatting macros
//!
//! `format!`-style shorthands for writing a timestamped line through an
//! [`AttemptLogger`](crate::AttemptLogger). Both evaluate to the sink's
//! acknowledgement.

/// Write a formatted, timestamped line to the info channel
///
/// # Example
///
/// ```
/// # use attemptlog_core::{log_info, AttemptLogger, LoggerConfig, RecordingSink};
/// let sink = RecordingSink::new();
/// let logger = AttemptLogger::new(&LoggerConfig::default()).with_sink(sink.clone());
///
/// log_info!(logger, "imported {} rows", 42);
/// assert!(sink.texts()[0].ends_with("imported 42 rows"));
/// ```
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_info(&::std::format!($($arg)+))
    };
}

/// Write a formatted, timestamped line to the error channel
///
/// # Example
///
/// ```
/// # use attemptlog_core::{log_error, AttemptLogger, LoggerConfig, RecordingSink};
/// let sink = RecordingSink::new();
/// let logger = AttemptLogger::new(&LoggerConfig::default()).with_sink(sink.clone());
///
/// log_error!(logger, "retry budget exhausted after {} tries", 3);
/// assert!(sink.texts()[0].ends_with("retry budget exhausted after 3 tries"));
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_error(&::std::format!($($arg)+))
    };
}
