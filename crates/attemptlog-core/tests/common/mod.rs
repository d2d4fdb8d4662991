use attemptlog_core::{AttemptLogger, FixedClock, LoggerConfig, RecordingSink};
use chrono::{TimeZone, Utc};

/// Timestamp every fixed-clock logger renders (22:05 UTC on Jul 4 2026, PDT)
#[allow(dead_code)]
pub const TS: &str = "[07/04/26 3:05PM]";

/// Logger with the default zones, a frozen clock and an in-memory sink
#[allow(dead_code)]
pub fn fixed_logger() -> (AttemptLogger<RecordingSink, FixedClock>, RecordingSink) {
    let sink = RecordingSink::new();
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 7, 4, 22, 5, 0).unwrap());
    let logger = AttemptLogger::with_parts(&LoggerConfig::default(), sink.clone(), clock);
    (logger, sink)
}

/// A line as the fixed-clock logger writes it
#[allow(dead_code)]
pub fn line(text: &str) -> String {
    format!("{} {}", TS, text)
}
