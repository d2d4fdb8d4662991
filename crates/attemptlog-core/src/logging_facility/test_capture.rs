//! In-memory capture of what `TracingSink` writes
//!
//! Installs a layer on the global subscriber that keeps every event, so tests
//! can check which timestamped line landed on which channel and how each
//! attempt's diagnostic ended.

use attemptlog_core_types::schema::{FIELD_CHANNEL, FIELD_COMPONENT, FIELD_MESSAGE, FIELD_STATE};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// One event seen by the capture layer
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    /// `info` or `error` for logger lines, absent for diagnostics
    pub channel: Option<String>,
    pub message: Option<String>,
    /// Terminal attempt state, set on "attempt finished" diagnostics
    pub state: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Whether this is a logger line written on `channel`
    pub fn is_line_on(&self, channel: &str) -> bool {
        self.channel.as_deref() == Some(channel)
    }

    fn message_contains(&self, needle: &str) -> bool {
        self.message.as_deref().is_some_and(|m| m.contains(needle))
    }
}

#[derive(Default)]
struct EventFields(HashMap<String, String>);

impl Visit for EventFields {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

type EventLog = Arc<Mutex<Vec<CapturedEvent>>>;

/// Layer that appends every event to a shared log
pub struct TestCaptureLayer {
    events: EventLog,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = EventLog::default();
        let capture = TestCapture {
            events: events.clone(),
        };
        (Self { events }, capture)
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = EventFields::default();
        event.record(&mut fields);
        let fields = fields.0;

        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            channel: fields.get(FIELD_CHANNEL).cloned(),
            message: fields.get(FIELD_MESSAGE).cloned(),
            state: fields.get(FIELD_STATE).cloned(),
            fields,
        };

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}

/// Read side of the capture; clones share the same log
#[derive(Clone)]
pub struct TestCapture {
    events: EventLog,
}

impl TestCapture {
    /// Snapshot of every captured event
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages written on `channel` that contain `needle`, in order
    pub fn messages_containing(&self, channel: &str, needle: &str) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.is_line_on(channel) && e.message_contains(needle))
            .filter_map(|e| e.message)
            .collect()
    }

    /// Assert that a line containing `needle` was written on `channel`
    ///
    /// # Panics
    ///
    /// Panics if no such line is found
    pub fn assert_message_logged(&self, channel: &str, needle: &str) {
        let events = self.events();
        let found = events
            .iter()
            .any(|e| e.is_line_on(channel) && e.message_contains(needle));
        assert!(
            found,
            "Expected message channel={} containing {:?} not found in {} captured events",
            channel,
            needle,
            events.len()
        );
    }

    /// Number of attempt diagnostics that finished in `state`
    pub fn attempts_ending_in(&self, state: &str) -> usize {
        self.count_events(|e| e.state.as_deref() == Some(state))
    }

    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber and return its handle
///
/// Every call returns a handle to the same log, so tests running in parallel
/// should look for messages unique to themselves. If some other subscriber
/// already owns the global slot the handle stays empty.
///
/// # Example
///
/// ```
/// use attemptlog_core::logging_facility::test_capture::init_test_capture;
/// use attemptlog_core::{AttemptLogger, LoggerConfig};
///
/// let capture = init_test_capture();
/// let logger = AttemptLogger::new(&LoggerConfig::default());
/// logger.log_info("doc capture example");
/// capture.assert_message_logged("info", "doc capture example");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AttemptError;
    use crate::fallback::Fallback;
    use crate::logger::AttemptLogger;
    use attemptlog_core_types::schema::{CHANNEL_ERROR, CHANNEL_INFO, COMPONENT_ATTEMPT_LOGGER};

    fn scoped<F: FnOnce()>(f: F) -> TestCapture {
        let (layer, capture) = TestCaptureLayer::new();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, f);
        capture
    }

    #[test]
    fn test_lines_keep_channel_and_component() {
        let capture = scoped(|| {
            let logger = AttemptLogger::default();
            logger.log_info("warming cache");
            logger.log_error("cache miss");
        });

        let lines: Vec<_> = capture
            .events()
            .into_iter()
            .filter(|e| e.component.as_deref() == Some(COMPONENT_ATTEMPT_LOGGER))
            .filter(|e| e.channel.is_some())
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].is_line_on(CHANNEL_INFO));
        assert_eq!(lines[1].level, Level::ERROR);
        assert!(lines[1].message_contains("cache miss"));
    }

    #[test]
    fn test_attempt_diagnostics_record_state() {
        let capture = scoped(|| {
            let logger = AttemptLogger::default();
            let _: Result<i32, AttemptError> =
                logger.log_attempt("sync", Fallback::Substitute(0), || Err(AttemptError::msg("x")));
            let _: Result<i32, AttemptError> =
                logger.log_attempt("sync", Fallback::Substitute(0), || Ok(1));
        });

        assert_eq!(capture.attempts_ending_in("substituted"), 1);
        assert_eq!(capture.attempts_ending_in("success"), 1);
        assert_eq!(capture.messages_containing(CHANNEL_ERROR, "ERROR sync").len(), 1);
    }

    #[test]
    fn test_clear_empties_shared_log() {
        let capture = scoped(|| {
            AttemptLogger::default().log_info("before clear");
        });
        let handle = capture.clone();
        handle.clear();
        assert!(capture.events().is_empty());
    }
}
