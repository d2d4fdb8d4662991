//! Log sinks
//!
//! A sink is the external destination the logger writes to. It exposes an
//! info channel and an error channel; each write returns the sink's
//! acknowledgement, which the logger passes through unchanged.

use std::sync::{Arc, Mutex, PoisonError};

use attemptlog_core_types::schema::{CHANNEL_ERROR, CHANNEL_INFO, COMPONENT_ATTEMPT_LOGGER};

/// Destination for timestamped log lines
pub trait Sink {
    /// Write to the info channel
    fn info(&self, text: &str) -> bool;

    /// Write to the error channel
    fn error(&self, text: &str) -> bool;
}

impl<S: Sink + ?Sized> Sink for &S {
    fn info(&self, text: &str) -> bool {
        (**self).info(text)
    }

    fn error(&self, text: &str) -> bool {
        (**self).error(text)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn info(&self, text: &str) -> bool {
        (**self).info(text)
    }

    fn error(&self, text: &str) -> bool {
        (**self).error(text)
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn info(&self, text: &str) -> bool {
        (**self).info(text)
    }

    fn error(&self, text: &str) -> bool {
        (**self).error(text)
    }
}

/// Forwards lines to the `tracing` subscriber installed by the application
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn info(&self, text: &str) -> bool {
        tracing::info!(
            component = COMPONENT_ATTEMPT_LOGGER,
            channel = CHANNEL_INFO,
            "{}",
            text
        );
        true
    }

    fn error(&self, text: &str) -> bool {
        tracing::error!(
            component = COMPONENT_ATTEMPT_LOGGER,
            channel = CHANNEL_ERROR,
            "{}",
            text
        );
        true
    }
}

/// Sink channel an entry was written to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Info,
    Error,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Info => CHANNEL_INFO,
            Channel::Error => CHANNEL_ERROR,
        }
    }
}

/// One line written to a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkEntry {
    pub channel: Channel,
    pub text: String,
}

/// Keeps every line in memory, in write order
///
/// Clones share the same buffer, so a clone can be handed to the logger
/// while the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    entries: Arc<Mutex<Vec<SinkEntry>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded entries
    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded texts, in order, regardless of channel
    pub fn texts(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.text).collect()
    }

    /// Recorded texts written to `channel`
    pub fn texts_on(&self, channel: Channel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|e| e.channel == channel)
            .map(|e| e.text)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded entries
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, channel: Channel, text: &str) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(SinkEntry {
                channel,
                text: text.to_string(),
            });
        true
    }
}

impl Sink for RecordingSink {
    fn info(&self, text: &str) -> bool {
        self.record(Channel::Info, text)
    }

    fn error(&self, text: &str) -> bool {
        self.record(Channel::Error, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order_and_channel() {
        let sink = RecordingSink::new();
        assert!(sink.info("one"));
        assert!(sink.error("two"));
        assert!(sink.info("three"));

        assert_eq!(sink.texts(), vec!["one", "two", "three"]);
        assert_eq!(sink.texts_on(Channel::Error), vec!["two"]);
        assert_eq!(sink.entries()[1].channel, Channel::Error);
    }

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        let sink = RecordingSink::new();
        let handle = sink.clone();
        handle.info("shared");
        assert_eq!(sink.len(), 1);

        sink.clear();
        assert!(handle.is_empty());
    }

    #[test]
    fn test_references_and_boxes_are_sinks() {
        let sink = RecordingSink::new();
        let by_ref: &dyn Sink = &sink;
        by_ref.info("ref");
        let boxed: Box<dyn Sink> = Box::new(sink.clone());
        boxed.error("boxed");
        let shared = Arc::new(sink.clone());
        shared.info("arc");

        assert_eq!(sink.texts(), vec!["ref", "boxed", "arc"]);
    }

    #[test]
    fn test_channel_names() {
        assert_eq!(Channel::Info.as_str(), "info");
        assert_eq!(Channel::Error.as_str(), "error");
    }
}
