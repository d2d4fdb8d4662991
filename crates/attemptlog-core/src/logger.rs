//! The attempt logger
//!
//! Writes timestamped lines to a [`Sink`] and wraps units of work with
//! start/success/failure logging:
//!
//! ```text
//! START --(message non-blank)--> "[ts] {message} ..."
//!   |
//! RUNNING: work() runs exactly once
//!   |-- Ok(r)  -> SUCCESS      "[ts] DONE {message}; result = {r[..100]}"
//!   '-- Err(e) -> log_exception(e)
//!                 "[ts] ERROR {message}; result = {fallback[..100]}"
//!                 |-- Substitute(v) -> SUBSTITUTED (returns v)
//!                 '-- Rethrow       -> RETHROWN    (returns e)
//! ```
//!
//! Only `Err` results count as failures. A panic inside the unit of work is
//! not intercepted: no summary line is written and the panic unwinds to the
//! caller.

use attemptlog_core_types::schema::{
    COMPONENT_ATTEMPT_LOGGER, DONE_PREFIX, ERROR_PREFIX, EVENT_DONE, EVENT_ERROR, EVENT_START,
    RESULT_SEPARATOR, RESULT_TEXT_LIMIT, START_SUFFIX, TRACE_FRAME_SEPARATOR,
};

use crate::clock::{Clock, DayZones, SystemClock, Timestamper};
use crate::config::LoggerConfig;
use crate::errors::Reportable;
use crate::fallback::Fallback;
use crate::outcome::AttemptOutcome;
use crate::sink::{Sink, TracingSink};
use crate::value::{truncate_chars, LogValue};

/// Timestamped logger with instrumented execution
///
/// # Example
///
/// ```
/// use attemptlog_core::{AttemptError, AttemptLogger, Fallback, LoggerConfig, RecordingSink};
///
/// let sink = RecordingSink::new();
/// let logger = AttemptLogger::new(&LoggerConfig::default()).with_sink(sink.clone());
///
/// let user: Result<i32, AttemptError> =
///     logger.log_attempt("fetch user", Fallback::Substitute(-1), || {
///         Err(AttemptError::msg("timeout"))
///     });
///
/// assert_eq!(user, Ok(-1));
/// assert_eq!(sink.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct AttemptLogger<S = TracingSink, C = SystemClock> {
    sink: S,
    timestamper: Timestamper<C>,
    day_zones: DayZones,
}

impl AttemptLogger {
    /// Logger writing to `tracing` with wall-clock timestamps
    pub fn new(config: &LoggerConfig) -> Self {
        Self::with_parts(config, TracingSink, SystemClock)
    }
}

impl Default for AttemptLogger {
    fn default() -> Self {
        Self::new(&LoggerConfig::default())
    }
}

impl<S: Sink, C: Clock> AttemptLogger<S, C> {
    pub fn with_parts(config: &LoggerConfig, sink: S, clock: C) -> Self {
        Self {
            sink,
            timestamper: Timestamper::new(config.reference_zone, clock),
            day_zones: config.day_zones(),
        }
    }

    /// Swap the sink, keeping zones and clock
    pub fn with_sink<S2: Sink>(self, sink: S2) -> AttemptLogger<S2, C> {
        AttemptLogger {
            sink,
            timestamper: self.timestamper,
            day_zones: self.day_zones,
        }
    }

    /// Swap the clock, keeping zones and sink
    pub fn with_clock<C2: Clock>(self, clock: C2) -> AttemptLogger<S, C2> {
        AttemptLogger {
            sink: self.sink,
            timestamper: self.timestamper.with_clock(clock),
            day_zones: self.day_zones,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn timestamper(&self) -> &Timestamper<C> {
        &self.timestamper
    }

    pub fn day_zones(&self) -> &DayZones {
        &self.day_zones
    }

    /// `[MM/DD/YY H:MMAM]` for the current instant in the reference zone
    pub fn timestamp(&self) -> String {
        self.timestamper.timestamp()
    }

    /// Write `message` to the info channel, prefixed with the timestamp
    pub fn log_info(&self, message: &str) -> bool {
        self.sink.info(&self.stamp(message))
    }

    /// Write `message` to the error channel, prefixed with the timestamp
    pub fn log_error(&self, message: &str) -> bool {
        self.sink.error(&self.stamp(message))
    }

    /// Log an error's description and, as a separate entry, its trace
    ///
    /// Each part is skipped when empty, so an absent error (`None`) logs
    /// nothing at all.
    pub fn log_exception<E: Reportable + ?Sized>(&self, err: &E) {
        let description = err.describe();
        if !description.trim().is_empty() {
            self.log_error(&description);
        }

        let frames = err.trace();
        if !frames.is_empty() {
            self.log_error(&frames.join(TRACE_FRAME_SEPARATOR));
        }
    }

    /// Run `work` once, logging around it, and report how it ended
    ///
    /// A blank `message` suppresses the start and summary lines; errors are
    /// still logged through [`log_exception`](Self::log_exception).
    pub fn attempt<T, E, F>(
        &self,
        message: &str,
        fallback: Fallback<T>,
        work: F,
    ) -> AttemptOutcome<T, E>
    where
        T: LogValue,
        E: Reportable,
        F: FnOnce() -> Result<T, E>,
    {
        let announce = !message.trim().is_empty();
        if announce {
            self.log_info(&format!("{}{}", message, START_SUFFIX));
        }

        tracing::debug!(
            component = COMPONENT_ATTEMPT_LOGGER,
            event = EVENT_START,
            announce,
            "attempt started"
        );

        let outcome = match work() {
            Ok(value) => AttemptOutcome::Success(value),
            Err(err) => {
                self.log_exception(&err);
                if announce {
                    self.log_error(&summary_line(ERROR_PREFIX, message, &fallback));
                }
                match fallback {
                    Fallback::Substitute(value) => AttemptOutcome::Substituted(value),
                    Fallback::Rethrow => AttemptOutcome::Rethrown(err),
                }
            }
        };

        // Success summary only; the error summary was written before deciding
        // between substitution and rethrow.
        let failed = outcome.failed();
        if announce && !failed {
            if let Some(value) = outcome.value() {
                self.log_info(&summary_line(DONE_PREFIX, message, value));
            }
        }

        let event = if failed { EVENT_ERROR } else { EVENT_DONE };
        tracing::debug!(
            component = COMPONENT_ATTEMPT_LOGGER,
            event,
            state = outcome.state().as_str(),
            "attempt finished"
        );

        outcome
    }

    /// Run `work` once, logging around it
    ///
    /// Returns the work's value on success. On failure returns the
    /// substitute, or with [`Fallback::Rethrow`] the original error.
    ///
    /// # Errors
    ///
    /// Returns the unit of work's own error, untouched, when `fallback` is
    /// [`Fallback::Rethrow`] and the work failed.
    pub fn log_attempt<T, E, F>(
        &self,
        message: &str,
        fallback: Fallback<T>,
        work: F,
    ) -> Result<T, E>
    where
        T: LogValue,
        E: Reportable,
        F: FnOnce() -> Result<T, E>,
    {
        self.attempt(message, fallback, work).into_result()
    }

    fn stamp(&self, message: &str) -> String {
        format!("{} {}", self.timestamp(), message)
    }
}

fn summary_line<V: LogValue + ?Sized>(prefix: &str, message: &str, value: &V) -> String {
    let text = value.log_text();
    format!(
        "{}{}{}{}",
        prefix,
        message,
        RESULT_SEPARATOR,
        truncate_chars(&text, RESULT_TEXT_LIMIT)
    )
}
