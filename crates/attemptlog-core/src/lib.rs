//! Attempt logger
//!
//! A small logging convenience layer:
//! - Timestamps rendered in a fixed reference zone (Pacific Time by default)
//! - Info/error lines written to a pluggable [`Sink`] (`tracing` by default)
//! - Error descriptions and traces logged through [`Reportable`]
//! - [`AttemptLogger::log_attempt`], which runs a unit of work with
//!   start/success/failure logging and a [`Fallback`] for failures
//!
//! ```
//! use attemptlog_core::{AttemptError, AttemptLogger, Fallback, LoggerConfig};
//!
//! let logger = AttemptLogger::new(&LoggerConfig::default());
//! let rows: Result<usize, AttemptError> =
//!     logger.log_attempt("count rows", Fallback::Substitute(0), || Ok(12));
//! assert_eq!(rows, Ok(12));
//! ```

pub mod clock;
pub mod config;
pub mod errors;
pub mod fallback;
pub mod logger;
pub mod logging_facility;
pub mod outcome;
pub mod sink;
pub mod value;

// Re-export commonly used types
pub use clock::{Clock, DayZones, FixedClock, SystemClock, Timestamper};
pub use config::LoggerConfig;
pub use errors::{AttemptError, AttemptErrorKind, ConfigError, Reportable, Reported};
pub use fallback::Fallback;
pub use logger::AttemptLogger;
pub use outcome::{AttemptOutcome, AttemptState};
pub use sink::{Channel, RecordingSink, Sink, SinkEntry, TracingSink};
pub use value::LogValue;

pub use attemptlog_core_types::Sensitive;
