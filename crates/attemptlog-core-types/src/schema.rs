//! Canonical schema constants for structured logging
//!
//! The tracing sink tags every entry with these keys so subscribers and the
//! test capture layer can pick entries apart without parsing message text.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_CHANNEL: &str = "channel";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_STATE: &str = "state";

// Component name stamped on every entry
pub const COMPONENT_ATTEMPT_LOGGER: &str = "attempt_logger";

// Sink channels
pub const CHANNEL_INFO: &str = "info";
pub const CHANNEL_ERROR: &str = "error";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_DONE: &str = "done";
pub const EVENT_ERROR: &str = "error";

// Text markers used in summary lines
pub const START_SUFFIX: &str = " ...";
pub const DONE_PREFIX: &str = "DONE ";
pub const ERROR_PREFIX: &str = "ERROR ";
pub const RESULT_SEPARATOR: &str = "; result = ";

/// Number of characters of a result's string form kept in summary lines
pub const RESULT_TEXT_LIMIT: usize = 100;

/// Separator placed between trace frames in a single log entry
pub const TRACE_FRAME_SEPARATOR: &str = "\n    ";
