use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error as StdError;
use thiserror::Error;

// ========== Error Reporting ==========

/// What the logger knows how to say about a failed unit of work
///
/// `describe` gives the human-readable, inspect-style summary of the error
/// (`#<Error: timeout>`); `trace` is the list of frames captured when the
/// error was raised, outermost first. Either may be empty, in which case the
/// corresponding log entry is skipped.
pub trait Reportable {
    /// Human-readable description of the error
    fn describe(&self) -> String;

    /// Trace frames, one entry per frame
    fn trace(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<E: Reportable + ?Sized> Reportable for &E {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn trace(&self) -> Vec<String> {
        (**self).trace()
    }
}

/// `None` stands for an absent error: nothing to describe, nothing to trace.
impl<E: Reportable> Reportable for Option<E> {
    fn describe(&self) -> String {
        self.as_ref().map(Reportable::describe).unwrap_or_default()
    }

    fn trace(&self) -> Vec<String> {
        self.as_ref().map(Reportable::trace).unwrap_or_default()
    }
}

impl Reportable for anyhow::Error {
    fn describe(&self) -> String {
        inspect("Error", &format!("{:#}", self))
    }

    fn trace(&self) -> Vec<String> {
        backtrace_frames(self.backtrace())
    }
}

impl Reportable for std::io::Error {
    fn describe(&self) -> String {
        inspect("IOError", &self.to_string())
    }
}

impl Reportable for Box<dyn StdError + Send + Sync> {
    fn describe(&self) -> String {
        inspect("Error", &self.to_string())
    }

    /// Boxed errors carry no backtrace; their cause chain stands in for one.
    fn trace(&self) -> Vec<String> {
        source_frames(&**self)
    }
}

impl Reportable for Box<dyn StdError> {
    fn describe(&self) -> String {
        inspect("Error", &self.to_string())
    }

    fn trace(&self) -> Vec<String> {
        source_frames(&**self)
    }
}

/// Implement [`Reportable`] for one or more `std::error::Error` types
///
/// The description is `#<TypeName: display>` and the trace is the error's
/// `source()` chain.
///
/// ```
/// use attemptlog_core::{impl_reportable_via_error, Reportable};
///
/// #[derive(Debug, thiserror::Error)]
/// enum FetchError {
///     #[error("upstream returned {0}")]
///     Status(u16),
/// }
///
/// impl_reportable_via_error!(FetchError);
///
/// assert_eq!(FetchError::Status(503).describe(), "#<FetchError: upstream returned 503>");
/// ```
#[macro_export]
macro_rules! impl_reportable_via_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::errors::Reportable for $ty {
                fn describe(&self) -> ::std::string::String {
                    $crate::errors::inspect(
                        $crate::errors::short_type_name::<Self>(),
                        &::std::string::ToString::to_string(self),
                    )
                }

                fn trace(&self) -> ::std::vec::Vec<::std::string::String> {
                    $crate::errors::source_frames(self)
                }
            }
        )+
    };
}

crate::impl_reportable_via_error!(
    std::fmt::Error,
    std::num::ParseIntError,
    std::num::ParseFloatError,
    std::num::TryFromIntError,
    std::str::Utf8Error,
    std::string::FromUtf8Error,
    ConfigError,
);

/// Wraps any `std::error::Error` so it can be the error of a unit of work
///
/// Use this for error types from other crates that have no
/// [`Reportable`] impl; `into_inner` recovers the original after a rethrow.
#[derive(Debug)]
pub struct Reported<E>(pub E);

impl<E> Reported<E> {
    pub fn into_inner(self) -> E {
        self.0
    }
}

impl<E: StdError> Reportable for Reported<E> {
    fn describe(&self) -> String {
        inspect(short_type_name::<E>(), &self.0.to_string())
    }

    fn trace(&self) -> Vec<String> {
        source_frames(&self.0)
    }
}

impl<E> From<E> for Reported<E> {
    fn from(err: E) -> Self {
        Reported(err)
    }
}

/// Last path segment of a type's name, without generic arguments
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// `caused by: …` lines for each error in `err`'s source chain
pub fn source_frames(err: &dyn StdError) -> Vec<String> {
    let mut frames = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        frames.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    frames
}

/// Render an error the way an inspect call would: `#<Name: message>`
pub fn inspect(name: &str, message: &str) -> String {
    if message.is_empty() {
        format!("#<{}>", name)
    } else {
        format!("#<{}: {}>", name, message)
    }
}

/// Split a captured backtrace into frame lines
///
/// Returns an empty list unless the backtrace was actually captured
/// (`RUST_BACKTRACE`/`RUST_LIB_BACKTRACE` enabled and platform supported).
pub fn backtrace_frames(backtrace: &Backtrace) -> Vec<String> {
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    backtrace
        .to_string()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

// ========== Attempt Error Facility ==========

/// Canonical error kind taxonomy for units of work
///
/// Each kind maps to a stable error code and to the type-like name shown in
/// the error's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttemptErrorKind {
    General,
    InvalidInput,
    NotFound,
    Io,
    Timeout,
    ExternalService,
    Internal,
}

impl AttemptErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            AttemptErrorKind::General => "ERR_GENERAL",
            AttemptErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            AttemptErrorKind::NotFound => "ERR_NOT_FOUND",
            AttemptErrorKind::Io => "ERR_IO",
            AttemptErrorKind::Timeout => "ERR_TIMEOUT",
            AttemptErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            AttemptErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Get the name used in the inspect-style description
    pub fn name(&self) -> &'static str {
        match self {
            AttemptErrorKind::General => "Error",
            AttemptErrorKind::InvalidInput => "ArgumentError",
            AttemptErrorKind::NotFound => "NotFoundError",
            AttemptErrorKind::Io => "IOError",
            AttemptErrorKind::Timeout => "TimeoutError",
            AttemptErrorKind::ExternalService => "ExternalServiceError",
            AttemptErrorKind::Internal => "InternalError",
        }
    }
}

/// Structured error raised by a unit of work
///
/// Carries a kind, a message and the trace frames captured when it was
/// created (if any). Cloning keeps the trace, so a rethrown error reaches the
/// caller with the same frames that were logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptError {
    kind: AttemptErrorKind,
    message: String,
    trace: Vec<String>,
}

impl AttemptError {
    /// Create a new error with the specified kind
    pub fn new(kind: AttemptErrorKind) -> Self {
        Self {
            kind,
            message: String::new(),
            trace: Vec::new(),
        }
    }

    /// Create a general error from a message
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(AttemptErrorKind::General).with_message(message)
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach explicit trace frames
    pub fn with_trace<I, F>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.trace = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Capture the current backtrace as this error's trace
    ///
    /// Leaves the trace untouched when backtraces are disabled.
    pub fn capture_trace(mut self) -> Self {
        let frames = backtrace_frames(&Backtrace::capture());
        if !frames.is_empty() {
            self.trace = frames;
        }
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> AttemptErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the trace frames
    pub fn frames(&self) -> &[String] {
        &self.trace
    }
}

impl std::fmt::Display for AttemptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}] {}", self.code(), self.kind.name())
        } else {
            write!(f, "[{}] {}", self.code(), self.message)
        }
    }
}

impl std::error::Error for AttemptError {}

impl Reportable for AttemptError {
    fn describe(&self) -> String {
        inspect(self.kind.name(), &self.message)
    }

    fn trace(&self) -> Vec<String> {
        self.trace.clone()
    }
}

// ========== End Attempt Error Facility ==========

/// Errors raised while building a logger configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A zone name did not resolve to a known time zone
    #[error("Unknown time zone for {key}: {name}")]
    UnknownZone { key: String, name: String },

    /// The configuration document could not be parsed
    #[error("Invalid logger configuration: {reason}")]
    Parse { reason: String },
}

impl From<ConfigError> for AttemptError {
    fn from(err: ConfigError) -> Self {
        AttemptError::new(AttemptErrorKind::InvalidInput).with_message(err.to_string())
    }
}
