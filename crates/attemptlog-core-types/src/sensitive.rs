//! Redacted attempt results
//!
//! A unit of work that hands back a credential (a session token, an API key)
//! still gets a `DONE …; result = …` line. Wrapping the value in
//! [`Sensitive`] makes that line read `***REDACTED***` while the caller keeps
//! the real value.

use std::fmt;

/// Text rendered in place of a sensitive value
pub const REDACTED: &str = "***REDACTED***";

/// A value whose every rendered form is [`REDACTED`]
///
/// ```
/// use attemptlog_core_types::{Sensitive, REDACTED};
///
/// let token = Sensitive::new("tok_live_81f2");
/// assert_eq!(token.to_string(), REDACTED);
/// assert_eq!(*token.expose(), "tok_live_81f2");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the real value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: PartialEq> PartialEq for Sensitive<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}
