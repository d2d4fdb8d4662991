//! What `log_attempt` does when the unit of work fails

use crate::value::LogValue;

/// Text logged for the fallback when it asks for a rethrow
pub const RETHROW_TEXT: &str = "raise";

/// Failure policy for an attempt
///
/// `Substitute(v)` returns `v` in place of the failed work's result;
/// `Rethrow` hands the original error back to the caller after logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback<T> {
    Substitute(T),
    Rethrow,
}

impl<T> Fallback<T> {
    /// Whether a failure should propagate instead of being substituted
    pub fn is_rethrow(&self) -> bool {
        matches!(self, Fallback::Rethrow)
    }

    /// The substitute value, if any
    pub fn substitute(&self) -> Option<&T> {
        match self {
            Fallback::Substitute(value) => Some(value),
            Fallback::Rethrow => None,
        }
    }
}

impl<U> Fallback<Option<U>> {
    /// Substitute `None` on failure
    pub fn none() -> Self {
        Fallback::Substitute(None)
    }
}

impl<U> Default for Fallback<Option<U>> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: LogValue> LogValue for Fallback<T> {
    fn log_text(&self) -> String {
        match self {
            Fallback::Substitute(value) => value.log_text(),
            Fallback::Rethrow => RETHROW_TEXT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_substitutes_none() {
        let fallback: Fallback<Option<i32>> = Fallback::default();
        assert_eq!(fallback, Fallback::Substitute(None));
        assert!(!fallback.is_rethrow());
        assert_eq!(fallback.log_text(), "");
    }

    #[test]
    fn test_rethrow_has_no_substitute() {
        let fallback: Fallback<i32> = Fallback::Rethrow;
        assert!(fallback.is_rethrow());
        assert_eq!(fallback.substitute(), None);
        assert_eq!(fallback.log_text(), RETHROW_TEXT);
    }

    #[test]
    fn test_substitute_log_text_is_value_text() {
        let fallback = Fallback::Substitute(-1);
        assert_eq!(fallback.substitute(), Some(&-1));
        assert_eq!(fallback.log_text(), "-1");
    }
}
