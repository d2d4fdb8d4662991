//! Logging initialization module
//!
//! Provides a single initialization point for the subscriber that receives
//! everything written through `TracingSink`.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

/// Default filter for `Profile::Development` when `RUST_LOG` is unset
pub const DEVELOPMENT_DIRECTIVE: &str = "attemptlog=debug";
/// Default filter for `Profile::Production` when `RUST_LOG` is unset
pub const PRODUCTION_DIRECTIVE: &str = "attemptlog=info";

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// This function should be called once at application startup.
/// It sets up the tracing subscriber based on the selected profile.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, attempt diagnostics included
/// - **Production**: JSON structured logs, timestamped lines only
/// - **Test**: Installs nothing, leaving the global subscriber to `init_test_capture()`
///
/// # Example
///
/// ```
/// use attemptlog_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt()
                    .with_target(false)
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new(DEVELOPMENT_DIRECTIVE)),
                    )
                    .init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(
                        EnvFilter::try_from_default_env()
                            .unwrap_or_else(|_| EnvFilter::new(PRODUCTION_DIRECTIVE)),
                    )
                    .init();
            }
            Profile::Test => {
                // Nothing to install; init_test_capture() owns the global subscriber
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        // Multiple calls should not panic
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Test);
    }

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_default_directives_parse() {
        assert!(DEVELOPMENT_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
        assert!(PRODUCTION_DIRECTIVE.parse::<tracing_subscriber::filter::Directive>().is_ok());
    }
}
