//! Process-wide logging setup for the attempt logger
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Formatting macros (`log_info!`, `log_error!`) for timestamped lines
//! - Test capture mode for deterministic assertions against `TracingSink`
//!
//! # Usage
//!
//! ```rust
//! use attemptlog_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_info!(logger, "fmt", args...)` - Timestamped line on the info channel
//! - `log_error!(logger, "fmt", args...)` - Timestamped line on the error channel

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
