//! Core types shared across the attempt logger
//!
//! This crate provides foundational types used by the logger and its sinks:
//!
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical field keys, channels and event names

pub mod schema;
pub mod sensitive;

pub use sensitive::{Sensitive, REDACTED};
