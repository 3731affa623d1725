//! Structured diagnostics for the toolkit itself
//!
//! The user-facing [`Logger`](crate::logger::Logger) writes formatted lines to
//! the console and to per-level files. This module is separate: it reports
//! what the toolkit does (file appends, inspections, absorbed failures)
//! through `tracing`, with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use logify_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
