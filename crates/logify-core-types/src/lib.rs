//! Core types shared across Logify facilities
//!
//! This crate provides foundational types used by the logger, the
//! inspection wrappers and the command-line front end:
//!
//! - **Levels**: `LogLevel` and its severity ordering
//! - **Schema constants**: Canonical field keys and event names for the
//!   toolkit's own diagnostics

pub mod level;
pub mod schema;

pub use level::{LogLevel, ParseLevelError};
