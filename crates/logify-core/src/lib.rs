//! Logify Core - leveled logging and call inspection for developers
//!
//! This crate provides:
//! - A leveled [`Logger`] with a coloured console sink and per-level,
//!   per-day file sinks (`<base>/<log_dir_name>/<level>/<YYYYMMDD>.log`)
//! - Inspection wrappers that run a function or named method, describe its
//!   argument and result types, and emit one trace line through a Logger
//! - A pluggable type formatter for rendering captured values
//! - Configuration from defaults, TOML files and `LOGIFY_*` variables
//! - A `tracing`-based diagnostics facility for the toolkit's own events

pub mod config;
pub mod errors;
pub mod inspect;
pub mod internals;
pub mod logger;
pub mod logging_facility;
pub mod shape;

#[doc(hidden)]
pub use logify_core_types;

// Re-export commonly used types
pub use config::LoggerOptions;
pub use errors::{ExError, ExErrorKind, LogifyError, Result, TargetInvocationError};
pub use inspect::{
    inspect_fn, inspect_fn_async, inspect_fn_async_detailed, inspect_fn_detailed, inspect_method,
    inspect_method_async, inspect_method_async_detailed, inspect_method_detailed, Inspectable,
    Inspector, MemberLookup,
};
pub use internals::BaseDir;
pub use logger::Logger;
pub use logify_core_types::LogLevel;
pub use shape::{Captured, Depth, JsonShapeFormatter, TypeFormatter};
