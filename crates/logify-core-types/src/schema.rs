//! Canonical schema constants for the toolkit's own structured diagnostics
//!
//! These constants keep the `tracing` events emitted by the file sink and
//! the inspection wrappers consistent.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Logger fields
pub const FIELD_LEVEL: &str = "level";
pub const FIELD_PATH: &str = "path";

// Inspection fields
pub const FIELD_CALLABLE: &str = "callable";
pub const FIELD_INSPECTION_KIND: &str = "inspection_kind";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Canonical operation names
pub const OP_APPEND_LINE: &str = "append_log_line";
pub const OP_INSPECT: &str = "inspect";
