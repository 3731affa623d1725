//! Canonical diagnostic macros
//!
//! These macros describe an operation's lifecycle with a fixed set of fields
//! (`component`, `op`, `event`, plus `duration_ms` and error classification
//! where relevant).

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use logify_core::log_op_start;
/// log_op_start!("append_log_line");
/// log_op_start!("append_log_line", level = "warn");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use logify_core::log_op_end;
/// log_op_end!("append_log_line", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is anything `ExError` converts from, usually a reference.
///
/// # Example
///
/// ```
/// # use logify_core::{log_op_error, errors::TargetInvocationError};
/// let err = TargetInvocationError::new("boom", "panicked: boom");
/// log_op_error!("inspect", &err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err = $crate::errors::ExError::from($err);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from($err);
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::logify_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}
