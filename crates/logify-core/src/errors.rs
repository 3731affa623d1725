use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogifyError
pub type Result<T> = std::result::Result<T, LogifyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and the diagnostic events emitted by
/// `log_op_error!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Resolution
    RootNotFound,

    // Configuration
    InvalidLevel,
    InvalidConfig,

    // Inspection
    MemberNotFound,
    MemberNotInvocable,
    TargetInvocation,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::RootNotFound => "ERR_ROOT_NOT_FOUND",
            ExErrorKind::InvalidLevel => "ERR_INVALID_LEVEL",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::MemberNotFound => "ERR_MEMBER_NOT_FOUND",
            ExErrorKind::MemberNotInvocable => "ERR_MEMBER_NOT_INVOCABLE",
            ExErrorKind::TargetInvocation => "ERR_TARGET_INVOCATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Classification fields for programmatic handling plus free-form context
/// for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for Logify operations
#[derive(Error, Debug)]
pub enum LogifyError {
    /// No ancestor of `start` contains the project marker file
    #[error("Unable to find project root: no {marker} found above {}", start.display())]
    RootNotFound { start: PathBuf, marker: String },

    /// Creating the log directory or appending to a log file failed
    #[error("I/O failure at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log level: {value}")]
    InvalidLevel { value: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// The inspected target exposes no member with this name
    #[error("{target} has no member named '{member}'")]
    MemberNotFound { target: String, member: String },

    /// The member exists but cannot be invoked through the requested wrapper
    #[error("member '{member}' of {target} is not invocable here")]
    MemberNotInvocable { target: String, member: String },

    /// The inspected callable failed
    #[error("Target invocation failed: {message}")]
    TargetInvocation { message: String },
}

impl LogifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogifyError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<logify_core_types::ParseLevelError> for LogifyError {
    fn from(err: logify_core_types::ParseLevelError) -> Self {
        LogifyError::InvalidLevel {
            value: err.value().to_string(),
        }
    }
}

impl From<LogifyError> for ExError {
    fn from(err: LogifyError) -> Self {
        ExError::from(&err)
    }
}

impl From<&LogifyError> for ExError {
    fn from(err: &LogifyError) -> Self {
        let kind = match err {
            LogifyError::RootNotFound { .. } => ExErrorKind::RootNotFound,
            LogifyError::Io { .. } => ExErrorKind::Io,
            LogifyError::InvalidLevel { .. } => ExErrorKind::InvalidLevel,
            LogifyError::Config { .. } => ExErrorKind::InvalidConfig,
            LogifyError::MemberNotFound { .. } => ExErrorKind::MemberNotFound,
            LogifyError::MemberNotInvocable { .. } => ExErrorKind::MemberNotInvocable,
            LogifyError::TargetInvocation { .. } => ExErrorKind::TargetInvocation,
        };
        ExError::new(kind).with_message(err.to_string())
    }
}

/// Captured failure of an inspected callable
///
/// Produced from an `Err` return value or from a panic inside the target.
/// `trace` holds the diagnostic detail: the error's cause chain (and
/// backtrace when one was captured) or the panic payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInvocationError {
    message: String,
    trace: String,
}

impl TargetInvocationError {
    pub fn new(message: impl Into<String>, trace: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trace: trace.into(),
        }
    }

    /// Build from any error convertible into `anyhow::Error`.
    pub fn from_error(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        Self {
            message: err.to_string(),
            trace: format!("{err:?}"),
        }
    }

    /// Build from a caught panic payload.
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "target panicked".to_string()
        };
        let trace = format!("panicked: {message}");
        Self { message, trace }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn trace(&self) -> &str {
        &self.trace
    }
}

impl std::fmt::Display for TargetInvocationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TargetInvocationError {}

impl From<&TargetInvocationError> for ExError {
    fn from(err: &TargetInvocationError) -> Self {
        ExError::new(ExErrorKind::TargetInvocation).with_message(err.message())
    }
}

impl From<TargetInvocationError> for LogifyError {
    fn from(err: TargetInvocationError) -> Self {
        LogifyError::TargetInvocation {
            message: err.message,
        }
    }
}
