//! Log severity levels
//!
//! Levels are totally ordered by severity: `Debug < Info < Warn < Error`.
//! A logger configured at some level emits every line at that level or above.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity levels recognised by the logger.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogLevel {
    /// Detailed information useful during development.
    Debug,
    /// General informational messages.
    #[default]
    Info,
    /// Warnings indicating potential issues.
    Warn,
    /// Errors signalling failures that require attention.
    Error,
}

impl LogLevel {
    /// All levels in ascending severity.
    pub const ALL: [LogLevel; 4] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Numeric severity, `0` for debug through `3` for error.
    pub fn severity(self) -> u8 {
        match self {
            LogLevel::Debug => 0,
            LogLevel::Info => 1,
            LogLevel::Warn => 2,
            LogLevel::Error => 3,
        }
    }

    /// Inverse of [`LogLevel::severity`].
    pub fn from_severity(severity: u8) -> Option<Self> {
        Self::ALL.get(usize::from(severity)).copied()
    }

    /// Lowercase name, also used as the per-level log subdirectory.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// Uppercase label rendered inside `[LEVEL]`.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log level '{}' (expected debug, info, warn or error)",
            self.value
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ParseLevelError {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(value: String) -> Result<Self, <LogLevel as TryFrom<String>>::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);

        for pair in LogLevel::ALL.windows(2) {
            assert!(pair[0].severity() < pair[1].severity());
        }
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_from_severity_inverts_severity() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_severity(level.severity()), Some(level));
        }
        assert_eq!(LogLevel::from_severity(4), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("Error".parse::<LogLevel>().unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert_eq!(err.value(), "verbose");
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(LogLevel::Warn.label(), "WARN");
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn test_serde_accepts_the_parse_grammar() {
        let level: LogLevel = serde_json::from_str("\"Warning\"").unwrap();
        assert_eq!(level, LogLevel::Warn);

        let err = serde_json::from_str::<LogLevel>("\"verbose\"").unwrap_err();
        assert!(err.to_string().contains("unknown log level 'verbose'"));
    }
}
