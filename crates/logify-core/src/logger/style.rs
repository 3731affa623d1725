//! Per-level rendering of console lines

use logify_core_types::LogLevel;
use std::fmt::Debug;

/// Transforms a formatted console line for a given level.
pub trait LevelStyle: Send + Sync + Debug {
    fn paint(&self, level: LogLevel, line: &str) -> String;
}

/// ANSI SGR colours: debug blue, info green, warn yellow, error red.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyle;

impl AnsiStyle {
    const RESET: &'static str = "\x1b[39m";

    fn open(level: LogLevel) -> &'static str {
        match level {
            LogLevel::Debug => "\x1b[34m",
            LogLevel::Info => "\x1b[32m",
            LogLevel::Warn => "\x1b[33m",
            LogLevel::Error => "\x1b[31m",
        }
    }
}

impl LevelStyle for AnsiStyle {
    fn paint(&self, level: LogLevel, line: &str) -> String {
        format!("{}{}{}", Self::open(level), line, Self::RESET)
    }
}

/// Leaves lines untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyle;

impl LevelStyle for PlainStyle {
    fn paint(&self, _level: LogLevel, line: &str) -> String {
        line.to_string()
    }
}
