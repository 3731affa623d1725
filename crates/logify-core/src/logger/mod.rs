//! Leveled logger with console and per-level file sinks
//!
//! A [`Logger`] gates each call against its configured level, formats one
//! line, and writes it either to its console sink (coloured by its
//! [`LevelStyle`]) or appended to `<log_dir>/<level>/<YYYYMMDD>.log`.
//!
//! ```no_run
//! use logify_core::{Logger, LoggerOptions, LogLevel};
//!
//! let logger = Logger::new(LoggerOptions::default().with_context("billing"))?;
//! logger.info("invoice sent");
//! logger.set_level(LogLevel::Warn);
//! logger.info("suppressed");
//! logger.warn_to_file("disk nearly full")?;
//! # Ok::<(), logify_core::LogifyError>(())
//! ```

mod format;
pub mod sink;
pub mod style;

pub use sink::{ConsoleSink, MemorySink, StdoutSink};
pub use style::{AnsiStyle, LevelStyle, PlainStyle};

use crate::config::LoggerOptions;
use crate::errors::{LogifyError, Result};
use crate::internals::{ensure_dir, format_date, Clock, SystemClock};
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::NaiveDateTime;
use logify_core_types::schema::OP_APPEND_LINE;
use logify_core_types::LogLevel;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug)]
pub struct Logger {
    level: AtomicU8,
    context: Option<String>,
    with_time: bool,
    log_dir: PathBuf,
    console: Arc<dyn ConsoleSink>,
    style: Arc<dyn LevelStyle>,
    clock: Arc<dyn Clock>,
}

impl Logger {
    /// Build a logger, resolving its log directory eagerly.
    ///
    /// Nothing is created on disk until the first file emission.
    ///
    /// # Errors
    ///
    /// `RootNotFound` when the base directory strategy cannot locate a
    /// project root, `Config` when the options are invalid.
    pub fn new(options: LoggerOptions) -> Result<Self> {
        options.validate()?;
        let base = options.base_dir.resolve()?;

        Ok(Self {
            level: AtomicU8::new(options.level.severity()),
            context: options.context,
            with_time: options.with_time,
            log_dir: base.join(&options.log_dir_name),
            console: Arc::new(StdoutSink),
            style: Arc::new(AnsiStyle),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the console sink (stdout by default).
    pub fn with_console(mut self, console: Arc<dyn ConsoleSink>) -> Self {
        self.console = console;
        self
    }

    /// Replace the colour strategy (ANSI by default).
    pub fn with_style(mut self, style: Arc<dyn LevelStyle>) -> Self {
        self.style = style;
        self
    }

    /// Replace the clock used for timestamps and file names.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_severity(self.level.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Change the threshold for all subsequent calls.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level.severity(), Ordering::Relaxed);
    }

    /// Whether a line at `level` passes the configured threshold.
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.severity() >= self.level.load(Ordering::Relaxed)
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_time(&self) -> bool {
        self.with_time
    }

    /// `<base>/<log_dir_name>`
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// File a `level` line written at `at` is appended to.
    pub fn log_file_path(&self, level: LogLevel, at: &NaiveDateTime) -> PathBuf {
        self.log_dir
            .join(level.as_str())
            .join(format!("{}.log", format_date("", at)))
    }

    pub fn debug(&self, message: &str) {
        self.log_with(LogLevel::Debug, message, &[]);
    }

    pub fn info(&self, message: &str) {
        self.log_with(LogLevel::Info, message, &[]);
    }

    pub fn warn(&self, message: &str) {
        self.log_with(LogLevel::Warn, message, &[]);
    }

    pub fn error(&self, message: &str) {
        self.log_with(LogLevel::Error, message, &[]);
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        self.log_with(level, message, &[]);
    }

    /// Console emission with trailing arguments appended, space separated.
    pub fn log_with(&self, level: LogLevel, message: &str, extra: &[&dyn Display]) {
        if !self.should_log(level) {
            return;
        }
        let line = self.render(level, message, extra, None);
        self.console.write_line(&self.style.paint(level, &line));
    }

    /// # Errors
    ///
    /// `Io` if the log directory or file cannot be written.
    pub fn debug_to_file(&self, message: &str) -> Result<()> {
        self.log_to_file(LogLevel::Debug, message)
    }

    /// # Errors
    ///
    /// `Io` if the log directory or file cannot be written.
    pub fn info_to_file(&self, message: &str) -> Result<()> {
        self.log_to_file(LogLevel::Info, message)
    }

    /// # Errors
    ///
    /// `Io` if the log directory or file cannot be written.
    pub fn warn_to_file(&self, message: &str) -> Result<()> {
        self.log_to_file(LogLevel::Warn, message)
    }

    /// # Errors
    ///
    /// `Io` if the log directory or file cannot be written.
    pub fn error_to_file(&self, message: &str) -> Result<()> {
        self.log_to_file(LogLevel::Error, message)
    }

    /// Append one uncoloured line to today's file for `level`.
    ///
    /// Directories are created on demand. Failures are returned as is,
    /// without retry or buffering.
    ///
    /// # Errors
    ///
    /// `Io` if the log directory or file cannot be written.
    pub fn log_to_file(&self, level: LogLevel, message: &str) -> Result<()> {
        if !self.should_log(level) {
            return Ok(());
        }

        let started = Instant::now();
        let now = self.clock.now();
        let path = self.log_file_path(level, &now);
        log_op_start!(OP_APPEND_LINE, level = level.as_str(), path = %path.display());

        let result = self.append(level, message, &now, &path);
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!(OP_APPEND_LINE, duration_ms = duration_ms);
            }
            Err(err) => {
                log_op_error!(OP_APPEND_LINE, err, duration_ms = duration_ms);
            }
        }
        result
    }

    fn append(&self, level: LogLevel, message: &str, now: &NaiveDateTime, path: &Path) -> Result<()> {
        ensure_dir(&self.log_dir)?;
        ensure_dir(&self.log_dir.join(level.as_str()))?;

        let mut line = self.render(level, message, &[], Some(now));
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogifyError::io(path, e))?;
        // Single write per line so concurrent appenders interleave whole lines.
        file.write_all(line.as_bytes())
            .map_err(|e| LogifyError::io(path, e))
    }

    fn render(
        &self,
        level: LogLevel,
        message: &str,
        extra: &[&dyn Display],
        at: Option<&NaiveDateTime>,
    ) -> String {
        let now;
        let timestamp = if self.with_time {
            match at {
                Some(at) => Some(at),
                None => {
                    now = self.clock.now();
                    Some(&now)
                }
            }
        } else {
            None
        };
        format::build_line(level, timestamp, self.context.as_deref(), message, extra)
    }
}
