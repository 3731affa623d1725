//! Logger configuration
//!
//! Options start from defaults and are overlaid by, in order, a TOML file,
//! `LOGIFY_*` environment variables and builder calls made by the caller.
//!
//! ```toml
//! level = "warn"
//! context = "billing"
//! with_time = false
//! log_dir_name = "logs"
//!
//! [base_dir]
//! strategy = "explicit"
//! path = "/var/log/billing"
//! ```

use crate::errors::{LogifyError, Result};
use crate::internals::BaseDir;
use logify_core_types::LogLevel;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR_NAME: &str = "debug_logs";

pub const ENV_LEVEL: &str = "LOGIFY_LEVEL";
pub const ENV_CONTEXT: &str = "LOGIFY_CONTEXT";
pub const ENV_WITH_TIME: &str = "LOGIFY_WITH_TIME";
pub const ENV_LOG_DIR_NAME: &str = "LOGIFY_LOG_DIR_NAME";

/// Construction-time configuration of a [`Logger`](crate::logger::Logger)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerOptions {
    /// Minimum level emitted
    pub level: LogLevel,
    /// Tag rendered as `<ctx: name>`
    pub context: Option<String>,
    /// Prefix lines with `[YYYY-MM-DD HH:MM:SS]`
    pub with_time: bool,
    /// Directory created under the base directory
    pub log_dir_name: String,
    pub base_dir: BaseDir,
}

impl Default for LoggerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            context: None,
            with_time: true,
            log_dir_name: DEFAULT_LOG_DIR_NAME.to_string(),
            base_dir: BaseDir::default(),
        }
    }
}

impl LoggerOptions {
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn without_time(mut self) -> Self {
        self.with_time = false;
        self
    }

    pub fn with_log_dir_name(mut self, name: impl Into<String>) -> Self {
        self.log_dir_name = name.into();
        self
    }

    pub fn with_base_dir(mut self, base_dir: BaseDir) -> Self {
        self.base_dir = base_dir;
        self
    }

    /// Parse options from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// `Config` on malformed TOML, unknown keys or invalid values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: LoggerOptions = toml::from_str(text).map_err(|e| LogifyError::Config {
            reason: e.to_string(),
        })?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LogifyError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Overlay `LOGIFY_LEVEL`, `LOGIFY_CONTEXT`, `LOGIFY_WITH_TIME` and
    /// `LOGIFY_LOG_DIR_NAME` from the process environment.
    ///
    /// # Errors
    ///
    /// `InvalidLevel` or `Config` when a variable holds an unusable value.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary key lookup, using the same keys as
    /// [`Self::with_env_overrides`].
    ///
    /// # Errors
    ///
    /// As [`Self::with_env_overrides`].
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LEVEL) {
            self.level = level.parse()?;
        }
        if let Some(context) = lookup(ENV_CONTEXT) {
            self.context = (!context.is_empty()).then_some(context);
        }
        if let Some(with_time) = lookup(ENV_WITH_TIME) {
            self.with_time = parse_bool(&with_time).ok_or_else(|| LogifyError::Config {
                reason: format!("{ENV_WITH_TIME} must be true or false, got '{with_time}'"),
            })?;
        }
        if let Some(name) = lookup(ENV_LOG_DIR_NAME) {
            self.log_dir_name = name;
        }
        self.validate()?;
        Ok(self)
    }

    /// # Errors
    ///
    /// `Config` if `log_dir_name` is empty or absolute.
    pub fn validate(&self) -> Result<()> {
        if self.log_dir_name.trim().is_empty() {
            return Err(LogifyError::Config {
                reason: "log_dir_name must not be empty".to_string(),
            });
        }
        if PathBuf::from(&self.log_dir_name).is_absolute() {
            return Err(LogifyError::Config {
                reason: format!(
                    "log_dir_name must be relative to the base directory, got '{}'",
                    self.log_dir_name
                ),
            });
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let options = LoggerOptions::default();
        assert_eq!(options.level, LogLevel::Info);
        assert_eq!(options.context, None);
        assert!(options.with_time);
        assert_eq!(options.log_dir_name, "debug_logs");
        assert_eq!(options.base_dir, BaseDir::default());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options = LoggerOptions::from_toml_str("level = \"warn\"\n").unwrap();
        assert_eq!(options.level, LogLevel::Warn);
        assert!(options.with_time);
        assert_eq!(options.log_dir_name, DEFAULT_LOG_DIR_NAME);
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
            level = "debug"
            context = "billing"
            with_time = false
            log_dir_name = "custom_logs"

            [base_dir]
            strategy = "explicit"
            path = "/var/log/billing"
        "#;
        let options = LoggerOptions::from_toml_str(text).unwrap();
        assert_eq!(options.level, LogLevel::Debug);
        assert_eq!(options.context.as_deref(), Some("billing"));
        assert!(!options.with_time);
        assert_eq!(options.log_dir_name, "custom_logs");
        assert_eq!(options.base_dir, BaseDir::explicit("/var/log/billing"));
    }

    #[test]
    fn test_project_root_strategy_defaults_marker() {
        let text = "[base_dir]\nstrategy = \"project_root\"\n";
        let options = LoggerOptions::from_toml_str(text).unwrap();
        assert_eq!(options.base_dir, BaseDir::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = LoggerOptions::from_toml_str("colour = true\n").unwrap_err();
        assert!(matches!(err, LogifyError::Config { .. }));
    }

    #[test]
    fn test_bad_level_rejected() {
        let err = LoggerOptions::from_toml_str("level = \"loud\"\n").unwrap_err();
        assert!(matches!(err, LogifyError::Config { .. }));
    }

    #[test]
    fn test_toml_and_env_share_level_names() {
        let from_file = LoggerOptions::from_toml_str("level = \"Warning\"\n").unwrap();
        let from_env = LoggerOptions::default()
            .with_overrides_from(|k| (k == ENV_LEVEL).then(|| "Warning".to_string()))
            .unwrap();

        assert_eq!(from_file.level, LogLevel::Warn);
        assert_eq!(from_env.level, from_file.level);
    }

    #[test]
    fn test_overrides_apply() {
        let vars: HashMap<&str, &str> = [
            (ENV_LEVEL, "ERROR"),
            (ENV_CONTEXT, "worker"),
            (ENV_WITH_TIME, "off"),
            (ENV_LOG_DIR_NAME, "traces"),
        ]
        .into_iter()
        .collect();

        let options = LoggerOptions::default()
            .with_overrides_from(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(options.level, LogLevel::Error);
        assert_eq!(options.context.as_deref(), Some("worker"));
        assert!(!options.with_time);
        assert_eq!(options.log_dir_name, "traces");
    }

    #[test]
    fn test_override_invalid_level() {
        let err = LoggerOptions::default()
            .with_overrides_from(|k| (k == ENV_LEVEL).then(|| "chatty".to_string()))
            .unwrap_err();
        assert!(matches!(err, LogifyError::InvalidLevel { ref value } if value == "chatty"));
    }

    #[test]
    fn test_empty_log_dir_name_rejected() {
        let err = LoggerOptions::default()
            .with_log_dir_name("  ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, LogifyError::Config { .. }));
    }
}
