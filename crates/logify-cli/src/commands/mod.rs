pub mod emit;
pub mod path;

use clap::Args;
use logify_core::{BaseDir, LogLevel, LoggerOptions};
use std::path::PathBuf;

/// Flags shared by every command that needs a resolved log directory
#[derive(Debug, Args)]
pub struct LocationArgs {
    /// Directory the log directory is created under (default: nearest
    /// ancestor containing Cargo.toml)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Name of the log directory under the base directory
    #[arg(long)]
    pub log_dir_name: Option<String>,

    /// TOML file with logger options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl LocationArgs {
    /// Layer options: config file (or defaults at `fallback_level`), then
    /// `LOGIFY_*` variables, then flags.
    pub fn options(
        &self,
        fallback_level: LogLevel,
    ) -> Result<LoggerOptions, Box<dyn std::error::Error>> {
        let mut options = match &self.config {
            Some(path) => LoggerOptions::load(path)?,
            None => LoggerOptions::default().with_level(fallback_level),
        }
        .with_env_overrides()?;

        if let Some(name) = &self.log_dir_name {
            options = options.with_log_dir_name(name.clone());
        }
        if let Some(base_dir) = &self.base_dir {
            options = options.with_base_dir(BaseDir::explicit(base_dir.clone()));
        }
        Ok(options)
    }
}
