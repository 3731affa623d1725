//! Emit command
//!
//! Usage: logify emit <MESSAGE> [--level <LEVEL>] [--threshold <LEVEL>] [--file]

use super::LocationArgs;
use clap::Args;
use logify_core::logger::PlainStyle;
use logify_core::{LogLevel, Logger};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Message to log
    pub message: String,

    /// Level of the emitted line
    #[arg(short, long, default_value = "info")]
    pub level: LogLevel,

    /// Minimum level that is written (default: debug, or the config file's level)
    #[arg(short, long)]
    pub threshold: Option<LogLevel>,

    /// Context tag shown as `<ctx: ...>`
    #[arg(short, long)]
    pub context: Option<String>,

    /// Omit the timestamp
    #[arg(long)]
    pub no_time: bool,

    /// Also append the line to today's file for the level
    #[arg(short, long)]
    pub file: bool,

    /// Disable console colours
    #[arg(long)]
    pub plain: bool,

    #[command(flatten)]
    pub location: LocationArgs,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = args.location.options(LogLevel::Debug)?;
    if let Some(threshold) = args.threshold {
        options = options.with_level(threshold);
    }
    if let Some(context) = args.context {
        options = options.with_context(context);
    }
    if args.no_time {
        options = options.without_time();
    }

    let mut logger = Logger::new(options)?;
    if args.plain {
        logger = logger.with_style(Arc::new(PlainStyle));
    }

    logger.log(args.level, &args.message);
    if args.file {
        logger.log_to_file(args.level, &args.message)?;
    }

    Ok(())
}
