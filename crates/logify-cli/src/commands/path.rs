//! Path command
//!
//! Usage: logify path [--level <LEVEL>] [--date <YYYY-MM-DD>]

use super::LocationArgs;
use chrono::{Local, NaiveDate};
use clap::Args;
use logify_core::{LogLevel, Logger};

#[derive(Debug, Args)]
pub struct PathArgs {
    /// Level whose file is shown
    #[arg(short, long, default_value = "info")]
    pub level: LogLevel,

    /// Day of the file (default: today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub location: LocationArgs,
}

/// Execute path command
pub fn execute(args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(args.location.options(LogLevel::Debug)?)?;

    let at = match args.date {
        Some(date) => date.and_hms_opt(0, 0, 0).ok_or("invalid date")?,
        None => Local::now().naive_local(),
    };
    println!("{}", logger.log_file_path(args.level, &at).display());

    Ok(())
}
