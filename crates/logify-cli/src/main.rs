//! Logify CLI
//!
//! Command-line front end for the Logify logger

use clap::{Parser, Subcommand};
use logify_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "logify")]
#[command(about = "Logify - leveled console and file logging", long_about = None)]
struct Cli {
    /// Print the logger's own diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Emit one line to the console and optionally to today's log file
    Emit(commands::emit::EmitArgs),
    /// Print the log file a line would be appended to
    Path(commands::path::PathArgs),
}

fn main() {
    let cli = Cli::parse();

    init(if cli.verbose {
        Profile::Development
    } else {
        Profile::Production
    });

    let result = match cli.command {
        Commands::Emit(args) => commands::emit::execute(args),
        Commands::Path(args) => commands::path::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
