//! Snapmark CLI
//!
//! Command-line interface for snapmark

use clap::{Parser, Subcommand};
use snapmark_core::logging_facility::{init, Profile};

mod commands;
mod fsio;

#[derive(Debug, Parser)]
#[command(name = "snapmark")]
#[command(about = "Snapmark - Snapshot change annotation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare a backup snapshot against the current one and write annotated JSONC
    Annotate(commands::annotate::AnnotateArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Annotate(args) => commands::annotate::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
