//! `rw-tabbed`: drive tabbed-content widgets in rendered HTML.
//!
//! Provides commands for:
//! - `replay`: Apply clicks and key presses and print the resulting HTML
//! - `inspect`: Summarize the widgets found in a page

mod commands;
mod error;
mod output;
mod script;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{InspectArgs, ReplayArgs};
use output::Output;

/// Tabbed-content widget driver.
#[derive(Parser)]
#[command(name = "rw-tabbed", version, about)]
struct Cli {
    /// Enable verbose output (widget initialization and navigation logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay events against a page and print the resulting HTML.
    Replay(ReplayArgs),
    /// Print a summary of each widget in a page.
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Replay(args) => args.execute(&output),
        Commands::Inspect(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
