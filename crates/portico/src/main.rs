//! Portico CLI - Documentation site validator.
//!
//! Provides commands for:
//! - `check`: Validate one or more site directories
//! - `tree`: Print the validated navigation structure of a site

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, TreeArgs};
use output::Output;

/// Portico - Documentation site validator.
#[derive(Parser)]
#[command(name = "portico", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate site configuration, sidebars, and document references.
    Check(CheckArgs),
    /// Print the validated navigation structure of a site.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Tree(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
