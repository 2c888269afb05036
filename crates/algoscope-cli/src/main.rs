//! algoscope CLI - classify code snippets from the terminal
//!
//! # Usage
//!
//! ```bash
//! # Classify a file
//! algoscope classify search.cpp
//!
//! # Classify stdin, JSON output
//! cat sort.py | algoscope classify --json
//!
//! # Use a caller-asserted algorithm
//! algoscope classify app.js --algorithm "Merge Sort"
//!
//! # Print the complexity and note tables
//! algoscope catalog
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{catalog, classify, info};

/// algoscope - rule-based language and algorithm classifier
#[derive(Parser)]
#[command(
    name = "algoscope",
    version,
    about = "Guess the language, algorithm and complexity of a code snippet",
    long_about = "algoscope matches a snippet against fixed language and algorithm\n\
                  signatures and reports the textbook complexity of the match.\n\n\
                  It is a heuristic: it never parses or runs the code."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a file or stdin
    #[command(name = "classify")]
    Classify(classify::ClassifyArgs),

    /// Show supported languages and algorithms
    #[command(name = "catalog")]
    Catalog(catalog::CatalogArgs),

    /// Show version and rule order
    #[command(name = "info")]
    Info(info::InfoArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Classify(args) => classify::run(args),
        Commands::Catalog(args) => catalog::run(args),
        Commands::Info(args) => info::run(args),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}
