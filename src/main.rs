//! jsondiff-tools: structural, order-aware JSON diff
//!
//! Compares two JSON documents tree-structurally and prints an annotated
//! listing of what changed.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use jsondiff_tools::{
    cli,
    config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jsondiff-tools")]
#[command(version)]
#[command(about = "Structural, order-aware JSON diff tool", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Comparison completed
    1  Usage error
    2  Input file could not be read or parsed
    3  Documents have different root kinds

EXAMPLES:
    # Annotated listing on the terminal
    jsondiff-tools old.json new.json

    # Machine-readable diff tree
    jsondiff-tools old.json new.json -o json > diff.json

    # Just the counts, written to a file
    jsondiff-tools old.json new.json -o summary -O changes.txt")]
struct Cli {
    /// Left/old JSON document
    left: PathBuf,

    /// Right/new JSON document
    right: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "listing")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse through try_parse so wrong arguments exit 1 (usage), keeping 2
    // reserved for input read/parse failures.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
                _ => exit_codes::USAGE_ERROR,
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = DiffConfig {
        paths: DiffPaths {
            left: cli.left,
            right: cli.right,
        },
        output: OutputConfig {
            format: cli.output,
            file: cli.output_file,
            no_color: cli.no_color,
        },
        behavior: BehaviorConfig { quiet: cli.quiet },
    };

    let exit_code = cli::run_diff(config)?;
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
