//! Report generation for diff results.
//!
//! Three output formats:
//! - Listing: the annotated, JSON-like text listing with `+`/`-` markers
//! - JSON: the serialized diff tree for programmatic consumers
//! - Summary: compact shell-friendly counts
//!
//! The diff engine never prints; reporters consume a finished
//! [`DiffResult`] and produce text, which the pipeline routes to stdout or
//! a file.

mod json;
mod listing;
mod summary;

pub use json::JsonReporter;
pub use listing::ListingReporter;
pub use summary::SummaryReporter;

use crate::diff::DiffResult;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Output format selector for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Annotated JSON-like listing
    Listing,
    /// Serialized diff tree
    Json,
    /// Change counts only
    Summary,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report from a diff result
    fn generate(&self, result: &DiffResult) -> Result<String, ReportError>;
}

/// Apply ANSI color formatting if colored output is enabled.
pub(crate) fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}
