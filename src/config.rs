//! Runtime configuration for the CLI handlers.
//!
//! Assembled in `main` from parsed flags and handed to the command
//! handlers, so the handlers stay testable without a process boundary.

use crate::reports::ReportFormat;
use std::path::PathBuf;

/// Configuration for the diff command.
#[derive(Debug, Clone)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// The two input documents.
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Left/old document
    pub left: PathBuf,
    /// Right/new document
    pub right: PathBuf,
}

/// Where and how to emit the report.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub format: ReportFormat,
    /// Output file; stdout if not set
    pub file: Option<PathBuf>,
    pub no_color: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    pub quiet: bool,
}
