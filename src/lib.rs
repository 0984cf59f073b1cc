//! **Structural, order-aware JSON diffing.**
//!
//! `jsondiff-tools` computes a structural difference between two JSON
//! documents and renders it as an annotated, JSON-like listing marking
//! unchanged, added, and removed elements.
//!
//! The engine aligns corresponding elements at every level of the two
//! trees with a longest-common-subsequence pass: object members by key
//! (over each side's sorted key list), array elements by whole-value
//! structural equality. The alignment drives a recursive diff that yields
//! a typed, nested [`DiffResult`].
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Value`] tree input documents are parsed into,
//!   and its classification into scalar/array/object kinds.
//! - **[`diff`]**: the [`DiffEngine`], the shared LCS aligner it is built
//!   on, and the [`DiffResult`] it produces.
//! - **[`parsers`]**: JSON text to [`Value`].
//! - **[`reports`]**: listing, JSON, and summary renderers for a finished
//!   diff.
//! - **[`pipeline`]**: parse -> diff -> report orchestration and the exit
//!   codes the CLI maps results to.
//!
//! ## Example
//!
//! ```
//! use jsondiff_tools::{parse_document_str, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = parse_document_str(r#"{"name": "svc", "port": 80}"#)?;
//!     let new = parse_document_str(r#"{"name": "svc", "port": 8080}"#)?;
//!
//!     let result = DiffEngine::new().diff(&old, &new)?;
//!     assert!(result.has_changes());
//!     assert_eq!(result.summary.common, 1); // "name" is unchanged
//!
//!     Ok(())
//! }
//! ```
//!
//! Two properties worth knowing before relying on the output:
//!
//! - Array elements match all-or-nothing. An array element with one
//!   changed field is reported as one removal plus one addition, not an
//!   in-place diff. Object members, by contrast, are matched by key and
//!   diffed in place.
//! - When several alignments are equally good, the backtrace prefers
//!   additions, so output is deterministic and reproducible across runs.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{BehaviorConfig, DiffConfig, DiffPaths, OutputConfig};
pub use diff::{
    align, structurally_equal, AlignStep, DiffAction, DiffEngine, DiffEntry, DiffNode, DiffResult,
    DiffSummary,
};
pub use error::{JsonDiffError, Result};
pub use model::{classify, EntryKind, Value, ValueKind};
pub use parsers::{parse_document, parse_document_str};
pub use reports::{JsonReporter, ListingReporter, ReportFormat, ReportGenerator, SummaryReporter};
