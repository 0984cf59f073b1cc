//! Structural diff engine.
//!
//! The engine compares two [`Value`](crate::model::Value) trees level by
//! level. At each level an LCS alignment pairs up corresponding elements:
//! object members are aligned by key over each side's sorted key list, array
//! elements are aligned by whole-value structural equality. The aligner's
//! backtrace drives recursive descent into nested composites, producing a
//! typed [`DiffResult`].
//!
//! Two deliberate asymmetries in the semantics:
//!
//! - Array elements are matched wholesale. A changed field inside an array
//!   element turns the whole element into one remove plus one add, never an
//!   in-place nested diff.
//! - An object key whose value changes kind (scalar to object, array to
//!   object, ...) is likewise replaced wholesale.
//!
//! # Example
//!
//! ```
//! use jsondiff_tools::diff::DiffEngine;
//! use jsondiff_tools::parsers::parse_document_str;
//!
//! let old = parse_document_str(r#"{"port": 80}"#).unwrap();
//! let new = parse_document_str(r#"{"port": 8080}"#).unwrap();
//!
//! let result = DiffEngine::new().diff(&old, &new).unwrap();
//! assert!(result.has_changes());
//! ```

pub mod align;
mod engine;
mod equality;
mod result;

pub use align::{align, AlignStep};
pub use engine::DiffEngine;
pub use equality::structurally_equal;
pub use result::{DiffAction, DiffEntry, DiffNode, DiffResult, DiffSummary};
