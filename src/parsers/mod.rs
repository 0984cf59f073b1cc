//! Input document parsing.
//!
//! The diff engine never touches text; these functions turn a JSON file
//! into the normalized [`Value`] tree it consumes. `serde_json` enforces a
//! nesting-depth limit while parsing, which also bounds the differ's later
//! recursion.

use crate::error::{JsonDiffError, Result};
use crate::model::Value;
use std::path::Path;

/// Parse a JSON document from a file.
pub fn parse_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| JsonDiffError::io(path, e))?;
    parse_document_str(&content)
}

/// Parse a JSON document from a string.
pub fn parse_document_str(content: &str) -> Result<Value> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    Ok(Value::from(raw))
}
