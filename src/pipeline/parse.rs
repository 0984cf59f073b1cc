//! Document loading stage.

use crate::error::Result;
use crate::model::Value;
use crate::parsers::parse_document;
use std::path::Path;

/// Load and parse one input document, logging progress unless quiet.
pub fn load_document(path: &Path, quiet: bool) -> Result<Value> {
    if !quiet {
        tracing::debug!("Parsing document: {}", path.display());
    }

    let value = parse_document(path)?;

    if !quiet {
        tracing::debug!("Parsed {} root", value.kind());
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JsonDiffError;
    use std::io::Write;

    #[test]
    fn test_load_document_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"a": [1, 2]}}"#).expect("write");

        let value = load_document(file.path(), true).expect("loads");
        assert!(value.is_composite());
    }

    #[test]
    fn test_load_document_bad_json() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{truncated").expect("write");

        let err = load_document(file.path(), true).unwrap_err();
        assert!(matches!(err, JsonDiffError::Parse { .. }));
    }
}
