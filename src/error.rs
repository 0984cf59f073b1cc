//! Unified error types for jsondiff-tools.

use crate::model::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jsondiff-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum JsonDiffError {
    /// Errors while parsing an input document
    #[error("Failed to parse document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during diff computation
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
}

/// Specific diff error kinds.
///
/// The diff engine has exactly one failure mode: the two values being
/// compared at some level have different kinds. A mismatch anywhere aborts
/// the whole comparison; there is no partial diff.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("Type mismatch at {path}: {left} vs {right}")]
    TypeMismatch {
        /// Path to the diverging node, e.g. `$.servers[2].port`
        path: String,
        left: ValueKind,
        right: ValueKind,
    },
}

/// Convenient Result type for jsondiff-tools operations
pub type Result<T> = std::result::Result<T, JsonDiffError>;

impl JsonDiffError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create the type-mismatch diff error
    pub fn type_mismatch(path: impl Into<String>, left: ValueKind, right: ValueKind) -> Self {
        let path = path.into();
        Self::Diff {
            context: format!("at {path}"),
            source: DiffErrorKind::TypeMismatch { path, left, right },
        }
    }
}

impl From<std::io::Error> for JsonDiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for JsonDiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}
