//! JSON report generator.

use super::{ReportError, ReportGenerator};
use crate::diff::DiffResult;

/// Serializes the whole diff tree for programmatic integration.
pub struct JsonReporter {
    pretty: bool,
}

impl JsonReporter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Emit compact JSON instead of pretty-printed
    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, result: &DiffResult) -> Result<String, ReportError> {
        let serialize = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        serialize.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}
