//! Summary report generator for shell output.

use super::{ansi_color, ReportError, ReportGenerator};
use crate::diff::DiffResult;
use std::fmt::Write;

/// Compact change counts for terminal usage and CI logs.
pub struct SummaryReporter {
    colored: bool,
}

impl SummaryReporter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    pub fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, result: &DiffResult) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "{}", self.color("Diff summary", "bold"))?;
        writeln!(out, "  root:    {}", result.root_kind)?;
        writeln!(out, "  common:  {}", result.summary.common)?;
        writeln!(
            out,
            "  added:   {}",
            self.color(&result.summary.added.to_string(), "green")
        )?;
        writeln!(
            out,
            "  removed: {}",
            self.color(&result.summary.removed.to_string(), "red")
        )?;
        if result.has_changes() {
            write!(out, "Documents differ.")?;
        } else {
            write!(out, "{}", self.color("No differences.", "dim"))?;
        }
        Ok(out)
    }
}
