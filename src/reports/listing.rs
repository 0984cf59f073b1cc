//! Annotated listing reporter.
//!
//! Renders the diff tree as an indented, bracketed, JSON-like listing. One
//! line per scalar entry, one bracketed group per composite entry; `+` and
//! `-` prefix added and removed lines, common lines get a space. Two
//! spaces of indent per nesting depth, trailing comma on every sibling but
//! the last.

use super::{ansi_color, ReportError, ReportGenerator};
use crate::diff::{DiffAction, DiffEntry, DiffNode, DiffResult};
use crate::model::EntryKind;

/// Listing reporter for shell output
pub struct ListingReporter {
    colored: bool,
}

impl ListingReporter {
    pub fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    pub fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    /// Render the listing as individual lines.
    pub fn lines(&self, result: &DiffResult) -> Vec<String> {
        let (open, close) = brackets(result.root_kind);
        let mut out = Vec::new();
        out.push(open.to_string());
        self.render_entries(&result.entries, 1, &mut out);
        out.push(close.to_string());
        out
    }

    fn render_entries(&self, entries: &[DiffEntry], depth: usize, out: &mut Vec<String>) {
        for (i, entry) in entries.iter().enumerate() {
            let comma = if i + 1 < entries.len() { "," } else { "" };
            let prefix = action_char(entry.action);
            let indent = "  ".repeat(depth);
            let label = entry
                .key
                .as_deref()
                .map(|k| format!("{k}: "))
                .unwrap_or_default();

            match &entry.node {
                DiffNode::Scalar(value) => {
                    let line = format!("{prefix}{indent}{label}{}{comma}", value.to_json_string());
                    out.push(self.colorize(line, entry.action));
                }
                node @ (DiffNode::Array(children) | DiffNode::Object(children)) => {
                    let (open, close) = brackets(node.kind());
                    out.push(self.colorize(format!("{prefix}{indent}{label}{open}"), entry.action));
                    self.render_entries(children, depth + 1, out);
                    out.push(self.colorize(format!("{prefix}{indent}{close}{comma}"), entry.action));
                }
            }
        }
    }

    fn colorize(&self, line: String, action: DiffAction) -> String {
        match action {
            DiffAction::Add => ansi_color(&line, "green", self.colored),
            DiffAction::Remove => ansi_color(&line, "red", self.colored),
            DiffAction::Common => line,
        }
    }
}

impl Default for ListingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ListingReporter {
    fn generate(&self, result: &DiffResult) -> Result<String, ReportError> {
        Ok(self.lines(result).join("\n"))
    }
}

fn action_char(action: DiffAction) -> char {
    match action {
        DiffAction::Add => '+',
        DiffAction::Remove => '-',
        DiffAction::Common => ' ',
    }
}

fn brackets(kind: EntryKind) -> (char, char) {
    match kind {
        EntryKind::Array => ('[', ']'),
        // scalar never reaches here: entries with scalar nodes render as
        // single lines, and the root is always composite
        _ => ('{', '}'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::DiffEngine;
    use crate::model::Value;

    fn render(a: &str, b: &str) -> Vec<String> {
        let left = Value::from(serde_json::from_str::<serde_json::Value>(a).unwrap());
        let right = Value::from(serde_json::from_str::<serde_json::Value>(b).unwrap());
        let result = DiffEngine::new().diff(&left, &right).unwrap();
        ListingReporter::new().no_color().lines(&result)
    }

    #[test]
    fn test_scalar_replace_listing() {
        let lines = render(r#"{"a": 1, "c": 3}"#, r#"{"a": 2, "c": 3}"#);
        assert_eq!(
            lines,
            vec![
                "{".to_string(),
                "-  a: 1,".to_string(),
                "+  a: 2,".to_string(),
                "   c: 3".to_string(),
                "}".to_string(),
            ]
        );
    }

    #[test]
    fn test_nested_object_listing() {
        let lines = render(r#"{"cfg": {"x": 1}}"#, r#"{"cfg": {"x": 1, "y": 2}}"#);
        assert_eq!(
            lines,
            vec![
                "{".to_string(),
                "   cfg: {".to_string(),
                "     x: 1,".to_string(),
                "+    y: 2".to_string(),
                "   }".to_string(),
                "}".to_string(),
            ]
        );
    }

    #[test]
    fn test_array_root_listing() {
        let lines = render("[1, 2]", "[1, 3]");
        assert_eq!(
            lines,
            vec![
                "[".to_string(),
                "   1,".to_string(),
                "-  2,".to_string(),
                "+  3".to_string(),
                "]".to_string(),
            ]
        );
    }

    #[test]
    fn test_last_sibling_has_no_comma() {
        let lines = render(r#"{"a": 1}"#, r#"{"a": 1, "b": 2}"#);
        assert_eq!(lines[1], "   a: 1,");
        assert_eq!(lines[2], "+  b: 2");
    }
}
