//! Diff result structures.

use crate::model::{EntryKind, Value};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// What happened to one aligned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAction {
    Common,
    Add,
    Remove,
}

/// Payload of a diff entry: a scalar value or a nested diff.
///
/// The kind of the entry is carried by the variant, so an entry can never
/// hold both a value and children, and a composite entry always has a
/// nested diff, possibly empty when the substructure is identical.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffNode {
    Scalar(Value),
    Array(Vec<DiffEntry>),
    Object(Vec<DiffEntry>),
}

impl DiffNode {
    /// The classified kind of the relevant side's value.
    pub fn kind(&self) -> EntryKind {
        match self {
            DiffNode::Scalar(_) => EntryKind::Scalar,
            DiffNode::Array(_) => EntryKind::Array,
            DiffNode::Object(_) => EntryKind::Object,
        }
    }

    /// The nested diff, if this entry is composite.
    pub fn children(&self) -> Option<&[DiffEntry]> {
        match self {
            DiffNode::Scalar(_) => None,
            DiffNode::Array(children) | DiffNode::Object(children) => Some(children),
        }
    }
}

/// One aligned element of a diff result.
///
/// `key` is the object member name when the entry originates from an
/// object level; array entries carry `None`, their position is implicit in
/// the entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub action: DiffAction,
    pub key: Option<String>,
    pub node: DiffNode,
}

impl DiffEntry {
    pub fn new(action: DiffAction, key: Option<String>, node: DiffNode) -> Self {
        Self { action, key, node }
    }

    /// The classified kind of this entry's value.
    pub fn kind(&self) -> EntryKind {
        self.node.kind()
    }
}

// Serialized as {"action", "key"?, "kind", "value" | "children"} so the
// JSON report exposes the kind without storing it twice.
impl Serialize for DiffEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.key.is_some() { 4 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("action", &self.action)?;
        if let Some(key) = &self.key {
            map.serialize_entry("key", key)?;
        }
        map.serialize_entry("kind", &self.kind())?;
        match &self.node {
            DiffNode::Scalar(value) => map.serialize_entry("value", value)?,
            DiffNode::Array(children) | DiffNode::Object(children) => {
                map.serialize_entry("children", children)?;
            }
        }
        map.end()
    }
}

/// Top-level counts, by action, of the root-level entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub common: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffSummary {
    fn tally(entries: &[DiffEntry]) -> Self {
        let mut summary = Self::default();
        for entry in entries {
            match entry.action {
                DiffAction::Common => summary.common += 1,
                DiffAction::Add => summary.added += 1,
                DiffAction::Remove => summary.removed += 1,
            }
        }
        summary
    }
}

/// Complete result of one diff operation.
///
/// `entries` is the full diff of the root level in alignment order, not
/// sorted by key. Built bottom-up in one recursive pass and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[must_use]
pub struct DiffResult {
    /// Classified kind of the root values (both sides share it)
    pub root_kind: EntryKind,
    /// Root-level diff entries in alignment order
    pub entries: Vec<DiffEntry>,
    /// Root-level counts by action
    pub summary: DiffSummary,
}

impl DiffResult {
    /// Wrap root entries, computing the summary.
    pub fn new(root_kind: EntryKind, entries: Vec<DiffEntry>) -> Self {
        let summary = DiffSummary::tally(&entries);
        Self {
            root_kind,
            entries,
            summary,
        }
    }

    /// True if any entry, at any depth, is an add or a remove.
    pub fn has_changes(&self) -> bool {
        entries_have_changes(&self.entries)
    }
}

fn entries_have_changes(entries: &[DiffEntry]) -> bool {
    entries.iter().any(|entry| {
        entry.action != DiffAction::Common
            || entry
                .node
                .children()
                .is_some_and(entries_have_changes)
    })
}
