//! The tree differ.

use super::align::{align, AlignStep};
use super::equality::structurally_equal;
use super::result::{DiffAction, DiffEntry, DiffNode, DiffResult};
use crate::error::{JsonDiffError, Result};
use crate::model::Value;
use std::collections::BTreeMap;

/// Recursive structural differ over two [`Value`] trees.
///
/// The engine is purely functional over its inputs: it borrows both trees,
/// allocates only its own output, and each nested call returns an owned
/// entry list that the caller composes. Recursion depth equals document
/// nesting depth, which `serde_json` already caps at parse time.
#[derive(Debug, Default)]
pub struct DiffEngine;

impl DiffEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compare two composite values.
    ///
    /// Both sides must be objects or both arrays; anything else fails with
    /// the type-mismatch error before any alignment work happens. On
    /// success the result covers the whole tree; there is no partial diff.
    pub fn diff(&self, left: &Value, right: &Value) -> Result<DiffResult> {
        if !left.is_composite() || left.entry_kind() != right.entry_kind() {
            return Err(JsonDiffError::type_mismatch("$", left.kind(), right.kind()));
        }
        let entries = self.diff_level(left, right, "$")?;
        Ok(DiffResult::new(left.entry_kind(), entries))
    }

    /// Diff one composite level, dispatching on kind.
    ///
    /// Callers guarantee both sides share a composite kind, except the top
    /// call which `diff` has already checked; the error arm covers the
    /// contract anyway so a future caller cannot silently violate it.
    fn diff_level(&self, left: &Value, right: &Value, path: &str) -> Result<Vec<DiffEntry>> {
        match (left, right) {
            (Value::Object(a), Value::Object(b)) => self.diff_objects(a, b, path),
            (Value::Array(a), Value::Array(b)) => self.diff_arrays(a, b, path),
            _ => Err(JsonDiffError::type_mismatch(
                path,
                left.kind(),
                right.kind(),
            )),
        }
    }

    /// Object members: align the two sorted key lists by key equality, then
    /// inspect the values behind each common key.
    fn diff_objects(
        &self,
        a: &BTreeMap<String, Value>,
        b: &BTreeMap<String, Value>,
        path: &str,
    ) -> Result<Vec<DiffEntry>> {
        let keys_a: Vec<&String> = a.keys().collect();
        let keys_b: Vec<&String> = b.keys().collect();
        let steps = align(&keys_a, &keys_b, |x, y| x == y);

        let mut entries = Vec::with_capacity(steps.len());
        for step in steps {
            match step {
                AlignStep::Common { left, .. } => {
                    let key = keys_a[left];
                    let va = &a[key];
                    let vb = &b[key];
                    let child_path = format!("{path}.{key}");
                    if va.is_composite() && va.entry_kind() == vb.entry_kind() {
                        // same composite kind on both sides: diff in place
                        let children = self.diff_level(va, vb, &child_path)?;
                        entries.push(DiffEntry::new(
                            DiffAction::Common,
                            Some(key.clone()),
                            nested_node(va, children),
                        ));
                    } else if structurally_equal(va, vb) {
                        entries.push(DiffEntry::new(
                            DiffAction::Common,
                            Some(key.clone()),
                            DiffNode::Scalar(va.clone()),
                        ));
                    } else {
                        // value changed, or changed kind: wholesale replace
                        entries.push(self.removal(Some(key.clone()), va, &child_path)?);
                        entries.push(self.addition(Some(key.clone()), vb, &child_path)?);
                    }
                }
                AlignStep::Add { right } => {
                    let key = keys_b[right];
                    let child_path = format!("{path}.{key}");
                    entries.push(self.addition(Some(key.clone()), &b[key], &child_path)?);
                }
                AlignStep::Remove { left } => {
                    let key = keys_a[left];
                    let child_path = format!("{path}.{key}");
                    entries.push(self.removal(Some(key.clone()), &a[key], &child_path)?);
                }
            }
        }
        Ok(entries)
    }

    /// Array elements: align directly over elements with structural
    /// equality, so only fully identical elements pair up.
    fn diff_arrays(&self, a: &[Value], b: &[Value], path: &str) -> Result<Vec<DiffEntry>> {
        let steps = align(a, b, |x, y| structurally_equal(x, y));

        let mut entries = Vec::with_capacity(steps.len());
        for step in steps {
            match step {
                AlignStep::Common { left, .. } => {
                    let elem = &a[left];
                    let child_path = format!("{path}[{left}]");
                    // Matched elements are identical; a composite still
                    // recurses once (against itself) so every common entry
                    // at a composite kind carries a nested diff and the
                    // renderer stays uniform.
                    let node = if elem.is_composite() {
                        let children = self.diff_level(elem, elem, &child_path)?;
                        nested_node(elem, children)
                    } else {
                        DiffNode::Scalar(elem.clone())
                    };
                    entries.push(DiffEntry::new(DiffAction::Common, None, node));
                }
                AlignStep::Add { right } => {
                    let child_path = format!("{path}[{right}]");
                    entries.push(self.addition(None, &b[right], &child_path)?);
                }
                AlignStep::Remove { left } => {
                    let child_path = format!("{path}[{left}]");
                    entries.push(self.removal(None, &a[left], &child_path)?);
                }
            }
        }
        Ok(entries)
    }

    /// Build an `Add` entry for a value present only on the right.
    ///
    /// A composite addition is diffed against the empty composite of its
    /// kind, so every descendant comes out marked as added.
    fn addition(&self, key: Option<String>, value: &Value, path: &str) -> Result<DiffEntry> {
        let node = if value.is_composite() {
            let children = self.diff_level(&value.empty_like(), value, path)?;
            nested_node(value, children)
        } else {
            DiffNode::Scalar(value.clone())
        };
        Ok(DiffEntry::new(DiffAction::Add, key, node))
    }

    /// Build a `Remove` entry for a value present only on the left.
    fn removal(&self, key: Option<String>, value: &Value, path: &str) -> Result<DiffEntry> {
        let node = if value.is_composite() {
            let children = self.diff_level(value, &value.empty_like(), path)?;
            nested_node(value, children)
        } else {
            DiffNode::Scalar(value.clone())
        };
        Ok(DiffEntry::new(DiffAction::Remove, key, node))
    }
}

/// Wrap children in the node variant matching the value's composite kind.
fn nested_node(value: &Value, children: Vec<DiffEntry>) -> DiffNode {
    match value {
        Value::Array(_) => DiffNode::Array(children),
        _ => DiffNode::Object(children),
    }
}
