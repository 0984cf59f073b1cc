//! The [`Value`] tree and its classification.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// A node in a compared document tree.
///
/// Objects are stored as a `BTreeMap`, which keeps keys in ascending
/// lexicographic order, exactly the order the aligner consumes, so no
/// separate sort pass is needed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
}

/// Raw classification of a value.
///
/// `Undefined` is the classification of an *absent* value (a key present on
/// only one side of a comparison); parsed documents never contain it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Undefined,
    Scalar,
    Array,
    Object,
}

/// The collapsed kind carried by a diff entry.
///
/// Null (and undefined) values are treated as scalars for diff purposes:
/// they carry a rendered value, not children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Scalar,
    Array,
    Object,
}

/// Classify a possibly-absent value. Total and pure.
pub fn classify(value: Option<&Value>) -> ValueKind {
    match value {
        None => ValueKind::Undefined,
        Some(v) => v.kind(),
    }
}

impl Value {
    /// Classify this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) | Value::Number(_) | Value::String(_) => ValueKind::Scalar,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// The collapsed kind used in diff entries.
    pub fn entry_kind(&self) -> EntryKind {
        match self {
            Value::Array(_) => EntryKind::Array,
            Value::Object(_) => EntryKind::Object,
            _ => EntryKind::Scalar,
        }
    }

    /// True for arrays and objects.
    pub fn is_composite(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// The empty value of the same composite kind (`[]` or `{}`).
    ///
    /// Only meaningful for composites; scalar receivers return `Null`.
    pub fn empty_like(&self) -> Value {
        match self {
            Value::Array(_) => Value::Array(Vec::new()),
            Value::Object(_) => Value::Object(BTreeMap::new()),
            _ => Value::Null,
        }
    }

    /// Render a value as JSON source text (`null`, `true`, `3.5`, `"s"`).
    ///
    /// Callers only invoke this on scalars; composites render through the
    /// diff listing's own bracket structure instead.
    pub fn to_json_string(&self) -> String {
        // Serialize cannot fail for this tree: no non-string map keys,
        // no non-finite floats can be constructed from parsed JSON.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Undefined => "undefined",
            ValueKind::Scalar => "scalar",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Scalar => "scalar",
            EntryKind::Array => "array",
            EntryKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut obj = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    obj.serialize_entry(k, v)?;
                }
                obj.end()
            }
        }
    }
}
