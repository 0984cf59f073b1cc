//! Whole-value structural equality.

use crate::model::Value;
use std::collections::BTreeSet;

/// Decide whether two values are fully structurally identical.
///
/// - Different kinds are never equal.
/// - Objects are compared over the union of both key sets; a key present on
///   only one side compares against an absent value and makes the objects
///   unequal.
/// - Arrays are order-sensitive: same length, each positional pair equal.
/// - Scalars (including null) compare by value.
///
/// This is the match predicate the aligner uses for array elements, which is
/// what makes array matching all-or-nothing.
pub fn structurally_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(left), Value::Object(right)) => {
            let keys: BTreeSet<&String> = left.keys().chain(right.keys()).collect();
            keys.into_iter().all(|k| match (left.get(k), right.get(k)) {
                (Some(va), Some(vb)) => structurally_equal(va, vb),
                // key absent on one side: absent vs present is unequal
                _ => false,
            })
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len()
                && left
                    .iter()
                    .zip(right.iter())
                    .all(|(va, vb)| structurally_equal(va, vb))
        }
        // scalar pairs compare by value; mixed kinds differ by discriminant
        (x, y) => x == y,
    }
}
