//! Diff computation stage.

use crate::diff::{DiffEngine, DiffResult};
use crate::error::JsonDiffError;
use crate::model::Value;
use anyhow::{bail, Result};

/// Check the root kinds and run the diff engine.
///
/// The engine itself is only ever entered with two composite values of the
/// same kind; both guards live here, before the first engine call. A kind
/// mismatch is fatal to the whole comparison; there is no best-effort
/// partial diff.
pub fn compute_diff(left: &Value, right: &Value) -> Result<DiffResult> {
    let (lk, rk) = (left.kind(), right.kind());
    if lk != rk {
        bail!(JsonDiffError::type_mismatch("$", lk, rk));
    }
    if !left.is_composite() {
        bail!("top-level values must both be objects or both be arrays, got {lk}");
    }

    tracing::debug!("Comparing two {lk} documents");
    Ok(DiffEngine::new().diff(left, right)?)
}
