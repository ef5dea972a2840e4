//! Diff Reporter: never fails, degrades to a placeholder.

use std::path::Path;

use crate::domain::DiffReport;
use crate::ports::DiffTool;

/// Unified diff from `old` to `new`, or `DiffReport::Unavailable`.
pub fn report<D: DiffTool>(diff: &D, old: &Path, new: &Path) -> DiffReport {
    match diff.unified_diff(old, new) {
        Ok(text) => DiffReport::Unified { text },
        Err(err) => {
            tracing::warn!(
                old = %old.display(),
                new = %new.display(),
                error = %err,
                "diff unavailable"
            );
            DiffReport::Unavailable { reason: err.to_string() }
        }
    }
}
