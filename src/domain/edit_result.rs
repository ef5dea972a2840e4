//! Outcome of one safe-edit invocation.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Text shown in place of a diff when no diff could be produced.
pub const DIFF_UNAVAILABLE: &str = "Diff unavailable";

/// Unified diff between the backup and the rewritten file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiffReport {
    /// Output of the diff generator. Empty when the files are identical.
    Unified { text: String },
    /// The generator failed; the edit itself still succeeded.
    Unavailable { reason: String },
}

impl DiffReport {
    /// Diff text for display, or the placeholder when unavailable.
    pub fn text(&self) -> &str {
        match self {
            DiffReport::Unified { text } => text,
            DiffReport::Unavailable { .. } => DIFF_UNAVAILABLE,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, DiffReport::Unified { .. })
    }
}

/// Result of a successful safe edit.
///
/// Constructed only by the safe editor, after the backup exists and the
/// target has been replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditResult {
    setting: &'static str,
    file: PathBuf,
    backup: PathBuf,
    changed: bool,
    diff: DiffReport,
}

impl EditResult {
    pub(crate) fn new(
        setting: &'static str,
        file: PathBuf,
        backup: PathBuf,
        changed: bool,
        diff: DiffReport,
    ) -> Self {
        Self { setting, file, backup, changed, diff }
    }

    pub fn setting(&self) -> &'static str {
        self.setting
    }

    /// The file that was rewritten.
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Copy of the file as it was before this edit.
    pub fn backup(&self) -> &Path {
        &self.backup
    }

    /// Whether the rewrite changed the file's content.
    pub fn changed(&self) -> bool {
        self.changed
    }

    pub fn diff(&self) -> &DiffReport {
        &self.diff
    }
}
