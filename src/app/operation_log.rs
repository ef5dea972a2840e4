//! Append-only record of applied settings, owned by the caller.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AppError, EditResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OperationOutcome {
    Applied { backup: PathBuf, changed: bool, diff_available: bool },
    Failed { kind: &'static str, message: String, backup: Option<PathBuf> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationRecord {
    pub timestamp: DateTime<Utc>,
    pub setting: &'static str,
    pub target: PathBuf,
    #[serde(flatten)]
    pub outcome: OperationOutcome,
}

impl OperationRecord {
    pub fn succeeded(&self) -> bool {
        matches!(self.outcome, OperationOutcome::Applied { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OperationLog {
    records: Vec<OperationRecord>,
}

impl OperationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome of one edit of `target`.
    pub fn record(
        &mut self,
        timestamp: DateTime<Utc>,
        setting: &'static str,
        target: &Path,
        result: &Result<EditResult, AppError>,
    ) {
        let outcome = match result {
            Ok(edit) => OperationOutcome::Applied {
                backup: edit.backup().to_path_buf(),
                changed: edit.changed(),
                diff_available: edit.diff().is_available(),
            },
            Err(err) => OperationOutcome::Failed {
                kind: err.kind_name(),
                message: err.to_string(),
                backup: err.backup_path().map(Path::to_path_buf),
            },
        };
        self.records.push(OperationRecord {
            timestamp,
            setting,
            target: target.to_path_buf(),
            outcome,
        });
    }

    pub fn records(&self) -> &[OperationRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn failures(&self) -> impl Iterator<Item = &OperationRecord> {
        self.records.iter().filter(|record| !record.succeeded())
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Whether any successful edit replaced `target`.
    pub fn applied_to(&self, target: &Path) -> bool {
        self.records.iter().any(|record| record.succeeded() && record.target == target)
    }
}
