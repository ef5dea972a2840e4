use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for hardenkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied parameter outside the allowed range. Nothing was touched.
    #[error("Invalid value {value} for {setting}: {reason}")]
    Validation { setting: &'static str, value: String, reason: String },

    /// The target could not be backed up or read. The target file is unmodified.
    #[error("Backup of {} failed: {message}", path.display())]
    BackupFailed { path: PathBuf, message: String },

    /// The target could not be replaced after a successful backup.
    #[error(
        "Writing {} failed: {message} (backup kept at {})",
        path.display(),
        backup.display()
    )]
    WriteFailed { path: PathBuf, backup: PathBuf, message: String },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Underlying I/O failure outside the edit pipeline.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn validation(
        setting: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        AppError::Validation { setting, value: value.to_string(), reason: reason.into() }
    }

    pub fn backup_failed(path: &Path, cause: impl ToString) -> Self {
        AppError::BackupFailed { path: path.to_path_buf(), message: cause.to_string() }
    }

    pub fn write_failed(path: &Path, backup: &Path, cause: impl ToString) -> Self {
        AppError::WriteFailed {
            path: path.to_path_buf(),
            backup: backup.to_path_buf(),
            message: cause.to_string(),
        }
    }

    /// True when the failure is guaranteed to have left the target file as it was.
    ///
    /// Only `WriteFailed` needs an operator to inspect the backup before
    /// deciding on recovery.
    pub fn leaves_target_untouched(&self) -> bool {
        !matches!(self, AppError::WriteFailed { .. })
    }

    /// Backup path an operator can restore from, when one was created.
    pub fn backup_path(&self) -> Option<&Path> {
        match self {
            AppError::WriteFailed { backup, .. } => Some(backup),
            _ => None,
        }
    }

    /// Short machine-readable name for the failure class.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::BackupFailed { .. } => "backup_failed",
            AppError::WriteFailed { .. } => "write_failed",
            AppError::Configuration(_) | AppError::ConfigParse(_) => "configuration_error",
            AppError::Io(_) => "io_error",
        }
    }
}
