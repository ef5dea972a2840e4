//! Backup Manager: timestamped, never-overwritten copies taken before every edit.

use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::app::AppContext;
use crate::domain::AppError;
use crate::domain::backup::{backup_path, disambiguated};
use crate::ports::{Clock, DiffTool, PrivilegedFilesystem};

/// Same-second collisions tolerated before giving up.
pub const MAX_BACKUP_ATTEMPTS: u32 = 100;

/// Copy `path` to `<path>.backup-<timestamp>` and verify the copy.
///
/// Returns the backup location. On error nothing has been written that a
/// caller needs to clean up, and the target must not be modified.
pub fn create_backup<F, D, C>(ctx: &AppContext<F, D, C>, path: &Path) -> Result<PathBuf, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    let base = backup_path(path, ctx.clock().now());

    let mut attempt = 0;
    let backup = loop {
        let candidate = disambiguated(&base, attempt);
        match ctx.filesystem().copy_new(path, &candidate) {
            Ok(()) => break candidate,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                attempt += 1;
                if attempt >= MAX_BACKUP_ATTEMPTS {
                    return Err(AppError::backup_failed(
                        path,
                        format!(
                            "{} backups already exist for {}",
                            MAX_BACKUP_ATTEMPTS,
                            base.display()
                        ),
                    ));
                }
                tracing::debug!(taken = %candidate.display(), "backup name in use, trying next");
            }
            Err(err) => return Err(AppError::backup_failed(path, err)),
        }
    };

    verify(ctx.filesystem(), path, &backup)?;
    tracing::info!(file = %path.display(), backup = %backup.display(), "backup created");
    Ok(backup)
}

fn verify<F: PrivilegedFilesystem>(fs: &F, source: &Path, backup: &Path) -> Result<(), AppError> {
    let digest = |path: &Path| -> Result<_, AppError> {
        let bytes = fs.read(path).map_err(|err| AppError::backup_failed(source, err))?;
        Ok(Sha256::digest(&bytes))
    };

    if digest(source)? != digest(backup)? {
        return Err(AppError::backup_failed(
            source,
            format!("{} does not match the original", backup.display()),
        ));
    }
    Ok(())
}
