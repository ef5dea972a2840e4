//! Safe Editor: backup, read, transform, atomic replace, diff.

use crate::app::AppContext;
use crate::app::backup::create_backup;
use crate::app::diff_report::report;
use crate::domain::{AppError, EditResult, ManagedEdit};
use crate::ports::{Clock, DiffTool, PrivilegedFilesystem};

/// Run `edit` through the full pipeline.
///
/// Ordering guarantees: no byte of the target is written before its backup
/// exists, and the target is replaced in one atomic step.
pub fn safe_edit<F, D, C>(
    ctx: &AppContext<F, D, C>,
    edit: &ManagedEdit,
) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    let path = edit.path();
    let backup = create_backup(ctx, path)?;

    let bytes = ctx.filesystem().read(path).map_err(|err| AppError::backup_failed(path, err))?;
    let old = String::from_utf8(bytes)
        .map_err(|_| AppError::backup_failed(path, "file is not valid UTF-8 text"))?;

    let new = edit.transform().apply(&old);
    let changed = new != old;
    tracing::debug!(
        setting = edit.setting(),
        transform = %edit.transform(),
        changed,
        "content transformed"
    );

    ctx.filesystem()
        .replace_atomic(path, new.as_bytes())
        .map_err(|err| AppError::write_failed(path, &backup, err))?;
    tracing::info!(setting = edit.setting(), file = %path.display(), changed, "file replaced");

    let diff = report(ctx.diff(), &backup, path);
    Ok(EditResult::new(edit.setting(), path.to_path_buf(), backup, changed, diff))
}
