//! `apply`: run every setting of a hardening profile, recording each outcome.

use crate::app::AppContext;
use crate::app::operation_log::OperationLog;
use crate::app::policy::apply_setting;
use crate::domain::{AppError, HardeningProfile};
use crate::ports::{Clock, DiffTool, PrivilegedFilesystem};

/// Apply `profile` setting by setting.
///
/// The whole profile is validated up front; an invalid value fails the call
/// before any file is touched. After that, a failed edit is recorded and the
/// remaining settings still run.
pub fn apply_profile<F, D, C>(
    ctx: &AppContext<F, D, C>,
    profile: &HardeningProfile,
) -> Result<OperationLog, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    let settings = profile.settings()?;
    let mut log = OperationLog::new();

    for setting in settings {
        let target = setting.managed_file().resolve(ctx.root());
        let result = apply_setting(ctx, setting);
        if let Err(err) = &result {
            tracing::warn!(setting = setting.name(), error = %err, "setting not applied");
        }
        log.record(ctx.clock().now(), setting.name(), &target, &result);
    }

    Ok(log)
}
