//! Policy Façade: one typed entry point per hardening setting.
//!
//! Arguments are validated before the Safe Editor runs, so a rejected value
//! never touches the filesystem.

use crate::app::AppContext;
use crate::app::safe_edit::safe_edit;
use crate::domain::{AppError, EditResult, MinPasswordLength, PasswordRemember, Setting};
use crate::ports::{Clock, DiffTool, PrivilegedFilesystem};

/// Set `minlen` on the password-quality lines of `common-password` (8..=32).
pub fn set_min_password_length<F, D, C>(
    ctx: &AppContext<F, D, C>,
    min_length: u32,
) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    apply_setting(ctx, Setting::MinPasswordLength(MinPasswordLength::new(min_length)?))
}

/// Set `remember` on the `pam_unix.so` lines of `common-password` (0..=24).
pub fn set_password_remember<F, D, C>(
    ctx: &AppContext<F, D, C>,
    remember: u32,
) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    apply_setting(ctx, Setting::PasswordRemember(PasswordRemember::new(remember)?))
}

/// Strip `nullok` from `common-auth`.
pub fn disable_null_passwords<F, D, C>(ctx: &AppContext<F, D, C>) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    apply_setting(ctx, Setting::DisableNullPasswords)
}

pub fn set_aslr<F, D, C>(ctx: &AppContext<F, D, C>, enabled: bool) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    apply_setting(ctx, Setting::Aslr(enabled))
}

pub fn set_syn_cookies<F, D, C>(
    ctx: &AppContext<F, D, C>,
    enabled: bool,
) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    apply_setting(ctx, Setting::SynCookies(enabled))
}

/// Apply an already-validated setting to its file under the context root.
pub fn apply_setting<F, D, C>(
    ctx: &AppContext<F, D, C>,
    setting: Setting,
) -> Result<EditResult, AppError>
where
    F: PrivilegedFilesystem,
    D: DiffTool,
    C: Clock,
{
    tracing::info!(setting = setting.name(), "applying {}", setting);
    safe_edit(ctx, &setting.managed_edit(ctx.root()))
}
