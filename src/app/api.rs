//! API Facade for the application.
//!
//! Builds a production `AppContext` from configuration and runs the policy
//! operations against the real system.

use std::path::PathBuf;

use crate::adapters::{DiffCommand, SysctlCommand, SystemClock, SystemFilesystem};
use crate::app::operation_log::OperationLog;
use crate::app::sysctl::{self, ReloadOutcome};
use crate::app::{AppContext, policy, profile};
use crate::domain::{AppConfig, AppError, EditResult, ManagedFile};

/// Context wired to the real filesystem, `diff` and clock.
pub type SystemContext = AppContext<SystemFilesystem, DiffCommand, SystemClock>;

pub fn system_context(config: &AppConfig) -> SystemContext {
    AppContext::new(
        SystemFilesystem::for_privilege(config.system.privilege),
        DiffCommand::new(config.diff.program.clone()),
        SystemClock,
        config.system.root.clone(),
    )
}

/// Location of `sysctl.conf` under the configured root.
pub fn sysctl_conf_path(config: &AppConfig) -> PathBuf {
    ManagedFile::SysctlConf.resolve(&config.system.root)
}

pub fn set_min_password_length_with(
    config: &AppConfig,
    min_length: u32,
) -> Result<EditResult, AppError> {
    policy::set_min_password_length(&system_context(config), min_length)
}

pub fn set_password_remember_with(
    config: &AppConfig,
    remember: u32,
) -> Result<EditResult, AppError> {
    policy::set_password_remember(&system_context(config), remember)
}

pub fn disable_null_passwords_with(config: &AppConfig) -> Result<EditResult, AppError> {
    policy::disable_null_passwords(&system_context(config))
}

pub fn set_aslr_with(config: &AppConfig, enabled: bool) -> Result<EditResult, AppError> {
    policy::set_aslr(&system_context(config), enabled)
}

pub fn set_syn_cookies_with(config: &AppConfig, enabled: bool) -> Result<EditResult, AppError> {
    policy::set_syn_cookies(&system_context(config), enabled)
}

/// Apply the `[profile]` section of `config`.
pub fn apply_profile_with(config: &AppConfig) -> Result<OperationLog, AppError> {
    profile::apply_profile(&system_context(config), &config.profile)
}

/// Run `sysctl --system` if enabled in `config`.
pub fn reload_sysctl_with(config: &AppConfig) -> ReloadOutcome {
    let loader = SysctlCommand::new(config.sysctl.program.clone(), config.system.privilege);
    sysctl::reload(&loader, config.sysctl.reload)
}
