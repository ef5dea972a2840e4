//! hardenkit: apply Linux hardening settings to PAM and sysctl files with a
//! backup before every change and a unified diff after it.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use app::{api, config::load_config};

pub use app::operation_log::{OperationLog, OperationOutcome, OperationRecord};
pub use app::sysctl::ReloadOutcome;
pub use domain::{AppConfig, AppError, DiffReport, EditResult, HardeningProfile, Setting};

/// Set `minlen` for the password-quality modules in
/// `/etc/pam.d/common-password`. Accepts 8 through 32.
///
/// Configuration is loaded from `$HARDENKIT_CONFIG` or
/// `/etc/hardenkit/config.toml` when present.
pub fn set_min_password_length(min_length: u32) -> Result<EditResult, AppError> {
    api::set_min_password_length_with(&load_config(None)?, min_length)
}

/// Set `remember` for `pam_unix.so` in `/etc/pam.d/common-password`.
/// Accepts 0 through 24.
pub fn set_password_remember(remember: u32) -> Result<EditResult, AppError> {
    api::set_password_remember_with(&load_config(None)?, remember)
}

/// Remove `nullok` from `/etc/pam.d/common-auth`.
pub fn disable_null_passwords() -> Result<EditResult, AppError> {
    api::disable_null_passwords_with(&load_config(None)?)
}

/// Set `kernel.randomize_va_space` in `/etc/sysctl.conf` (2 on, 0 off).
///
/// Only the file is edited; see [`reload_sysctl`] to load it.
pub fn set_aslr(enabled: bool) -> Result<EditResult, AppError> {
    api::set_aslr_with(&load_config(None)?, enabled)
}

/// Set `net.ipv4.tcp_syncookies` in `/etc/sysctl.conf` (1 on, 0 off).
pub fn set_syn_cookies(enabled: bool) -> Result<EditResult, AppError> {
    api::set_syn_cookies_with(&load_config(None)?, enabled)
}

/// Apply every setting of `profile`, continuing past individual failures.
pub fn apply_profile(profile: &HardeningProfile) -> Result<OperationLog, AppError> {
    let config = AppConfig { profile: profile.clone(), ..load_config(None)? };
    api::apply_profile_with(&config)
}

/// Load `/etc/sysctl.conf` into the running kernel when enabled in config.
pub fn reload_sysctl() -> Result<ReloadOutcome, AppError> {
    Ok(api::reload_sysctl_with(&load_config(None)?))
}
