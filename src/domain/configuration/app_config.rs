//! Tool configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::setting::{MinPasswordLength, PasswordRemember, Setting};

/// Configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Where managed files live and how they are accessed.
    #[serde(default)]
    pub system: SystemConfig,
    /// Unified-diff generator.
    #[serde(default)]
    pub diff: DiffConfig,
    /// Kernel parameter reload after sysctl edits.
    #[serde(default)]
    pub sysctl: SysctlConfig,
    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Desired values for `apply`.
    #[serde(default)]
    pub profile: HardeningProfile,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.system.validate()?;
        self.diff.validate()?;
        self.sysctl.validate()?;
        self.logging.validate()?;
        self.profile.settings()?;
        Ok(())
    }
}

/// How managed files are read and replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Privilege {
    /// Plain filesystem calls; the process must already be privileged.
    #[default]
    Direct,
    /// Every privileged step goes through `sudo -n`.
    Sudo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SystemConfig {
    /// Prefix for the managed paths; `/` on a live system.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default)]
    pub privilege: Privilege,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self { root: default_root(), privilege: Privilege::default() }
    }
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.root.is_absolute() {
            return Err(AppError::config_error(format!(
                "system.root must be an absolute path, got '{}'",
                self.root.display()
            )));
        }
        Ok(())
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("/")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DiffConfig {
    /// Program invoked as `<program> -u <backup> <file>`.
    #[serde(default = "default_diff_program")]
    pub program: String,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self { program: default_diff_program() }
    }
}

impl DiffConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("diff.program must not be empty"));
        }
        Ok(())
    }
}

fn default_diff_program() -> String {
    "diff".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SysctlConfig {
    /// Run `<program> --system` after a sysctl.conf edit.
    #[serde(default = "default_true")]
    pub reload: bool,
    #[serde(default = "default_sysctl_program")]
    pub program: String,
}

impl Default for SysctlConfig {
    fn default() -> Self {
        Self { reload: default_true(), program: default_sysctl_program() }
    }
}

impl SysctlConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::config_error("sysctl.program must not be empty"));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_sysctl_program() -> String {
    "sysctl".to_string()
}

/// Supported log output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single line output.
    #[default]
    Compact,
    /// Structured JSON suitable for ingestion by logging stacks.
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_log_filter(), format: LogFormat::default() }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.filter.trim().is_empty() {
            return Err(AppError::config_error("logging.filter must not be empty"));
        }
        Ok(())
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Desired hardening values. Unset entries are left alone by `apply`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardeningProfile {
    pub min_password_length: Option<u32>,
    pub password_remember: Option<u32>,
    #[serde(default)]
    pub disable_null_passwords: bool,
    pub aslr: Option<bool>,
    pub syn_cookies: Option<bool>,
}

impl HardeningProfile {
    /// Validated settings in application order: PAM files first, then sysctl.
    pub fn settings(&self) -> Result<Vec<Setting>, AppError> {
        let mut settings = Vec::new();
        if let Some(length) = self.min_password_length {
            settings.push(Setting::MinPasswordLength(MinPasswordLength::new(length)?));
        }
        if let Some(depth) = self.password_remember {
            settings.push(Setting::PasswordRemember(PasswordRemember::new(depth)?));
        }
        if self.disable_null_passwords {
            settings.push(Setting::DisableNullPasswords);
        }
        if let Some(enabled) = self.aslr {
            settings.push(Setting::Aslr(enabled));
        }
        if let Some(enabled) = self.syn_cookies {
            settings.push(Setting::SynCookies(enabled));
        }
        Ok(settings)
    }

    pub fn is_empty(&self) -> bool {
        *self == HardeningProfile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.system.root, PathBuf::from("/"));
        assert_eq!(config.system.privilege, Privilege::Direct);
        assert_eq!(config.diff.program, "diff");
        assert!(config.sysctl.reload);
        assert_eq!(config.logging.format, LogFormat::Compact);
        assert!(config.profile.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_relative_root() {
        let config = SystemConfig { root: PathBuf::from("etc"), ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_programs() {
        assert!(DiffConfig { program: " ".to_string() }.validate().is_err());
        assert!(SysctlConfig { reload: true, program: String::new() }.validate().is_err());
    }

    #[test]
    fn profile_settings_follow_file_order() {
        let profile = HardeningProfile {
            min_password_length: Some(14),
            password_remember: Some(5),
            disable_null_passwords: true,
            aslr: Some(true),
            syn_cookies: Some(false),
        };

        let names: Vec<&str> = profile.settings().unwrap().iter().map(Setting::name).collect();
        assert_eq!(
            names,
            [
                "min-password-length",
                "password-remember",
                "disable-null-passwords",
                "aslr",
                "syn-cookies"
            ]
        );
    }

    #[test]
    fn profile_with_out_of_range_value_is_rejected() {
        let profile = HardeningProfile { min_password_length: Some(40), ..Default::default() };
        assert!(matches!(profile.settings(), Err(AppError::Validation { .. })));

        let config = AppConfig { profile, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
