//! The table of hardening settings.
//!
//! A [`Setting`] is the only way to obtain a [`ManagedEdit`], and a
//! `ManagedEdit` is the only input the safe editor accepts. Adding a setting
//! therefore means adding a variant here, which routes it through the same
//! backup, atomic write and diff pipeline as every other setting.

use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::AppError;
use crate::domain::transform::{EditTransform, pam, sysctl};

/// Allowed minimum password lengths.
pub const MIN_PASSWORD_LENGTH_RANGE: RangeInclusive<u32> = 8..=32;

/// Allowed password history depths.
pub const PASSWORD_REMEMBER_RANGE: RangeInclusive<u32> = 0..=24;

/// System configuration files this tool is allowed to patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagedFile {
    CommonPassword,
    CommonAuth,
    SysctlConf,
}

impl ManagedFile {
    pub const ALL: [ManagedFile; 3] =
        [ManagedFile::CommonPassword, ManagedFile::CommonAuth, ManagedFile::SysctlConf];

    /// Path relative to the system root.
    pub fn relative_path(self) -> &'static str {
        match self {
            ManagedFile::CommonPassword => "etc/pam.d/common-password",
            ManagedFile::CommonAuth => "etc/pam.d/common-auth",
            ManagedFile::SysctlConf => "etc/sysctl.conf",
        }
    }

    /// Location of the file under `root` (normally `/`).
    pub fn resolve(self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

impl fmt::Display for ManagedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.relative_path())
    }
}

/// Validated `minlen` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinPasswordLength(u32);

impl MinPasswordLength {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if MIN_PASSWORD_LENGTH_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::validation(
                "minimum password length",
                value,
                format!(
                    "must be between {} and {}",
                    MIN_PASSWORD_LENGTH_RANGE.start(),
                    MIN_PASSWORD_LENGTH_RANGE.end()
                ),
            ))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Validated `remember` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRemember(u32);

impl PasswordRemember {
    pub fn new(value: u32) -> Result<Self, AppError> {
        if PASSWORD_REMEMBER_RANGE.contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::validation(
                "password history depth",
                value,
                format!(
                    "must be between {} and {}",
                    PASSWORD_REMEMBER_RANGE.start(),
                    PASSWORD_REMEMBER_RANGE.end()
                ),
            ))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// A user-facing hardening setting with its validated parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    MinPasswordLength(MinPasswordLength),
    PasswordRemember(PasswordRemember),
    DisableNullPasswords,
    Aslr(bool),
    SynCookies(bool),
}

impl Setting {
    /// Stable identifier used in logs and operation records.
    pub fn name(&self) -> &'static str {
        match self {
            Setting::MinPasswordLength(_) => "min-password-length",
            Setting::PasswordRemember(_) => "password-remember",
            Setting::DisableNullPasswords => "disable-null-passwords",
            Setting::Aslr(_) => "aslr",
            Setting::SynCookies(_) => "syn-cookies",
        }
    }

    pub fn managed_file(&self) -> ManagedFile {
        match self {
            Setting::MinPasswordLength(_) | Setting::PasswordRemember(_) => {
                ManagedFile::CommonPassword
            }
            Setting::DisableNullPasswords => ManagedFile::CommonAuth,
            Setting::Aslr(_) | Setting::SynCookies(_) => ManagedFile::SysctlConf,
        }
    }

    pub fn transform(&self) -> EditTransform {
        match *self {
            Setting::MinPasswordLength(length) => EditTransform::PamOption {
                modules: pam::MIN_LENGTH_MODULES,
                key: "minlen",
                value: length.get(),
            },
            Setting::PasswordRemember(depth) => EditTransform::PamOption {
                modules: pam::REMEMBER_MODULES,
                key: "remember",
                value: depth.get(),
            },
            Setting::DisableNullPasswords => EditTransform::RemoveNullok,
            Setting::Aslr(enabled) => EditTransform::SysctlUpsert {
                key: sysctl::ASLR_KEY,
                value: if enabled { 2 } else { 0 },
            },
            Setting::SynCookies(enabled) => EditTransform::SysctlUpsert {
                key: sysctl::SYN_COOKIES_KEY,
                value: u8::from(enabled),
            },
        }
    }

    /// Bind this setting to its file under `root`.
    pub fn managed_edit(&self, root: &Path) -> ManagedEdit {
        ManagedEdit {
            setting: self.name(),
            path: self.managed_file().resolve(root),
            transform: self.transform(),
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |enabled: bool| if enabled { "enabled" } else { "disabled" };
        match self {
            Setting::MinPasswordLength(length) => {
                write!(f, "minimum password length {}", length.get())
            }
            Setting::PasswordRemember(depth) => write!(f, "password history depth {}", depth.get()),
            Setting::DisableNullPasswords => write!(f, "null passwords disabled"),
            Setting::Aslr(enabled) => write!(f, "ASLR {}", on_off(*enabled)),
            Setting::SynCookies(enabled) => write!(f, "SYN cookies {}", on_off(*enabled)),
        }
    }
}

/// A file path bound to the transform that edits it.
///
/// Only [`Setting::managed_edit`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedEdit {
    setting: &'static str,
    path: PathBuf,
    transform: EditTransform,
}

impl ManagedEdit {
    pub fn setting(&self) -> &'static str {
        self.setting
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn transform(&self) -> &EditTransform {
        &self.transform
    }
}
