//! Content transform engine.
//!
//! Every transform is a pure, total function from old file content to new
//! file content. Transforms never touch the filesystem and are idempotent:
//! applying one twice with the same parameter yields the same text as
//! applying it once.

pub mod pam;
pub mod sysctl;

use std::fmt;

/// A named, parameterised edit applied to the text of a managed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTransform {
    /// Set `key=value` on lines that load one of `modules`.
    PamOption { modules: &'static [&'static str], key: &'static str, value: u32 },
    /// Strip `nullok` arguments from every line.
    RemoveNullok,
    /// Upsert a `key=value` kernel parameter.
    SysctlUpsert { key: &'static str, value: u8 },
}

impl EditTransform {
    /// Apply the transform to `content`.
    pub fn apply(&self, content: &str) -> String {
        match self {
            EditTransform::PamOption { modules, key, value } => {
                pam::set_module_option(content, modules, key, *value)
            }
            EditTransform::RemoveNullok => pam::remove_nullok(content),
            EditTransform::SysctlUpsert { key, value } => {
                sysctl::upsert(content, key, &value.to_string())
            }
        }
    }
}

impl fmt::Display for EditTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTransform::PamOption { modules, key, value } => {
                write!(f, "set {key}={value} on {}", modules.join(", "))
            }
            EditTransform::RemoveNullok => write!(f, "remove {}", pam::NULLOK_TOKENS.join(", ")),
            EditTransform::SysctlUpsert { key, value } => write!(f, "upsert {key}={value}"),
        }
    }
}
