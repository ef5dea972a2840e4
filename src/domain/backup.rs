//! Backup path naming.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// Marker placed between the original path and the timestamp.
pub const BACKUP_MARKER: &str = ".backup-";

/// Timestamp layout used in backup names (second resolution).
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// `<path>.backup-<YYYY-MM-DD-HH-MM-SS>` for a backup taken at `at`.
pub fn backup_path(path: &Path, at: DateTime<Utc>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_MARKER);
    name.push(at.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}

/// Candidate name for the `attempt`-th try at the same timestamp.
///
/// Attempt 0 is the plain name; later attempts append `.1`, `.2`, ...
pub fn disambiguated(base: &Path, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return base.to_path_buf();
    }
    let mut name = OsString::from(base.as_os_str());
    name.push(format!(".{attempt}"));
    PathBuf::from(name)
}
