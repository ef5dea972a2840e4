//! Privileged access to system configuration files.
//!
//! Managed files are usually root-owned. This port hides how privilege is
//! obtained (running as root, `sudo`, ...) from the edit pipeline. Methods
//! return `io::Result` so callers can tell `NotFound` and `AlreadyExists`
//! apart from other failures.

use std::io;
use std::path::Path;

/// Port for reading, copying and atomically replacing root-owned files.
pub trait PrivilegedFilesystem {
    /// Read the full contents of `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Copy `from` to `to` byte-for-byte, preserving permissions.
    ///
    /// Must fail with `io::ErrorKind::AlreadyExists` instead of overwriting
    /// an existing `to`, and must not leave a partial `to` behind on error.
    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Replace `path` with `content` so readers see either the old or the new
    /// file in full, never a partial write. Ownership and mode are preserved.
    fn replace_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}
