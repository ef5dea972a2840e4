//! Test double for `PrivilegedFilesystem`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::PrivilegedFilesystem;

#[derive(Debug, Default)]
struct Faults {
    read: bool,
    copy: bool,
    replace: bool,
    /// Backups come out with different bytes than the source.
    corrupt_copy: bool,
}

/// In-memory implementation of `PrivilegedFilesystem` for unit tests.
///
/// Clones share the same file map, so a test can keep a handle for
/// inspection after moving one into an `AppContext`.
#[derive(Clone, Debug, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    faults: Arc<Mutex<Faults>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file.
    pub fn add(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        self.files.lock().unwrap().insert(path.as_ref().to_path_buf(), content.as_ref().to_vec());
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// All stored paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn fail_reads(&self) {
        self.faults.lock().unwrap().read = true;
    }

    pub fn fail_copies(&self) {
        self.faults.lock().unwrap().copy = true;
    }

    pub fn fail_replaces(&self) {
        self.faults.lock().unwrap().replace = true;
    }

    pub fn corrupt_copies(&self) {
        self.faults.lock().unwrap().corrupt_copy = true;
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: no such file", path.display()))
}

impl PrivilegedFilesystem for MemoryFilesystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        if self.faults.lock().unwrap().read {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "simulated read failure"));
        }
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| not_found(path))
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        let faults = self.faults.lock().unwrap();
        if faults.copy {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "simulated copy failure"));
        }
        let mut files = self.files.lock().unwrap();
        if files.contains_key(to) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists", to.display()),
            ));
        }
        let mut bytes = files.get(from).cloned().ok_or_else(|| not_found(from))?;
        if faults.corrupt_copy {
            bytes.push(b'!');
        }
        files.insert(to.to_path_buf(), bytes);
        Ok(())
    }

    fn replace_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        if self.faults.lock().unwrap().replace {
            return Err(io::Error::other("simulated rename failure"));
        }
        let mut files = self.files.lock().unwrap();
        let slot = files.get_mut(path).ok_or_else(|| not_found(path))?;
        *slot = content.to_vec();
        Ok(())
    }
}
