use std::path::{Path, PathBuf};

use crate::ports::{Clock, DiffTool, PrivilegedFilesystem};

/// Application context holding the ports every edit goes through.
pub struct AppContext<F: PrivilegedFilesystem, D: DiffTool, C: Clock> {
    filesystem: F,
    diff: D,
    clock: C,
    root: PathBuf,
}

impl<F: PrivilegedFilesystem, D: DiffTool, C: Clock> AppContext<F, D, C> {
    /// Create a new application context operating on files under `root`.
    pub fn new(filesystem: F, diff: D, clock: C, root: impl Into<PathBuf>) -> Self {
        Self { filesystem, diff, clock, root: root.into() }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn diff(&self) -> &D {
        &self.diff
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Prefix for managed paths; `/` on a live system.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
