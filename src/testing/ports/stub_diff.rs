use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::DiffTool;

/// Diff tool returning canned output and recording the paths it was given.
#[derive(Clone, Debug)]
pub struct StubDiff {
    output: Option<String>,
    calls: Arc<Mutex<Vec<(PathBuf, PathBuf)>>>,
}

impl StubDiff {
    pub fn returning(output: &str) -> Self {
        Self { output: Some(output.to_string()), calls: Arc::default() }
    }

    pub fn failing() -> Self {
        Self { output: None, calls: Arc::default() }
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for StubDiff {
    fn default() -> Self {
        Self::returning("")
    }
}

impl DiffTool for StubDiff {
    fn unified_diff(&self, old: &Path, new: &Path) -> io::Result<String> {
        self.calls.lock().unwrap().push((old.to_path_buf(), new.to_path_buf()));
        self.output
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "diff: command not found"))
    }
}
