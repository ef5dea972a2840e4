use std::io;
use std::path::Path;
use std::process::Command;

use super::command;
use crate::ports::DiffTool;

/// Unified diffs from an external `diff` program.
#[derive(Debug, Clone)]
pub struct DiffCommand {
    program: String,
}

impl DiffCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for DiffCommand {
    fn default() -> Self {
        Self::new("diff")
    }
}

impl DiffTool for DiffCommand {
    fn unified_diff(&self, old: &Path, new: &Path) -> io::Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-u").arg("--").arg(old).arg(new);
        let output = command::output(&mut cmd)?;

        // diff exits 1 when the inputs differ; only 2 and above mean trouble.
        match output.status.code() {
            Some(0 | 1) => Ok(String::from_utf8_lossy(&output.stdout).into_owned()),
            _ => Err(command::failure(&cmd, &output)),
        }
    }
}
