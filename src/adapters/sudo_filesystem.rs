use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::command;
use crate::ports::PrivilegedFilesystem;

static STAGE_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Filesystem adapter that escalates every access through `sudo -n`.
///
/// Never prompts: when sudo needs a password the command fails and the error
/// surfaces to the caller.
#[derive(Debug, Clone)]
pub struct SudoFilesystem {
    program: OsString,
}

impl Default for SudoFilesystem {
    fn default() -> Self {
        Self { program: OsString::from("sudo") }
    }
}

impl SudoFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different escalation program (same `-n <cmd> <args>` calling convention).
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self { program: program.into() }
    }

    fn sudo(&self, program: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-n").arg(program);
        cmd
    }

    fn remove_quietly(&self, path: &Path) {
        let _ = command::output(self.sudo("rm").arg("-f").arg("--").arg(path));
    }

    fn exists(&self, path: &Path) -> io::Result<bool> {
        command::succeeds(
            self.sudo("test").arg("-e").arg(path).arg("-o").arg("-L").arg(path),
        )
    }
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::AlreadyExists, format!("{} already exists", path.display()))
}

fn staging_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        )
    })?;
    let counter = STAGE_COUNTER.fetch_add(1, Ordering::Relaxed);
    let staged = format!(
        ".{}.hardenkit-{}-{}",
        name.to_string_lossy(),
        std::process::id(),
        counter
    );
    Ok(path.with_file_name(staged))
}

impl PrivilegedFilesystem for SudoFilesystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        command::stdout(self.sudo("cat").arg("--").arg(path))
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        if self.exists(to)? {
            return Err(already_exists(to));
        }

        // Copy beside the target, then hard-link it into place: link(2) never
        // replaces an existing name, so a file that appears meanwhile survives.
        let staged = staging_path(to)?;
        let result = command::stdout(
            self.sudo("cp")
                .arg("--preserve=mode,ownership,timestamps")
                .arg("--")
                .arg(from)
                .arg(&staged),
        )
        .and_then(|_| command::stdout(self.sudo("ln").arg("-T").arg("--").arg(&staged).arg(to)));
        self.remove_quietly(&staged);

        match result {
            Ok(_) => Ok(()),
            Err(_) if self.exists(to)? => Err(already_exists(to)),
            Err(err) => Err(err),
        }
    }

    fn replace_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let mut local = tempfile::NamedTempFile::new()?;
        local.write_all(content)?;
        local.as_file().sync_all()?;

        let staged = staging_path(path)?;
        let result = command::stdout(self.sudo("cp").arg("--").arg(local.path()).arg(&staged))
            .and_then(|_| {
                command::stdout(
                    self.sudo("chown").arg("--reference").arg(path).arg("--").arg(&staged),
                )
            })
            .and_then(|_| {
                command::stdout(
                    self.sudo("chmod").arg("--reference").arg(path).arg("--").arg(&staged),
                )
            })
            .and_then(|_| {
                command::stdout(self.sudo("mv").arg("-f").arg("--").arg(&staged).arg(path))
            });

        if let Err(err) = result {
            self.remove_quietly(&staged);
            return Err(err);
        }
        Ok(())
    }
}
