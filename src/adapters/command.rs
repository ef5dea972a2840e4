//! Helpers for running external programs with typed argument lists.

use std::io;
use std::process::{Command, Output, Stdio};

/// `program arg1 arg2 ...` for error messages.
pub(crate) fn describe(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Run `command` to completion with stdin closed.
pub(crate) fn output(command: &mut Command) -> io::Result<Output> {
    command.stdin(Stdio::null()).output().map_err(|err| {
        io::Error::new(err.kind(), format!("failed to run '{}': {}", describe(command), err))
    })
}

/// Error for a command that ran but did not succeed.
pub(crate) fn failure(command: &Command, output: &Output) -> io::Error {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    let status =
        output.status.code().map_or_else(|| "a signal".to_string(), |code| code.to_string());
    let details = if stderr.is_empty() { "no error output".to_string() } else { stderr };
    io::Error::other(format!("'{}' exited with {}: {}", describe(command), status, details))
}

/// Run `command` and return its stdout, failing on a non-zero exit.
pub(crate) fn stdout(command: &mut Command) -> io::Result<Vec<u8>> {
    let output = output(command)?;
    if !output.status.success() {
        return Err(failure(command, &output));
    }
    Ok(output.stdout)
}

/// Run `command` and report only whether it exited zero.
pub(crate) fn succeeds(command: &mut Command) -> io::Result<bool> {
    Ok(output(command)?.status.success())
}
