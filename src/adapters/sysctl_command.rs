use std::io;
use std::process::Command;

use super::command;
use crate::domain::Privilege;
use crate::ports::SysctlLoader;

/// Runs `sysctl --system`, through `sudo -n` when configured.
#[derive(Debug, Clone)]
pub struct SysctlCommand {
    program: String,
    privilege: Privilege,
}

impl SysctlCommand {
    pub fn new(program: impl Into<String>, privilege: Privilege) -> Self {
        Self { program: program.into(), privilege }
    }

    fn command(&self) -> Command {
        let mut cmd = match self.privilege {
            Privilege::Direct => Command::new(&self.program),
            Privilege::Sudo => {
                let mut sudo = Command::new("sudo");
                sudo.arg("-n").arg(&self.program);
                sudo
            }
        };
        cmd.arg("--system");
        cmd
    }
}

impl SysctlLoader for SysctlCommand {
    fn reload(&self) -> io::Result<String> {
        let stdout = command::stdout(&mut self.command())?;
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}
