//! Shared testing utilities for hardenkit integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub const COMMON_PASSWORD: &str = "etc/pam.d/common-password";
pub const COMMON_AUTH: &str = "etc/pam.d/common-auth";
pub const SYSCTL_CONF: &str = "etc/sysctl.conf";

pub const COMMON_PASSWORD_FIXTURE: &str = "\
# /etc/pam.d/common-password - password-related modules common to all services
password\trequisite\t\t\tpam_pwquality.so retry=3
password\t[success=1 default=ignore]\tpam_unix.so obscure use_authtok try_first_pass yescrypt
password\trequisite\t\t\tpam_deny.so
password\trequired\t\t\tpam_permit.so
";

pub const COMMON_AUTH_FIXTURE: &str = "\
auth\t[success=1 default=ignore]\tpam_unix.so nullok
auth\trequisite\t\t\tpam_deny.so
auth\trequired\t\t\tpam_permit.so
";

pub const SYSCTL_FIXTURE: &str = "\
# /etc/sysctl.conf - Configuration file for setting system variables
#net.ipv4.tcp_syncookies=1
net.ipv4.conf.all.rp_filter=1
";

/// Testing harness: a sandboxed system root plus a config file pointing at it.
pub struct TestContext {
    dir: TempDir,
    root: PathBuf,
    config_path: PathBuf,
}

impl TestContext {
    /// Create a sandbox with the three managed files and sysctl reload off.
    pub fn new() -> Self {
        Self::with_config_tail("")
    }

    /// Like [`TestContext::new`], appending `tail` to the generated config.
    pub fn with_config_tail(tail: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory for tests");
        let root = dir.path().join("root");

        dir.child("root/etc/pam.d").create_dir_all().unwrap();
        dir.child("root").child(COMMON_PASSWORD).write_str(COMMON_PASSWORD_FIXTURE).unwrap();
        dir.child("root").child(COMMON_AUTH).write_str(COMMON_AUTH_FIXTURE).unwrap();
        dir.child("root").child(SYSCTL_CONF).write_str(SYSCTL_FIXTURE).unwrap();

        let config_path = dir.path().join("hardenkit.toml");
        let config = format!(
            "[system]\nroot = \"{}\"\n\n[sysctl]\nreload = false\n\n\
             [logging]\nfilter = \"warn\"\n\n{}",
            root.display(),
            tail
        );
        fs::write(&config_path, config).expect("Failed to write test config");

        Self { dir, root, config_path }
    }

    /// The emulated `/`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build a command for invoking the compiled `hardenkit` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("hardenkit").expect("Failed to locate hardenkit binary");
        cmd.current_dir(self.dir.path())
            .env("HARDENKIT_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root.join(relative)).expect("Failed to read managed file")
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.root.join(relative)).expect("Failed to remove managed file");
    }

    /// Backups of `relative`, sorted by name.
    pub fn backups(&self, relative: &str) -> Vec<PathBuf> {
        let path = self.root.join(relative);
        let dir = path.parent().expect("managed file has a parent");
        let prefix = format!("{}.backup-", path.file_name().unwrap().to_string_lossy());

        let mut backups: Vec<PathBuf> = fs::read_dir(dir)
            .expect("Failed to list directory")
            .map(|entry| entry.unwrap().path())
            .filter(|p| p.file_name().unwrap().to_string_lossy().starts_with(&prefix))
            .collect();
        backups.sort();
        backups
    }
}
