use std::io;
use std::path::Path;

use super::{DirectFilesystem, SudoFilesystem};
use crate::domain::Privilege;
use crate::ports::PrivilegedFilesystem;

/// Filesystem adapter chosen from `system.privilege` at startup.
#[derive(Debug, Clone)]
pub enum SystemFilesystem {
    Direct(DirectFilesystem),
    Sudo(SudoFilesystem),
}

impl SystemFilesystem {
    pub fn for_privilege(privilege: Privilege) -> Self {
        match privilege {
            Privilege::Direct => Self::Direct(DirectFilesystem::new()),
            Privilege::Sudo => Self::Sudo(SudoFilesystem::new()),
        }
    }

    fn inner(&self) -> &dyn PrivilegedFilesystem {
        match self {
            Self::Direct(fs) => fs,
            Self::Sudo(fs) => fs,
        }
    }
}

impl PrivilegedFilesystem for SystemFilesystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.inner().read(path)
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.inner().copy_new(from, to)
    }

    fn replace_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        self.inner().replace_atomic(path, content)
    }
}
