use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::ports::SysctlLoader;

/// Sysctl loader that counts reloads and optionally fails them.
#[derive(Clone, Debug, Default)]
pub struct StubSysctl {
    fail: bool,
    reloads: Arc<AtomicUsize>,
}

impl StubSysctl {
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl SysctlLoader for StubSysctl {
    fn reload(&self) -> io::Result<String> {
        self.reloads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "sysctl: permission denied",
            ));
        }
        Ok("* Applying /etc/sysctl.conf ...\n".to_string())
    }
}
