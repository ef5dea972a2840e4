use std::io;

/// Port for loading persisted kernel parameters into the running kernel.
pub trait SysctlLoader {
    /// Reload every sysctl configuration file. Returns the loader's output.
    fn reload(&self) -> io::Result<String>;
}
