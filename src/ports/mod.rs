mod clock;
mod diff_tool;
mod privileged_filesystem;
mod sysctl_loader;

pub use clock::Clock;
pub use diff_tool::DiffTool;
pub use privileged_filesystem::PrivilegedFilesystem;
pub use sysctl_loader::SysctlLoader;
