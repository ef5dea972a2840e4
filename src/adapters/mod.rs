mod command;
pub mod diff_command;
pub mod direct_filesystem;
pub mod sudo_filesystem;
pub mod sysctl_command;
pub mod system_clock;
pub mod system_filesystem;

pub use diff_command::DiffCommand;
pub use direct_filesystem::DirectFilesystem;
pub use sudo_filesystem::SudoFilesystem;
pub use sysctl_command::SysctlCommand;
pub use system_clock::SystemClock;
pub use system_filesystem::SystemFilesystem;
