mod fixed_clock;
mod memory_filesystem;
mod stub_diff;
mod stub_sysctl;

pub use self::fixed_clock::FixedClock;
pub use self::memory_filesystem::MemoryFilesystem;
pub use self::stub_diff::StubDiff;
pub use self::stub_sysctl::StubSysctl;
