pub mod ports;

pub use ports::{FixedClock, MemoryFilesystem, StubDiff, StubSysctl};
