use std::io;
use std::path::Path;

/// Port for an external unified-diff generator.
pub trait DiffTool {
    /// Unified diff turning `old` into `new`. Empty when they are identical.
    fn unified_diff(&self, old: &Path, new: &Path) -> io::Result<String>;
}
