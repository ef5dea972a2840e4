use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use crate::ports::PrivilegedFilesystem;

/// Filesystem adapter using plain system calls.
///
/// The process needs the privilege itself (run as root, or point the system
/// root at files the user owns).
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectFilesystem;

impl DirectFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl PrivilegedFilesystem for DirectFilesystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn copy_new(&self, from: &Path, to: &Path) -> io::Result<()> {
        let mut source = File::open(from)?;
        let permissions = source.metadata()?.permissions();
        let mut target = OpenOptions::new().write(true).create_new(true).open(to)?;

        let copied = io::copy(&mut source, &mut target)
            .and_then(|_| target.set_permissions(permissions))
            .and_then(|()| target.sync_all());

        if let Err(err) = copied {
            drop(target);
            // The partial copy is ours; nothing else can have opened it yet.
            let _ = fs::remove_file(to);
            return Err(err);
        }
        Ok(())
    }

    fn replace_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let metadata = fs::metadata(path)?;
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        // Same directory as the target so the rename cannot cross filesystems.
        let mut staged = tempfile::Builder::new().prefix(".hardenkit-").tempfile_in(parent)?;
        staged.write_all(content)?;
        staged.as_file().set_permissions(metadata.permissions())?;
        match_owner(staged.as_file(), &metadata)?;
        staged.as_file().sync_all()?;

        staged.persist(path).map_err(|err| err.error)?;
        Ok(())
    }
}

fn match_owner(file: &File, target: &fs::Metadata) -> io::Result<()> {
    let current = file.metadata()?;
    if current.uid() == target.uid() && current.gid() == target.gid() {
        return Ok(());
    }
    std::os::unix::fs::fchown(file, Some(target.uid()), Some(target.gid()))
}
