use crate::fs::error::{FsError, Result};
use crate::fs::filesystem::FileSystem;
use std::path::{Path, PathBuf};

/// Owns the mounted filesystem for the lifetime of the process. One
/// instance is threaded through every command handler.
pub struct Context {
    pub fs: Option<FileSystem>,
    pub fs_path: Option<PathBuf>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            fs: None,
            fs_path: None,
        }
    }

    pub fn open_fs<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let fs = FileSystem::mount(&path)?;
        self.fs_path = Some(path.as_ref().to_path_buf());
        self.fs = Some(fs);
        Ok(())
    }

    pub fn close_fs(&mut self) {
        self.fs = None;
        self.fs_path = None;
    }

    pub fn fs_mut(&mut self) -> Result<&mut FileSystem> {
        self.fs.as_mut().ok_or(FsError::NotMounted)
    }

    pub fn fs_path(&self) -> Option<&Path> {
        self.fs_path.as_deref()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
