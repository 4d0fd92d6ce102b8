//! Block device over a single named backing file.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

pub struct Disk {
    file: std::fs::File,
}

impl Disk {
    pub fn exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().is_file()
    }

    /// Creates the backing file and truncates it to exactly `size` bytes.
    pub fn create<P: AsRef<Path>>(path: P, size: u64) -> io::Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len(size)?;
        Ok(())
    }

    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;
        Ok(Self { file })
    }

    pub fn len(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    pub fn read_at(&mut self, addr: u64, buf: &mut [u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(addr))?;
        self.file.read_exact(buf)
    }

    pub fn write_at(&mut self, addr: u64, buf: &[u8]) -> io::Result<()> {
        self.file.seek(SeekFrom::Start(addr))?;
        self.file.write_all(buf)
    }
}
