//! Shared helpers for the integration tests.
#![allow(unused)]

use minifat::fs::consts::{EOF_CLUSTER, FREE_CLUSTER, TAKEN_CLUSTER};
use minifat::fs::fat::Fat;
use minifat::fs::filesystem::FileSystem;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_SCRATCH: AtomicU32 = AtomicU32::new(0);

/// A scratch directory under the system temp dir holding the disk image and
/// any host files a test needs; removed on drop.
pub struct Scratch {
    pub dir: PathBuf,
}

impl Scratch {
    pub fn new(tag: &str) -> Self {
        let n = NEXT_SCRATCH.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!(
            "minifat-{}-{}-{}",
            tag,
            std::process::id(),
            n
        ));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        Self { dir }
    }

    pub fn image_path(&self) -> PathBuf {
        self.dir.join("test.img")
    }

    /// Writes a host file with a short basename, suitable as an `in` source.
    pub fn host_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.dir.join(name);
        std::fs::write(&path, content).expect("write host file");
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}

// Small enough to format quickly, large enough for every scenario here.
pub const TEST_IMAGE_SIZE: u64 = 256 * 1024;

pub fn mount_scratch(tag: &str) -> (FileSystem, Scratch) {
    let scratch = Scratch::new(tag);
    let fs = FileSystem::mount_sized(scratch.image_path(), TEST_IMAGE_SIZE)
        .expect("format scratch image");
    (fs, scratch)
}

/// Reads a file back through the engine into memory.
pub fn read_back(fs: &mut FileSystem, path: &str) -> Vec<u8> {
    let mut buf = Vec::new();
    fs.cat(path, &mut buf).expect("cat");
    buf
}

/// Walks the chain starting at `start` and asserts it terminates at an EOF
/// cluster without revisiting any cluster.
pub fn assert_chain_closed(fat: &Fat, start: u32) {
    let mut seen = HashSet::new();
    let mut curr = start;
    loop {
        assert!(curr < fat.cluster_count(), "chain escaped the image");
        assert!(seen.insert(curr), "chain revisits cluster {curr}");
        let next = fat.get(curr);
        if next == EOF_CLUSTER {
            return;
        }
        assert_ne!(next, FREE_CLUSTER, "chain runs into a free cluster");
        assert_ne!(next, TAKEN_CLUSTER, "chain runs into a taken cluster");
        curr = next;
    }
}

/// No TAKEN sentinel may be left behind once an operation has returned.
pub fn assert_no_taken(fs: &FileSystem) {
    let fat = fs.fat();
    for i in 0..fat.cluster_count() {
        assert_ne!(fat.get(i), TAKEN_CLUSTER, "cluster {i} left TAKEN");
    }
}
