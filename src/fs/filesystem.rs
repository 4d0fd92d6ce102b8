//! The filesystem engine: directory codec, path resolver and the public
//! operations the shell dispatches to.
//!
//! A directory occupies a FAT chain whose head cluster holds the header
//! followed by up to `ENTRIES_IN_FIRST_CLUSTER` entries; every further
//! cluster holds up to `ENTRIES_PER_CLUSTER` entries; the chain ends with a
//! dedicated EOF cluster carrying no payload. Head clusters are stable for
//! the lifetime of the object, so rewriting a directory frees and
//! reallocates only the tail of its chain.

use crate::fs::consts::{
    ADDR_SIZE, CLUSTER_SIZE, DIR_ENTRY_SIZE, DIR_HEADER_SIZE, DISK_SIZE,
    ENTRIES_IN_FIRST_CLUSTER, ENTRIES_PER_CLUSTER, EOF_CLUSTER, FREE_CLUSTER, MAX_NAME_LEN,
    ROOT_DIR_CLUSTER,
};
use crate::fs::disk::Disk;
use crate::fs::error::{FsError, Result};
use crate::fs::fat::Fat;
use crate::fs::layout::{pack_name, DirEntry, DirHeader, Directory};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub struct FileSystem {
    disk: Disk,
    fat: Fat,
    working_dir_cluster: u32,
}

/// Result of `list`: either a whole directory or the single entry row of a
/// file target.
pub enum Listing {
    Directory(Directory),
    File(DirEntry),
}

pub struct FsStats {
    pub cluster_count: u32,
    pub free_clusters: u32,
    pub cluster_size: usize,
}

impl FsStats {
    pub fn total_bytes(&self) -> u64 {
        self.cluster_count as u64 * self.cluster_size as u64
    }

    pub fn free_bytes(&self) -> u64 {
        self.free_clusters as u64 * self.cluster_size as u64
    }

    pub fn free_percent(&self) -> f64 {
        if self.cluster_count == 0 {
            return 0.0;
        }
        self.free_clusters as f64 * 100.0 / self.cluster_count as f64
    }
}

impl FileSystem {
    // Bootstrap

    /// Opens the image at `path`, creating and formatting it at the default
    /// size when it does not exist yet.
    pub fn mount<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::mount_sized(path, DISK_SIZE)
    }

    /// Same as `mount` with an explicit image size for the create case.
    pub fn mount_sized<P: AsRef<Path>>(path: P, disk_size: u64) -> Result<Self> {
        if Disk::exists(&path) {
            let mut disk = Disk::open(&path)?;
            let cluster_count = (disk.len()? / (ADDR_SIZE + CLUSTER_SIZE) as u64) as u32;
            if cluster_count < 2 {
                return Err(FsError::Corrupted("image is too small"));
            }
            let fat = Fat::load(&mut disk, cluster_count)?;
            return Ok(Self {
                disk,
                fat,
                working_dir_cluster: ROOT_DIR_CLUSTER,
            });
        }

        let cluster_count = (disk_size / (ADDR_SIZE + CLUSTER_SIZE) as u64) as u32;
        if cluster_count < 2 {
            return Err(FsError::NoFreeClusters);
        }
        Disk::create(&path, disk_size)?;
        let disk = Disk::open(&path)?;
        let mut fat = Fat::new_free(cluster_count);
        let head = fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        let root = Directory {
            header: DirHeader::new("/", head, head),
            entries: Vec::new(),
        };
        let mut fs = Self {
            disk,
            fat,
            working_dir_cluster: head,
        };
        fs.save_dir(&root)?;
        Ok(fs)
    }

    pub fn fat(&self) -> &Fat {
        &self.fat
    }

    pub fn free_clusters(&self) -> u32 {
        self.fat.count_free()
    }

    // Directory codec

    fn load_header(&mut self, cluster: u32) -> Result<DirHeader> {
        let mut buf = [0u8; DIR_HEADER_SIZE];
        self.disk.read_at(self.fat.cluster_addr(cluster), &mut buf)?;
        Ok(DirHeader::deserialize(&buf))
    }

    pub fn load_dir(&mut self, start_cluster: u32) -> Result<Directory> {
        let header = self.load_header(start_cluster)?;
        let entry_count = header.entry_count as usize;
        let mut entries = Vec::with_capacity(entry_count);

        let first = entry_count.min(ENTRIES_IN_FIRST_CLUSTER);
        let base = self.fat.cluster_addr(start_cluster) + DIR_HEADER_SIZE as u64;
        self.read_entries(base, first, &mut entries)?;

        if entry_count <= ENTRIES_IN_FIRST_CLUSTER {
            return Ok(Directory { header, entries });
        }

        let remaining = entry_count - first;
        let clusters_needed = remaining.div_ceil(ENTRIES_PER_CLUSTER);

        // the head cluster has been consumed, continue down the chain
        let mut curr = self.fat.get(start_cluster);
        for _ in 0..clusters_needed - 1 {
            self.check_cluster(curr)?;
            self.read_entries(self.fat.cluster_addr(curr), ENTRIES_PER_CLUSTER, &mut entries)?;
            curr = self.fat.get(curr);
        }

        self.check_cluster(curr)?;
        let leftover = entry_count - entries.len();
        self.read_entries(self.fat.cluster_addr(curr), leftover, &mut entries)?;

        // the next step in the chain must be the EOF terminator
        let terminator = self.fat.get(curr);
        if terminator >= self.fat.cluster_count() || self.fat.get(terminator) != EOF_CLUSTER {
            return Err(FsError::Corrupted("directory chain does not end at EOF"));
        }

        Ok(Directory { header, entries })
    }

    fn read_entries(&mut self, addr: u64, count: usize, entries: &mut Vec<DirEntry>) -> Result<()> {
        let mut buf = vec![0u8; count * DIR_ENTRY_SIZE];
        self.disk.read_at(addr, &mut buf)?;
        for chunk in buf.chunks_exact(DIR_ENTRY_SIZE) {
            entries.push(DirEntry::deserialize(chunk));
        }
        Ok(())
    }

    pub fn save_dir(&mut self, dir: &Directory) -> Result<()> {
        debug_assert_eq!(dir.entries.len(), dir.header.entry_count as usize);
        let head = dir.header.start_cluster;

        // drop the old tail; the head stays reserved so every DirEntry
        // referencing this directory remains valid
        self.fat.free_chain(head);

        let entry_count = dir.entries.len();
        let first = entry_count.min(ENTRIES_IN_FIRST_CLUSTER);

        if entry_count <= ENTRIES_IN_FIRST_CLUSTER {
            if !self.fat.has_free_clusters(1) {
                return Err(FsError::NoFreeClusters);
            }
            self.write_dir_first_cluster(dir, first)?;
            let eof = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
            self.fat.set(head, eof);
            self.fat.set(eof, EOF_CLUSTER);
            self.fat.flush(&mut self.disk)?;
            return Ok(());
        }

        let remaining = entry_count - first;
        let clusters_needed = remaining.div_ceil(ENTRIES_PER_CLUSTER);
        if !self.fat.has_free_clusters(clusters_needed as u32 + 1) {
            return Err(FsError::NoFreeClusters);
        }

        self.write_dir_first_cluster(dir, first)?;

        let mut prev = head;
        let mut index = first;

        // full middle clusters; the final data cluster takes the leftover
        for _ in 0..clusters_needed - 1 {
            let curr = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
            self.fat.set(prev, curr);
            prev = curr;
            let buf = serialize_entries(&dir.entries[index..index + ENTRIES_PER_CLUSTER]);
            self.disk.write_at(self.fat.cluster_addr(curr), &buf)?;
            index += ENTRIES_PER_CLUSTER;
        }

        let curr = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        self.fat.set(prev, curr);
        let buf = serialize_entries(&dir.entries[index..]);
        self.disk.write_at(self.fat.cluster_addr(curr), &buf)?;

        let eof = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        self.fat.set(curr, eof);
        self.fat.set(eof, EOF_CLUSTER);
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    fn write_dir_first_cluster(&mut self, dir: &Directory, count: usize) -> Result<()> {
        let mut buf = vec![0u8; DIR_HEADER_SIZE + count * DIR_ENTRY_SIZE];
        dir.header.serialize(&mut buf[..DIR_HEADER_SIZE]);
        for (i, entry) in dir.entries[..count].iter().enumerate() {
            let off = DIR_HEADER_SIZE + i * DIR_ENTRY_SIZE;
            entry.serialize(&mut buf[off..off + DIR_ENTRY_SIZE]);
        }
        self.disk
            .write_at(self.fat.cluster_addr(dir.header.start_cluster), &buf)?;
        Ok(())
    }

    /// Allocates head + EOF clusters for a new, empty directory and links
    /// them; the directory still has to be saved.
    fn create_empty_dir(&mut self, name: &str, parent_start_cluster: u32) -> Result<Directory> {
        if !self.fat.has_free_clusters(2) {
            return Err(FsError::NoFreeClusters);
        }
        let head = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        let eof = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        self.fat.set(head, eof);
        self.fat.set(eof, EOF_CLUSTER);
        Ok(Directory {
            header: DirHeader::new(name, head, parent_start_cluster),
            entries: Vec::new(),
        })
    }

    fn check_cluster(&self, cluster: u32) -> Result<()> {
        if cluster >= self.fat.cluster_count() {
            return Err(FsError::Corrupted("chain escapes the image"));
        }
        Ok(())
    }

    // Path resolver

    fn dir_entry_of(&mut self, cluster: u32) -> Result<DirEntry> {
        let header = self.load_header(cluster)?;
        Ok(DirEntry::from(&header))
    }

    /// Resolves a path to its entry. `Ok(None)` means "no such entry" and
    /// is an expected outcome; only malformed input is an error.
    pub fn resolve(&mut self, path: &str) -> Result<Option<DirEntry>> {
        if path.is_empty() {
            return Err(FsError::InvalidPath);
        }
        let start = if path.starts_with('/') {
            ROOT_DIR_CLUSTER
        } else {
            self.working_dir_cluster
        };
        let mut current = self.dir_entry_of(start)?;

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if !current.directory {
                return Ok(None);
            }
            match segment {
                "." => {}
                ".." => current = self.dir_entry_of(current.parent_start_cluster)?,
                name => {
                    let dir = self.load_dir(current.start_cluster)?;
                    match dir.find(name) {
                        Some(idx) => current = dir.entries[idx],
                        None => return Ok(None),
                    }
                }
            }
        }
        Ok(Some(current))
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.is_empty() || name == "." || name == ".." {
            return Err(FsError::InvalidPath);
        }
        if name.len() >= MAX_NAME_LEN {
            return Err(FsError::NameTooLong);
        }
        Ok(())
    }

    /// Resolves the directory part of `path` (everything before the last
    /// slash, the working directory when there is none) to an existing
    /// directory entry and returns it with the final name component.
    fn resolve_parent<'p>(&mut self, path: &'p str) -> Result<(DirEntry, &'p str)> {
        let (dir_part, name) = split_parent(path);
        let parent = match dir_part {
            None => self.dir_entry_of(self.working_dir_cluster)?,
            Some(p) => self.resolve(p)?.ok_or(FsError::NotFound)?,
        };
        if !parent.directory {
            return Err(FsError::NotDirectory);
        }
        Ok((parent, name))
    }

    // Operations

    pub fn mkdir(&mut self, path: &str) -> Result<()> {
        if self.resolve(path)?.is_some() {
            return Err(FsError::AlreadyExists);
        }
        let (parent_entry, name) = self.resolve_parent(path)?;
        Self::validate_name(name)?;

        let mut parent = self.load_dir(parent_entry.start_cluster)?;
        let new_dir = self.create_empty_dir(name, parent.header.start_cluster)?;
        let mut entry = new_dir.to_entry();
        entry.size = DIR_HEADER_SIZE as u32;
        parent.push_entry(entry);
        self.save_dir(&parent)?;
        self.save_dir(&new_dir)?;
        Ok(())
    }

    pub fn rmdir(&mut self, path: &str) -> Result<()> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if !entry.directory {
            return Err(FsError::NotDirectory);
        }
        if entry.start_cluster == ROOT_DIR_CLUSTER
            || entry.start_cluster == self.working_dir_cluster
        {
            return Err(FsError::InvalidPath);
        }
        let dir = self.load_dir(entry.start_cluster)?;
        if dir.header.entry_count != 0 {
            return Err(FsError::NotEmpty);
        }

        let mut parent = self.load_dir(entry.parent_start_cluster)?;
        parent
            .remove_entry(entry.name_str())
            .ok_or(FsError::NotFound)?;
        self.save_dir(&parent)?;

        self.fat.free_chain(entry.start_cluster);
        self.fat.set(entry.start_cluster, FREE_CLUSTER);
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    pub fn list(&mut self, path: &str) -> Result<Listing> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if entry.directory {
            Ok(Listing::Directory(self.load_dir(entry.start_cluster)?))
        } else {
            Ok(Listing::File(entry))
        }
    }

    pub fn cd(&mut self, path: &str) -> Result<()> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if !entry.directory {
            return Err(FsError::NotDirectory);
        }
        self.working_dir_cluster = entry.start_cluster;
        Ok(())
    }

    /// Rebuilds the absolute path of the working directory by climbing the
    /// parent links up to the root.
    pub fn pwd(&mut self) -> Result<String> {
        let mut parts = Vec::new();
        let mut cluster = self.working_dir_cluster;
        let mut steps = 0;
        while cluster != ROOT_DIR_CLUSTER {
            let header = self.load_header(cluster)?;
            parts.push(header.name_str().to_string());
            cluster = header.parent_start_cluster;
            steps += 1;
            if steps > self.fat.cluster_count() {
                return Err(FsError::Corrupted("parent links form a cycle"));
            }
        }
        if parts.is_empty() {
            return Ok("/".to_string());
        }
        parts.reverse();
        Ok(format!("/{}", parts.join("/")))
    }

    /// Imports a host file into the working directory under its basename.
    pub fn import<P: AsRef<Path>>(&mut self, host_path: P) -> Result<()> {
        let host_path = host_path.as_ref();
        let mut src = File::open(host_path).map_err(|_| FsError::NotFound)?;
        let meta = src.metadata()?;
        if !meta.is_file() {
            return Err(FsError::NotFound);
        }
        let size = meta.len();
        if size > u32::MAX as u64 {
            return Err(FsError::FileTooLarge);
        }
        let name = host_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(FsError::InvalidPath)?;
        Self::validate_name(name)?;

        let mut dir = self.load_dir(self.working_dir_cluster)?;
        if dir.find(name).is_some() {
            return Err(FsError::AlreadyExists);
        }

        let data_clusters = data_cluster_count(size);
        if !self.fat.has_free_clusters(data_clusters + 1) {
            return Err(FsError::NoFreeClusters);
        }

        let head = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        dir.push_entry(DirEntry {
            name: pack_name(name),
            start_cluster: head,
            parent_start_cluster: dir.header.start_cluster,
            size: size as u32,
            directory: false,
        });
        self.save_dir(&dir)?;

        // stream the content cluster by cluster; the final data cluster
        // takes only the tail bytes
        let mut remaining = size as usize;
        let mut curr = head;
        let mut buf = [0u8; CLUSTER_SIZE];
        while remaining > 0 {
            let n = CLUSTER_SIZE.min(remaining);
            src.read_exact(&mut buf[..n])?;
            self.disk.write_at(self.fat.cluster_addr(curr), &buf[..n])?;
            remaining -= n;
            if remaining > 0 {
                let next = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
                self.fat.set(curr, next);
                curr = next;
            }
        }

        let eof = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        self.fat.set(curr, eof);
        self.fat.set(eof, EOF_CLUSTER);
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    /// Exports a filesystem file to the host working directory under its
    /// basename and returns the written path.
    pub fn export(&mut self, path: &str) -> Result<PathBuf> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if entry.directory {
            return Err(FsError::NotFile);
        }
        let out_path = PathBuf::from(entry.name_str());
        let mut out = File::create(&out_path)?;
        self.copy_file_to(&entry, &mut out)?;
        Ok(out_path)
    }

    pub fn cat(&mut self, path: &str, out: &mut dyn Write) -> Result<()> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if entry.directory {
            return Err(FsError::NotFile);
        }
        self.copy_file_to(&entry, out)
    }

    fn copy_file_to(&mut self, entry: &DirEntry, out: &mut dyn Write) -> Result<()> {
        let mut remaining = entry.size as usize;
        let mut curr = entry.start_cluster;
        let mut buf = [0u8; CLUSTER_SIZE];
        while remaining > 0 {
            self.check_cluster(curr)?;
            let n = CLUSTER_SIZE.min(remaining);
            self.disk.read_at(self.fat.cluster_addr(curr), &mut buf[..n])?;
            out.write_all(&buf[..n])?;
            remaining -= n;
            if remaining > 0 {
                curr = self.fat.get(curr);
            }
        }
        let terminator = self.fat.get(curr);
        if terminator >= self.fat.cluster_count() || self.fat.get(terminator) != EOF_CLUSTER {
            return Err(FsError::Corrupted("file chain does not end at EOF"));
        }
        Ok(())
    }

    pub fn rm(&mut self, path: &str) -> Result<()> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if entry.directory {
            return Err(FsError::NotFile);
        }
        let mut parent = self.load_dir(entry.parent_start_cluster)?;
        parent
            .remove_entry(entry.name_str())
            .ok_or(FsError::NotFound)?;
        self.save_dir(&parent)?;

        self.fat.free_chain(entry.start_cluster);
        self.fat.set(entry.start_cluster, FREE_CLUSTER);
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    /// Moves or renames a file. The on-disk cluster chain is reused
    /// unchanged, only the entry is relocated.
    pub fn mv(&mut self, src: &str, dst: &str) -> Result<()> {
        let src_entry = self.resolve(src)?.ok_or(FsError::NotFound)?;
        if src_entry.directory {
            return Err(FsError::NotFile);
        }
        let src_name = src_entry.name_str().to_string();

        let (dir_cluster, name) = match self.resolve(dst)? {
            Some(d) if d.directory => (d.start_cluster, src_name.clone()),
            Some(f) => {
                if f.start_cluster == src_entry.start_cluster {
                    // moving a file onto itself
                    return Ok(());
                }
                (f.parent_start_cluster, f.name_str().to_string())
            }
            None => {
                let (parent, new_name) = self.resolve_parent(dst)?;
                Self::validate_name(new_name)?;
                (parent.start_cluster, new_name.to_string())
            }
        };

        if dir_cluster == src_entry.parent_start_cluster {
            if name == src_name {
                return Ok(());
            }
            // rename within one directory: a single load covers removal,
            // overwrite and re-insertion
            let mut dir = self.load_dir(dir_cluster)?;
            if let Some(old) = dir.find(&name).map(|i| dir.entries[i]) {
                if old.directory {
                    return Err(FsError::AlreadyExists);
                }
                dir.remove_entry(&name);
                self.fat.free_chain(old.start_cluster);
                self.fat.set(old.start_cluster, FREE_CLUSTER);
            }
            let mut moved = dir.remove_entry(&src_name).ok_or(FsError::NotFound)?;
            moved.name = pack_name(&name);
            dir.push_entry(moved);
            self.save_dir(&dir)?;
            self.fat.flush(&mut self.disk)?;
            return Ok(());
        }

        let mut dst_dir = self.load_dir(dir_cluster)?;
        if let Some(old) = dst_dir.find(&name).map(|i| dst_dir.entries[i]) {
            if old.directory {
                return Err(FsError::AlreadyExists);
            }
            dst_dir.remove_entry(&name);
            self.fat.free_chain(old.start_cluster);
            self.fat.set(old.start_cluster, FREE_CLUSTER);
        }

        let mut src_parent = self.load_dir(src_entry.parent_start_cluster)?;
        src_parent
            .remove_entry(&src_name)
            .ok_or(FsError::NotFound)?;
        self.save_dir(&src_parent)?;

        let mut moved = src_entry;
        moved.name = pack_name(&name);
        moved.parent_start_cluster = dir_cluster;
        dst_dir.push_entry(moved);
        self.save_dir(&dst_dir)?;
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    /// Copies a file: a fresh chain of the same length, cluster contents
    /// duplicated byte for byte. Destination resolution follows `mv`.
    pub fn cp(&mut self, src: &str, dst: &str) -> Result<()> {
        let src_entry = self.resolve(src)?.ok_or(FsError::NotFound)?;
        if src_entry.directory {
            return Err(FsError::NotFile);
        }

        let (dir_cluster, name) = match self.resolve(dst)? {
            Some(d) if d.directory => (d.start_cluster, src_entry.name_str().to_string()),
            Some(f) => (f.parent_start_cluster, f.name_str().to_string()),
            None => {
                let (parent, new_name) = self.resolve_parent(dst)?;
                Self::validate_name(new_name)?;
                (parent.start_cluster, new_name.to_string())
            }
        };

        let mut dir = self.load_dir(dir_cluster)?;
        let existing = dir.find(&name).map(|i| dir.entries[i]);
        if let Some(old) = existing {
            if old.directory || old.start_cluster == src_entry.start_cluster {
                return Err(FsError::AlreadyExists);
            }
        }

        let data_clusters = data_cluster_count(src_entry.size as u64);
        if !self.fat.has_free_clusters(data_clusters + 1) {
            return Err(FsError::NoFreeClusters);
        }
        let new_head = self.copy_clusters(src_entry.start_cluster)?;

        if let Some(old) = existing {
            dir.remove_entry(&name);
            self.fat.free_chain(old.start_cluster);
            self.fat.set(old.start_cluster, FREE_CLUSTER);
        }
        dir.push_entry(DirEntry {
            name: pack_name(&name),
            start_cluster: new_head,
            parent_start_cluster: dir_cluster,
            size: src_entry.size,
            directory: false,
        });
        self.save_dir(&dir)?;
        self.fat.flush(&mut self.disk)?;
        Ok(())
    }

    /// Duplicates every data cluster of the chain starting at `src_start`
    /// into a freshly allocated chain and returns the new head.
    fn copy_clusters(&mut self, src_start: u32) -> Result<u32> {
        let new_head = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        let mut src_curr = src_start;
        let mut dst_curr = new_head;
        let mut buf = [0u8; CLUSTER_SIZE];
        let mut steps = 0;
        loop {
            self.check_cluster(src_curr)?;
            self.disk.read_at(self.fat.cluster_addr(src_curr), &mut buf)?;
            self.disk.write_at(self.fat.cluster_addr(dst_curr), &buf)?;

            let next = self.fat.get(src_curr);
            self.check_cluster(next)?;
            if self.fat.get(next) == EOF_CLUSTER {
                // `next` is the source's terminator; the copy gets its own
                break;
            }
            src_curr = next;

            let dst_next = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
            self.fat.set(dst_curr, dst_next);
            dst_curr = dst_next;

            steps += 1;
            if steps > self.fat.cluster_count() {
                return Err(FsError::Corrupted("file chain forms a cycle"));
            }
        }
        let eof = self.fat.get_free_cluster().ok_or(FsError::NoFreeClusters)?;
        self.fat.set(dst_curr, eof);
        self.fat.set(eof, EOF_CLUSTER);
        Ok(new_head)
    }

    pub fn stats(&self) -> FsStats {
        FsStats {
            cluster_count: self.fat.cluster_count(),
            free_clusters: self.fat.count_free(),
            cluster_size: CLUSTER_SIZE,
        }
    }

    /// Depth-first listing of a directory subtree, one name per line,
    /// indentation proportional to depth.
    pub fn tree(&mut self, path: &str) -> Result<String> {
        let entry = self.resolve(path)?.ok_or(FsError::NotFound)?;
        if !entry.directory {
            return Err(FsError::NotDirectory);
        }
        let mut out = String::new();
        out.push_str(entry.name_str());
        out.push('\n');
        self.tree_into(entry.start_cluster, 1, &mut out)?;
        Ok(out)
    }

    fn tree_into(&mut self, cluster: u32, depth: usize, out: &mut String) -> Result<()> {
        let dir = self.load_dir(cluster)?;
        for entry in &dir.entries {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(entry.name_str());
            if entry.directory {
                out.push('/');
                out.push('\n');
                self.tree_into(entry.start_cluster, depth + 1, out)?;
            } else {
                out.push('\n');
            }
        }
        Ok(())
    }
}

/// Clusters a file's content occupies, the head included; even an empty
/// file keeps its head cluster.
fn data_cluster_count(size: u64) -> u32 {
    (size.div_ceil(CLUSTER_SIZE as u64)).max(1) as u32
}

fn serialize_entries(entries: &[DirEntry]) -> Vec<u8> {
    let mut buf = vec![0u8; entries.len() * DIR_ENTRY_SIZE];
    for (i, entry) in entries.iter().enumerate() {
        entry.serialize(&mut buf[i * DIR_ENTRY_SIZE..(i + 1) * DIR_ENTRY_SIZE]);
    }
    buf
}

/// Splits a path at its last slash: `"a/b/c"` -> `(Some("a/b"), "c")`,
/// `"c"` -> `(None, "c")`, `"/c"` -> `(Some("/"), "c")`.
fn split_parent(path: &str) -> (Option<&str>, &str) {
    match path.rfind('/') {
        None => (None, path),
        Some(0) => (Some("/"), &path[1..]),
        Some(i) => (Some(&path[..i]), &path[i + 1..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_parent_variants() {
        assert_eq!(split_parent("c"), (None, "c"));
        assert_eq!(split_parent("/c"), (Some("/"), "c"));
        assert_eq!(split_parent("a/b/c"), (Some("a/b"), "c"));
        assert_eq!(split_parent("a/"), (Some("a"), ""));
    }

    #[test]
    fn data_cluster_counts() {
        assert_eq!(data_cluster_count(0), 1);
        assert_eq!(data_cluster_count(1), 1);
        assert_eq!(data_cluster_count(CLUSTER_SIZE as u64), 1);
        assert_eq!(data_cluster_count(CLUSTER_SIZE as u64 + 1), 2);
        assert_eq!(data_cluster_count(200), 2);
    }
}
