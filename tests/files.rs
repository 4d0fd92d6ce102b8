mod common;

use common::*;
use minifat::fs::consts::CLUSTER_SIZE;
use minifat::fs::error::FsError;

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn import_cat_rm_roundtrip() {
    let (mut fs, scratch) = mount_scratch("import");
    let content = pattern(200);
    let host = scratch.host_file("host.bin", &content);
    let before = fs.free_clusters();

    fs.import(&host).unwrap();
    // 200 B at 128 B clusters: two data clusters plus the EOF terminator
    assert_eq!(fs.free_clusters(), before - 3);
    assert_eq!(read_back(&mut fs, "host.bin"), content);

    let entry = fs.resolve("host.bin").unwrap().unwrap();
    assert!(!entry.directory);
    assert_eq!(entry.size, 200);
    assert_chain_closed(fs.fat(), entry.start_cluster);
    assert_no_taken(&fs);

    fs.rm("host.bin").unwrap();
    assert!(fs.resolve("host.bin").unwrap().is_none());
    assert_eq!(fs.free_clusters(), before);
}

#[test]
fn import_exact_cluster_multiple() {
    let (mut fs, scratch) = mount_scratch("import-exact");
    let content = pattern(2 * CLUSTER_SIZE);
    let before = fs.free_clusters();
    fs.import(scratch.host_file("two.bin", &content)).unwrap();
    assert_eq!(fs.free_clusters(), before - 3);
    assert_eq!(read_back(&mut fs, "two.bin"), content);
}

#[test]
fn import_empty_file() {
    let (mut fs, scratch) = mount_scratch("import-empty");
    let before = fs.free_clusters();
    fs.import(scratch.host_file("zero.bin", b"")).unwrap();
    // even an empty file keeps its head cluster plus the terminator
    assert_eq!(fs.free_clusters(), before - 2);
    let entry = fs.resolve("zero.bin").unwrap().unwrap();
    assert_eq!(entry.size, 0);
    assert_eq!(read_back(&mut fs, "zero.bin"), b"");
    fs.rm("zero.bin").unwrap();
    assert_eq!(fs.free_clusters(), before);
}

#[test]
fn import_guards() {
    let (mut fs, scratch) = mount_scratch("import-guards");
    fs.import(scratch.host_file("a.bin", b"one")).unwrap();
    let free = fs.free_clusters();
    assert!(matches!(
        fs.import(scratch.host_file("a.bin", b"two")),
        Err(FsError::AlreadyExists)
    ));
    assert_eq!(fs.free_clusters(), free);
    assert!(matches!(
        fs.import(scratch.dir.join("absent.bin")),
        Err(FsError::NotFound)
    ));
}

#[test]
fn export_writes_host_copy() {
    let (mut fs, scratch) = mount_scratch("export");
    let content = pattern(300);
    fs.import(scratch.host_file("exp1.bin", &content)).unwrap();

    // the export lands in the host working directory under the basename
    let out = fs.export("exp1.bin").unwrap();
    let written = std::fs::read(&out);
    let _ = std::fs::remove_file(&out);
    assert_eq!(written.unwrap(), content);
}

#[test]
fn file_type_guards() {
    let (mut fs, scratch) = mount_scratch("type-guards");
    fs.mkdir("d").unwrap();
    let mut sink = Vec::new();
    assert!(matches!(fs.cat("d", &mut sink), Err(FsError::NotFile)));
    assert!(matches!(fs.rm("d"), Err(FsError::NotFile)));
    assert!(matches!(fs.rm("absent"), Err(FsError::NotFound)));
    fs.import(scratch.host_file("f.bin", b"data")).unwrap();
    // a file cannot appear in the middle of a path
    assert!(fs.resolve("f.bin/deeper").unwrap().is_none());
    assert!(matches!(fs.cd("f.bin"), Err(FsError::NotDirectory)));
}

#[test]
fn mv_overwrites_in_destination_dir() {
    let (mut fs, scratch) = mount_scratch("mv-overwrite");
    let original = pattern(200);
    let other = vec![0xAB; 90];

    fs.mkdir("a").unwrap();
    fs.mkdir("b").unwrap();
    fs.cd("a").unwrap();
    fs.import(scratch.host_file("foo", &original)).unwrap();
    fs.cd("/b").unwrap();
    fs.import(scratch.host_file("foo", &other)).unwrap();
    fs.cd("/").unwrap();

    let before = fs.free_clusters();
    fs.mv("/a/foo", "/b").unwrap();
    assert!(fs.resolve("/a/foo").unwrap().is_none());
    assert_eq!(read_back(&mut fs, "/b/foo"), original);
    // the replaced file's chain (one data cluster + EOF) went back
    assert_eq!(fs.free_clusters(), before + 2);
    assert_no_taken(&fs);
}

#[test]
fn mv_renames_within_directory() {
    let (mut fs, scratch) = mount_scratch("mv-rename");
    let content = pattern(150);
    fs.import(scratch.host_file("foo", &content)).unwrap();
    let start = fs.resolve("foo").unwrap().unwrap().start_cluster;

    fs.mv("foo", "bar").unwrap();
    assert!(fs.resolve("foo").unwrap().is_none());
    let moved = fs.resolve("bar").unwrap().unwrap();
    // the chain is reused unchanged, only the entry moved
    assert_eq!(moved.start_cluster, start);
    assert_eq!(read_back(&mut fs, "bar"), content);
}

#[test]
fn mv_to_fresh_name_in_other_dir() {
    let (mut fs, scratch) = mount_scratch("mv-fresh");
    let content = pattern(64);
    fs.mkdir("b").unwrap();
    fs.import(scratch.host_file("foo", &content)).unwrap();
    fs.mv("foo", "/b/baz").unwrap();
    assert!(fs.resolve("foo").unwrap().is_none());
    assert_eq!(read_back(&mut fs, "/b/baz"), content);
    let moved = fs.resolve("/b/baz").unwrap().unwrap();
    assert_eq!(
        moved.parent_start_cluster,
        fs.resolve("/b").unwrap().unwrap().start_cluster
    );
}

#[test]
fn mv_onto_itself_is_noop() {
    let (mut fs, scratch) = mount_scratch("mv-self");
    let content = pattern(100);
    fs.import(scratch.host_file("foo", &content)).unwrap();
    let before = fs.free_clusters();
    fs.mv("foo", "foo").unwrap();
    fs.mv("foo", ".").unwrap();
    assert_eq!(fs.free_clusters(), before);
    assert_eq!(read_back(&mut fs, "foo"), content);
}

#[test]
fn mv_missing_source() {
    let (mut fs, _scratch) = mount_scratch("mv-missing");
    assert!(matches!(fs.mv("absent", "/"), Err(FsError::NotFound)));
}

#[test]
fn cp_creates_independent_copy() {
    let (mut fs, scratch) = mount_scratch("cp");
    let content = pattern(200);
    fs.import(scratch.host_file("foo", &content)).unwrap();
    let before = fs.free_clusters();

    fs.cp("foo", "bar").unwrap();
    assert_eq!(fs.free_clusters(), before - 3);
    let foo = fs.resolve("foo").unwrap().unwrap();
    let bar = fs.resolve("bar").unwrap().unwrap();
    assert_ne!(foo.start_cluster, bar.start_cluster);
    assert_chain_closed(fs.fat(), bar.start_cluster);

    // the copy survives removal of the original
    fs.rm("foo").unwrap();
    assert_eq!(read_back(&mut fs, "bar"), content);
    assert_no_taken(&fs);
}

#[test]
fn cp_into_directory_keeps_basename() {
    let (mut fs, scratch) = mount_scratch("cp-dir");
    let content = pattern(42);
    fs.mkdir("b").unwrap();
    fs.import(scratch.host_file("foo", &content)).unwrap();
    fs.cp("foo", "/b").unwrap();
    assert_eq!(read_back(&mut fs, "/b/foo"), content);
    assert_eq!(read_back(&mut fs, "foo"), content);
}

#[test]
fn cp_overwrites_destination_file() {
    let (mut fs, scratch) = mount_scratch("cp-overwrite");
    let content = pattern(200);
    let other = vec![0x5A; 64];
    fs.import(scratch.host_file("foo", &content)).unwrap();
    fs.import(scratch.host_file("bar", &other)).unwrap();

    let before = fs.free_clusters();
    fs.cp("foo", "bar").unwrap();
    // new chain: 3 clusters in, old bar chain: 2 clusters out
    assert_eq!(fs.free_clusters(), before - 1);
    assert_eq!(read_back(&mut fs, "bar"), content);
    assert_eq!(read_back(&mut fs, "foo"), content);
}

#[test]
fn cp_onto_itself_is_rejected() {
    let (mut fs, scratch) = mount_scratch("cp-self");
    fs.import(scratch.host_file("foo", b"data")).unwrap();
    assert!(matches!(fs.cp("foo", "foo"), Err(FsError::AlreadyExists)));
    assert!(matches!(fs.cp("foo", "."), Err(FsError::AlreadyExists)));
    assert_eq!(read_back(&mut fs, "foo"), b"data");
}
