//! Archive fixtures shared by unit tests.

use std::fs::File;
use std::io::Write;

use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::VirtualFs;

/// Writes `entries` to `fs.zip` in a fresh temporary directory and opens it.
///
/// Names ending in `/` become directory entries.
pub(crate) fn fs_with(entries: &[(&str, &[u8])]) -> (TempDir, VirtualFs) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fs.zip");
    let mut writer = ZipWriter::new(File::create(&path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, data) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(data).unwrap();
        }
    }
    writer.finish().unwrap();
    let vfs = VirtualFs::open(&path).unwrap();
    (dir, vfs)
}

/// The small tree most command tests run against.
pub(crate) fn sample_fs() -> (TempDir, VirtualFs) {
    fs_with(&[
        ("root_dir/", b"" as &[u8]),
        ("root_dir/file1.txt", b"Hello world!"),
        ("root_dir/folder1/", b""),
        ("root_dir/folder1/file2.txt", b"Test file"),
        ("root_dir/folder1/file3.txt", b"Another test file"),
    ])
}
