//! Shared test utilities for integration tests.
//!
//! Fixture archives are written to a [`TempDir`] so that commands which
//! rewrite the archive can run against a real file.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Cursor, Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};
use zipvfs::{Shell, VirtualFs};

/// Entries of the archive used by most scenarios.
pub const SAMPLE: &[(&str, &[u8])] = &[
    ("root_dir/", b""),
    ("root_dir/file1.txt", b"Hello world!"),
    ("root_dir/folder1/", b""),
    ("root_dir/folder1/file2.txt", b"Test file"),
    ("root_dir/folder1/file3.txt", b"Another test file"),
];

/// Builds an archive in memory. Names ending in `/` become directories.
pub fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut writer = ZipWriter::new(&mut buf);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        for (name, data) in entries {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
        }
        writer.finish().unwrap();
    }
    buf.into_inner()
}

/// Writes an archive file into a fresh temp dir.
pub fn create_zip_file(entries: &[(&str, &[u8])]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("fs.zip");
    std::fs::write(&path, build_zip(entries)).expect("Failed to write archive");
    (temp_dir, path)
}

/// Opens a shell named `test` over `entries`.
pub fn shell_with(entries: &[(&str, &[u8])]) -> (TempDir, Shell) {
    let (dir, path) = create_zip_file(entries);
    let vfs = VirtualFs::open(&path).expect("Failed to open archive");
    (dir, Shell::new("test", vfs))
}

/// Opens a shell over [`SAMPLE`].
pub fn sample_shell() -> (TempDir, Shell) {
    shell_with(SAMPLE)
}

/// Returns the names stored in the archive at `path`, in archive order.
pub fn stored_names(path: &Path) -> Vec<String> {
    let archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive.file_names().map(str::to_string).collect()
}

/// Reads one stored file from the archive at `path`.
pub fn read_stored(path: &Path, name: &str) -> String {
    let mut archive = ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}
