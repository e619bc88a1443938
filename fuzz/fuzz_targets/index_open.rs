//! Fuzz target for ArchiveIndex::from_reader with arbitrary byte input.
//!
//! This target exercises central directory parsing and root detection with
//! potentially malformed or adversarial input. The goal is to find panics or
//! hangs while building the index.
//!
//! Run with: cargo +nightly fuzz run index_open

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // We don't care about the result - we're looking for panics or hangs
    if let Ok(index) = zipvfs::ArchiveIndex::from_reader(Cursor::new(data)) {
        let root = index.root_path().clone();
        assert!(index.is_directory(&root), "Root is not a directory");
        assert!(index.entry_count() >= 1);

        for name in index.children(&root) {
            let child = root.join(&name).expect("child name is a valid segment");
            assert_eq!(child.parent().as_ref(), Some(&root));
        }
    }
});
