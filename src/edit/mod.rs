//! Archive rewriting.
//!
//! ZIP archives cannot drop an entry in place, so removing entries means
//! writing a new archive without them. [`ArchiveEditor`] queues the paths to
//! remove and applies them in one pass:
//!
//! 1. Open the source archive for reading
//! 2. Create a temporary archive next to it (same file system)
//! 3. Copy every entry that is not queued for deletion, raw: compressed
//!    data is copied as-is, never recompressed
//! 4. Finish the temporary archive, give it the source's permissions and
//!    rename it over the source
//!
//! If any step fails the temporary file is deleted and the source archive is
//! left exactly as it was.
//!
//! # Example
//!
//! ```rust,no_run
//! use zipvfs::{ArchivePath, edit::ArchiveEditor};
//!
//! let mut editor = ArchiveEditor::new("archive.zip");
//! editor.delete(ArchivePath::new("root/unwanted.txt")?);
//!
//! let result = editor.apply()?;
//! println!("Kept {} entries, deleted {}", result.entries_kept, result.entries_deleted);
//! # Ok::<(), zipvfs::Error>(())
//! ```

mod editor;

pub use editor::{ArchiveEditor, EditResult};
