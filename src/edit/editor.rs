//! Archive editor for removing entries from an existing archive.

use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Seek, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zip::{ZipArchive, ZipWriter};

use crate::{ArchivePath, Error, Result};

/// Result of an edit operation.
#[must_use = "edit result should be checked to verify operation completed as expected"]
#[derive(Debug, Clone, Default)]
pub struct EditResult {
    /// Number of entries copied to the new archive.
    pub entries_kept: usize,
    /// Number of entries left out of the new archive.
    pub entries_deleted: usize,
    /// Uncompressed bytes of the kept entries.
    pub total_bytes: u64,
    /// Compressed bytes of the kept entries.
    pub packed_bytes: u64,
}

impl EditResult {
    /// Returns the total number of entries in the resulting archive.
    pub fn total_entries(&self) -> usize {
        self.entries_kept
    }
}

/// An editor that removes entries from an archive file.
///
/// Deletions are queued and only applied when [`apply`](Self::apply) is
/// called, so any number of removals costs a single rewrite.
///
/// Entries are matched by their stored name with leading and trailing
/// separators trimmed, so queuing `root/docs` removes the directory entry
/// `root/docs/` but nothing below it.
///
/// # Example
///
/// ```rust,no_run
/// use zipvfs::{ArchivePath, edit::ArchiveEditor};
///
/// let mut editor = ArchiveEditor::new("archive.zip");
/// editor.delete_all([
///     ArchivePath::new("root/docs")?,
///     ArchivePath::new("root/docs/a.txt")?,
/// ]);
/// let result = editor.apply()?;
/// assert_eq!(result.entries_deleted, 2);
/// # Ok::<(), zipvfs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveEditor {
    path: PathBuf,
    deletions: BTreeSet<ArchivePath>,
}

impl ArchiveEditor {
    /// Creates a new editor for the archive at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            deletions: BTreeSet::new(),
        }
    }

    /// Returns whether there are any pending operations.
    pub fn has_pending_operations(&self) -> bool {
        !self.deletions.is_empty()
    }

    /// Queues a delete operation.
    ///
    /// The entry will be excluded from the output archive. Paths that do
    /// not exist in the archive are ignored when applying.
    pub fn delete(&mut self, path: ArchivePath) {
        self.deletions.insert(path);
    }

    /// Queues several delete operations.
    pub fn delete_all(&mut self, paths: impl IntoIterator<Item = ArchivePath>) {
        self.deletions.extend(paths);
    }

    /// Applies all pending operations, replacing the archive on disk.
    ///
    /// The new archive is written to a temporary file in the same directory
    /// and renamed over the original once complete. With nothing queued the
    /// archive is not touched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mutation`] wrapping the underlying failure. The
    /// original archive is unchanged and the temporary file is gone when
    /// this returns an error.
    pub fn apply(self) -> Result<EditResult> {
        if !self.has_pending_operations() {
            return Ok(EditResult::default());
        }

        self.rewrite_in_place()
            .map_err(|e| Error::mutation(&self.path, e))
    }

    /// Applies all pending operations, reading `source` and writing the new
    /// archive to `output`.
    ///
    /// This is the copy step of [`apply`](Self::apply) without the file
    /// replacement.
    pub fn apply_to<R, W>(&self, source: R, output: W) -> Result<EditResult>
    where
        R: Read + Seek,
        W: Write + Seek,
    {
        let mut archive = ZipArchive::new(source)?;
        let mut writer = ZipWriter::new(output);
        let mut result = EditResult::default();

        for idx in 0..archive.len() {
            let file = archive.by_index_raw(idx)?;

            // Names that do not validate cannot have been queued.
            let deleted = ArchivePath::from_stored_name(file.name())
                .map(|path| self.deletions.contains(&path))
                .unwrap_or(false);

            if deleted {
                log::debug!("Dropping '{}' from archive", file.name());
                result.entries_deleted += 1;
                continue;
            }

            result.total_bytes += file.size();
            result.packed_bytes += file.compressed_size();
            writer.raw_copy_file(file)?;
            result.entries_kept += 1;
        }

        let mut output = writer.finish()?;
        output.flush()?;

        if result.entries_deleted < self.deletions.len() {
            log::warn!(
                "{} queued deletions did not match any entry in '{}'",
                self.deletions.len() - result.entries_deleted,
                self.path.display()
            );
        }

        Ok(result)
    }

    fn rewrite_in_place(&self) -> Result<EditResult> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // Dropped (and deleted) on every early return below.
        let temp = NamedTempFile::new_in(dir)?;
        log::debug!(
            "Rewriting '{}' via '{}'",
            self.path.display(),
            temp.path().display()
        );

        let result = {
            let source = BufReader::new(File::open(&self.path)?);
            let output = BufWriter::new(temp.as_file());
            self.apply_to(source, output)?
        };
        temp.as_file().sync_all()?;

        // The temporary file is owner-only; the archive keeps its own mode.
        let permissions = fs::metadata(&self.path)?.permissions();
        temp.as_file().set_permissions(permissions)?;

        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        log::info!(
            "Rewrote '{}': kept {} entries, deleted {}",
            self.path.display(),
            result.entries_kept,
            result.entries_deleted
        );
        Ok(result)
    }
}
