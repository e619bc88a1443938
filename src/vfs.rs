//! Virtual filesystem state: the archive index plus the working directory.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

use crate::edit::{ArchiveEditor, EditResult};
use crate::index::{ArchiveIndex, Entry};
use crate::resolve::{UserPath, resolve};
use crate::{ArchivePath, Error, Result};

/// A ZIP archive presented as a filesystem with a current directory.
///
/// `VirtualFs` owns the [`ArchiveIndex`] and the working directory cursor.
/// Command handlers borrow it (mutably for `cd` and `rm`); there is no other
/// shared state.
///
/// The working directory always names a directory present in the index.
#[derive(Debug)]
pub struct VirtualFs {
    archive: PathBuf,
    index: ArchiveIndex,
    cwd: UserPath,
}

impl VirtualFs {
    /// Opens and indexes the archive at `path`, starting at the root.
    ///
    /// # Errors
    ///
    /// Fails with a load error (see [`Error::is_load_error`]) if the archive
    /// cannot be read or does not have exactly one root folder.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let archive = path.as_ref().to_path_buf();
        let index = ArchiveIndex::open_path(&archive)?;
        log::debug!(
            "Opened '{}' ({} files, {} directories)",
            archive.display(),
            index.file_count(),
            index.directory_count()
        );
        Ok(Self {
            archive,
            index,
            cwd: UserPath::root(),
        })
    }

    /// Returns the location of the backing archive.
    pub fn archive_path(&self) -> &Path {
        &self.archive
    }

    /// Returns the entry index.
    pub fn index(&self) -> &ArchiveIndex {
        &self.index
    }

    /// Returns the archive root segment.
    pub fn root(&self) -> &str {
        self.index.root()
    }

    /// Returns the current directory.
    pub fn cwd(&self) -> &UserPath {
        &self.cwd
    }

    /// Changes the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `path` does not name an indexed
    /// directory; the current directory is unchanged.
    pub fn set_cwd(&mut self, path: UserPath) -> Result<()> {
        let key = self.qualify(&path)?;
        if !self.index.is_directory(&key) {
            return Err(Error::not_found("cd", path.to_string()));
        }
        self.cwd = path;
        Ok(())
    }

    /// Resolves user input against the current directory.
    pub fn resolve(&self, input: &str) -> UserPath {
        resolve(&self.cwd, input)
    }

    /// Prepends the archive root to a user path.
    pub fn qualify(&self, path: &UserPath) -> Result<ArchivePath> {
        path.qualify(self.index.root())
    }

    /// Resolves user input to an index key.
    ///
    /// Returns `None` when the input cannot form a valid archive path; such
    /// a path cannot exist in the index either.
    pub fn lookup_key(&self, input: &str) -> Option<ArchivePath> {
        self.qualify(&self.resolve(input)).ok()
    }

    /// Returns the entry at `key`.
    pub fn entry(&self, key: &ArchivePath) -> Option<&Entry> {
        self.index.get(key)
    }

    /// Reads the uncompressed content of the file at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `key` is not an indexed file, or the
    /// I/O or ZIP error raised while reading it.
    pub fn read_file(&self, key: &ArchivePath) -> Result<Vec<u8>> {
        let meta = self
            .index
            .get(key)
            .and_then(Entry::as_file)
            .ok_or_else(|| Error::not_found("read", key.to_string()))?;

        let reader = BufReader::new(File::open(&self.archive)?);
        let mut archive = ZipArchive::new(reader)?;
        let mut file = archive.by_name(&meta.stored_name)?;

        let mut data = Vec::with_capacity(meta.size.min(1 << 20) as usize);
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Removes `keys` from the archive on disk, then from the index.
    ///
    /// The archive root is never removed. The index is only updated after
    /// the archive was rewritten successfully, so on error both are
    /// unchanged. If the current directory no longer exists afterwards it
    /// moves up to the nearest remaining ancestor.
    pub fn remove_entries(&mut self, keys: Vec<ArchivePath>) -> Result<EditResult> {
        let root = self.index.root_path().clone();
        let keys: Vec<_> = keys.into_iter().filter(|key| *key != root).collect();
        if keys.is_empty() {
            return Ok(EditResult::default());
        }

        let mut editor = ArchiveEditor::new(&self.archive);
        editor.delete_all(keys.iter().cloned());
        let result = editor.apply()?;

        for key in &keys {
            self.index.remove(key);
        }
        self.repair_cwd();
        Ok(result)
    }

    fn repair_cwd(&mut self) {
        let mut cwd = self.cwd.clone();
        while !cwd.is_root() {
            match self.qualify(&cwd) {
                Ok(key) if self.index.is_directory(&key) => break,
                _ => cwd = cwd.parent(),
            }
        }
        if cwd != self.cwd {
            log::warn!(
                "Working directory '{}' was removed, moving to '{}'",
                self.cwd,
                cwd
            );
            self.cwd = cwd;
        }
    }
}
