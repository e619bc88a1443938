//! In-memory index of archive entries.
//!
//! [`ArchiveIndex`] is built once from the ZIP central directory. It maps
//! every root-qualified [`ArchivePath`] to an [`Entry`] and records the single
//! top-level root segment all entries are nested under.
//!
//! Directories are only known when the archive stores them explicitly (names
//! ending in `/`); file paths never create implicit parent directories. The
//! root directory is the exception: it is always present.

use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::ops::Bound;
use std::path::Path;

use zip::{CompressionMethod, ZipArchive};

use crate::{ArchivePath, Error, Result};

/// Metadata of a file entry, taken from the central directory.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMeta {
    /// The entry name exactly as stored in the archive.
    pub stored_name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Compressed size in bytes.
    pub compressed_size: u64,
    /// Compression method of the stored data.
    pub compression: CompressionMethod,
    /// CRC-32 of the uncompressed data.
    pub crc32: u32,
}

/// An entry of the virtual filesystem.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// A directory. Carries no payload.
    Directory,
    /// A regular file.
    File(FileMeta),
}

impl Entry {
    /// Returns true for [`Entry::Directory`].
    pub fn is_directory(&self) -> bool {
        matches!(self, Entry::Directory)
    }

    /// Returns the file metadata, or `None` for directories.
    pub fn as_file(&self) -> Option<&FileMeta> {
        match self {
            Entry::File(meta) => Some(meta),
            Entry::Directory => None,
        }
    }
}

/// Index of all entries of an archive, keyed by root-qualified path.
#[derive(Debug, Clone)]
pub struct ArchiveIndex {
    root: ArchivePath,
    entries: BTreeMap<ArchivePath, Entry>,
}

impl ArchiveIndex {
    /// Opens the archive at `path` and indexes it.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened, a ZIP error if it
    /// is not a readable archive, [`Error::InvalidArchivePath`] for unsafe
    /// entry names, and [`Error::AmbiguousRoot`] unless exactly one root
    /// folder exists.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Indexes an archive from any seekable reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        Self::from_zip(&mut archive)
    }

    /// Indexes an already opened archive.
    ///
    /// Only the central directory is read; entry data is never decompressed.
    pub fn from_zip<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        let mut roots = BTreeSet::new();

        for idx in 0..archive.len() {
            let file = archive.by_index_raw(idx)?;
            let path = ArchivePath::from_stored_name(file.name())?;
            let entry = if file.is_dir() {
                Entry::Directory
            } else {
                Entry::File(FileMeta {
                    stored_name: file.name().to_string(),
                    size: file.size(),
                    compressed_size: file.compressed_size(),
                    compression: file.compression(),
                    crc32: file.crc32(),
                })
            };

            // Top-level files carry no separator and do not vote for a root.
            if entry.is_directory() || path.depth() > 1 {
                roots.insert(path.first_component().to_string());
            }

            if let Some(previous) = entries.insert(path.clone(), entry) {
                log::warn!(
                    "Duplicate archive entry '{}' replaces earlier {}",
                    path.as_str(),
                    if previous.is_directory() {
                        "directory"
                    } else {
                        "file"
                    }
                );
            }
        }

        if roots.len() != 1 {
            return Err(Error::AmbiguousRoot {
                roots: roots.into_iter().collect(),
            });
        }
        let root_name = roots.into_iter().next().unwrap_or_default();
        let root = ArchivePath::new(&root_name)?;

        match entries.get(&root) {
            Some(Entry::File(_)) => {
                return Err(Error::InvalidArchivePath(format!(
                    "archive root '{}' is stored as a file",
                    root_name
                )));
            }
            Some(Entry::Directory) => {}
            None => {
                log::debug!("Archive has no explicit '{}/' entry, adding it", root_name);
                entries.insert(root.clone(), Entry::Directory);
            }
        }

        log::debug!(
            "Indexed {} entries under root '{}'",
            entries.len(),
            root.as_str()
        );

        Ok(Self { root, entries })
    }

    /// Returns the root segment.
    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    /// Returns the root directory as an index key.
    pub fn root_path(&self) -> &ArchivePath {
        &self.root
    }

    /// Returns the entry at `path`.
    pub fn get(&self, path: &ArchivePath) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Returns true if `path` is indexed.
    pub fn contains(&self, path: &ArchivePath) -> bool {
        self.entries.contains_key(path)
    }

    /// Returns true if `path` is an indexed directory.
    pub fn is_directory(&self, path: &ArchivePath) -> bool {
        matches!(self.entries.get(path), Some(Entry::Directory))
    }

    /// Returns true if `path` is an indexed file.
    pub fn is_file(&self, path: &ArchivePath) -> bool {
        matches!(self.entries.get(path), Some(Entry::File(_)))
    }

    /// Returns the names of the direct children of `dir`, sorted and
    /// deduplicated.
    ///
    /// A child is the first segment below `dir` of any indexed path, so a
    /// deep file whose intermediate directories are not stored still shows
    /// up as its top-most missing directory name. The scan walks the
    /// ordered key range that starts at `dir/`.
    pub fn children(&self, dir: &ArchivePath) -> Vec<String> {
        let prefix = format!("{}/", dir.as_str());
        let names: BTreeSet<&str> = self
            .entries
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .map(|(key, _)| key.as_str())
            .take_while(|key| key.starts_with(&prefix))
            .filter_map(|key| key[prefix.len()..].split('/').next())
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    /// Returns every key whose string form contains `needle`, in order.
    ///
    /// This is a plain substring test over the whole root-qualified path,
    /// not a descendant test: `keys_containing("doc")` also returns
    /// `root/mydocs.txt`.
    pub fn keys_containing(&self, needle: &str) -> Vec<ArchivePath> {
        self.entries
            .keys()
            .filter(|key| key.as_str().contains(needle))
            .cloned()
            .collect()
    }

    /// Removes `path` from the index.
    pub fn remove(&mut self, path: &ArchivePath) -> Option<Entry> {
        self.entries.remove(path)
    }

    /// Returns the number of indexed entries, including the root.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of file entries.
    pub fn file_count(&self) -> usize {
        self.entries.values().filter(|e| !e.is_directory()).count()
    }

    /// Returns the number of directory entries, including the root.
    pub fn directory_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_directory()).count()
    }
}
