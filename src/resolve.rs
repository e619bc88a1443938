//! Resolution of user-typed paths into archive index keys.
//!
//! The shell hides the archive's root segment: the user sees `/folder1`
//! while the index stores `root_dir/folder1`. Two path spaces follow from
//! that:
//!
//! - **user path space**: [`UserPath`], what the user types and what the
//!   prompt shows, always relative to the hidden root;
//! - **root-qualified**: [`ArchivePath`], the index key, produced by
//!   [`UserPath::qualify`].
//!
//! Resolution is purely lexical. Nothing here checks that a path exists;
//! callers look the qualified path up in the [`ArchiveIndex`].
//!
//! # Examples
//!
//! ```
//! use zipvfs::resolve::{UserPath, resolve};
//!
//! let cwd = UserPath::parse("/folder1");
//! assert_eq!(resolve(&cwd, "file2.txt").to_string(), "/folder1/file2.txt");
//! assert_eq!(resolve(&cwd, "..").to_string(), "/");
//! assert_eq!(resolve(&cwd, "/").to_string(), "/");
//! assert_eq!(resolve(&cwd, "../a/./b//").to_string(), "/a/b");
//!
//! let key = resolve(&cwd, "file2.txt").qualify("root_dir").unwrap();
//! assert_eq!(key.as_str(), "root_dir/folder1/file2.txt");
//! ```
//!
//! [`ArchiveIndex`]: crate::ArchiveIndex

use std::fmt;

use crate::{ArchivePath, Result};

/// The path separator used in user input and archive names.
pub const SEPARATOR: char = '/';

/// A normalized path in user path space.
///
/// Stored as a list of segments below the hidden archive root; the empty
/// list is the root itself. Segments never contain the separator and are
/// never empty, `.` or `..`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserPath {
    segments: Vec<String>,
}

impl UserPath {
    /// Returns the root of user path space (`/`).
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a path as if typed at the root directory.
    ///
    /// A leading separator is optional.
    pub fn parse(s: &str) -> Self {
        Self::root().join(s)
    }

    /// Returns true if this is the root directory.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the last segment, or `None` at the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Returns the parent directory. The parent of the root is the root.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Appends `input` to this path and normalizes the result.
    ///
    /// Empty segments and `.` are skipped, `..` removes the previous
    /// segment and stops at the root. A leading separator does not reset
    /// the path; use [`resolve`] for that.
    pub fn join(&self, input: &str) -> Self {
        let mut segments = self.segments.clone();
        for segment in input.split(SEPARATOR) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop();
                }
                name => segments.push(name.to_string()),
            }
        }
        Self { segments }
    }

    /// Prepends the archive root segment, producing an index key.
    ///
    /// The user root maps to the root segment alone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArchivePath`](crate::Error::InvalidArchivePath)
    /// if a segment cannot appear in an archive path (e.g. contains NUL).
    pub fn qualify(&self, root: &str) -> Result<ArchivePath> {
        ArchivePath::from_segments(std::iter::once(root).chain(self.segments()))
    }

    /// Renders the path in directory form: `/` for the root, otherwise the
    /// path followed by a separator (`/folder1/`).
    pub fn to_dir_string(&self) -> String {
        if self.is_root() {
            SEPARATOR.to_string()
        } else {
            format!("{}{}", self, SEPARATOR)
        }
    }
}

impl fmt::Display for UserPath {
    /// Renders `/` for the root and `/a/b` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "{}", SEPARATOR);
        }
        for segment in &self.segments {
            write!(f, "{}{}", SEPARATOR, segment)?;
        }
        Ok(())
    }
}

/// Resolves user input against the current directory.
///
/// - `/` is the root.
/// - `..` is the parent of `cwd`, or the root when already there.
/// - Input starting with `/` is absolute in user path space.
/// - Anything else is relative to `cwd`.
pub fn resolve(cwd: &UserPath, input: &str) -> UserPath {
    match input {
        "/" => UserPath::root(),
        ".." => cwd.parent(),
        _ if input.starts_with(SEPARATOR) => UserPath::root().join(input),
        _ => cwd.join(input),
    }
}
