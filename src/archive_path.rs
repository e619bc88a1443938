//! Archive path type with validation for index keys and entry names.

use crate::{Error, Result};
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for archive paths (in bytes).
///
/// 32KB is well above any reasonable file system path limit.
const MAX_PATH_LENGTH: usize = 32768;

/// A validated, root-qualified path of an entry inside the archive.
///
/// `ArchivePath` is the key of the [`ArchiveIndex`] and the name handed to the
/// [`ArchiveEditor`]. It is stored without leading or trailing separator, so
/// the directory `root/docs/` and the file `root/docs` would share a key;
/// the entry kind is carried by the index value instead.
///
/// Validation ensures:
/// - No NUL bytes are present
/// - The path is not absolute (does not start with `/`)
/// - No empty segments exist (no `//` or trailing `/`)
/// - No `.` or `..` segments are present
///
/// # Examples
///
/// ```
/// use zipvfs::ArchivePath;
///
/// let path = ArchivePath::new("root/dir/file.txt").unwrap();
/// assert_eq!(path.file_name(), "file.txt");
/// assert_eq!(path.first_component(), "root");
///
/// assert!(ArchivePath::new("../secret").is_err());
/// assert!(ArchivePath::new("/absolute/path").is_err());
/// ```
///
/// [`ArchiveIndex`]: crate::ArchiveIndex
/// [`ArchiveEditor`]: crate::ArchiveEditor
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArchivePath(String);

impl ArchivePath {
    /// Creates a new `ArchivePath` from a string, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the path:
    /// - Contains NUL bytes
    /// - Is an absolute path (starts with `/`)
    /// - Contains empty segments (e.g., `a//b`) or ends with `/`
    /// - Contains `.` or `..` segments
    /// - Is empty
    pub fn new(s: &str) -> Result<Self> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }

    /// Creates an `ArchivePath` from a name as stored in the ZIP central
    /// directory.
    ///
    /// Stored names may carry a trailing `/` (directories), Windows
    /// separators, or a leading `./`; these are normalized away before
    /// validation.
    pub fn from_stored_name(name: &str) -> Result<Self> {
        let normalized = name.replace('\\', "/");
        let mut trimmed = normalized.as_str();
        while let Some(rest) = trimmed.strip_prefix("./") {
            trimmed = rest;
        }
        let trimmed = trimmed.trim_matches('/');
        Self::new(trimmed)
    }

    /// Builds a path from already-split segments.
    pub(crate) fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let joined = segments.into_iter().collect::<Vec<_>>().join("/");
        Self::new(&joined)
    }

    /// Validates an archive path string.
    fn validate(s: &str) -> Result<()> {
        if s.contains('\0') {
            return Err(Error::InvalidArchivePath("contains NUL byte".into()));
        }

        if s.is_empty() {
            return Err(Error::InvalidArchivePath("empty path".into()));
        }

        if s.len() > MAX_PATH_LENGTH {
            return Err(Error::InvalidArchivePath(format!(
                "path exceeds maximum length of {} bytes",
                MAX_PATH_LENGTH
            )));
        }

        if s.starts_with('/') {
            return Err(Error::InvalidArchivePath(format!(
                "absolute path not allowed: '{}'",
                s
            )));
        }

        if s.ends_with('/') {
            return Err(Error::InvalidArchivePath(format!(
                "trailing slash not allowed: '{}'",
                s
            )));
        }

        for segment in s.split('/') {
            if segment.is_empty() {
                return Err(Error::InvalidArchivePath(format!(
                    "empty segment (consecutive slashes): '{}'",
                    s
                )));
            }
            if segment == "." {
                return Err(Error::InvalidArchivePath(format!(
                    "'.' segment not allowed: '{}'",
                    s
                )));
            }
            if segment == ".." {
                return Err(Error::InvalidArchivePath(format!(
                    "'..' segment not allowed (path traversal): '{}'",
                    s
                )));
            }
        }

        Ok(())
    }

    /// Returns the path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Joins this path with another segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting path would be invalid.
    pub fn join(&self, other: &str) -> Result<Self> {
        let joined = format!("{}/{}", self.0, other);
        Self::new(&joined)
    }

    /// Returns the parent directory of this path, if any.
    ///
    /// Returns `None` for a single-segment path (the archive root).
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rfind('/')
            .map(|idx| Self(self.0[..idx].to_string()))
    }

    /// Returns the file name (last segment) of this path.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// Returns the first segment of this path.
    pub fn first_component(&self) -> &str {
        self.0.split('/').next().unwrap_or(&self.0)
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.0.split('/').count()
    }

    /// Returns an iterator over the path components (segments).
    ///
    /// # Examples
    ///
    /// ```
    /// use zipvfs::ArchivePath;
    ///
    /// let path = ArchivePath::new("a/b/c.txt").unwrap();
    /// let components: Vec<_> = path.components().collect();
    /// assert_eq!(components, vec!["a", "b", "c.txt"]);
    /// ```
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }
}

impl AsRef<str> for ArchivePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Ordering of `ArchivePath` is the ordering of its string, so ordered maps
// keyed by `ArchivePath` can be range-queried with plain `&str` bounds.
impl Borrow<str> for ArchivePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl TryFrom<&str> for ArchivePath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ArchivePath {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}
