//! Error types for virtual filesystem operations.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when loading an archive, resolving paths, running shell
//! commands, and rewriting the backing archive, along with a convenient
//! [`Result<T>`] type alias.
//!
//! # Fatal and Recoverable Errors
//!
//! Errors raised while opening the archive (see [`Error::is_load_error`])
//! abort startup: the archive cannot be presented as a filesystem. Every
//! other error is reported by the shell as a one-line message and the
//! session continues.
//!
//! ```rust,no_run
//! use zipvfs::{Error, VirtualFs};
//!
//! fn open(path: &str) -> zipvfs::Result<VirtualFs> {
//!     match VirtualFs::open(path) {
//!         Ok(vfs) => Ok(vfs),
//!         Err(e @ Error::AmbiguousRoot { .. }) => {
//!             eprintln!("Archive layout not supported: {}", e);
//!             Err(e)
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```
//!
//! ## User-Facing Messages
//!
//! Command errors render exactly the line the shell prints:
//!
//! ```rust
//! use zipvfs::Error;
//!
//! let err = Error::MissingOperand { command: "wc" };
//! assert_eq!(err.to_string(), "wc: missing file operand");
//! ```

use std::io;
use std::path::PathBuf;

/// Helper struct for formatting AmbiguousRoot error messages.
struct AmbiguousRootDisplay<'a> {
    roots: &'a [String],
}

impl std::fmt::Display for AmbiguousRootDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.roots {
            [] => write!(f, "Archive must contain exactly one root folder, found none"),
            roots => write!(
                f,
                "Archive must contain exactly one root folder, found {}: {}",
                roots.len(),
                roots.join(", ")
            ),
        }
    }
}

/// The main error type for virtual filesystem operations.
///
/// # Error Categories
///
/// | Category | Variants | Typical Cause |
/// |----------|----------|---------------|
/// | Load | [`AmbiguousRoot`][Self::AmbiguousRoot], [`InvalidArchivePath`][Self::InvalidArchivePath], [`Zip`][Self::Zip] | Unusable archive |
/// | Lookup | [`NotFound`][Self::NotFound], [`NoSuchFile`][Self::NoSuchFile] | Missing target |
/// | Type | [`IsADirectory`][Self::IsADirectory], [`RootRemoval`][Self::RootRemoval] | Wrong entry kind |
/// | Usage | [`InvalidOption`][Self::InvalidOption], [`MissingOperand`][Self::MissingOperand], [`CommandNotFound`][Self::CommandNotFound] | Bad command line |
/// | Content | [`Unreadable`][Self::Unreadable] | Non-UTF-8 file |
/// | Mutation | [`Mutation`][Self::Mutation] | Archive rewrite failed |
/// | Setup | [`Config`][Self::Config], [`Io`][Self::Io] | Configuration or file system |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The ZIP container could not be read or written.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The archive does not have exactly one top-level folder.
    ///
    /// Every entry path is nested under a single root segment, which the
    /// shell hides from the user. Archives with several top-level folders, or
    /// with only top-level files, cannot be presented this way and are
    /// rejected when opened.
    #[error("{}", AmbiguousRootDisplay { roots: roots.as_slice() })]
    AmbiguousRoot {
        /// The distinct top-level segments that were found, sorted.
        roots: Vec<String>,
    },

    /// An archive path failed validation.
    ///
    /// Raised when a stored entry name contains `..`, NUL bytes, or empty
    /// segments, or when a caller builds an [`ArchivePath`] from such a
    /// string.
    ///
    /// [`ArchivePath`]: crate::ArchivePath
    #[error("Invalid archive path: {0}")]
    InvalidArchivePath(String),

    /// The target of a command does not exist.
    #[error("{command}: {path}: No such file or directory")]
    NotFound {
        /// The command that failed.
        command: &'static str,
        /// The path as typed by the user.
        path: String,
    },

    /// The target of a command is missing or is not a regular file.
    #[error("{command}: {path}: No such file")]
    NoSuchFile {
        /// The command that failed.
        command: &'static str,
        /// The path as typed by the user.
        path: String,
    },

    /// A directory was given where a file was required.
    #[error("{command}: {path} is a directory. Use -r to remove.")]
    IsADirectory {
        /// The command that failed.
        command: &'static str,
        /// The path as typed by the user.
        path: String,
    },

    /// A recursive delete targeted the archive root.
    #[error("{command}: {path}: refusing to remove the archive root")]
    RootRemoval {
        /// The command that failed.
        command: &'static str,
        /// The path as typed by the user.
        path: String,
    },

    /// A flag character is not accepted by the command.
    #[error("{command}: invalid option -- '{flag}'")]
    InvalidOption {
        /// The command that failed.
        command: &'static str,
        /// The first offending flag character.
        flag: char,
    },

    /// The command requires a path operand and none was given.
    #[error("{command}: missing file operand")]
    MissingOperand {
        /// The command that failed.
        command: &'static str,
    },

    /// A file's content could not be read as UTF-8 text.
    #[error("{command}: {path}: Unable to read file - {reason}")]
    Unreadable {
        /// The command that failed.
        command: &'static str,
        /// The path as typed by the user.
        path: String,
        /// The underlying decode or read failure.
        reason: String,
    },

    /// Rewriting the backing archive failed.
    ///
    /// The original archive is left untouched and the temporary file is
    /// removed before this error is returned.
    #[error("Error during file removal: {source}")]
    Mutation {
        /// The archive that was being rewritten.
        archive: PathBuf,
        /// The failure that aborted the rewrite.
        #[source]
        source: Box<Error>,
    },

    /// The first word of the input line is not a known command.
    #[error("{command}: command not found")]
    CommandNotFound {
        /// The unrecognized command word.
        command: String,
    },

    /// The configuration file is missing or malformed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns `true` if this error makes the archive unusable.
    ///
    /// Load errors are raised only while opening the archive; the shell
    /// never starts when one occurs.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Error::AmbiguousRoot { .. } | Error::InvalidArchivePath(_) | Error::Zip(_)
        )
    }

    /// Returns `true` if this error came from an archive rewrite.
    pub fn is_mutation_error(&self) -> bool {
        matches!(self, Error::Mutation { .. })
    }

    /// Creates a NotFound error.
    pub fn not_found(command: &'static str, path: impl Into<String>) -> Self {
        Error::NotFound {
            command,
            path: path.into(),
        }
    }

    /// Wraps an error raised while rewriting `archive`.
    pub fn mutation(archive: impl Into<PathBuf>, source: impl Into<Error>) -> Self {
        Error::Mutation {
            archive: archive.into(),
            source: Box::new(source.into()),
        }
    }
}

/// A specialized Result type for virtual filesystem operations.
pub type Result<T> = std::result::Result<T, Error>;
