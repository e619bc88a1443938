//! # zipvfs
//!
//! A ZIP archive presented as a small Unix-like filesystem.
//!
//! The archive must keep all of its entries under one top-level folder. That
//! folder becomes `/`, and the shell offers `cd`, `ls`, `wc` and `rm` on the
//! tree below it. Removals are written back to the archive on disk.
//!
//! ## Quick Start
//!
//! ### Running Commands
//!
//! ```rust,no_run
//! use zipvfs::{Outcome, Result, Shell, VirtualFs};
//!
//! fn main() -> Result<()> {
//!     let mut shell = Shell::new("myhost", VirtualFs::open("fs.zip")?);
//!
//!     if let Outcome::Continue(Some(listing)) = shell.execute("ls")? {
//!         println!("{}", listing);
//!     }
//!     shell.execute("cd folder1")?;
//!     assert_eq!(shell.prompt(), "myhost:/folder1$ ");
//!     Ok(())
//! }
//! ```
//!
//! ### Using the Handlers Directly
//!
//! ```rust,no_run
//! use zipvfs::{VirtualFs, commands};
//!
//! let mut vfs = VirtualFs::open("fs.zip")?;
//! for name in commands::ls(&vfs, None)? {
//!     println!("{}", name);
//! }
//! println!("{}", commands::wc(&vfs, &["-l", "file1.txt"])?);
//! commands::rm(&mut vfs, &["-r", "folder1"])?;
//! # Ok::<(), zipvfs::Error>(())
//! ```
//!
//! ## Paths
//!
//! Two path spaces are in play:
//!
//! - [`UserPath`]: what the user types and sees, without the root folder
//!   (`/folder1/file2.txt`)
//! - [`ArchivePath`]: the index key, prefixed with the root folder
//!   (`root_dir/folder1/file2.txt`)
//!
//! [`resolve::resolve`] turns input into a [`UserPath`] relative to the
//! current directory. `.` and `..` are normalized and never climb above `/`.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T>`]. Errors raised while opening an
//! archive are fatal (see [`Error::is_load_error`]); every command error
//! displays as the exact line the shell prints:
//!
//! ```rust,no_run
//! use zipvfs::{Shell, VirtualFs};
//!
//! let mut shell = Shell::new("host", VirtualFs::open("fs.zip")?);
//! if let Err(e) = shell.execute("cd nonexistent") {
//!     assert_eq!(e.to_string(), "cd: nonexistent: No such file or directory");
//! }
//! # Ok::<(), zipvfs::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | No | Command-line interface tool |
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod archive_path;
pub mod commands;
pub mod config;
pub mod edit;
pub mod error;
pub mod index;
pub mod resolve;
pub mod shell;
pub mod vfs;

#[cfg(test)]
mod testutil;

pub use archive_path::ArchivePath;
pub use config::Config;
pub use error::{Error, Result};
pub use index::{ArchiveIndex, Entry, FileMeta};
pub use resolve::UserPath;
pub use shell::{Outcome, Shell};
pub use vfs::VirtualFs;

// Re-export edit API
pub use edit::{ArchiveEditor, EditResult};
