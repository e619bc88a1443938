//! ls: list directory contents.

use crate::{Error, Result, VirtualFs};

/// Lists the direct children of `path` (default: the current directory).
///
/// Names are sorted lexicographically. An empty directory yields an empty
/// list.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `path` does not exist or is a file.
pub fn ls(vfs: &VirtualFs, path: Option<&str>) -> Result<Vec<String>> {
    let input = path.unwrap_or("");
    let not_found = || Error::not_found("ls", input);

    let key = vfs.lookup_key(input).ok_or_else(not_found)?;
    if !vfs.index().is_directory(&key) {
        return Err(not_found());
    }
    Ok(vfs.index().children(&key))
}
