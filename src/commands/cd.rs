//! cd: change the current directory.

use crate::resolve::UserPath;
use crate::{Error, Result, VirtualFs};

/// Changes the current directory of `vfs`.
///
/// With no argument or `/` this goes to the root. `..` goes to the parent
/// directory, or stays at the root. Any other path must resolve to an indexed
/// directory, otherwise the current directory is left unchanged.
///
/// # Errors
///
/// Returns [`Error::NotFound`] naming `path` as typed.
pub fn cd(vfs: &mut VirtualFs, path: Option<&str>) -> Result<()> {
    match path {
        None | Some("/") => vfs.set_cwd(UserPath::root()),
        Some("..") => {
            // Parent directories are not always stored explicitly; climb to
            // the nearest one that is. The root always is.
            let mut target = vfs.cwd().parent();
            while !target.is_root() && vfs.set_cwd(target.clone()).is_err() {
                target = target.parent();
            }
            if target.is_root() {
                vfs.set_cwd(target)?;
            }
            Ok(())
        }
        Some(input) => {
            let target = vfs.resolve(input);
            vfs.set_cwd(target)
                .map_err(|_| Error::not_found("cd", input))
        }
    }
}
