//! rm: remove files and directories from the archive.

use super::args::FlagArgs;
use crate::edit::EditResult;
use crate::index::Entry;
use crate::{Error, Result, VirtualFs};

const COMMAND: &str = "rm";

/// Runs `rm` with the tokens following the command name.
///
/// A file is removed on its own. A directory needs `-r`, which removes every
/// indexed path whose text contains the directory's name. This is a
/// substring match over whole paths, not a descendant test: `rm -r docs`
/// also removes `/notes/mydocs.txt` if it exists. The archive root itself is
/// never removed.
///
/// The archive on disk is rewritten once per call, and the in-memory index
/// is only updated after that succeeded.
///
/// # Errors
///
/// - [`Error::MissingOperand`] if no path is given, checked before flags
/// - [`Error::InvalidOption`] for a flag other than `r`
/// - [`Error::NotFound`] if the path does not exist
/// - [`Error::IsADirectory`] for a directory without `-r`
/// - [`Error::RootRemoval`] for `rm -r` on the root
/// - [`Error::Mutation`] if rewriting the archive failed
pub fn rm(vfs: &mut VirtualFs, args: &[&str]) -> Result<EditResult> {
    let args = FlagArgs::parse(args);
    let path = args.operand(COMMAND)?;
    args.validate(COMMAND, "r")?;

    let key = vfs
        .lookup_key(path)
        .filter(|key| vfs.index().contains(key))
        .ok_or_else(|| Error::not_found(COMMAND, path))?;

    let targets = match vfs.entry(&key) {
        Some(Entry::File(_)) => vec![key],
        _ if !args.has('r') => {
            return Err(Error::IsADirectory {
                command: COMMAND,
                path: path.to_string(),
            });
        }
        _ if key == *vfs.index().root_path() => {
            return Err(Error::RootRemoval {
                command: COMMAND,
                path: path.to_string(),
            });
        }
        _ => vfs.index().keys_containing(key.file_name()),
    };

    log::debug!("rm '{}' selected {} entries", path, targets.len());
    vfs.remove_entries(targets)
}
