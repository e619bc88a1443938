//! wc: count lines, words and characters of a file.

use super::args::FlagArgs;
use crate::{Error, Result, VirtualFs};

const COMMAND: &str = "wc";

/// Line, word and character counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    /// Number of `\n` characters.
    pub lines: usize,
    /// Number of whitespace-delimited tokens.
    pub words: usize,
    /// Number of Unicode scalar values.
    pub chars: usize,
}

impl Counts {
    /// Counts `text`.
    ///
    /// ```rust
    /// use zipvfs::commands::Counts;
    ///
    /// let counts = Counts::of("Hello world!");
    /// assert_eq!((counts.lines, counts.words, counts.chars), (0, 2, 12));
    /// ```
    pub fn of(text: &str) -> Self {
        Self {
            lines: text.matches('\n').count(),
            words: text.split_whitespace().count(),
            chars: text.chars().count(),
        }
    }
}

/// Runs `wc` with the tokens following the command name.
///
/// Accepts the flags `-l` (lines), `-w` (words) and `-m` (characters) in any
/// order and combination. Without flags all three are printed. Selected
/// counts always come in the order lines, words, characters, followed by the
/// path exactly as typed.
///
/// # Errors
///
/// - [`Error::MissingOperand`] if no path is given
/// - [`Error::InvalidOption`] for a flag other than `l`, `w` or `m`
/// - [`Error::NoSuchFile`] if the path is missing or is a directory
/// - [`Error::Unreadable`] if the file cannot be read or is not UTF-8
pub fn wc(vfs: &VirtualFs, args: &[&str]) -> Result<String> {
    let args = FlagArgs::parse(args);
    let path = args.operand(COMMAND)?;
    args.validate(COMMAND, "lwm")?;

    let key = vfs
        .lookup_key(path)
        .filter(|key| vfs.index().is_file(key))
        .ok_or_else(|| Error::NoSuchFile {
            command: COMMAND,
            path: path.to_string(),
        })?;

    let unreadable = |reason: String| Error::Unreadable {
        command: COMMAND,
        path: path.to_string(),
        reason,
    };
    let data = vfs.read_file(&key).map_err(|e| unreadable(e.to_string()))?;
    let text = String::from_utf8(data).map_err(|e| unreadable(e.to_string()))?;
    let counts = Counts::of(&text);

    let all = !args.has_flags();
    let mut fields = Vec::with_capacity(4);
    if all || args.has('l') {
        fields.push(counts.lines.to_string());
    }
    if all || args.has('w') {
        fields.push(counts.words.to_string());
    }
    if all || args.has('m') {
        fields.push(counts.chars.to_string());
    }
    fields.push(path.to_string());
    Ok(fields.join(" "))
}
