//! Shell configuration.
//!
//! The configuration is a CSV file whose first record holds the host name
//! shown in the prompt and the location of the archive:
//!
//! ```text
//! myhost,archive.zip
//! ```
//!
//! A relative archive location is taken relative to the directory of the
//! configuration file, not the process working directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Host name and archive location of a shell session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Display name used in the prompt.
    pub hostname: String,
    /// Location of the ZIP archive.
    pub archive: PathBuf,
}

impl Config {
    /// Creates a configuration from its parts.
    pub fn new(hostname: impl Into<String>, archive: impl Into<PathBuf>) -> Self {
        Self {
            hostname: hostname.into(),
            archive: archive.into(),
        }
    }

    /// Reads the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or its first
    /// record does not have two fields.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let config = Self::parse(&text, base)?;
        log::debug!(
            "Loaded config '{}': host '{}', archive '{}'",
            path.display(),
            config.hostname,
            config.archive.display()
        );
        Ok(config)
    }

    /// Parses configuration text, resolving a relative archive location
    /// against `base_dir`.
    ///
    /// Only the first non-blank line is read. Fields are trimmed and may be
    /// wrapped in double quotes; further fields are ignored.
    ///
    /// ```rust
    /// use std::path::Path;
    /// use zipvfs::Config;
    ///
    /// let config = Config::parse("\"my host\", fs.zip\n", Path::new("/etc/vfs"))?;
    /// assert_eq!(config.hostname, "my host");
    /// assert_eq!(config.archive, Path::new("/etc/vfs/fs.zip"));
    /// # Ok::<(), zipvfs::Error>(())
    /// ```
    pub fn parse(text: &str, base_dir: &Path) -> Result<Self> {
        let record = text
            .lines()
            .find(|line| !line.trim().is_empty())
            .ok_or_else(|| Error::Config("configuration file is empty".into()))?;

        let fields = split_record(record);
        let [hostname, archive, ..] = fields.as_slice() else {
            return Err(Error::Config(format!(
                "expected 'hostname,archive', found {} field(s)",
                fields.len()
            )));
        };
        if hostname.is_empty() || archive.is_empty() {
            return Err(Error::Config("hostname and archive must not be empty".into()));
        }

        let archive = Path::new(archive);
        let archive = if archive.is_relative() {
            base_dir.join(archive)
        } else {
            archive.to_path_buf()
        };
        Ok(Self::new(hostname.as_str(), archive))
    }
}

/// Splits one CSV record into trimmed, unquoted fields.
///
/// Commas inside double quotes do not split, and `""` inside quotes is a
/// literal quote.
fn split_record(record: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if quoted && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields.iter().map(|f| f.trim().to_string()).collect()
}
