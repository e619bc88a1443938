//! The command interpreter.
//!
//! [`Shell`] ties a host name to a [`VirtualFs`] and turns input lines into
//! output. It does no terminal I/O itself: [`Shell::execute`] returns what to
//! print, and the caller decides where it goes.
//!
//! ```rust,no_run
//! use zipvfs::{Outcome, Shell, VirtualFs};
//!
//! let mut shell = Shell::new("host", VirtualFs::open("fs.zip")?);
//! for line in ["ls", "cd folder1", "wc file2.txt", "exit"] {
//!     print!("{}", shell.prompt());
//!     match shell.execute(line) {
//!         Ok(Outcome::Continue(Some(output))) => println!("{}", output),
//!         Ok(Outcome::Continue(None)) => {}
//!         Ok(Outcome::Exit(message)) => {
//!             println!("{}", message);
//!             break;
//!         }
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! # Ok::<(), zipvfs::Error>(())
//! ```

use crate::commands::{self, Command};
use crate::{Config, Result, VirtualFs};

/// Message printed when the session ends through `exit`.
pub const EXIT_MESSAGE: &str = "Exiting shell...";

/// What the caller should do after a line was executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading input; print the output if there is any.
    Continue(Option<String>),
    /// Print the message and end the session.
    Exit(String),
}

/// An interactive session over one archive.
#[derive(Debug)]
pub struct Shell {
    hostname: String,
    vfs: VirtualFs,
}

impl Shell {
    /// Creates a shell over an opened filesystem.
    pub fn new(hostname: impl Into<String>, vfs: VirtualFs) -> Self {
        Self {
            hostname: hostname.into(),
            vfs,
        }
    }

    /// Opens the archive named by `config`.
    ///
    /// # Errors
    ///
    /// Returns the load error of [`VirtualFs::open`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let vfs = VirtualFs::open(&config.archive)?;
        Ok(Self::new(config.hostname.clone(), vfs))
    }

    /// Returns the host name shown in the prompt.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the filesystem.
    pub fn vfs(&self) -> &VirtualFs {
        &self.vfs
    }

    /// Returns the prompt, e.g. `host:/folder1$ `.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.hostname, self.vfs.cwd())
    }

    /// Executes one input line.
    ///
    /// Blank lines produce no output. Command failures come back as `Err`;
    /// their `Display` is the message to show, and the session can go on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandNotFound`](crate::Error::CommandNotFound) for
    /// an unknown command, otherwise the handler's error.
    pub fn execute(&mut self, line: &str) -> Result<Outcome> {
        let Some(command) = Command::parse(line)? else {
            return Ok(Outcome::Continue(None));
        };
        log::trace!("Executing {}: {:?}", command.name(), command);

        let output = match command {
            Command::Cd(path) => {
                commands::cd(&mut self.vfs, path)?;
                None
            }
            Command::Ls(path) => {
                let names = commands::ls(&self.vfs, path)?;
                (!names.is_empty()).then(|| names.join("\n"))
            }
            Command::Wc(args) => Some(commands::wc(&self.vfs, &args)?),
            Command::Rm(args) => {
                let result = commands::rm(&mut self.vfs, &args)?;
                log::info!(
                    "Removed {} entries, {} remain",
                    result.entries_deleted,
                    result.total_entries()
                );
                None
            }
            Command::Exit => return Ok(Outcome::Exit(EXIT_MESSAGE.to_string())),
        };
        Ok(Outcome::Continue(output))
    }
}
