//! Shell command handlers.
//!
//! Each handler takes the [`VirtualFs`](crate::VirtualFs) and the tokens that
//! followed the command name, and either returns its output or an [`Error`]
//! whose message is the line the shell prints.
//!
//! | Command | Handler | Output |
//! |---------|---------|--------|
//! | `cd [path]` | [`cd`] | none |
//! | `ls [path]` | [`ls`] | child names |
//! | `wc [-lwm] <path>` | [`wc`] | counts and path |
//! | `rm [-r] <path>` | [`rm`] | [`EditResult`](crate::EditResult) |

mod args;
mod cd;
mod ls;
mod rm;
mod wc;

pub use cd::cd;
pub use ls::ls;
pub use rm::rm;
pub use wc::{Counts, wc};

use crate::{Error, Result};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `cd`, with the first argument if any.
    Cd(Option<&'a str>),
    /// `ls`, with the first argument if any.
    Ls(Option<&'a str>),
    /// `wc` and all of its arguments.
    Wc(Vec<&'a str>),
    /// `rm` and all of its arguments.
    Rm(Vec<&'a str>),
    /// `exit`.
    Exit,
}

impl<'a> Command<'a> {
    /// Splits `line` on whitespace and matches the first token exactly.
    ///
    /// Returns `Ok(None)` for a blank line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandNotFound`] if the first token is not a known
    /// command.
    pub fn parse(line: &'a str) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let command = match name {
            "cd" => Command::Cd(tokens.next()),
            "ls" => Command::Ls(tokens.next()),
            "wc" => Command::Wc(tokens.collect()),
            "rm" => Command::Rm(tokens.collect()),
            "exit" => Command::Exit,
            other => {
                return Err(Error::CommandNotFound {
                    command: other.to_string(),
                });
            }
        };
        Ok(Some(command))
    }

    /// Returns the command word.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Cd(_) => "cd",
            Command::Ls(_) => "ls",
            Command::Wc(_) => "wc",
            Command::Rm(_) => "rm",
            Command::Exit => "exit",
        }
    }
}
