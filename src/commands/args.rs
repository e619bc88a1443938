//! Flag and operand extraction shared by `wc` and `rm`.

use crate::{Error, Result};

/// Flags and the path operand of a command line.
///
/// Leading tokens starting with `-` contribute their characters as flags,
/// so `-l -w` and `-lw` are equivalent. The first token that does not start
/// with `-` is the operand; anything after it is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlagArgs<'a> {
    /// Flag characters, sorted and deduplicated.
    flags: Vec<char>,
    operand: Option<&'a str>,
}

impl<'a> FlagArgs<'a> {
    pub(crate) fn parse(tokens: &[&'a str]) -> Self {
        let mut flags = Vec::new();
        let mut operand = None;
        for token in tokens {
            match token.strip_prefix('-') {
                Some(chars) => flags.extend(chars.chars()),
                None => {
                    operand = Some(*token);
                    break;
                }
            }
        }
        flags.sort_unstable();
        flags.dedup();
        Self { flags, operand }
    }

    /// Fails on the first flag (in sorted order) not listed in `allowed`.
    pub(crate) fn validate(&self, command: &'static str, allowed: &str) -> Result<()> {
        match self.flags.iter().find(|flag| !allowed.contains(**flag)) {
            Some(&flag) => Err(Error::InvalidOption { command, flag }),
            None => Ok(()),
        }
    }

    /// Returns the operand or a missing-operand error.
    pub(crate) fn operand(&self, command: &'static str) -> Result<&'a str> {
        self.operand.ok_or(Error::MissingOperand { command })
    }

    pub(crate) fn has(&self, flag: char) -> bool {
        self.flags.binary_search(&flag).is_ok()
    }

    pub(crate) fn has_flags(&self) -> bool {
        !self.flags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_concatenate_and_sort() {
        let args = FlagArgs::parse(&["-wl", "-m", "-l", "file.txt"]);
        assert_eq!(args.flags, vec!['l', 'm', 'w']);
        assert_eq!(args.operand, Some("file.txt"));
        assert!(args.has('w'));
        assert!(!args.has('r'));
    }

    #[test]
    fn test_operand_stops_flag_parsing() {
        let args = FlagArgs::parse(&["-r", "dir", "-z"]);
        assert_eq!(args.flags, vec!['r']);
        assert_eq!(args.operand("rm").unwrap(), "dir");
    }

    #[test]
    fn test_missing_operand() {
        let args = FlagArgs::parse(&["-l"]);
        assert!(matches!(
            args.operand("wc"),
            Err(Error::MissingOperand { command: "wc" })
        ));
        assert!(FlagArgs::parse(&[]).operand("wc").is_err());
    }

    #[test]
    fn test_validate_reports_first_invalid_flag() {
        let args = FlagArgs::parse(&["-zl", "-a", "x"]);
        match args.validate("wc", "lwm") {
            Err(Error::InvalidOption { flag, .. }) => assert_eq!(flag, 'a'),
            other => panic!("unexpected: {other:?}"),
        }
        assert!(FlagArgs::parse(&["-lwm", "x"]).validate("wc", "lwm").is_ok());
    }

    #[test]
    fn test_lone_dash_adds_no_flag() {
        let args = FlagArgs::parse(&["-", "x"]);
        assert!(!args.has_flags());
        assert_eq!(args.operand, Some("x"));
    }
}
