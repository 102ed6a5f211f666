//! Confirmation seam for the destructive disk chant.
//!
//! The disk sink can overwrite a block device, so it asks before writing.
//! The question goes through a trait so tests never touch a real terminal.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// The literal token that authorises a disk chant. Anything else aborts,
/// including near-misses like `commence!`.
pub const CONFIRM_TOKEN: &str = "commence";

/// Asks the user whether a destructive write may proceed.
pub trait Confirm {
    /// Warn about `path` and return whether the user typed the exact
    /// confirmation token.
    fn confirm(&mut self, path: &Path) -> io::Result<bool>;
}

/// Interactive confirmation on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, path: &Path) -> io::Result<bool> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write!(
            out,
            "WARNING: if {} is a location on a disk, all space on the disk will be filled. \
             if it is a block device, the filesystem will be overwritten. \
             are you sure you want to do this? \
             if you know what you're doing, enter '{}'.\n\u{ac} ",
            path.display(),
            CONFIRM_TOKEN
        )?;
        out.flush()?;

        let stdin = io::stdin();
        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        Ok(is_confirmation(&line))
    }
}

/// Exact-token check: only the line terminator is stripped before comparing.
pub(crate) fn is_confirmation(line: &str) -> bool {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
        == CONFIRM_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_token_confirms() {
        assert!(is_confirmation("commence\n"));
        assert!(is_confirmation("commence\r\n"));
        assert!(is_confirmation("commence"));
    }

    #[test]
    fn test_near_misses_abort() {
        assert!(!is_confirmation("commence!\n"));
        assert!(!is_confirmation("yes\n"));
        assert!(!is_confirmation("Commence\n"));
        assert!(!is_confirmation(" commence\n"));
        assert!(!is_confirmation("commence \n"));
        assert!(!is_confirmation("\n"));
    }
}
