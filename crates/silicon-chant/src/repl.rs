//! The blocking line loop around a session.

use std::io::{self, BufRead, Write};

use silicon_chant_engine::Chanter;

use crate::command::Command;
use crate::error::SessionError;
use crate::session::{Flow, Session};

/// The interactive prompt.
pub const PROMPT: &str = "sc \u{ac} ";

/// Read commands from `input` until `end` or EOF, dispatching into the
/// session and reporting recoverable errors inline.
///
/// The whole line is lowercased before parsing, phrase included. While a
/// chant runs the loop is blocked; there is no in-band way to interrupt
/// one, by design.
pub fn run<E, R, W>(session: &mut Session<E>, mut input: R, out: &mut W) -> io::Result<()>
where
    E: Chanter,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // EOF closes the session as cleanly as `end`
            writeln!(out)?;
            return Ok(());
        }

        let lowered = line.to_lowercase();
        let command = match Command::parse(&lowered) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match session.execute(command, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => return Ok(()),
            // The session's own output stream failing is not recoverable
            Err(SessionError::Io(e)) => return Err(e),
            Err(e) => writeln!(out, "{}", e)?,
        }
    }
}
