//! Session state and command dispatch.
//!
//! A session owns exactly one piece of mutable state: the current sigil.
//! There is no process-wide current sigil; independent sessions never see
//! each other.

use std::io::Write;

use silicon_chant_core::Sigil;
use silicon_chant_engine::{ChantOutcome, Chanter};

use crate::command::Command;
use crate::error::{Result, SessionError};
use crate::geomantic;
use crate::help;

/// Whether the loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One interactive session: the current sigil plus the engine that chants
/// it.
pub struct Session<E> {
    engine: E,
    sigil: Option<Sigil>,
}

impl<E: Chanter> Session<E> {
    /// A fresh session with no sigil set.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            sigil: None,
        }
    }

    /// The current sigil, if one has been folded this session.
    pub fn current_sigil(&self) -> Option<&Sigil> {
        self.sigil.as_ref()
    }

    /// The engine reference.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Execute one parsed command, writing any response to `out`.
    ///
    /// A `Chant` command blocks until the chant ends. Chant failures come
    /// back as errors so the caller can report them and keep the session
    /// alive.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        match command {
            Command::ShowSigil => {
                match &self.sigil {
                    Some(sigil) => writeln!(out, "current sigil: {}", sigil)?,
                    None => writeln!(out, "current sigil: (none)")?,
                }
                Ok(Flow::Continue)
            }
            Command::MakeSigil(phrase) => {
                let sigil = Sigil::from_phrase(phrase.as_bytes());
                writeln!(out, "current sigil: {}", sigil)?;
                self.sigil = Some(sigil);
                Ok(Flow::Continue)
            }
            Command::Chant(spec) => {
                let sigil = self.sigil.as_ref().ok_or(SessionError::NoSigil)?;
                match self.engine.chant(sigil, &spec)? {
                    ChantOutcome::Cancelled => writeln!(out, "chant ended")?,
                    ChantOutcome::Aborted => writeln!(out, "chant aborted")?,
                }
                Ok(Flow::Continue)
            }
            Command::Geomantic => {
                let sigil = self.sigil.as_ref().ok_or(SessionError::NoSigil)?;
                geomantic::render(sigil, out)?;
                Ok(Flow::Continue)
            }
            Command::Help(topic) => {
                match topic.as_deref() {
                    Some(topic) => help::topic_help(topic, out)?,
                    None => help::general_help(out)?,
                }
                Ok(Flow::Continue)
            }
            Command::End => Ok(Flow::Quit),
        }
    }
}
