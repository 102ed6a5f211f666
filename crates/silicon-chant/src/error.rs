//! Error types for the session layer.

use std::io;
use thiserror::Error;

use silicon_chant_engine::{ChantError, SpecError};

/// Recoverable command-line parse errors. The loop reports them and keeps
/// reading.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The verb (or the whole line) meant nothing.
    #[error("command not recognised: {0} (try typing 'help')")]
    Unknown(String),

    /// The verb was `chant` but its specification did not parse.
    #[error("{0}")]
    Spec(#[from] SpecError),
}

/// Errors from executing a parsed command.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A chant was requested before any sigil existed.
    #[error("no sigil set (try 'sigil <phrase>')")]
    NoSigil,

    /// The chant engine stopped with an error; the session survives.
    #[error("chant failed: {0}")]
    Chant(#[from] ChantError),

    /// The session's own output stream failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
