//! # Silicon Chant
//!
//! A toolbox for magic on the command line.
//!
//! A computer sigil is not an image file depicting a sigil; it is the only
//! thing a computer understands, a binary string partitioned into bytes.
//! This crate ties the pure fold ([`silicon_chant_core`]) and the chant
//! engine ([`silicon_chant_engine`]) into an interactive session:
//!
//! - [`Session`] - holds the one mutable cell, the current sigil, and
//!   dispatches typed commands into a [`Chanter`]
//! - [`Command`] - the typed REPL grammar
//! - [`repl::run`] - the blocking line loop around a session
//!
//! Chants block the session for their whole life; the loop resumes only
//! when a chant is cancelled, errors out, or is declined.
//!
//! [`Chanter`]: silicon_chant_engine::Chanter

pub mod command;
pub mod error;
pub mod geomantic;
pub mod help;
pub mod repl;
pub mod session;

pub use command::Command;
pub use error::{CommandError, SessionError};
pub use session::{Flow, Session};
