//! Error types for the chant engine.

use std::io;
use std::net::{SocketAddr, SocketAddrV4};
use std::path::PathBuf;
use thiserror::Error;

/// Parse errors for chant specifications.
///
/// These are always recoverable: the dispatcher reports them and keeps
/// reading commands.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("missing chant type (try 'help chant')")]
    MissingKind,

    #[error("chant type not recognised: {0}")]
    UnknownKind(String),

    #[error("{kind} chant needs {what}")]
    MissingArgument {
        kind: &'static str,
        what: &'static str,
    },

    #[error("invalid address: {0} (expected dotted-decimal ipv4, e.g. 127.0.0.1:888)")]
    InvalidAddress(String),

    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Errors that end a chant.
///
/// Heap and stack exhaustion never appear here: those sinks terminate the
/// process through the allocator or the guard page, by design. A relay
/// receive that would block is also not an error; the loop carries on.
#[derive(Debug, Error)]
pub enum ChantError {
    /// Malformed chant specification.
    #[error("invalid chant: {0}")]
    Spec(#[from] SpecError),

    /// Could not open the disk chant's target for writing.
    #[error("could not open device {path}: {source}")]
    OpenDevice { path: PathBuf, source: io::Error },

    /// Could not create an ephemeral UDP socket.
    #[error("could not open socket: {0}")]
    OpenSocket(#[source] io::Error),

    /// Could not bind the relay's listen socket.
    #[error("could not bind socket on port {port} (do you have the right permissions?): {source}")]
    Bind { port: u16, source: io::Error },

    /// Could not connect the outbound socket to its destination.
    #[error("could not connect socket to {dest} (is it a valid address?): {source}")]
    Connect {
        dest: SocketAddrV4,
        source: io::Error,
    },

    /// Could not switch the relay's listen socket to non-blocking mode.
    ///
    /// Reported distinctly from other socket failures: the relay cannot run
    /// at all without a non-blocking inbound side.
    #[error("could not set listen socket to non-blocking: {0}")]
    SetNonblocking(#[source] io::Error),

    /// A stream or device write failed (device full counts).
    #[error("write to {target} failed: {source}")]
    Write { target: String, source: io::Error },

    /// An outbound datagram send failed.
    #[error("send to {dest} failed: {source}")]
    Send {
        dest: SocketAddr,
        source: io::Error,
    },

    /// A relay receive failed with something other than "no data yet".
    #[error("receive on listen socket failed: {0}")]
    Recv(#[source] io::Error),

    /// The destructive-write confirmation could not be read.
    #[error("could not read confirmation: {0}")]
    Prompt(#[source] io::Error),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, ChantError>;
