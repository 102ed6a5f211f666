//! # Silicon Chant Engine
//!
//! The chant engine: unbounded-repetition sinks for a sigil.
//!
//! A chant is a sink-specific loop that re-emits a sigil until something
//! external ends it: a [`CancelToken`], an unrecoverable I/O error, a
//! declined confirmation (disk), or — for the heap and stack sinks — the
//! operating system refusing further memory. The engine never imposes its
//! own iteration limits.
//!
//! ## Key Types
//!
//! - [`ChantSpec`] - Tagged sink selection with validated arguments
//! - [`Chanter`] - The interface a dispatcher drives
//! - [`ChantEngine`] - The real implementation over the five sink drivers
//!   and the UDP relay
//!
//! Everything here is blocking and single-threaded. The only suspension
//! point in the whole engine is the relay's non-blocking receive, which
//! returns immediately whether or not a datagram is waiting.

pub mod cancel;
pub mod confirm;
pub mod engine;
pub mod error;
pub mod relay;
pub mod sink;
pub mod spec;

pub use cancel::CancelToken;
pub use confirm::{Confirm, TerminalConfirm, CONFIRM_TOKEN};
pub use engine::{ChantEngine, ChantOutcome, Chanter, EngineConfig};
pub use error::{ChantError, Result, SpecError};
pub use relay::RELAY_RECV_CAPACITY;
pub use spec::ChantSpec;
