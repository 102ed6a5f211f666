//! The engine: dispatch from a chant specification to its sink driver.

use std::io;

use silicon_chant_core::Sigil;

use crate::cancel::CancelToken;
use crate::confirm::{Confirm, TerminalConfirm};
use crate::error::Result;
use crate::relay::{relay_chant, RELAY_RECV_CAPACITY};
use crate::sink::{disk_chant, heap_chant, net_chant, stack_chant, write_chant};
use crate::spec::ChantSpec;

/// How a chant ended, when it ended cleanly.
///
/// Resource-exhaustion endings (heap, stack) never produce a value; they
/// take the process with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChantOutcome {
    /// The cancellation token was observed.
    Cancelled,
    /// The user declined the destructive-write confirmation. Clean, not an
    /// error.
    Aborted,
}

/// Configuration for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Capacity of the relay's inbound datagram buffer, in bytes.
    pub relay_recv_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            relay_recv_capacity: RELAY_RECV_CAPACITY,
        }
    }
}

/// The interface a dispatcher drives.
///
/// Implementations run the chant to completion; the call blocks for the
/// chant's whole life. The testkit provides a recording fake so dispatch
/// can be exercised without exhausting anything.
pub trait Chanter {
    /// Run one chant of `sigil` through the sink `spec` names.
    fn chant(&mut self, sigil: &Sigil, spec: &ChantSpec) -> Result<ChantOutcome>;
}

/// The real chant engine over the five sink drivers and the UDP relay.
pub struct ChantEngine<C = TerminalConfirm> {
    config: EngineConfig,
    cancel: CancelToken,
    confirm: C,
}

impl ChantEngine<TerminalConfirm> {
    /// Engine with terminal confirmation and default configuration.
    pub fn new() -> Self {
        Self::with_confirm(TerminalConfirm)
    }
}

impl Default for ChantEngine<TerminalConfirm> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Confirm> ChantEngine<C> {
    /// Engine with a custom confirmation seam.
    pub fn with_confirm(confirm: C) -> Self {
        Self {
            config: EngineConfig::default(),
            cancel: CancelToken::new(),
            confirm,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// A clone of the token that stops this engine's chants.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl<C: Confirm> Chanter for ChantEngine<C> {
    fn chant(&mut self, sigil: &Sigil, spec: &ChantSpec) -> Result<ChantOutcome> {
        tracing::debug!("starting {} chant of {} sigil bytes", spec.kind(), sigil.len());

        match spec {
            ChantSpec::Heap => Ok(heap_chant(sigil, &self.cancel)),
            ChantSpec::Stack => Ok(stack_chant(sigil, &self.cancel)),
            ChantSpec::Stdout => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                write_chant(sigil, &self.cancel, &mut out, "stdout")
            }
            ChantSpec::Stderr => {
                let stderr = io::stderr();
                let mut out = stderr.lock();
                write_chant(sigil, &self.cancel, &mut out, "stderr")
            }
            ChantSpec::Disk { path } => {
                disk_chant(sigil, &self.cancel, path, &mut self.confirm)
            }
            ChantSpec::Net { dest } => net_chant(sigil, &self.cancel, *dest),
            ChantSpec::NetRelay { listen_port, dest } => relay_chant(
                sigil,
                &self.cancel,
                *listen_port,
                *dest,
                self.config.relay_recv_capacity,
            ),
        }
    }
}
