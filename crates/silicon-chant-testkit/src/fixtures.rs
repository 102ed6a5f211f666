//! Test fixtures and helpers.
//!
//! The real sink drivers exhaust memory, the stack, or a device on purpose.
//! These fakes satisfy the same interfaces so dispatch and session logic
//! can be tested in bounded time.

use std::io;
use std::path::Path;

use silicon_chant_core::Sigil;
use silicon_chant_engine::{
    ChantError, ChantOutcome, ChantSpec, Chanter, Confirm, Result, SpecError,
};

/// A bounded fake engine that records every chant instead of running it.
#[derive(Debug)]
pub struct RecordingChanter {
    calls: Vec<(Sigil, ChantSpec)>,
    outcome: ChantOutcome,
}

impl RecordingChanter {
    /// Fake engine that reports every chant as cancelled.
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            outcome: ChantOutcome::Cancelled,
        }
    }

    /// Fake engine that reports a fixed outcome.
    pub fn with_outcome(outcome: ChantOutcome) -> Self {
        Self {
            calls: Vec::new(),
            outcome,
        }
    }

    /// Every (sigil, spec) pair this fake was asked to chant, in order.
    pub fn calls(&self) -> &[(Sigil, ChantSpec)] {
        &self.calls
    }
}

impl Default for RecordingChanter {
    fn default() -> Self {
        Self::new()
    }
}

impl Chanter for RecordingChanter {
    fn chant(&mut self, sigil: &Sigil, spec: &ChantSpec) -> Result<ChantOutcome> {
        self.calls.push((sigil.clone(), spec.clone()));
        Ok(self.outcome)
    }
}

/// A fake engine that fails every chant with an unknown-kind error.
#[derive(Debug, Default)]
pub struct FailingChanter;

impl Chanter for FailingChanter {
    fn chant(&mut self, _sigil: &Sigil, spec: &ChantSpec) -> Result<ChantOutcome> {
        Err(ChantError::Spec(SpecError::UnknownKind(
            spec.kind().to_string(),
        )))
    }
}

/// Confirmation seam that always answers the same way, no terminal needed.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _path: &Path) -> io::Result<bool> {
        Ok(self.0)
    }
}
