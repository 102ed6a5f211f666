//! Cooperative cancellation for chant loops.
//!
//! A chant normally ends only through outside intervention. The token makes
//! that intervention observable in-process: every sink driver polls it once
//! per iteration, so a harness can stop a loop deterministically instead of
//! waiting for the OS to run out of something.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation flag shared between a chant and whoever may
/// need to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create a fresh, uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. All clones observe it.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
