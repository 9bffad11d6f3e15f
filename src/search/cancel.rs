//! Cooperative cancellation for long searches.
//!
//! A `CancelFlag` is shared between the caller and a strategy. The search
//! polls it between nodes; once raised, the strategy returns the best move
//! it has fully evaluated so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop signal.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every holder of this flag to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Lower the flag so the next search runs normally.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
