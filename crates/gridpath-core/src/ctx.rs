//! Cooperative cancellation: [`Context`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// A search polls its context at every step boundary and stops early once
/// cancellation has been requested. Clones share the same flag, and the
/// token is `Send`, so an embedding application can trip it from another
/// thread while the search runs.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}
