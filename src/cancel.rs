//! Cooperative cancellation for long-running traversals
//!
//! A traversal checks the token once per outer loop iteration, after the
//! current node has been fully processed. Cancellation is never preemptive:
//! in-flight observer callbacks always complete, and a canceled traversal
//! returns `Ok`, leaving partial status/cost state on the graph.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag, cheap to clone across threads.
///
/// The driver keeps one clone and hands another to the traversal; calling
/// [`CancelToken::cancel`] from any thread makes the traversal exit cleanly
/// at its next check.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, un-canceled token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested
    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
