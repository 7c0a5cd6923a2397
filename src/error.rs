//! Failure taxonomy.

use std::collections::TryReserveError;

/// Errors reported by queue operations.
///
/// Every failure is recoverable and leaves the queue observably unchanged.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// Node storage could not be reserved.
    #[error("failed to reserve node storage: {0}")]
    Alloc(#[from] TryReserveError),

    /// Removal from an empty queue.
    #[error("queue is empty")]
    Empty,
}
