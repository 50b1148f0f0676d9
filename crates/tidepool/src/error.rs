//! Error types for tidepool

use std::io;

use thiserror::Error;

/// Result type alias for tidepool operations
pub type Result<T> = std::result::Result<T, PoolError>;

/// Error types for pool construction
///
/// Running work never produces a `PoolError`: what a work item does with its
/// own failures is up to the caller.
#[derive(Debug, Error)]
pub enum PoolError {
    /// Pool asked for zero workers
    #[error("Worker pool needs at least one worker")]
    NoWorkers,

    /// The OS refused to start a worker thread
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}
