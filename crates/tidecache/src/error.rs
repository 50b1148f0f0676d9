//! Error types for tidecache

use thiserror::Error;

/// Result type alias for tidecache operations
pub type Result<T> = std::result::Result<T, CacheError>;

/// Error types for cache operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CacheError {
    /// Key not present in the cache
    #[error("Key not found")]
    NotFound,

    /// Cache was configured with room for nothing
    #[error("Cache capacity must be greater than 0")]
    ZeroCapacity,
}
