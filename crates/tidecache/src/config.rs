//! Cache configuration
//!
//! Values come from the builder methods or from the environment.

use std::env;

use crate::error::{CacheError, Result};

/// Default number of entries when nothing else is configured
pub const DEFAULT_CAPACITY: usize = 1024;

/// Environment variable read by [`CacheConfig::from_env`]
pub const CAPACITY_ENV: &str = "TIDECACHE_CAPACITY";

/// Cache configuration parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl CacheConfig {
    /// Create a config with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Load the config from the environment.
    ///
    /// # Environment Variables
    /// - `TIDECACHE_CAPACITY` - Maximum cache entries (default: 1024)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var(CAPACITY_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Set the capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Check that the config describes a usable cache
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
