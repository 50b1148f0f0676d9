//! Pool configuration
//!
//! Values come from the builder methods or from the environment.

use std::env;
use std::thread;

/// Prefix for worker thread names
pub const DEFAULT_THREAD_NAME: &str = "tidepool-worker";

/// Environment variable holding the worker count
pub const WORKERS_ENV: &str = "TIDEPOOL_WORKERS";

/// Environment variable holding the worker thread name prefix
pub const THREAD_NAME_ENV: &str = "TIDEPOOL_THREAD_NAME";

/// Number of hardware execution units, or 1 when the platform cannot say
pub fn default_workers() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Worker pool configuration parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Number of worker threads, fixed for the life of the pool
    pub workers: usize,
    /// Worker threads are named `<thread_name>-<id>`
    pub thread_name: String,
}

impl PoolConfig {
    /// Create a config with the given worker count
    pub fn new(workers: usize) -> Self {
        Self {
            workers,
            ..Self::default()
        }
    }

    /// Load the config from the environment.
    ///
    /// # Environment Variables
    /// - `TIDEPOOL_WORKERS` - Worker count (default: available parallelism)
    /// - `TIDEPOOL_THREAD_NAME` - Thread name prefix (default: `tidepool-worker`)
    pub fn from_env() -> Self {
        Self {
            workers: env::var(WORKERS_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_workers),
            thread_name: env::var(THREAD_NAME_ENV)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_THREAD_NAME.to_string()),
        }
    }

    /// Set the worker count
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Set the thread name prefix
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PoolConfig::default();
        assert!(config.workers >= 1);
        assert_eq!(config.workers, default_workers());
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);
    }

    #[test]
    fn test_config_builder() {
        let config = PoolConfig::new(3).thread_name("io");
        assert_eq!(config.workers, 3);
        assert_eq!(config.thread_name, "io");
        assert_eq!(config.workers(5).workers, 5);
    }

    #[test]
    fn test_config_from_env() {
        env::set_var(WORKERS_ENV, "6");
        env::set_var(THREAD_NAME_ENV, "crunch");
        let config = PoolConfig::from_env();
        assert_eq!(config.workers, 6);
        assert_eq!(config.thread_name, "crunch");

        env::set_var(WORKERS_ENV, "many");
        env::set_var(THREAD_NAME_ENV, "");
        let config = PoolConfig::from_env();
        assert_eq!(config.workers, default_workers());
        assert_eq!(config.thread_name, DEFAULT_THREAD_NAME);

        env::remove_var(WORKERS_ENV);
        env::remove_var(THREAD_NAME_ENV);
    }
}
