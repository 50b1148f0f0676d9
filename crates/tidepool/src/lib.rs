//! # tidepool
//!
//! Fixed-size worker pool for deferred work.
//!
//! ## Architecture
//! - **Queue**: `VecDeque` of boxed closures, consumed first-in-first-out
//! - **Workers**: a fixed set of OS threads created with the pool and joined
//!   when it is dropped
//! - **Synchronization**: one `parking_lot` mutex over the queue and stop
//!   flag, a condition variable for idle workers; work runs with the lock
//!   released
//!
//! ```
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use tidepool::WorkerPool;
//!
//! let pool = WorkerPool::new(4).unwrap();
//! let counter = Arc::new(AtomicUsize::new(0));
//!
//! for _ in 0..100 {
//!     let counter = Arc::clone(&counter);
//!     pool.enqueue(move || {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     });
//! }
//!
//! pool.shutdown();
//! assert_eq!(counter.load(Ordering::SeqCst), 100);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod pool;
mod stats;
mod worker;

pub use config::{
    default_workers, PoolConfig, DEFAULT_THREAD_NAME, THREAD_NAME_ENV, WORKERS_ENV,
};
pub use error::{PoolError, Result};
pub use pool::WorkerPool;
pub use stats::PoolStats;
