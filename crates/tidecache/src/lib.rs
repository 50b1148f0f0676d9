//! # tidecache
//!
//! Bounded key-value cache with least-recently-used eviction.
//!
//! ## Architecture
//! - **HashMap**: AHash index from key to slot handle (O(1))
//! - **LRU List**: Doubly-linked list over a slot arena for promotion and
//!   eviction (O(1))
//! - **Sharing**: [`SharedLruCache`] puts the list and the index behind one
//!   mutex for use across threads
//!
//! ```
//! use tidecache::{CacheError, LruCache};
//!
//! let mut cache = LruCache::new(2);
//! cache.put(1, 100);
//! cache.put(2, 200);
//! cache.get(&1).unwrap();
//! cache.put(3, 300);
//!
//! assert_eq!(cache.get(&2), Err(CacheError::NotFound));
//! assert_eq!(cache.get(&1), Ok(&100));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod lru;
mod shared;
mod stats;


pub use config::{CacheConfig, CAPACITY_ENV, DEFAULT_CAPACITY};
pub use error::{CacheError, Result};
pub use lru::{Iter, LruCache};
pub use shared::SharedLruCache;
pub use stats::{CacheStats, StatsSnapshot};
