//! SharedLruCache: thread-safe handle around [`LruCache`]
//!
//! A single mutex guards the recency list and the index together, so every
//! `get` and `put` is atomic with respect to the others.

use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Cloneable, thread-safe LRU cache
///
/// Clones share the same entries and statistics.
pub struct SharedLruCache<K, V> {
    /// LRU cache behind one lock
    cache: Arc<Mutex<LruCache<K, V>>>,

    /// Cache statistics
    stats: Arc<CacheStats>,

    /// Cache capacity
    capacity: usize,
}

impl<K, V> SharedLruCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    /// Create a new shared cache with the given capacity
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            stats: Arc::new(CacheStats::new()),
            capacity,
        }
    }

    /// Create a shared cache from a validated config
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.capacity))
    }

    /// Get a copy of the value and mark it most recently used
    ///
    /// # Returns
    /// * `Result<V>` - The value, or `CacheError::NotFound`
    pub fn get(&self, key: &K) -> Result<V> {
        let mut cache = self.cache.lock();
        match cache.get(key) {
            Ok(value) => {
                self.stats.record_hit();
                Ok(value.clone())
            }
            Err(e) => {
                self.stats.record_miss();
                Err(e)
            }
        }
    }

    /// Insert or update a value, evicting the least recently used entry when
    /// a new key arrives at a full cache
    pub fn put(&self, key: K, value: V) {
        let mut cache = self.cache.lock();
        let is_new = !cache.contains(&key);
        let evicted = cache.put(key, value);
        drop(cache);

        if is_new {
            self.stats.record_insert();
        }
        if evicted.is_some() {
            self.stats.record_eviction();
        }
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&self, key: &K) -> Option<V> {
        self.cache.lock().remove(key)
    }

    /// Check for a key without touching the recency order
    pub fn contains(&self, key: &K) -> bool {
        self.cache.lock().contains(key)
    }

    /// Get current number of entries
    pub fn size(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Get cache capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get cache statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every entry and reset the statistics
    pub fn clear(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
        self.stats.reset();
    }
}

impl<K, V> Clone for SharedLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            stats: Arc::clone(&self.stats),
            capacity: self.capacity,
        }
    }
}
