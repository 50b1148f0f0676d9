//! Hit, miss, insert and eviction counters for [`SharedLruCache`]
//!
//! Counters are relaxed atomics: each one is exact, but a
//! [`StatsSnapshot`] taken while other threads are using the cache may mix
//! values from slightly different moments.
//!
//! [`SharedLruCache`]: crate::SharedLruCache

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters, updated by the cache as it is used
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
    inserts: AtomicU64,
}

/// Counter values copied out of [`CacheStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lookups that found their key
    pub hits: u64,
    /// Lookups that missed
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
    /// New keys admitted
    pub inserts: u64,
}

impl StatsSnapshot {
    /// Total `get` calls
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups that hit, 0.0 when nothing was looked up
    pub fn hit_ratio(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }
}

fn bump(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
}

fn read(counter: &AtomicU64) -> u64 {
    counter.load(Ordering::Relaxed)
}

impl CacheStats {
    /// All counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// A `get` found its key
    pub fn record_hit(&self) {
        bump(&self.hits);
    }

    /// A `get` missed
    pub fn record_miss(&self) {
        bump(&self.misses);
    }

    /// A `put` pushed out the least recently used entry
    pub fn record_eviction(&self) {
        bump(&self.evictions);
    }

    /// A `put` admitted a key that was not present
    pub fn record_insert(&self) {
        bump(&self.inserts);
    }

    /// Hits so far
    pub fn hits(&self) -> u64 {
        read(&self.hits)
    }

    /// Misses so far
    pub fn misses(&self) -> u64 {
        read(&self.misses)
    }

    /// Evictions so far
    pub fn evictions(&self) -> u64 {
        read(&self.evictions)
    }

    /// Inserts so far
    pub fn inserts(&self) -> u64 {
        read(&self.inserts)
    }

    /// See [`StatsSnapshot::hit_ratio`]
    pub fn hit_ratio(&self) -> f64 {
        self.snapshot().hit_ratio()
    }

    /// Copy every counter out
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            evictions: self.evictions(),
            inserts: self.inserts(),
        }
    }

    /// Zero every counter
    pub fn reset(&self) {
        for counter in [&self.hits, &self.misses, &self.evictions, &self.inserts] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}
