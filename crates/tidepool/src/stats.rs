//! Pool statistics tracking

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for work passing through a pool
#[derive(Debug, Default)]
pub struct PoolStats {
    submitted: AtomicU64,
    completed: AtomicU64,
    panicked: AtomicU64,
}

impl PoolStats {
    /// Create new stats tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a work item entering the queue
    pub fn record_submitted(&self) {
        self.submitted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a work item that ran to completion
    pub fn record_completed(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a work item that panicked and unwound its worker
    pub fn record_panicked(&self) {
        self.panicked.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total submitted work items
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    /// Get total completed work items
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Get total work items that panicked
    pub fn panicked(&self) -> u64 {
        self.panicked.load(Ordering::Relaxed)
    }

    /// Work items queued or running: submitted minus finished, where a
    /// panicked item counts as finished
    pub fn in_flight(&self) -> u64 {
        self.submitted().saturating_sub(self.completed() + self.panicked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_basic() {
        let stats = PoolStats::new();

        stats.record_submitted();
        stats.record_submitted();
        stats.record_completed();

        assert_eq!(stats.submitted(), 2);
        assert_eq!(stats.completed(), 1);
        assert_eq!(stats.in_flight(), 1);

        stats.record_panicked();
        assert_eq!(stats.panicked(), 1);
        assert_eq!(stats.in_flight(), 0);
    }
}
