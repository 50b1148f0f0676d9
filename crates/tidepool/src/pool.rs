//! WorkerPool: fixed set of threads draining a shared FIFO queue

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::PoolConfig;
use crate::error::{PoolError, Result};
use crate::stats::PoolStats;
use crate::worker::{self, Shared};

/// Fixed-size pool of worker threads
///
/// Work runs in submission order across the pool, on whichever worker is
/// free. Dropping the pool (or calling [`WorkerPool::shutdown`]) waits for
/// every queued work item to finish.
pub struct WorkerPool {
    /// Number of worker slots, fixed at construction
    size: usize,

    /// Queue, stop flag, counters and worker handles shared with the workers
    shared: Arc<Shared>,

    /// Set once the workers have been joined
    stopped: bool,
}

impl WorkerPool {
    /// Create a pool with `worker_count` workers
    ///
    /// # Returns
    /// * `Result<WorkerPool>` - `PoolError::NoWorkers` for a zero count,
    ///   `PoolError::Spawn` if a thread could not be started
    pub fn new(worker_count: usize) -> Result<Self> {
        Self::from_config(PoolConfig::new(worker_count))
    }

    /// Create a pool with one worker per available hardware execution unit
    pub fn with_default_workers() -> Result<Self> {
        Self::from_config(PoolConfig::default())
    }

    /// Create a pool from a config
    pub fn from_config(config: PoolConfig) -> Result<Self> {
        if config.workers == 0 {
            return Err(PoolError::NoWorkers);
        }

        let shared = Arc::new(Shared::new(config.workers, config.thread_name));

        for id in 0..config.workers {
            if let Err(e) = worker::spawn(id, &shared) {
                // Tear down whatever did start before reporting
                shared.stop();
                shared.join_all();
                return Err(PoolError::Spawn(e));
            }
        }

        debug!(workers = config.workers, "worker pool started");

        Ok(Self {
            size: config.workers,
            shared,
            stopped: false,
        })
    }

    /// Queue a work item
    ///
    /// Appends to the tail of the queue and wakes one idle worker. Never
    /// waits for the work to start.
    pub fn enqueue<F>(&self, work: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut queue = self.shared.queue.lock();
            queue.jobs.push_back(Box::new(work));
            self.shared.stats.record_submitted();
        }
        trace!("work item queued");
        self.shared.available.notify_one();
    }

    /// Number of workers, fixed for the life of the pool
    pub fn worker_count(&self) -> usize {
        self.size
    }

    /// Number of queued work items no worker has picked up yet
    pub fn pending(&self) -> usize {
        self.shared.queue.lock().jobs.len()
    }

    /// Get pool statistics
    pub fn stats(&self) -> &PoolStats {
        &self.shared.stats
    }

    /// Drain the queue and stop every worker
    ///
    /// Blocks until all work queued so far has run. Dropping the pool does
    /// the same.
    pub fn shutdown(mut self) {
        self.terminate();
    }

    fn terminate(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        debug!(workers = self.size, "stopping worker pool");
        self.shared.stop();
        self.shared.join_all();
        debug!("worker pool stopped");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.terminate();
    }
}
