//! Worker threads and the queue they share
//!
//! Each worker loops: wait until the queue has work or the pool is
//! stopping, exit once stopping with nothing left, otherwise pop one job and
//! run it with the lock released.
//!
//! A job that panics unwinds its worker. The worker's [`Sentinel`] notices
//! the unwind and starts a replacement in the same slot, so the number of
//! workers stays fixed.

use std::collections::VecDeque;
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, trace, warn};

use crate::stats::PoolStats;

/// A deferred unit of work
pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

/// State guarded by the queue lock
#[derive(Default)]
pub(crate) struct Queue {
    pub(crate) jobs: VecDeque<Job>,
    pub(crate) stop: bool,
}

/// Everything the pool and its workers share
pub(crate) struct Shared {
    pub(crate) queue: Mutex<Queue>,
    pub(crate) available: Condvar,
    pub(crate) stats: PoolStats,
    /// One join handle slot per worker id
    handles: Mutex<Vec<Option<JoinHandle<()>>>>,
    thread_name: String,
}

impl Shared {
    pub(crate) fn new(workers: usize, thread_name: impl Into<String>) -> Self {
        Self {
            queue: Mutex::new(Queue::default()),
            available: Condvar::new(),
            stats: PoolStats::new(),
            handles: Mutex::new((0..workers).map(|_| None).collect()),
            thread_name: thread_name.into(),
        }
    }

    /// Raise the stop flag and wake every waiting worker
    pub(crate) fn stop(&self) {
        self.queue.lock().stop = true;
        self.available.notify_all();
    }

    /// Join every worker, including replacements started while joining
    pub(crate) fn join_all(&self) {
        let slots = self.handles.lock().len();
        for id in 0..slots {
            // A panicking worker fills its slot again before it exits
            while let Some(handle) = self.take_handle(id) {
                if handle.join().is_err() {
                    debug!(worker = id, "joined worker that ended by panic");
                }
            }
        }
    }

    fn take_handle(&self, id: usize) -> Option<JoinHandle<()>> {
        self.handles.lock()[id].take()
    }

    /// Block until a job is available, or return `None` once stopping with
    /// an empty queue
    fn next_job(&self) -> Option<Job> {
        let mut queue = self.queue.lock();
        loop {
            if let Some(job) = queue.jobs.pop_front() {
                return Some(job);
            }
            if queue.stop {
                return None;
            }
            self.available.wait(&mut queue);
        }
    }
}

/// Start the worker for slot `id`, replacing whatever handle the slot held
pub(crate) fn spawn(id: usize, shared: &Arc<Shared>) -> io::Result<()> {
    let name = format!("{}-{}", shared.thread_name, id);
    let worker_shared = Arc::clone(shared);
    let handle = thread::Builder::new()
        .name(name)
        .spawn(move || run(id, &worker_shared))?;

    shared.handles.lock()[id] = Some(handle);
    Ok(())
}

/// Respawns the worker if it unwinds out of [`run`]
struct Sentinel<'a> {
    id: usize,
    shared: &'a Arc<Shared>,
}

impl Drop for Sentinel<'_> {
    fn drop(&mut self) {
        if !thread::panicking() {
            return;
        }

        self.shared.stats.record_panicked();
        warn!(worker = self.id, "work item panicked, replacing worker");
        if let Err(e) = spawn(self.id, self.shared) {
            warn!(worker = self.id, error = %e, "failed to replace worker");
        }
    }
}

fn run(id: usize, shared: &Arc<Shared>) {
    let _sentinel = Sentinel { id, shared };
    debug!(worker = id, "worker started");

    while let Some(job) = shared.next_job() {
        trace!(worker = id, "executing work item");
        job();
        shared.stats.record_completed();
    }

    debug!(worker = id, "worker exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn push(shared: &Shared, job: impl FnOnce() + Send + 'static) {
        shared.queue.lock().jobs.push_back(Box::new(job));
        shared.stats.record_submitted();
    }

    #[test]
    fn test_worker_drains_then_exits() {
        let shared = Arc::new(Shared::new(1, "test-worker"));
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..10 {
            let counter = Arc::clone(&counter);
            push(&shared, move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        shared.stop();

        spawn(0, &shared).unwrap();
        shared.join_all();
        shared.join_all();

        assert_eq!(counter.load(Ordering::SeqCst), 10);
        assert_eq!(shared.stats.completed(), 10);
        assert!(shared.queue.lock().jobs.is_empty());
    }

    #[test]
    fn test_next_job_returns_none_when_stopped_and_empty() {
        let shared = Shared::new(0, "idle");
        shared.stop();
        assert!(shared.next_job().is_none());
    }

    #[test]
    fn test_worker_thread_name() {
        let shared = Arc::new(Shared::new(4, "named"));
        let (tx, rx) = std::sync::mpsc::channel();

        push(&shared, move || {
            let name = thread::current().name().map(str::to_owned);
            tx.send(name).unwrap();
        });

        spawn(3, &shared).unwrap();
        assert_eq!(rx.recv().unwrap().as_deref(), Some("named-3"));

        shared.stop();
        shared.join_all();
    }

    #[test]
    fn test_panicking_worker_is_replaced_in_its_slot() {
        let shared = Arc::new(Shared::new(1, "respawn"));
        let (tx, rx) = std::sync::mpsc::channel();

        push(&shared, || panic!("work item failed"));
        push(&shared, move || {
            let name = thread::current().name().map(str::to_owned);
            tx.send(name).unwrap();
        });

        spawn(0, &shared).unwrap();
        assert_eq!(rx.recv().unwrap().as_deref(), Some("respawn-0"));

        shared.stop();
        shared.join_all();

        assert!(shared.handles.lock()[0].is_none());
        assert_eq!(shared.stats.panicked(), 1);
        assert_eq!(shared.stats.completed(), 1);
        assert_eq!(shared.stats.in_flight(), 0);
    }
}
