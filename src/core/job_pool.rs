//! Job pool: a fixed worker set draining a bounded queue, with
//! drain-aware lifecycle control.
//!
//! # Design Principles
//!
//! - **No polling**: producers block on the bounded channel, workers block
//!   on recv, waiters block on a Condvar
//! - **One critical section**: the lifecycle state and the pending-work
//!   counter share a mutex, so the submit check-and-increment and the
//!   close transition can never interleave into a leaked or
//!   double-counted job
//! - **Clean shutdown**: dropping the pool's sender seals the queue;
//!   workers drain the buffer and exit naturally
//!
//! # Example
//!
//! ```rust,ignore
//! let pool = JobPool::new(PoolConfig::new().with_worker_count(4), handler)?;
//! pool.submit(job)?;
//! pool.wait();
//! pool.close();
//! ```

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use tracing::{debug, info, warn};

use crate::config::PoolConfig;
use crate::core::handler::JobHandler;
use crate::core::queue::{self, JobReceiver, JobSender};
use crate::core::PoolError;

/// Lifecycle state of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Accepting submissions.
    Open,
    /// Queue sealed, workers draining, new submissions rejected.
    Closing,
    /// Fully drained; terminal.
    Closed,
}

/// Mutable pool state.
///
/// `state` and `pending` live under one mutex: submit must observe
/// `Open` and increment in the same critical section that `close` uses
/// for its transition.
struct PoolState<T> {
    state: Lifecycle,
    /// Jobs admitted but not yet completed.
    pending: usize,
    /// Producer side of the queue. `None` once the queue is sealed.
    tx: Option<JobSender<T>>,
}

/// State shared between the pool handle and its workers.
struct Shared<T, H> {
    handler: H,
    state: Mutex<PoolState<T>>,
    /// Signaled each time `pending` reaches zero.
    drained: Condvar,
}

/// Bounded worker pool over a caller-supplied [`JobHandler`].
///
/// A fixed set of worker threads is spawned at construction and drains a
/// FIFO queue of capacity `worker_count * queue_factor`. `submit` blocks
/// while the queue is full, giving producers backpressure instead of
/// unbounded buffering.
///
/// # Handler failures
///
/// Handler panics are not caught: an unwinding handler terminates its
/// worker thread, permanently shrinking effective concurrency, and the
/// job it was running is never reported complete. The pool assumes a
/// well-behaved handler.
pub struct JobPool<T, H>
where
    T: Send + 'static,
    H: JobHandler<T>,
{
    shared: Arc<Shared<T, H>>,
    workers: Mutex<Vec<JoinHandle<()>>>,
    worker_count: usize,
    queue_capacity: usize,
}

impl<T, H> JobPool<T, H>
where
    T: Send + 'static,
    H: JobHandler<T>,
{
    /// Create a new pool and spawn its worker threads.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: PoolConfig, handler: H) -> Result<Self, PoolError> {
        config.validate().map_err(PoolError::InvalidConfig)?;

        let queue_capacity = config.queue_capacity();
        let (tx, rx) = queue::bounded(queue_capacity);

        let shared = Arc::new(Shared {
            handler,
            state: Mutex::new(PoolState {
                state: Lifecycle::Open,
                pending: 0,
                tx: Some(tx),
            }),
            drained: Condvar::new(),
        });

        let mut workers = Vec::with_capacity(config.worker_count);
        for worker_id in 0..config.worker_count {
            workers.push(spawn_worker(worker_id, rx.clone(), Arc::clone(&shared)));
        }
        // Workers now hold the only receivers.
        drop(rx);

        info!(
            worker_count = config.worker_count,
            queue_capacity, "job pool started"
        );

        Ok(Self {
            shared,
            workers: Mutex::new(workers),
            worker_count: config.worker_count,
            queue_capacity,
        })
    }

    /// Submit one job for processing.
    ///
    /// Blocks while the queue is full, applying backpressure to the
    /// producer; admission is the only suspension point. A job accepted
    /// here is guaranteed to be processed and accounted exactly once,
    /// even if `close` races this call.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Closed` if the pool is no longer `Open`. The
    /// error path mutates nothing: the job is dropped, the pending count
    /// untouched.
    pub fn submit(&self, job: T) -> Result<(), PoolError> {
        let tx = {
            let mut state = self.shared.state.lock();
            if state.state != Lifecycle::Open {
                return Err(PoolError::Closed);
            }
            let Some(tx) = state.tx.clone() else {
                // Open always carries a live sender; treat absence as closed.
                return Err(PoolError::Closed);
            };
            // Counted only after the open check, inside the critical
            // section close() uses for its transition.
            state.pending += 1;
            tx
        };

        // Blocking push outside the lock: a full queue stalls this
        // producer, not the whole pool. The sender clone keeps the
        // channel alive past a racing close, so the job counted above is
        // always drained.
        if tx.push(job).is_err() {
            // Unreachable unless every worker was killed by handler
            // panics; undo the accounting so wait() can still return.
            let mut state = self.shared.state.lock();
            state.pending -= 1;
            if state.pending == 0 {
                self.shared.drained.notify_all();
            }
            warn!("job rejected: all workers have terminated");
            return Err(PoolError::Closed);
        }

        debug!("job submitted");
        Ok(())
    }

    /// Block until every admitted job has completed.
    ///
    /// Callable repeatedly, and concurrently with `submit`. A caller
    /// expecting a final wait must stop submitting first, since jobs
    /// racing in are not guaranteed to be covered.
    pub fn wait(&self) {
        let mut state = self.shared.state.lock();
        while state.pending > 0 {
            self.shared.drained.wait(&mut state);
        }
    }

    /// Like [`wait`](Self::wait), but gives up after `timeout`.
    ///
    /// Returns `true` if the timeout elapsed before the pool drained,
    /// `false` if every admitted job completed first. Timing out does not
    /// cancel anything: workers keep running to completion.
    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut state = self.shared.state.lock();
        while state.pending > 0 {
            if self
                .shared
                .drained
                .wait_until(&mut state, deadline)
                .timed_out()
            {
                return state.pending > 0;
            }
        }
        false
    }

    /// Close the pool: reject new submissions, drain every admitted job,
    /// and join the worker threads.
    ///
    /// Idempotent. The first caller seals the queue; every caller blocks
    /// until the pending count reaches zero. A `submit` racing this call
    /// either loses (gets `PoolError::Closed`, no state change) or wins
    /// (its job is already counted and therefore drained before any
    /// `close` returns).
    pub fn close(&self) {
        {
            let mut state = self.shared.state.lock();
            if state.state == Lifecycle::Open {
                state.state = Lifecycle::Closing;
                // Dropping the pool's sender seals the queue; workers
                // drain the buffer and exit on disconnect.
                state.tx = None;
                debug!("pool closing, queue sealed");
            }
            while state.pending > 0 {
                self.shared.drained.wait(&mut state);
            }
            state.state = Lifecycle::Closed;
        }

        // Workers exit once the sealed queue is empty; joining here means
        // Closed also implies no pool threads remain. Concurrent closers
        // race to drain the handle list, so each joins whatever is left.
        let handles: Vec<_> = self.workers.lock().drain(..).collect();
        for handle in handles {
            if handle.join().is_err() {
                warn!("worker terminated by handler panic");
            }
        }

        info!("job pool closed");
    }

    /// Number of jobs admitted but not yet completed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.shared.state.lock().pending
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.shared.state.lock().state
    }

    /// Number of worker threads.
    #[must_use]
    pub const fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Capacity of the bounded queue.
    #[must_use]
    pub const fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }
}

impl<T, H> Drop for JobPool<T, H>
where
    T: Send + 'static,
    H: JobHandler<T>,
{
    fn drop(&mut self) {
        // Seal the queue so workers exit instead of leaking blocked
        // threads, but do not join: workers finish any buffered jobs
        // detached. Explicit close() is required for a drained shutdown.
        let mut state = self.shared.state.lock();
        if state.state == Lifecycle::Open {
            state.state = Lifecycle::Closing;
            state.tx = None;
            debug!("job pool dropped without close; queue sealed, workers detached");
        }
    }
}

/// Spawn one worker thread.
fn spawn_worker<T, H>(
    worker_id: usize,
    rx: JobReceiver<T>,
    shared: Arc<Shared<T, H>>,
) -> JoinHandle<()>
where
    T: Send + 'static,
    H: JobHandler<T>,
{
    thread::Builder::new()
        .name(format!("jp-worker-{worker_id}"))
        .spawn(move || {
            debug!(worker_id, "worker started");

            // Blocking pop, no polling. `None` means the queue is sealed
            // and drained: exit.
            while let Some(job) = rx.pop() {
                shared.handler.handle(job);

                // Completion is reported exactly once per job, after the
                // handler returns.
                let mut state = shared.state.lock();
                state.pending -= 1;
                if state.pending == 0 {
                    shared.drained.notify_all();
                }
            }

            debug!(worker_id, "worker exiting");
        })
        .expect("failed to spawn worker thread")
}
