//! Bounded FIFO job queue.
//!
//! Thin wrappers over `crossbeam_channel::bounded` pinning down the
//! contract the pool relies on: `push` blocks the producer while the
//! buffer is full (backpressure), `pop` blocks until a job arrives or the
//! queue is closed and drained. Closing the queue means dropping the
//! producer side; the lifecycle controller guarantees no push is attempted
//! after close by gating on pool state, never by racing a closed channel.

use crossbeam_channel::{Receiver, Sender};

/// Producer half of the bounded job queue.
pub(crate) struct JobSender<T>(Sender<T>);

/// Consumer half of the bounded job queue.
pub(crate) struct JobReceiver<T>(Receiver<T>);

/// Create a bounded FIFO queue with the given capacity.
pub(crate) fn bounded<T>(capacity: usize) -> (JobSender<T>, JobReceiver<T>) {
    let (tx, rx) = crossbeam_channel::bounded(capacity);
    (JobSender(tx), JobReceiver(rx))
}

impl<T> JobSender<T> {
    /// Enqueue a job, blocking while the buffer is full.
    ///
    /// Returns the job back if every receiver is gone (all workers
    /// terminated), so the caller can undo its accounting.
    pub(crate) fn push(&self, job: T) -> Result<(), T> {
        self.0.send(job).map_err(|e| e.into_inner())
    }
}

// Manual Clone impls: deriving would put a spurious `T: Clone` bound on
// the wrappers.
impl<T> Clone for JobSender<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> JobReceiver<T> {
    /// Dequeue the next job, blocking until one arrives.
    ///
    /// Returns `None` once every sender is gone and the buffer is empty:
    /// no more jobs, ever.
    pub(crate) fn pop(&self) -> Option<T> {
        self.0.recv().ok()
    }
}

impl<T> Clone for JobReceiver<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
