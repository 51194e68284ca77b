//! Job handler trait: the seam between the pool and its caller.

/// Caller-supplied handler invoked once per submitted job.
///
/// Handlers run synchronously on a dedicated worker thread and return
/// nothing. Result and failure signaling is the handler's own concern,
/// typically by forwarding through a side channel owned by the caller.
///
/// # Panics
///
/// The pool does not catch panics. A handler that unwinds terminates its
/// worker thread, permanently reducing the pool's effective concurrency,
/// and the panicked job is never reported as complete, so a subsequent
/// `wait` covering it will not return.
pub trait JobHandler<T>: Send + Sync + 'static {
    /// Process one job payload.
    fn handle(&self, job: T);
}

/// Blanket implementation: any compatible closure is a handler.
impl<T, F> JobHandler<T> for F
where
    F: Fn(T) + Send + Sync + 'static,
{
    fn handle(&self, job: T) {
        self(job);
    }
}
