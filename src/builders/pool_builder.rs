//! Fluent construction of job pools.

use crate::config::PoolConfig;
use crate::core::{JobHandler, JobPool, PoolError};

/// Fluent builder for [`JobPool`].
///
/// A convenience front end over [`PoolConfig`] + [`JobPool::new`] for
/// call sites that size the pool inline:
///
/// ```
/// use prometheus_job_pool::JobPoolBuilder;
///
/// let pool = JobPoolBuilder::new()
///     .worker_count(2)
///     .queue_factor(5)
///     .build(|job: String| drop(job))?;
///
/// pool.submit("report-1".to_string())?;
/// pool.close();
/// # Ok::<(), prometheus_job_pool::PoolError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JobPoolBuilder {
    config: PoolConfig,
}

impl JobPoolBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    #[must_use]
    pub const fn worker_count(mut self, worker_count: usize) -> Self {
        self.config.worker_count = worker_count;
        self
    }

    /// Set the queue capacity multiplier.
    #[must_use]
    pub const fn queue_factor(mut self, queue_factor: usize) -> Self {
        self.config.queue_factor = queue_factor;
        self
    }

    /// Replace the sizing set so far with a complete configuration.
    #[must_use]
    pub fn config(mut self, config: PoolConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the pool, spawning its workers.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::InvalidConfig` if the sizing is invalid.
    pub fn build<T, H>(self, handler: H) -> Result<JobPool<T, H>, PoolError>
    where
        T: Send + 'static,
        H: JobHandler<T>,
    {
        JobPool::new(self.config, handler)
    }
}
