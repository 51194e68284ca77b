//! Pool sizing configuration.

use serde::{Deserialize, Serialize};

/// Default queue capacity multiplier.
pub const DEFAULT_QUEUE_FACTOR: usize = 10;

/// Sizing configuration for a [`JobPool`](crate::core::JobPool).
///
/// Both values are fixed once the pool is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Number of worker threads.
    pub worker_count: usize,
    /// Queue capacity multiplier: the bounded queue holds
    /// `worker_count * queue_factor` jobs before producers block.
    pub queue_factor: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            worker_count: num_cpus::get(),
            queue_factor: DEFAULT_QUEUE_FACTOR,
        }
    }
}

impl PoolConfig {
    /// Create a configuration with default sizing: one worker per
    /// logical CPU and a queue factor of 10.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of worker threads.
    #[must_use]
    pub const fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Set the queue capacity multiplier.
    #[must_use]
    pub const fn with_queue_factor(mut self, queue_factor: usize) -> Self {
        self.queue_factor = queue_factor;
        self
    }

    /// Bounded queue capacity derived from the sizing values.
    #[must_use]
    pub const fn queue_capacity(&self) -> usize {
        self.worker_count * self.queue_factor
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.worker_count == 0 {
            return Err("worker_count must be greater than 0".into());
        }
        if self.queue_factor == 0 {
            return Err("queue_factor must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a pool configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
