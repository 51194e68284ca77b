//! Error types for pool operations.

use thiserror::Error;

/// Errors produced by the job pool.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The pool has begun closing; no further submissions are accepted.
    #[error("pool is closed")]
    Closed,
    /// Configuration validation failed at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
