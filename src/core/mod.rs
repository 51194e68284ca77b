//! Core pool primitive: bounded queue, worker set, and lifecycle control.

pub mod error;
pub mod handler;
pub mod job_pool;
pub(crate) mod queue;

pub use error::{AppResult, PoolError};
pub use handler::JobHandler;
pub use job_pool::{JobPool, Lifecycle};
