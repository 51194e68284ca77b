//! Configuration models for pool sizing.

pub mod pool;

pub use pool::{PoolConfig, DEFAULT_QUEUE_FACTOR};
