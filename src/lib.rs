//! # Prometheus Job Pool
//!
//! A bounded worker pool primitive for the Prometheus AI Platform.
//!
//! This library provides a single-process, in-memory concurrency primitive:
//! producers submit opaque jobs, a fixed set of dedicated worker threads
//! drains a bounded FIFO queue and invokes a caller-supplied handler once
//! per job, and callers can block until all admitted work has finished or
//! force an orderly close.
//!
//! ## Core Problem Solved
//!
//! Fan-out stages in the platform (result post-processing, artifact
//! uploads, audit fan-in) need to run caller code concurrently without
//! unbounded memory growth or ad-hoc thread spawning:
//!
//! - **Bounded buffering**: a full queue blocks producers (backpressure)
//!   instead of growing without limit
//! - **Fixed concurrency**: worker threads are spawned once and reused
//! - **Drain-aware shutdown**: `close` rejects new work, finishes every
//!   job already admitted, and joins the workers
//!
//! ## Key Features
//!
//! - **Blocking submit with backpressure**: `submit` parks the producer
//!   while the queue is full; admission is the only suspension point
//! - **Exact completion accounting**: every admitted job is counted once
//!   and reported complete once; `wait` returns only when the count hits
//!   zero
//! - **Race-free close**: a submission racing `close` either loses with
//!   `PoolError::Closed` and no state change, or wins and is guaranteed
//!   to be drained before `close` returns
//! - **No polling**: waiting uses Condvar signaling throughout
//!
//! ## Example
//!
//! ```
//! use prometheus_job_pool::{JobPool, PoolConfig};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let processed = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&processed);
//!
//! let pool = JobPool::new(
//!     PoolConfig::new().with_worker_count(2),
//!     move |_job: u64| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     },
//! )?;
//!
//! for job in 0..3 {
//!     pool.submit(job)?;
//! }
//!
//! pool.wait();
//! assert_eq!(processed.load(Ordering::SeqCst), 3);
//!
//! pool.close();
//! assert!(pool.submit(99).is_err());
//! # Ok::<(), prometheus_job_pool::PoolError>(())
//! ```
//!
//! For complete examples, see `tests/job_pool_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core pool primitive: bounded queue, worker set, and lifecycle control.
pub mod core;
/// Configuration models for pool sizing.
pub mod config;
/// Builders to construct pools from configuration.
pub mod builders;
/// Shared utilities.
pub mod util;

pub use crate::builders::JobPoolBuilder;
pub use crate::config::PoolConfig;
pub use crate::core::{AppResult, JobHandler, JobPool, Lifecycle, PoolError};
