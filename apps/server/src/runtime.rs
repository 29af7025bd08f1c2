//! Tokio runtime construction for the server binary.

use anyhow::{Context, Result};
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

const DEFAULT_WORKER_THREADS: usize = 4;
const STACK_SIZE: usize = 4 * 1024 * 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(300);

/// Worker count: the configured value clamped to `1..=1024`, else the available parallelism.
#[must_use]
pub fn worker_threads(configured: Option<usize>) -> usize {
    configured.map_or_else(
        || available_parallelism().map_or(DEFAULT_WORKER_THREADS, std::num::NonZeroUsize::get),
        |n| n.clamp(1, 1024),
    )
}

/// Multi-threaded runtime sized from configuration.
pub fn build(configured: Option<usize>) -> Result<Runtime> {
    Builder::new_multi_thread()
        .worker_threads(worker_threads(configured))
        .thread_name("nshop-worker")
        .thread_stack_size(STACK_SIZE)
        .thread_keep_alive(THREAD_KEEP_ALIVE)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")
}
