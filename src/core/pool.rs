//! Bounded-concurrency task pool for upstream fetches.
//!
//! Items run in batches: inside a batch at most `workers` tasks are in
//! flight, each under its own timeout, and a fixed delay separates batches
//! to stay under provider rate limits.

use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::config::{PipelineConfig, MAX_WORKER_CONCURRENCY};
use crate::error::{PipelineError, Result};

#[derive(Debug, Clone)]
pub struct TaskPool {
    workers: usize,
    timeout: Duration,
    batch_size: usize,
    batch_delay: Duration,
}

impl TaskPool {
    /// Pool without batching delay; `workers` is clamped to 1..=32
    pub fn new(workers: usize, timeout: Duration) -> Self {
        Self {
            workers: workers.clamp(1, MAX_WORKER_CONCURRENCY),
            timeout,
            batch_size: usize::MAX,
            batch_delay: Duration::ZERO,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.effective_concurrency(), config.task_timeout)
            .with_batching(config.batch_size, config.batch_delay)
    }

    pub fn with_batching(mut self, batch_size: usize, batch_delay: Duration) -> Self {
        self.batch_size = batch_size.max(1);
        self.batch_delay = batch_delay;
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Run `task` over every item.
    ///
    /// Results come back in input order. A failed or timed-out task yields
    /// its error in place and never cancels the others.
    pub async fn run<I, T, F, Fut>(&self, items: Vec<I>, task: F) -> Vec<Result<T>>
    where
        F: Fn(I) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let total = items.len();
        let mut results = Vec::with_capacity(total);
        let mut remaining = items.into_iter().peekable();
        let mut batch_index = 0usize;

        while remaining.peek().is_some() {
            let batch: Vec<I> = remaining.by_ref().take(self.batch_size).collect();
            debug!(batch = batch_index, size = batch.len(), total, "Processing batch");

            let batch_results: Vec<Result<T>> = stream::iter(batch)
                .map(|item| self.guard(task(item)))
                .buffered(self.workers)
                .collect()
                .await;
            results.extend(batch_results);

            batch_index += 1;
            if remaining.peek().is_some() && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        results
    }

    /// Run a single task under the pool timeout
    pub async fn run_one<T>(&self, task: impl Future<Output = Result<T>>) -> Result<T> {
        self.guard(task).await
    }

    async fn guard<T>(&self, task: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, task).await {
            Ok(result) => result,
            Err(_) => {
                let millis = self.timeout.as_millis() as u64;
                warn!(timeout_ms = millis, "Task timed out");
                Err(PipelineError::Timeout(millis))
            }
        }
    }
}

impl Default for TaskPool {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}
