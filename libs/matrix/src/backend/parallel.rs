//! Rayon backend.

use super::{check_lengths, serial::add_slices, ElementwiseAddBackend};
use crate::{element::Element, errors::BackendError};
use rayon::{prelude::*, ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;
use tracing::trace;

/// Element count below which the parallel backend adds serially.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Splits the addition across rayon worker threads.
///
/// Buffers shorter than the threshold are added on the calling thread, where the cost of
/// waking the pool outweighs the work.
#[derive(Debug, Clone)]
pub struct ParallelBackend {
    threshold: usize,
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelBackend {
    /// Runs on rayon's global pool.
    pub fn new(threshold: usize) -> Self {
        Self { threshold, pool: None }
    }

    /// Runs on a dedicated pool of `threads` workers.
    pub fn with_threads(threshold: usize, threads: usize) -> Result<Self, BackendError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("matrix-add-{index}"))
            .build()
            .map_err(|e| BackendError::ThreadPool(e.to_string()))?;
        Ok(Self { threshold, pool: Some(Arc::new(pool)) })
    }

    /// Element count below which additions stay on the calling thread.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Number of worker threads additions are split across.
    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }
}

impl Default for ParallelBackend {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLEL_THRESHOLD)
    }
}

impl ElementwiseAddBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn elementwise_add<T: Element>(&self, lhs: &[T], rhs: &[T], out: &mut [T], count: usize) -> Result<(), BackendError> {
        check_lengths(lhs, rhs, out, count)?;
        if count < self.threshold {
            trace!("Adding {count} elements serially, below threshold {}", self.threshold);
            add_slices(lhs, rhs, out);
            return Ok(());
        }

        trace!("Adding {count} elements on {} threads", self.threads());
        match &self.pool {
            Some(pool) => pool.install(|| par_add_slices(lhs, rhs, out)),
            None => par_add_slices(lhs, rhs, out),
        }
        Ok(())
    }
}

fn par_add_slices<T: Element>(lhs: &[T], rhs: &[T], out: &mut [T]) {
    out.par_iter_mut().zip(lhs.par_iter().zip(rhs.par_iter())).for_each(|(dst, (left, right))| {
        *dst = left.sum(*right);
    });
}
