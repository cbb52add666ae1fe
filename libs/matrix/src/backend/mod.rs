//! Elementwise addition backends.
//!
//! [`Matrix::add`](crate::Matrix::add) hands three flat buffers and an element count to an
//! [`ElementwiseAddBackend`]. The backend must:
//!
//! - treat `lhs` and `rhs` as read-only,
//! - write every slot of `out` exactly once with `lhs[k] + rhs[k]`,
//! - return only after all slots are written.
//!
//! The borrow rules keep `out` from aliasing either input for the duration of the call.
//!
//! # Available backends
//! - [`SerialBackend`] - a plain loop on the calling thread.
//! - [`ParallelBackend`] - a rayon data-parallel loop, optionally on a dedicated thread pool.
//! - [`Backend`] - the configured choice between the two.

pub mod config;
pub mod parallel;
pub mod serial;

pub use config::{BackendConfig, BackendKind};
pub use parallel::ParallelBackend;
pub use serial::SerialBackend;

use crate::{element::Element, errors::BackendError};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

/// Backend used by [`Matrix::add`](crate::Matrix::add) and the `+` operator.
static SHARED_BACKEND: Lazy<Backend> = Lazy::new(|| {
    let config = BackendConfig::from_env();
    Backend::from_config(&config).unwrap_or_else(|e| {
        warn!("Failed to build configured backend, falling back to default: {e}");
        Backend::default()
    })
});

/// A synchronous elementwise addition capability.
pub trait ElementwiseAddBackend {
    /// Backend name, used in logs.
    fn name(&self) -> &'static str;

    /// Computes `out[k] = lhs[k] + rhs[k]` for every `k` in `0..count`.
    ///
    /// Fails without writing anything if any buffer length differs from `count`.
    fn elementwise_add<T: Element>(&self, lhs: &[T], rhs: &[T], out: &mut [T], count: usize) -> Result<(), BackendError>;
}

/// Checks that all buffers handed to a backend hold exactly `count` elements.
pub(crate) fn check_lengths<T>(lhs: &[T], rhs: &[T], out: &[T], count: usize) -> Result<(), BackendError> {
    if lhs.len() != count || rhs.len() != count || out.len() != count {
        return Err(BackendError::LengthMismatch { count, lhs: lhs.len(), rhs: rhs.len(), out: out.len() });
    }
    Ok(())
}

/// The configured addition backend.
#[derive(Debug, Clone)]
pub enum Backend {
    /// Serial host loop.
    Serial(SerialBackend),

    /// Rayon data-parallel loop.
    Parallel(ParallelBackend),
}

impl Backend {
    /// Builds a backend from its configuration.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let backend = match config.kind {
            BackendKind::Serial => Backend::Serial(SerialBackend),
            BackendKind::Auto | BackendKind::Parallel => match config.num_threads {
                Some(threads) => Backend::Parallel(ParallelBackend::with_threads(config.parallel_threshold, threads)?),
                None => Backend::Parallel(ParallelBackend::new(config.parallel_threshold)),
            },
        };
        debug!(
            "Built {} backend (kind = {:?}, threshold = {}, threads = {:?})",
            backend.name(),
            config.kind,
            config.parallel_threshold,
            config.num_threads
        );
        Ok(backend)
    }

    /// The process-wide backend, configured from the environment on first use.
    ///
    /// See [`BackendConfig::from_env`] for the variables read.
    pub fn shared() -> &'static Backend {
        &SHARED_BACKEND
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Parallel(ParallelBackend::default())
    }
}

impl ElementwiseAddBackend for Backend {
    fn name(&self) -> &'static str {
        match self {
            Backend::Serial(backend) => backend.name(),
            Backend::Parallel(backend) => backend.name(),
        }
    }

    fn elementwise_add<T: Element>(&self, lhs: &[T], rhs: &[T], out: &mut [T], count: usize) -> Result<(), BackendError> {
        match self {
            Backend::Serial(backend) => backend.elementwise_add(lhs, rhs, out, count),
            Backend::Parallel(backend) => backend.elementwise_add(lhs, rhs, out, count),
        }
    }
}
