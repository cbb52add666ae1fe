//! Dense row-major matrices over `i32`, `f32` and `f64`.
//!
//! Elementwise addition is delegated to an [`ElementwiseAddBackend`], the matrix product and
//! transpose run on the calling thread.
//!
//! ```
//! use matrix_lib::Matrix;
//!
//! let a = Matrix::from_rows(&[[1, 2], [3, 4]])?;
//! let b = Matrix::from_rows(&[[5, 6], [7, 8]])?;
//! assert_eq!(a.add(&b)?, Matrix::from_rows(&[[6, 8], [10, 12]])?);
//! assert_eq!(a.dot(&b)?, Matrix::from_rows(&[[19, 22], [43, 50]])?);
//! # Ok::<(), matrix_lib::MatrixError>(())
//! ```
#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::iterator_step_by_zero,
    clippy::string_slice,
    clippy::unimplemented,
    clippy::todo
)]
#![allow(clippy::module_inception)]

pub mod backend;
pub mod element;
pub mod errors;
pub mod matrix;

pub use backend::{Backend, BackendConfig, BackendKind, ElementwiseAddBackend, ParallelBackend, SerialBackend};
pub use element::Element;
pub use errors::{BackendError, MatrixError};
pub use matrix::Matrix;
