//! Crate errors.

use thiserror::Error;

/// Matrix error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// Operand shapes are incompatible with the operation.
    #[error("shape mismatch in {operation}: left is {left:?}, right is {right:?}")]
    ShapeMismatch {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Shape of the left operand as (height, width).
        left: (usize, usize),
        /// Shape of the right operand as (height, width).
        right: (usize, usize),
    },

    /// A literal row does not have the width of the first row.
    #[error("ragged literal: row {row} has {found} entries, expected {expected}")]
    RaggedLiteral {
        /// Index of the offending row.
        row: usize,
        /// Width taken from the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The buffer for a new matrix could not be allocated.
    #[error("failed to allocate a buffer of {elements} elements")]
    Allocation {
        /// Number of elements requested.
        elements: usize,
    },

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match height x width = {1}")]
    Build(usize, usize),

    /// Integer overflow computing a size or an offset.
    #[error("integer overflow")]
    Arithmetic,

    /// Entry outside the matrix.
    #[error("index ({row}, {col}) out of bounds")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The addition backend failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),
}

/// Elementwise addition backend error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum BackendError {
    /// The buffers handed to the backend don't all hold `count` elements.
    #[error("buffer length mismatch: count is {count}, lhs has {lhs}, rhs has {rhs}, out has {out}")]
    LengthMismatch {
        /// Requested element count.
        count: usize,
        /// Length of the left input.
        lhs: usize,
        /// Length of the right input.
        rhs: usize,
        /// Length of the output.
        out: usize,
    },

    /// The dedicated thread pool could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),
}
