//! Dense row-major matrices.

pub mod display;
pub mod matrix;
pub mod ops;

pub use matrix::Matrix;
