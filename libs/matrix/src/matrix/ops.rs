//! Matrix Operations

use super::matrix::{allocate, element_count, Matrix};
use crate::{
    backend::{Backend, ElementwiseAddBackend},
    element::Element,
    errors::MatrixError,
};
use tracing::debug;

impl<T: Element> Matrix<T> {
    /// Elementwise sum, computed by the shared backend.
    ///
    /// Both matrices must have the same shape.
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        self.add_with(other, Backend::shared())
    }

    /// Elementwise sum, computed by `backend`.
    pub fn add_with<B: ElementwiseAddBackend>(&self, other: &Matrix<T>, backend: &B) -> Result<Matrix<T>, MatrixError> {
        if self.shape() != other.shape() {
            return Err(self.shape_mismatch("add", other));
        }
        let count = self.len();
        let mut out = Matrix::zeros(self.height, self.width)?;
        debug!("Dispatching {}x{} add to the {} backend", self.height, self.width, backend.name());
        backend.elementwise_add(&self.data, &other.data, &mut out.data, count)?;
        Ok(out)
    }

    /// Naive matrix multiplication, A: MxK * B: KxN -> C: MxN, O(KMN).
    ///
    /// Each entry is accumulated left to right over `K`, so floating point results are
    /// reproducible. Integer products wrap on overflow.
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        if self.width != other.height {
            return Err(self.shape_mismatch("dot", other));
        }
        let mut data = allocate(element_count(self.height, other.width)?)?;
        for i in 0..self.height {
            let row = self.row(i)?;
            for j in 0..other.width {
                let mut acc = T::ZERO;
                for (h, left) in row.iter().enumerate() {
                    acc = acc.sum(left.product(*other.entry(h, j)?));
                }
                data.push(acc);
            }
        }
        Ok(Matrix { data, height: self.height, width: other.width })
    }

    /// Transposed copy, an MxN matrix becomes NxM.
    pub fn transpose(&self) -> Result<Matrix<T>, MatrixError> {
        let mut data = allocate(self.len())?;
        for j in 0..self.width {
            for i in 0..self.height {
                data.push(*self.entry(i, j)?);
            }
        }
        Ok(Matrix { data, height: self.width, width: self.height })
    }

    fn shape_mismatch(&self, operation: &'static str, other: &Matrix<T>) -> MatrixError {
        MatrixError::ShapeMismatch { operation, left: self.shape(), right: other.shape() }
    }
}

impl<T: Element> std::ops::Add<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        self.add_with(other, Backend::shared())
    }
}

impl<T: Element> std::ops::Add<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: &Matrix<T>) -> Self::Output {
        self.add_with(other, Backend::shared())
    }
}

impl<T: Element> std::ops::Add for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, other: Matrix<T>) -> Self::Output {
        self.add_with(&other, Backend::shared())
    }
}

impl<T: Element> std::ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.dot(other)
    }
}

impl<T: Element> std::ops::Mul<&Matrix<T>> for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: &Matrix<T>) -> Self::Output {
        self.dot(other)
    }
}

impl<T: Element> std::ops::Mul for Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, other: Matrix<T>) -> Self::Output {
        self.dot(&other)
    }
}
