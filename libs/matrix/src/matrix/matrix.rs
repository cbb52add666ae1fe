//! Matrix.

use crate::{element::Element, errors::MatrixError};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Dense matrix stored in row-major order.
///
/// The entry at row `i`, column `j` lives at offset `i * width + j` of the buffer. The shape is
/// fixed at construction and every operation returns a new matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Element> {
    /// Row-major entries.
    pub(crate) data: Vec<T>,

    /// Number of rows.
    pub(crate) height: usize,

    /// Number of columns.
    pub(crate) width: usize,
}

/// Number of entries in a `height` x `width` matrix.
pub(crate) fn element_count(height: usize, width: usize) -> Result<usize, MatrixError> {
    height.checked_mul(width).ok_or(MatrixError::Arithmetic)
}

/// An empty buffer able to hold `elements` entries without reallocating.
pub(crate) fn allocate<T>(elements: usize) -> Result<Vec<T>, MatrixError> {
    let mut data = Vec::new();
    data.try_reserve_exact(elements).map_err(|_| MatrixError::Allocation { elements })?;
    Ok(data)
}

impl<T: Element> Matrix<T> {
    /// New matrix from row-major data.
    pub fn new(data: Vec<T>, height: usize, width: usize) -> Result<Self, MatrixError> {
        let n = element_count(height, width)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, height, width })
    }

    /// Matrix from a literal list of rows.
    ///
    /// The width is the length of the first row, and every other row must match it.
    ///
    /// ```
    /// use matrix_lib::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
    /// assert_eq!(m.shape(), (2, 2));
    /// # Ok::<(), matrix_lib::MatrixError>(())
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        for (row, values) in rows.iter().enumerate() {
            let found = values.as_ref().len();
            if found != width {
                return Err(MatrixError::RaggedLiteral { row, expected: width, found });
            }
        }
        let mut data = allocate(element_count(height, width)?)?;
        for values in rows {
            data.extend_from_slice(values.as_ref());
        }
        Ok(Matrix { data, height, width })
    }

    /// Matrix with entries drawn independently and uniformly from `[-1, 1)`.
    pub fn random<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> Result<Self, MatrixError> {
        let n = element_count(height, width)?;
        let mut data = allocate(n)?;
        data.extend((0..n).map(|_| T::sample_unit(rng)));
        Ok(Matrix { data, height, width })
    }

    /// Random matrix drawn from a generator seeded with `seed`.
    ///
    /// The same seed always yields the same matrix.
    pub fn random_with_seed(height: usize, width: usize, seed: u64) -> Result<Self, MatrixError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(height, width, &mut rng)
    }

    /// Random matrix drawn from the thread-local generator.
    pub fn random_from_entropy(height: usize, width: usize) -> Result<Self, MatrixError> {
        Self::random(height, width, &mut rand::thread_rng())
    }

    /// Zero matrix.
    pub fn zeros(height: usize, width: usize) -> Result<Self, MatrixError> {
        let n = element_count(height, width)?;
        let mut data = allocate(n)?;
        data.resize(n, T::ZERO);
        Ok(Matrix { data, height, width })
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, n)?;
        for diagonal in m.data.iter_mut().step_by(n.saturating_add(1)) {
            *diagonal = T::ONE;
        }
        Ok(m)
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// (height, width).
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major entries.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns the entries consuming the matrix.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        if row >= self.height || col >= self.width {
            return Err(MatrixError::IndexOutOfBounds { row, col });
        }
        let index = row
            .checked_mul(self.width)
            .and_then(|offset| offset.checked_add(col))
            .ok_or(MatrixError::Arithmetic)?;
        self.data.get(index).ok_or(MatrixError::IndexOutOfBounds { row, col })
    }

    /// Entries of one row.
    pub fn row(&self, row: usize) -> Result<&[T], MatrixError> {
        if row >= self.height {
            return Err(MatrixError::IndexOutOfBounds { row, col: 0 });
        }
        let start = row.checked_mul(self.width).ok_or(MatrixError::Arithmetic)?;
        let end = start.checked_add(self.width).ok_or(MatrixError::Arithmetic)?;
        self.data.get(start..end).ok_or(MatrixError::IndexOutOfBounds { row, col: 0 })
    }
}
