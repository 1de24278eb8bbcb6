//! Matrix.

use thiserror::Error;

/// Absolute tolerance used by matrix equality.
///
/// Two matrices compare equal when every pair of corresponding entries
/// differs by at most this value. Fixed part of the contract.
pub const EPSILON: f64 = 1e-6;

/// Dense row-major matrix of `f64` entries.
///
/// A default-constructed matrix is the empty state (`rows == cols == 0`, no
/// buffer); every dimension-taking constructor rejects zero counts, so any
/// non-empty matrix satisfies `rows > 0 && cols > 0` and
/// `data.len() == rows * cols`.
#[derive(Clone, Debug, Default)]
pub struct Matrix {
    /// Entries, row by row.
    data: Vec<f64>,

    /// Number of rows.
    rows: usize,

    /// Number of columns.
    cols: usize,
}

impl Matrix {
    /// New matrix from a flat row-major buffer.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let n = Self::checked_len(rows, cols)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, rows, cols })
    }

    /// Zero matrix.
    pub fn zero(rows: usize, cols: usize) -> Result<Matrix, MatrixError> {
        let n = Self::checked_len(rows, cols)?;
        Ok(Matrix { data: vec![0.0; n], rows, cols })
    }

    /// Identity matrix.
    pub fn identity(n: usize) -> Result<Matrix, MatrixError> {
        let mut m = Matrix::zero(n, n)?;
        for i in 0..n {
            *m.entry_mut(i, i)? = 1.0;
        }
        Ok(m)
    }

    fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidDimension);
        }
        rows.checked_mul(cols).ok_or(MatrixError::InvalidDimension)
    }

    /// Returns the flat row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True when both dimensions match exactly.
    pub fn same_shape(&self, other: &Matrix) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: usize, col: usize) -> Result<&f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange);
        }
        self.data.get(row * self.cols + col).ok_or(MatrixError::IndexOutOfRange)
    }

    /// Get the matrix entry `M[row,col]` mutably.
    pub fn entry_mut(&mut self, row: usize, col: usize) -> Result<&mut f64, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfRange);
        }
        self.data.get_mut(row * self.cols + col).ok_or(MatrixError::IndexOutOfRange)
    }

    /// Resize to `rows` rows, keeping the overlapping region and zero-filling
    /// any added rows. The buffer is rebuilt and swapped in whole.
    pub fn set_rows(&mut self, rows: usize) -> Result<(), MatrixError> {
        let mut resized = Matrix::zero(rows, self.cols)?;
        for i in 0..rows.min(self.rows) {
            for j in 0..self.cols {
                *resized.entry_mut(i, j)? = *self.entry(i, j)?;
            }
        }
        *self = resized;
        Ok(())
    }

    /// Resize to `cols` columns, keeping the overlapping region and
    /// zero-filling any added columns.
    pub fn set_cols(&mut self, cols: usize) -> Result<(), MatrixError> {
        let mut resized = Matrix::zero(self.rows, cols)?;
        for i in 0..self.rows {
            for j in 0..cols.min(self.cols) {
                *resized.entry_mut(i, j)? = *self.entry(i, j)?;
            }
        }
        *self = resized;
        Ok(())
    }

    /// Entrywise equality within [`EPSILON`].
    pub fn eq_matrix(&self, other: &Matrix) -> bool {
        self.same_shape(other)
            && self.data.iter().zip(&other.data).all(|(lhs, rhs)| (lhs - rhs).abs() <= EPSILON)
    }

    /// Elementwise sum with `other`, in place.
    pub fn sum(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        if !self.same_shape(other) {
            return Err(MatrixError::DimensionMismatch);
        }
        for (lhs, rhs) in self.data.iter_mut().zip(&other.data) {
            *lhs += rhs;
        }
        Ok(())
    }

    /// Elementwise difference with `other`, in place.
    pub fn subtract(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        if !self.same_shape(other) {
            return Err(MatrixError::DimensionMismatch);
        }
        for (lhs, rhs) in self.data.iter_mut().zip(&other.data) {
            *lhs -= rhs;
        }
        Ok(())
    }

    /// Multiply every entry by `factor`, in place.
    pub fn scale(&mut self, factor: f64) {
        for entry in &mut self.data {
            *entry *= factor;
        }
    }

    /// Matrix product `self * other`, replacing `self` with the result.
    ///
    /// Naive multiplication, A: MxK * B: KxN -> C: MxN, O(KMN). The product
    /// accumulates into a fresh buffer, so a shape mismatch leaves `self`
    /// untouched.
    pub fn multiply(&mut self, other: &Matrix) -> Result<(), MatrixError> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch);
        }
        let mut out = Matrix::zero(self.rows, other.cols)?;
        for row in 0..self.rows {
            for col in 0..other.cols {
                let mut acc = 0.0;
                for i in 0..self.cols {
                    acc += *self.entry(row, i)? * *other.entry(i, col)?;
                }
                *out.entry_mut(row, col)? = acc;
            }
        }
        *self = out;
        Ok(())
    }

    /// Transposed copy, a new `cols x rows` matrix. Does not mutate `self`.
    pub fn transpose(&self) -> Result<Matrix, MatrixError> {
        let mut out = Matrix::zero(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                *out.entry_mut(j, i)? = *self.entry(i, j)?;
            }
        }
        Ok(out)
    }
}

/// Matrix Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// A requested row or column count is zero.
    #[error("invalid dimension: rows and columns must be greater than zero")]
    InvalidDimension,

    /// Element access outside the current bounds.
    #[error("index out of range")]
    IndexOutOfRange,

    /// Shapes incompatible for the requested operation.
    #[error("matrix dimensions mismatch")]
    DimensionMismatch,

    /// Determinant, complements or inverse requested on a non-square matrix.
    #[error("matrix is not square")]
    NotSquare,

    /// Inverse requested on a matrix with zero determinant.
    #[error("singular matrix can't be inverted")]
    SingularMatrix,

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match rows x cols = {1}")]
    Build(usize, usize),
}
