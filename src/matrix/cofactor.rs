//! Cofactor-expansion algorithms: minor, determinant, complements, inverse.

use super::matrix::{Matrix, MatrixError};

impl Matrix {
    /// Submatrix obtained by deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix, MatrixError> {
        if self.rows() < 2 || self.cols() < 2 {
            return Err(MatrixError::InvalidDimension);
        }
        if row >= self.rows() || col >= self.cols() {
            return Err(MatrixError::IndexOutOfRange);
        }
        let mut out = Matrix::zero(self.rows() - 1, self.cols() - 1)?;
        let mut minor_row = 0;
        for i in 0..self.rows() {
            if i == row {
                continue;
            }
            let mut minor_col = 0;
            for j in 0..self.cols() {
                if j == col {
                    continue;
                }
                *out.entry_mut(minor_row, minor_col)? = *self.entry(i, j)?;
                minor_col += 1;
            }
            minor_row += 1;
        }
        Ok(out)
    }

    /// Determinant by cofactor expansion along the first row, O(n!).
    ///
    /// The empty matrix has determinant 1 (empty-product convention); 1x1 and
    /// 2x2 are closed forms.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare);
        }
        match self.rows() {
            0 => Ok(1.0),
            1 => Ok(*self.entry(0, 0)?),
            2 => {
                Ok(*self.entry(0, 0)? * *self.entry(1, 1)?
                    - *self.entry(0, 1)? * *self.entry(1, 0)?)
            }
            n => {
                let mut det = 0.0;
                for i in 0..n {
                    let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * *self.entry(0, i)? * self.minor(0, i)?.determinant()?;
                }
                Ok(det)
            }
        }
    }

    /// Matrix of algebraic complements, `out[i][j] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// A 1x1 matrix yields `[[1.0]]`, consistent with the empty-product
    /// determinant convention for its 0x0 minors.
    pub fn complements(&self) -> Result<Matrix, MatrixError> {
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare);
        }
        let mut out = Matrix::zero(self.rows(), self.cols())?;
        if self.rows() == 1 {
            *out.entry_mut(0, 0)? = 1.0;
            return Ok(out);
        }
        for i in 0..self.rows() {
            for j in 0..self.cols() {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                *out.entry_mut(i, j)? = sign * self.minor(i, j)?.determinant()?;
            }
        }
        Ok(out)
    }

    /// Inverse via the adjugate: `transpose(complements) / determinant`.
    ///
    /// The singularity check compares the determinant against zero exactly,
    /// not within [`EPSILON`](super::EPSILON).
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if self.rows() != self.cols() {
            return Err(MatrixError::NotSquare);
        }
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::SingularMatrix);
        }
        let mut out = self.complements()?.transpose()?;
        out.scale(1.0 / det);
        Ok(out)
    }
}
