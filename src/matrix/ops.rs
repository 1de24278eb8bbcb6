//! Matrix operators.
//!
//! The fallible operators consume the left operand and return
//! `Result<Matrix, MatrixError>`; callers clone when they need to keep it.
//! Compound assignment for matrix operands goes through the fallible in-place
//! methods (`sum`, `subtract`, `multiply`), since the `std::ops` assignment
//! traits cannot report errors.

use super::matrix::{Matrix, MatrixError};
use std::ops::{Add, Mul, MulAssign, Sub};

impl PartialEq for Matrix {
    fn eq(&self, other: &Matrix) -> bool {
        self.eq_matrix(other)
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn add(mut self, rhs: &Matrix) -> Self::Output {
        self.sum(rhs)?;
        Ok(self)
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn sub(mut self, rhs: &Matrix) -> Self::Output {
        self.subtract(rhs)?;
        Ok(self)
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Result<Matrix, MatrixError>;

    fn mul(mut self, rhs: &Matrix) -> Self::Output {
        self.multiply(rhs)?;
        Ok(self)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Matrix {
        self.scale(rhs);
        self
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}
