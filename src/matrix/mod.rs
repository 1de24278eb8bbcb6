//! Matrix type and operations.

pub mod cofactor;
pub mod matrix;
pub mod ops;

pub use matrix::{Matrix, MatrixError, EPSILON};
