//! End-to-end flows through the public matrix API.

use anyhow::Result;
use matrix_lib::matrix::{Matrix, MatrixError};

fn make_matrix(rows: usize, cols: usize, values: &[f64]) -> Result<Matrix> {
    Ok(Matrix::new(values.to_vec(), rows, cols)?)
}

#[test]
fn build_resize_and_invert() -> Result<()> {
    let mut m = Matrix::zero(2, 2)?;
    *m.entry_mut(0, 0)? = 1.0;
    *m.entry_mut(0, 1)? = 2.0;
    *m.entry_mut(1, 0)? = 3.0;
    *m.entry_mut(1, 1)? = 4.0;

    assert_eq!(m.determinant()?, -2.0);

    let inverse = m.inverse()?;
    let expected = make_matrix(2, 2, &[-2.0, 1.0, 1.5, -0.5])?;
    assert_eq!(inverse, expected);

    let product = (m.clone() * &inverse)?;
    assert_eq!(product, Matrix::identity(2)?);

    m.set_rows(3)?;
    assert_eq!(m.rows(), 3);
    assert_eq!(*m.entry(2, 0)?, 0.0);
    assert_eq!(m.determinant().err(), Some(MatrixError::NotSquare));
    Ok(())
}

#[test]
fn arithmetic_chain() -> Result<()> {
    let a = make_matrix(2, 2, &[1.0, 0.0, 0.0, 1.0])?;
    let b = make_matrix(2, 2, &[0.0, 2.0, 2.0, 0.0])?;

    let sum = (a.clone() + &b)?;
    let back = (sum - &b)?;
    assert_eq!(back, a);

    let scaled = b.clone() * 0.5;
    assert_eq!(scaled, make_matrix(2, 2, &[0.0, 1.0, 1.0, 0.0])?);

    let transposed = scaled.transpose()?;
    assert_eq!(transposed, scaled);
    Ok(())
}

#[test]
fn singular_matrix_is_rejected() -> Result<()> {
    let ones = make_matrix(2, 2, &[1.0; 4])?;
    assert_eq!(ones.inverse().err(), Some(MatrixError::SingularMatrix));
    Ok(())
}
