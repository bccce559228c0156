// tests/matrix_ops.rs
//! Integration scenarios for the matrix type, exercised through the
//! public crate surface only.

use linalg::{Matrix, MatrixError};

#[test]
fn test_build_transform_query_workflow() {
    let mut m = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(1, 2)], 6.0);

    m.transpose();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row(0).unwrap(), vec![1.0, 4.0]);
    assert_eq!(m.col(1).unwrap(), vec![4.0, 5.0, 6.0]);

    m.set_row(2, &[30.0, 60.0]).unwrap();
    *m.at_mut(0, 0).unwrap() = 10.0;
    assert_eq!(m.as_slice(), &[10.0, 4.0, 2.0, 5.0, 30.0, 60.0]);
}

#[test]
fn test_elimination_preserves_determinant() {
    let a = Matrix::from_rows(&[[2.0_f64, 1.0], [6.0, 4.0]]).unwrap();
    let det = a.determinant().unwrap();

    // Forward-eliminate the lower entry; a row addition leaves the
    // determinant unchanged.
    let mut u = a.clone();
    u.add_row_multiple(1, 0, -3.0).unwrap();
    assert_eq!(u, Matrix::from_rows(&[[2.0, 1.0], [0.0, 1.0]]).unwrap());
    assert_eq!(u.determinant().unwrap(), det);

    // Swapping rows flips its sign.
    let mut swapped = a.clone();
    swapped.swap_rows(0, 1).unwrap();
    assert_eq!(swapped.determinant().unwrap(), -det);
}

#[test]
fn test_inverse_reconstruction() {
    let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    let inv = a.inverse().unwrap();

    let mut eye = Matrix::<f64>::with_shape(2, 2).unwrap();
    eye.set_identity().unwrap();

    assert_eq!(a.matmul(&inv).unwrap(), eye);
    assert_eq!(inv.matmul(&a).unwrap(), eye);
    assert_eq!(inv.inverse().unwrap(), a);
}

#[test]
fn test_pow_chain() {
    let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    let cubed = a.pow(3).unwrap();
    assert_eq!(cubed, Matrix::from_rows(&[[37, 54], [81, 118]]).unwrap());
    assert_eq!(cubed, a.matmul(&a).unwrap().matmul(&a).unwrap());
}

#[test]
fn test_scalar_commutativity() {
    let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    assert_eq!(3 * &m, m.clone() * 3);

    let f = Matrix::from_rows(&[[0.5_f64, 1.5]]).unwrap();
    assert_eq!(2.0 * &f, f.clone() * 2.0);
}

#[test]
fn test_error_propagation_with_question_mark() {
    fn normalized_inverse(m: &Matrix<f64>) -> Result<Matrix<f64>, MatrixError> {
        let det = m.determinant()?;
        let inv = m.inverse()?;
        Ok(inv.mul_scalar(det))
    }

    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    // det * A^-1 is exactly the adjugate.
    assert_eq!(normalized_inverse(&a).unwrap(), a.adjoint().unwrap());

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
    assert_eq!(normalized_inverse(&singular), Err(MatrixError::Singular));

    let rect = Matrix::<f64>::with_shape(2, 3).unwrap();
    assert_eq!(
        normalized_inverse(&rect),
        Err(MatrixError::NotSquare { rows: 2, cols: 3 })
    );
}

#[test]
fn test_value_semantics() {
    let mut source = Matrix::from_rows(&[[1_i32, 2], [3, 4]]).unwrap();

    // Deep copy: edits to the clone never show through.
    let copy = source.clone();
    *source.at_mut(0, 0).unwrap() = 99;
    assert_eq!(copy[(0, 0)], 1);

    // Moving the value out leaves the canonical empty matrix behind.
    let moved = std::mem::take(&mut source);
    assert_eq!(moved[(0, 0)], 99);
    assert_eq!(source.shape(), (0, 0));
    assert!(source.is_empty());
}

#[test]
fn test_serialization_roundtrip_across_element_types() {
    let f = Matrix::from_rows(&[[1.0_f32, 2.0], [3.0, 4.0]]).unwrap();
    let bytes = bincode::serialize(&f).unwrap();
    let back: Matrix<f32> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(f, back);

    let i = Matrix::from_rows(&[[-1_i32, 0], [7, 42]]).unwrap();
    let bytes = bincode::serialize(&i).unwrap();
    let back: Matrix<i32> = bincode::deserialize(&bytes).unwrap();
    assert_eq!(i, back);
}

#[test]
fn test_division_scenarios() {
    // Matrix([[2,4],[6,8]]) / 2 == Matrix([[1,2],[3,4]])
    let m = Matrix::from_vec(2, 2, vec![2.0_f64, 4.0, 6.0, 8.0]).unwrap();
    assert_eq!(
        m.div_scalar(2.0).unwrap(),
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    );

    // B / B == I through the matrix-division operator.
    let b = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]).unwrap();
    let mut eye = Matrix::<f64>::with_shape(2, 2).unwrap();
    eye.set_identity().unwrap();
    assert_eq!(&b / &b, eye);
}
