#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_2x3() -> Matrix<f32> {
    // A =
    //[ 1.0  2.0  3.0]
    //[ 4.0  5.0  6.0]
    Matrix::from(&[
        [1., 2., 3.], //
        [4., 5., 6.], //
    ])
}

#[test]
fn test_nrows_ncols_is_square() {
    let A = test_matrix_2x3();
    assert_eq!(A.nrows(), 2);
    assert_eq!(A.ncols(), 3);
    assert_eq!(A.size(), (2, 3));
    assert!(!A.is_square());
    assert!(Matrix::<f32>::identity(4).is_square());
}

#[test]
fn test_row_major_storage() {
    let A = test_matrix_2x3();
    assert_eq!(A.data(), &[1., 2., 3., 4., 5., 6.]);
    assert_eq!(A.row_slice(1), &[4., 5., 6.]);
    assert_eq!(A.col_to_vec(2), vec![3., 6.]);
    assert_eq!(A[(1, 0)], 4.);
}

#[test]
fn test_get_set_bounds() {
    let mut A = test_matrix_2x3();
    assert_eq!(A.get(1, 2), Ok(6.));
    assert!(A.set(0, 1, -2.).is_ok());
    assert_eq!(A[(0, 1)], -2.);

    assert_eq!(
        A.get(2, 0),
        Err(MatrixError::IndexOutOfBounds {
            row: 2,
            col: 0,
            nrows: 2,
            ncols: 3
        })
    );
    // a column overflow must not wrap into the next row
    assert!(A.get(0, 3).is_err());
    assert!(A.set(0, 3, 1.).is_err());
    assert_eq!(A, Matrix::from(&[[1., -2., 3.], [4., 5., 6.]]));
}

#[test]
#[should_panic]
fn test_index_column_overflow_panics() {
    let A = test_matrix_2x3();
    let _ = A[(0, 3)];
}

#[test]
fn test_from_nested_rows() {
    let A = Matrix::try_from(vec![vec![1.0_f32, 2.], vec![3., 4.]]).unwrap();
    assert_eq!(A, Matrix::from(&[[1., 2.], [3., 4.]]));

    let empty: Vec<Vec<f32>> = vec![];
    assert_eq!(Matrix::try_from(empty), Err(MatrixError::EmptyRows));
    assert_eq!(
        Matrix::try_from(vec![Vec::<f32>::new()]),
        Err(MatrixError::EmptyRows)
    );
    assert_eq!(
        Matrix::try_from(vec![vec![1.0_f32, 2.], vec![3.], vec![4., 5.]]),
        Err(MatrixError::RaggedRows { row: 1 })
    );
}

#[test]
fn test_identity_zeros_column() {
    let I = Matrix::<f32>::identity(3);
    assert_eq!(I.diag(), vec![1., 1., 1.]);
    assert_eq!(I.norm_fro(), 3.0_f32.sqrt());

    let Z = Matrix::<f32>::zeros((2, 4));
    assert_eq!(Z.size(), (2, 4));
    assert!(Z.data().iter().all(|&x| x == 0.));

    let v = Matrix::column(&[1.0_f32, 2., 3.]);
    assert_eq!(v.size(), (3, 1));
}

#[test]
fn test_transpose() {
    let A = test_matrix_2x3();
    let At = A.transpose();
    assert_eq!(At, Matrix::from(&[[1., 4.], [2., 5.], [3., 6.]]));
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_swap_rows() {
    let mut A = Matrix::<f32>::from(&[
        [1., 2.], //
        [3., 4.], //
        [5., 6.], //
    ]);
    A.swap_rows(2, 0);
    assert_eq!(A, Matrix::from(&[[5., 6.], [3., 4.], [1., 2.]]));
    A.swap_rows(1, 1);
    assert_eq!(A, Matrix::from(&[[5., 6.], [3., 4.], [1., 2.]]));
}

#[test]
fn test_add_mul_scale() {
    let A = Matrix::<f32>::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::identity(2);

    assert_eq!(&A + &B, Matrix::from(&[[2., 2.], [3., 5.]]));
    assert_eq!(&A - &B, Matrix::from(&[[0., 2.], [3., 3.]]));
    assert_eq!(&A * &B, A);
    assert_eq!(&A * 2.0, Matrix::from(&[[2., 4.], [6., 8.]]));

    // non-square product
    let C = test_matrix_2x3();
    let x = Matrix::column(&[1., 0., -1.]);
    assert_eq!(&C * &x, Matrix::column(&[-2., -2.]));
    assert_eq!((&A * &C).size(), (2, 3));

    let mut D = A.clone();
    D.scale(-1.);
    D.negate();
    assert_eq!(D, A);
}

#[test]
fn test_is_symmetric() {
    #[rustfmt::skip]
    let S = Matrix::<f32>::from(&[
        [4., 2., 1.],
        [2., 5., 3.],
        [1., 3., 6.],
    ]);
    assert!(S.is_symmetric(0.));
    assert!(!test_matrix_2x3().is_symmetric(1.));

    let mut S2 = S.clone();
    S2[(2, 0)] = 1.001;
    assert!(!S2.is_symmetric(1e-4));
    assert!(S2.is_symmetric(1e-2));
}

#[test]
fn test_display() {
    let A = Matrix::<f32>::from(&[[1., -2.]]);
    let s = format!("{}", A);
    assert!(s.contains("1.000000"));
    assert!(s.contains("-2.000000"));
    assert_eq!(s.lines().count(), 1);
}
