#![allow(non_snake_case)]

use numlab::{algebra::*, solver::*};

fn lu_test_matrices() -> Vec<Matrix<f32>> {
    vec![
        Matrix::from(&[
            [1., -5., -7., 1.],  //
            [1., -3., -9., -4.], //
            [-2., 4., 2., 1.],   //
            [-9., 9., 5., 3.],   //
        ]),
        Matrix::from(&[
            [0., 2., 1.], //
            [1., 1., 0.], //
            [3., 0., 1.], //
        ]),
        Matrix::from(&[
            [2., -1., 0.], //
            [-1., 2., -1.], //
            [0., -1., 2.], //
        ]),
        Matrix::from(&[[5.]]),
    ]
}

fn assert_close(A: &Matrix<f32>, B: &Matrix<f32>, tol: f32) {
    assert_eq!(A.size(), B.size());
    let err = A.data().norm_inf_diff(B.data());
    assert!(err <= tol, "difference {} > {}", err, tol);
}

#[test]
fn test_lu_factorization() {
    for A in lu_test_matrices() {
        let lu = LuFactors::decompose(&A).unwrap();
        assert_close(&(&lu.P * &A), &(&lu.L * &lu.U), 1e-4);

        // P is a permutation matrix
        let PtP = &lu.P.transpose() * &lu.P;
        assert_eq!(PtP, Matrix::identity(A.nrows()));
    }
}

#[test]
fn test_lu_solve() {
    for A in lu_test_matrices() {
        let n = A.nrows();
        let xref: Vec<f32> = (0..n).map(|i| i as f32 - 1.5).collect();
        let xref = Matrix::column(&xref);
        let b = &A * &xref;

        let x = solve_linear_system(&A, &b).unwrap();
        assert_close(&x, &xref, 1e-4);
    }
}

#[test]
fn test_lu_inverse() {
    for A in lu_test_matrices() {
        let n = A.nrows();
        let Ainv = inverse(&A).unwrap();
        assert_close(&(&A * &Ainv), &Matrix::identity(n), 1e-4);

        // det(A⁻¹) = 1/det(A)
        let d = determinant(&A).unwrap();
        let dinv = determinant(&Ainv).unwrap();
        assert!((d * dinv - 1.).abs() < 1e-4);
    }
}

#[test]
fn test_lu_determinant() {
    // det [0 2 1; 1 1 0; 3 0 1] = 0*(1) - 2*(1) + 1*(-3) = -5
    let mats = lu_test_matrices();
    let A = &mats[1];
    let lu = LuFactors::decompose(A).unwrap();
    assert!((lu.determinant() + 5.).abs() < 1e-5);
    assert!((lu.u_diagonal_product().abs() - 5.).abs() < 1e-5);
    assert!((lu.checked_determinant().unwrap() + 5.).abs() < 1e-5);

    // det(AB) = det(A)det(B)
    let B = &mats[2];
    let AB = A * B;
    let dAB = determinant(&AB).unwrap();
    let dA = determinant(A).unwrap();
    let dB = determinant(B).unwrap();
    assert!((dAB - dA * dB).abs() < 1e-3);
}

#[test]
fn test_lu_singular() {
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [1., 2., 3.],
        [4., 5., 6.],
        [1., 2., 3.],
    ]);
    assert_eq!(determinant(&A).unwrap(), 0.);
    assert!(matches!(inverse(&A), Err(SolverError::Singular)));
    assert!(matches!(
        solve_linear_system(&A, &Matrix::column(&[1., 2., 3.])),
        Err(SolverError::Singular)
    ));

    // the factors are still valid
    let lu = LuFactors::decompose(&A).unwrap();
    assert_close(&(&lu.P * &A), &(&lu.L * &lu.U), 1e-5);
}

#[test]
fn test_lu_dimension_checks() {
    let A = Matrix::<f32>::zeros((3, 4));
    assert!(matches!(
        LuFactors::decompose(&A),
        Err(SolverError::Matrix(MatrixError::NotSquare))
    ));

    let A = Matrix::<f32>::identity(3);
    let b = Matrix::column(&[1., 2., 3., 4.]);
    assert!(matches!(
        solve_linear_system(&A, &b),
        Err(SolverError::Matrix(MatrixError::IncompatibleDimension))
    ));
}
