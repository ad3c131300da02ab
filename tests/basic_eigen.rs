#![allow(non_snake_case)]

use numlab::{algebra::*, solver::*};

fn symmetric_data() -> Matrix<f64> {
    #[rustfmt::skip]
    let A = Matrix::from(&[
        [4., 2., 1.],
        [2., 5., 3.],
        [1., 3., 6.],
    ]);
    A
}

fn settings<T: FloatT>(eps: T) -> SolverSettings<T> {
    SolverSettingsBuilder::default().eps(eps).build().unwrap()
}

fn sorted_re<T: FloatT>(values: &[Eigenvalue<T>]) -> Vec<T> {
    let mut re: Vec<T> = values.iter().map(|v| v.re()).collect();
    re.sort_by(|a, b| a.partial_cmp(b).unwrap());
    re
}

#[test]
fn test_jacobi_eigenpairs() {
    let A = symmetric_data();
    let mut solver = SymmetricEigenSolver::new(&A, settings(1e-10)).unwrap();
    let result = solver.solve().unwrap();

    assert_eq!(result.iterations, solver.iterations);
    for (λ, v) in result.values.iter().zip(result.vectors.iter()) {
        assert!(λ.is_real());
        let r = &(&A * v) - &(v * λ.re());
        assert!(r.norm_fro() <= 1e-8);
    }
}

#[test]
fn test_jacobi_single_precision() {
    let A = Matrix::<f32>::from(&[
        [3., 2., 4.], //
        [2., 0., 2.], //
        [4., 2., 3.], //
    ]);
    let result = SymmetricEigenSolver::new(&A, settings(1e-3))
        .unwrap()
        .solve()
        .unwrap();
    assert!(sorted_re(&result.values).norm_inf_diff(&[-1., -1., 8.]) <= 1e-3);
}

#[test]
fn test_qr_matches_jacobi_on_symmetric() {
    let A = symmetric_data();

    let jacobi = SymmetricEigenSolver::new(&A, settings(1e-10))
        .unwrap()
        .solve()
        .unwrap();
    let qr = QrEigenSolver::new(&A, settings(1e-10))
        .unwrap()
        .solve()
        .unwrap();

    assert!(qr.values.iter().all(|v| v.is_real()));
    let a = sorted_re(&jacobi.values);
    let b = sorted_re(&qr.values);
    assert!(a.norm_inf_diff(&b) <= 1e-8);
}

#[test]
fn test_qr_known_real_spectrum() {
    // similar to diag(1, 2, 3)
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [ 1.5, 0.5, -0.5],
        [-0.5, 2.5,  0.5],
        [-1.0, 1.0,  2.0],
    ]);
    let result = QrEigenSolver::new(&A, settings(1e-4))
        .unwrap()
        .solve()
        .unwrap();
    assert!(sorted_re(&result.values).norm_inf_diff(&[1., 2., 3.]) <= 1e-3);
}

#[test]
fn test_qr_complex_pair() {
    // one real eigenvalue near 6.34 and a pair near -1.67 ± 1.55i
    #[rustfmt::skip]
    let A = Matrix::<f64>::from(&[
        [1., 3., 1.],
        [1., 1., 4.],
        [4., 3., 1.],
    ]);
    let result = QrEigenSolver::new(&A, settings(1e-6))
        .unwrap()
        .solve()
        .unwrap();

    let complex: Vec<_> = result.values.iter().filter(|v| !v.is_real()).collect();
    assert_eq!(complex.len(), 2);
    assert_eq!(complex[0].to_complex(), complex[1].to_complex().conj());

    // trace and determinant of A
    let sum: f64 = result.values.iter().map(|v| v.re()).sum();
    let prod = result
        .values
        .iter()
        .fold(num_complex::Complex::new(1., 0.), |acc, v| acc * v.to_complex());
    assert!((sum - 3.).abs() < 1e-4);
    assert!((prod.re - 33.).abs() < 1e-3);
    assert!(prod.im.abs() < 1e-3);
}

#[test]
fn test_householder_qr() {
    let A = symmetric_data();
    let (Q, R) = qr_decompose(&A);
    assert!((&Q * &R).data().norm_inf_diff(A.data()) < 1e-12);
    assert!(R[(1, 0)].abs() < 1e-12);
    assert!(R[(2, 0)].abs() < 1e-12);
    assert!(R[(2, 1)].abs() < 1e-12);
}
