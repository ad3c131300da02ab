#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use numlab::{algebra::*, solver::*};
    use std::io::{Seek, SeekFrom};

    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [10., 1., 1.],
        [2., 10., 1.],
        [2., 2., 10.],
    ]);
    let b = Matrix::column(&[12., 13., 14.]);
    let system = LinearSystem::new(A.clone(), b);

    // write the problem to a file
    let mut file = tempfile::tempfile().unwrap();
    system.save_to_file(&mut file).unwrap();

    // read the problem from the file
    file.seek(SeekFrom::Start(0)).unwrap();
    let system2 = LinearSystem::<f32>::load_from_file(&mut file).unwrap();
    assert_eq!(system.solve().unwrap(), system2.solve().unwrap());

    // eigen problem with non-default settings
    let settings = SolverSettingsBuilder::default()
        .eps(1e-4)
        .max_iter(500)
        .build()
        .unwrap();
    let problem = EigenProblem::new(A, settings);

    let mut file = tempfile::tempfile().unwrap();
    problem.save_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let problem2 = EigenProblem::<f32>::load_from_file(&mut file).unwrap();
    assert_eq!(problem2.settings.max_iter, 500);

    let r1 = problem.qr_solver().unwrap().solve().unwrap();
    let r2 = problem2.qr_solver().unwrap().solve().unwrap();
    assert_eq!(r1.values, r2.values);
    assert_eq!(r1.iterations, r2.iterations);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_eigen_result() {
    use numlab::solver::*;
    use num_complex::Complex;

    let values = vec![
        Eigenvalue::Real(2.0_f64),
        Eigenvalue::Complex(Complex::new(1., 3.)),
    ];
    let json = serde_json::to_string(&values).unwrap();
    let values2: Vec<Eigenvalue<f64>> = serde_json::from_str(&json).unwrap();
    assert_eq!(values, values2);
}
