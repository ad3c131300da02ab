#![allow(non_snake_case)]

use numlab::algebra::*;
use numlab::solver::*;

fn main() {
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [4., 2., 1.],
        [2., 5., 3.],
        [1., 3., 6.],
    ]);

    let settings = SolverSettingsBuilder::default()
        .eps(1e-4)
        .verbose(true)
        .build()
        .unwrap();

    let mut solver = SymmetricEigenSolver::new(&A, settings.clone()).unwrap();
    let result = solver.solve().unwrap();

    for (λ, v) in result.values.iter().zip(result.vectors.iter()) {
        println!("λ = {}", λ);
        println!("v =\n{}", v);
    }

    // iteration count against precision
    let eps = [1e-1, 1e-2, 1e-3, 1e-4, 1e-5];
    let quiet = SolverSettings {
        verbose: false,
        ..settings
    };
    for point in iteration_sweep(&A, &eps, &quiet).unwrap() {
        println!("eps = {:e}  iterations = {}", point.eps, point.iterations);
    }
}
