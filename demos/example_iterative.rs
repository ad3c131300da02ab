#![allow(non_snake_case)]

use numlab::algebra::*;
use numlab::io::ConfigurablePrintTarget;
use numlab::solver::*;

fn main() {
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [10., 1., 1.],
        [2., 10., 1.],
        [2., 2., 10.],
    ]);
    let b = Matrix::column(&[12., 13., 14.]);

    let settings = SolverSettingsBuilder::default()
        .eps(0.01)
        .verbose(true)
        .build()
        .unwrap();

    for method in [IterationMethodType::from(Jacobi), GaussSeidel.into()] {
        println!("\n{} method", method);

        let (α, β) = method.iteration_matrices(&A, &b).unwrap();
        let mut solver = FixedPointSolver::new(α, β, settings.clone()).unwrap();
        solver.print_to_stdout();

        match solver.solve() {
            Ok(result) => println!("x =\n{}", result.x),
            Err(e) => println!("error : {}", e),
        }
    }
}
