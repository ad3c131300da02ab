#![allow(non_snake_case)]

use numlab::algebra::*;
use numlab::solver::*;

fn main() {
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [1., 3., 1.],
        [1., 1., 4.],
        [4., 3., 1.],
    ]);

    let settings = SolverSettingsBuilder::default()
        .eps(0.01)
        .max_iter(500)
        .verbose(true)
        .build()
        .unwrap();

    let mut solver = QrEigenSolver::new(&A, settings).unwrap();

    match solver.solve() {
        Ok(result) => {
            println!("Eigen values:");
            for λ in result.values.iter() {
                println!("{}", λ);
            }
        }
        Err(e) => println!("error : {}", e),
    }
}
