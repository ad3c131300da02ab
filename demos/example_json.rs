#![allow(non_snake_case)]
use numlab::algebra::*;
use numlab::solver::*;
use std::io::{Seek, SeekFrom};

fn main() {
    #[rustfmt::skip]
    let A = Matrix::<f64>::from(&[
        [3., 2., 4.],
        [2., 0., 2.],
        [4., 2., 3.],
    ]);
    let settings = SolverSettingsBuilder::default().eps(1e-8).build().unwrap();
    let problem = EigenProblem::new(A, settings);

    // round trip through a temporary file
    let mut file = tempfile::tempfile().unwrap();
    problem.save_to_file(&mut file).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let problem = EigenProblem::<f64>::load_from_file(&mut file).unwrap();
    let result = problem.symmetric_solver().unwrap().solve().unwrap();
    for λ in result.values.iter() {
        println!("{}", λ);
    }
}
