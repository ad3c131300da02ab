#![allow(non_snake_case)]

use numlab::{algebra::*, io::ConfigurablePrintTarget, solver::*};

fn test_print_solver() -> FixedPointSolver<f64> {
    let alpha = Matrix::from(&[[0.5, 0.], [0., 0.25]]);
    let beta = Matrix::column(&[1., 1.]);
    let settings = SolverSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    FixedPointSolver::new(alpha, beta, settings).unwrap()
}

#[test]
fn test_print_to_stdout() {
    let mut solver = test_print_solver();
    solver.print_to_stdout();
    solver.solve().unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut solver = test_print_solver();
    solver.print_to_buffer();
    solver.solve().unwrap();
    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("numlab v"));
}

// runs `solver` with its output redirected to a temporary file, written
// either through `print_to_file` or through a boxed stream
fn solve_into_tempfile(solver: &mut FixedPointSolver<f64>, as_stream: bool) -> String {
    use std::io::{Read, Seek, SeekFrom};

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut reader = file.reopen().unwrap();
    if as_stream {
        solver.print_to_stream(Box::new(file.into_file()));
    } else {
        solver.print_to_file(file.into_file());
    }
    solver.solve().unwrap();

    reader.seek(SeekFrom::Start(0)).unwrap();
    let mut text = String::new();
    reader.read_to_string(&mut text).unwrap();
    text
}

#[test]
fn test_print_to_file() {
    let text = solve_into_tempfile(&mut test_print_solver(), false);
    assert!(text.contains("numlab v"));
    assert!(text.contains("Terminated with status = Solved"));
}

#[test]
fn test_print_to_stream() {
    let text = solve_into_tempfile(&mut test_print_solver(), true);
    assert!(text.contains("numlab v"));
    assert!(text.contains("fixed point"));
}

#[test]
fn test_print_to_sink() {
    let mut solver = test_print_solver();
    solver.print_to_sink();
    solver.solve().unwrap();
    // no output
}

#[test]
fn test_print_failure_status() {
    let A = Matrix::<f64>::from(&[[0., -1.], [1., 0.]]);
    let settings = SolverSettingsBuilder::default()
        .verbose(true)
        .max_iter(1)
        .build()
        .unwrap();
    let mut solver = QrEigenSolver::new(&A, settings).unwrap();
    solver.print_to_buffer();
    assert!(solver.solve().is_err());

    let result = solver.get_print_buffer().unwrap();
    assert!(result.contains("Terminated with status = No convergence after 1 iterations"));
}
