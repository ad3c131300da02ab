//! Fixed point iterative solvers for linear systems.
//!
//! A system `A*x = b` is first brought into the form `x = α*x + β` by an
//! [`IterationMethod`], then iterated by a [`FixedPointSolver`].
//!
//! ```
//! use numlab::algebra::*;
//! use numlab::solver::*;
//!
//! let A = Matrix::<f32>::from(&[
//!     [10., 1., 1.],
//!     [2., 10., 1.],
//!     [2., 2., 10.],
//! ]);
//! let b = Matrix::column(&[12., 13., 14.]);
//! let settings = SolverSettingsBuilder::default().eps(0.01).build().unwrap();
//!
//! let result = solve_iterative(&A, &b, GaussSeidel.into(), settings).unwrap();
//! assert!(result.x.data().norm_inf_diff(&[1., 1., 1.]) <= 0.01);
//! ```

#![allow(non_snake_case)]

mod fixed_point;
mod methods;

pub use fixed_point::*;
pub use methods::*;

use crate::algebra::*;
use crate::solver::{SolverError, SolverSettings};

/// Builds the iteration matrices of `A*x = b` for `method` and
/// iterates them to precision `settings.eps`.
pub fn solve_iterative<T: FloatT>(
    A: &Matrix<T>,
    b: &Matrix<T>,
    method: IterationMethodType,
    settings: SolverSettings<T>,
) -> Result<FixedPointResult<T>, SolverError> {
    let (α, β) = method.iteration_matrices(A, b)?;
    FixedPointSolver::new(α, β, settings)?.solve()
}
