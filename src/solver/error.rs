use crate::algebra::MatrixError;
use crate::solver::SettingsError;
use thiserror::Error;

/// Error type returned by all solvers.
#[derive(Error, Debug)]
pub enum SolverError {
    /// Bad input dimensions or an out of range index
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Rejected settings
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Zero pivot in the LU factors.  The system has no unique solution.
    #[error("Matrix is singular")]
    Singular,
    /// A governing coefficient of the system is exactly zero
    #[error("Can't find solution of system (row {row})")]
    Unsolvable { row: usize },
    /// The iteration matrix is not a contraction in the Frobenius norm,
    /// so the fixed point stopping bound is meaningless
    #[error("Iteration matrix is not contractive (norm = {norm})")]
    NotContractive { norm: f64 },
    /// Symmetric solver given a non-symmetric matrix
    #[error("Matrix is not symmetric")]
    NotSymmetric,
    /// Iteration limit reached before convergence
    #[error("No convergence after {iterations} iterations")]
    MaxIterations { iterations: u32 },
    /// Iterates became infinite or NaN
    #[error("Iteration diverged after {iterations} iterations")]
    Diverged { iterations: u32 },
    /// Failure writing progress output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
