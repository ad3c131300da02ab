#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::{LuFactors, SolverError};
use enum_dispatch::*;

/// Construction of the fixed point form `x = α*x + β` of a linear system.
#[enum_dispatch]
pub trait IterationMethod {
    /// Returns `(α, β)` for the system `A*x = b`
    fn iteration_matrices<T: FloatT>(
        &self,
        A: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<(Matrix<T>, Matrix<T>), SolverError>;

    fn name(&self) -> &'static str;
}

/// Simple iteration: `α[i][j] = -A[i][j]/A[i][i]`, `β[i] = b[i]/A[i][i]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Jacobi;

/// Seidel iteration: the Jacobi `α` split as `B + C` with `B` strictly
/// lower triangular, then `α' = (I-B)⁻¹C` and `β' = (I-B)⁻¹β`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussSeidel;

/// Method selector for [`solve_iterative`](crate::solver::solve_iterative)
#[enum_dispatch(IterationMethod)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationMethodType {
    Jacobi(Jacobi),
    GaussSeidel(GaussSeidel),
}

impl Default for IterationMethodType {
    fn default() -> Self {
        IterationMethodType::Jacobi(Jacobi)
    }
}

impl std::fmt::Display for IterationMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn check_system<T: FloatT>(A: &Matrix<T>, b: &Matrix<T>) -> Result<usize, SolverError> {
    if !A.is_square() {
        return Err(MatrixError::NotSquare.into());
    }
    if b.size() != (A.nrows(), 1) {
        return Err(MatrixError::IncompatibleDimension.into());
    }
    Ok(A.nrows())
}

impl IterationMethod for Jacobi {
    fn iteration_matrices<T: FloatT>(
        &self,
        A: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<(Matrix<T>, Matrix<T>), SolverError> {
        let n = check_system(A, b)?;
        let mut α = Matrix::zeros((n, n));
        let mut β = Matrix::zeros((n, 1));

        for i in 0..n {
            let aii = A[(i, i)];
            if aii == T::zero() {
                return Err(SolverError::Unsolvable { row: i });
            }
            for j in 0..n {
                if j != i {
                    α[(i, j)] = -A[(i, j)] / aii;
                }
            }
            β[(i, 0)] = b[(i, 0)] / aii;
        }
        Ok((α, β))
    }

    fn name(&self) -> &'static str {
        "Jacobi"
    }
}

impl IterationMethod for GaussSeidel {
    fn iteration_matrices<T: FloatT>(
        &self,
        A: &Matrix<T>,
        b: &Matrix<T>,
    ) -> Result<(Matrix<T>, Matrix<T>), SolverError> {
        let (α, β) = Jacobi.iteration_matrices(A, b)?;
        let n = α.nrows();

        // I - B, and C = α - B
        let mut IminusB = Matrix::identity(n);
        let mut C = α;
        for i in 0..n {
            for j in 0..i {
                IminusB[(i, j)] = -C[(i, j)];
                C[(i, j)] = T::zero();
            }
        }

        // unit lower triangular, so never singular
        let inv = LuFactors::decompose(&IminusB)?.inverse()?;
        Ok((&inv * &C, &inv * &β))
    }

    fn name(&self) -> &'static str {
        "Gauss-Seidel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> (Matrix<f32>, Matrix<f32>) {
        #[rustfmt::skip]
        let A = Matrix::from(&[
            [10., 1., 1.],
            [2., 10., 1.],
            [2., 2., 10.],
        ]);
        (A, Matrix::column(&[12., 13., 14.]))
    }

    #[test]
    fn test_jacobi_matrices() {
        let (A, b) = system();
        let (α, β) = Jacobi.iteration_matrices(&A, &b).unwrap();

        #[rustfmt::skip]
        let αref = Matrix::from(&[
            [ 0.0, -0.1, -0.1],
            [-0.2,  0.0, -0.1],
            [-0.2, -0.2,  0.0],
        ]);
        assert!(α.data().norm_inf_diff(αref.data()) < 1e-6);
        assert!(β.data().norm_inf_diff(&[1.2, 1.3, 1.4]) < 1e-6);
    }

    #[test]
    fn test_gauss_seidel_matrices() {
        let (A, b) = system();
        let (α, β) = GaussSeidel.iteration_matrices(&A, &b).unwrap();

        // (I-B)⁻¹ = [1 0 0; -0.2 1 0; -0.16 -0.2 1]
        #[rustfmt::skip]
        let αref = Matrix::from(&[
            [0.0, -0.1,  -0.1],
            [0.0,  0.02, -0.08],
            [0.0,  0.016, 0.036],
        ]);
        assert!(α.data().norm_inf_diff(αref.data()) < 1e-6);
        assert!(β.data().norm_inf_diff(&[1.2, 1.06, 0.948]) < 1e-6);

        // first column vanishes, x[0] never feeds back
        assert!(α.col_to_vec(0).iter().all(|&x| x == 0.));
    }

    #[test]
    fn test_zero_diagonal() {
        let A = Matrix::<f32>::from(&[[1., 2.], [3., 0.]]);
        let b = Matrix::column(&[1., 1.]);
        for method in [IterationMethodType::from(Jacobi), GaussSeidel.into()] {
            assert!(matches!(
                method.iteration_matrices(&A, &b),
                Err(SolverError::Unsolvable { row: 1 })
            ));
        }
    }

    #[test]
    fn test_dispatch() {
        let method = IterationMethodType::default();
        assert_eq!(method, IterationMethodType::Jacobi(Jacobi));
        assert_eq!(method.to_string(), "Jacobi");
        let method: IterationMethodType = GaussSeidel.into();
        assert_eq!(method.to_string(), "Gauss-Seidel");
    }
}
