#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::SolverError;

/// LU factors with partial pivoting, satisfying `P*A = L*U`.
///
/// `L` is unit lower triangular, `U` is upper triangular and `P` is the
/// identity with its rows permuted.  The decomposition itself never fails on
/// a singular input: a column whose best available pivot is exactly zero is
/// left uneliminated.  Singularity is instead reported by the operations that
/// would divide by the zero pivot, i.e. [`solve`](LuFactors::solve),
/// [`inverse`](LuFactors::inverse) and
/// [`checked_determinant`](LuFactors::checked_determinant).
#[derive(Debug, Clone)]
pub struct LuFactors<T = f32> {
    pub L: Matrix<T>,
    pub U: Matrix<T>,
    pub P: Matrix<T>,
    // number of row exchanges applied to P
    swaps: usize,
}

impl<T> LuFactors<T>
where
    T: FloatT,
{
    pub fn decompose(A: &Matrix<T>) -> Result<Self, SolverError> {
        if !A.is_square() {
            return Err(MatrixError::NotSquare.into());
        }
        let n = A.nrows();
        let mut L = Matrix::identity(n);
        let mut U = A.clone();
        let mut P = Matrix::identity(n);
        let mut swaps = 0;

        for k in 0..n.saturating_sub(1) {
            let r = pivot_row(&U, k);
            if r != k {
                U.swap_rows(k, r);
                P.swap_rows(k, r);
                // multipliers already stored in L belong to the
                // rows they were computed for, so they move too
                for j in 0..k {
                    let tmp = L[(k, j)];
                    L[(k, j)] = L[(r, j)];
                    L[(r, j)] = tmp;
                }
                swaps += 1;
            }

            let pivot = U[(k, k)];
            if pivot == T::zero() {
                continue;
            }

            for i in (k + 1)..n {
                let c = U[(i, k)] / pivot;
                for j in k..n {
                    let ukj = U[(k, j)];
                    U[(i, j)] -= c * ukj;
                }
                L[(i, k)] = c;
            }
        }

        Ok(Self { L, U, P, swaps })
    }

    pub fn dim(&self) -> usize {
        self.U.nrows()
    }

    /// True if any pivot of `U` is exactly zero
    pub fn is_singular(&self) -> bool {
        self.U.diag().iter().any(|&u| u == T::zero())
    }

    /// Product of the pivots, i.e. `det(U)`
    pub fn u_diagonal_product(&self) -> T {
        self.U.diag().iter().fold(T::one(), |acc, &u| acc * u)
    }

    /// `det(A)`, including the sign of the row permutation.
    /// Zero for singular matrices.
    pub fn determinant(&self) -> T {
        let d = self.u_diagonal_product();
        if self.swaps % 2 == 1 {
            -d
        } else {
            d
        }
    }

    /// As [`determinant`](LuFactors::determinant), but a zero value is
    /// reported as [`SolverError::Singular`].
    pub fn checked_determinant(&self) -> Result<T, SolverError> {
        let d = self.determinant();
        if d == T::zero() {
            return Err(SolverError::Singular);
        }
        Ok(d)
    }

    /// Solves `A*X = B` for every column of `B`.
    pub fn solve(&self, B: &Matrix<T>) -> Result<Matrix<T>, SolverError> {
        if B.nrows() != self.dim() {
            return Err(MatrixError::IncompatibleDimension.into());
        }
        let PB = &self.P * B;
        let Z = solve_with_l(&self.L, &PB)?;
        solve_with_u(&self.U, &Z)
    }

    /// `A⁻¹`, assembled column by column from solves against the identity.
    pub fn inverse(&self) -> Result<Matrix<T>, SolverError> {
        if self.is_singular() {
            return Err(SolverError::Singular);
        }
        self.solve(&Matrix::identity(self.dim()))
    }
}

// first row r >= k with the largest |U[r,k]|
fn pivot_row<T: FloatT>(U: &Matrix<T>, k: usize) -> usize {
    let col = U.col_to_vec(k);
    k + col[k..].argmax_abs().unwrap_or(0)
}

/// Forward substitution with a unit lower triangular `L`.  Entries above
/// and on the diagonal of `L` are ignored.
pub fn solve_with_l<T: FloatT>(L: &Matrix<T>, B: &Matrix<T>) -> Result<Matrix<T>, SolverError> {
    if !L.is_square() || L.nrows() != B.nrows() {
        return Err(MatrixError::IncompatibleDimension.into());
    }
    let (n, m) = B.size();
    let mut X = Matrix::zeros((n, m));

    for c in 0..m {
        for i in 0..n {
            let mut acc = B[(i, c)];
            for j in 0..i {
                acc -= L[(i, j)] * X[(j, c)];
            }
            X[(i, c)] = acc;
        }
    }
    Ok(X)
}

/// Back substitution with an upper triangular `U`.  Entries below
/// the diagonal of `U` are ignored.
pub fn solve_with_u<T: FloatT>(U: &Matrix<T>, B: &Matrix<T>) -> Result<Matrix<T>, SolverError> {
    if !U.is_square() || U.nrows() != B.nrows() {
        return Err(MatrixError::IncompatibleDimension.into());
    }
    let (n, m) = B.size();
    let mut X = Matrix::zeros((n, m));

    for c in 0..m {
        for i in (0..n).rev() {
            let uii = U[(i, i)];
            if uii == T::zero() {
                return Err(SolverError::Singular);
            }
            let mut acc = B[(i, c)];
            for j in (i + 1)..n {
                acc -= U[(i, j)] * X[(j, c)];
            }
            X[(i, c)] = acc / uii;
        }
    }
    Ok(X)
}

/// Solves `A*x = b` through an LU decomposition of `A`
pub fn solve_linear_system<T: FloatT>(
    A: &Matrix<T>,
    b: &Matrix<T>,
) -> Result<Matrix<T>, SolverError> {
    LuFactors::decompose(A)?.solve(b)
}

/// `det(A)` through an LU decomposition of `A`
pub fn determinant<T: FloatT>(A: &Matrix<T>) -> Result<T, SolverError> {
    Ok(LuFactors::decompose(A)?.determinant())
}

/// `A⁻¹` through an LU decomposition of `A`
pub fn inverse<T: FloatT>(A: &Matrix<T>) -> Result<Matrix<T>, SolverError> {
    LuFactors::decompose(A)?.inverse()
}
