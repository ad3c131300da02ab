#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::SolverError;

/// Forward sweep coefficients of one equation, `x[i] = p*x[i+1] + q`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunCoefficients<T = f32> {
    pub p: T,
    pub q: T,
}

/// A tridiagonal system stored by diagonals.
///
/// Row `i` reads `sub[i]*x[i-1] + diag[i]*x[i] + sup[i]*x[i+1] = rhs[i]`.
/// The entries `sub[0]` and `sup[n-1]` fall outside the matrix and are
/// always held at zero.  The diagonals are only reachable through the
/// checked constructors, so all four always share one non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSystem<T = f32> {
    sub: Vec<T>,
    diag: Vec<T>,
    sup: Vec<T>,
    rhs: Vec<T>,
}

impl<T> TridiagonalSystem<T>
where
    T: FloatT,
{
    pub fn new(
        mut sub: Vec<T>,
        diag: Vec<T>,
        mut sup: Vec<T>,
        rhs: Vec<T>,
    ) -> Result<Self, SolverError> {
        let n = diag.len();
        if n == 0 {
            return Err(MatrixError::EmptyRows.into());
        }
        if sub.len() != n || sup.len() != n || rhs.len() != n {
            return Err(MatrixError::IncompatibleDimension.into());
        }
        sub[0] = T::zero();
        sup[n - 1] = T::zero();
        Ok(Self {
            sub,
            diag,
            sup,
            rhs,
        })
    }

    /// One `(sub, diag, sup, rhs)` tuple per equation
    pub fn from_rows(rows: &[(T, T, T, T)]) -> Result<Self, SolverError> {
        let sub = rows.iter().map(|r| r.0).collect();
        let diag = rows.iter().map(|r| r.1).collect();
        let sup = rows.iter().map(|r| r.2).collect();
        let rhs = rows.iter().map(|r| r.3).collect();
        Self::new(sub, diag, sup, rhs)
    }

    /// Takes the three central diagonals of a square `A`.  Entries of `A`
    /// outside of them are ignored.
    pub fn from_dense(A: &Matrix<T>, b: &Matrix<T>) -> Result<Self, SolverError> {
        if !A.is_square() {
            return Err(MatrixError::NotSquare.into());
        }
        let n = A.nrows();
        if b.size() != (n, 1) {
            return Err(MatrixError::IncompatibleDimension.into());
        }
        let sub = (0..n)
            .map(|i| if i > 0 { A[(i, i - 1)] } else { T::zero() })
            .collect();
        let diag = A.diag();
        let sup = (0..n)
            .map(|i| if i + 1 < n { A[(i, i + 1)] } else { T::zero() })
            .collect();
        Self::new(sub, diag, sup, b.col_to_vec(0))
    }

    pub fn dim(&self) -> usize {
        self.diag.len()
    }

    pub fn sub(&self) -> &[T] {
        &self.sub
    }

    pub fn diag(&self) -> &[T] {
        &self.diag
    }

    pub fn sup(&self) -> &[T] {
        &self.sup
    }

    pub fn rhs(&self) -> &[T] {
        &self.rhs
    }

    /// The system as a dense matrix and an `n x 1` right hand side
    pub fn to_dense(&self) -> (Matrix<T>, Matrix<T>) {
        let n = self.dim();
        let mut A = Matrix::zeros((n, n));
        for i in 0..n {
            A[(i, i)] = self.diag[i];
            if i > 0 {
                A[(i, i - 1)] = self.sub[i];
            }
            if i + 1 < n {
                A[(i, i + 1)] = self.sup[i];
            }
        }
        (A, Matrix::column(&self.rhs))
    }

    /// Rejects equations of the form `0 = d` with `d != 0`
    pub fn check_rows(&self) -> Result<(), SolverError> {
        let zero = T::zero();
        for i in 0..self.dim() {
            let empty = self.sub[i] == zero && self.diag[i] == zero && self.sup[i] == zero;
            if empty && self.rhs[i] != zero {
                return Err(SolverError::Unsolvable { row: i });
            }
        }
        Ok(())
    }

    /// Forward sweep.  Fails on a zero leading diagonal entry or a zero
    /// elimination denominator.
    pub fn run_coefficients(&self) -> Result<Vec<RunCoefficients<T>>, SolverError> {
        let n = self.dim();
        let mut coeffs = Vec::with_capacity(n);

        if self.diag[0] == T::zero() {
            return Err(SolverError::Unsolvable { row: 0 });
        }
        let mut prev = RunCoefficients {
            p: -self.sup[0] / self.diag[0],
            q: self.rhs[0] / self.diag[0],
        };
        coeffs.push(prev);

        for i in 1..n {
            let t = self.diag[i] + self.sub[i] * prev.p;
            if t == T::zero() {
                return Err(SolverError::Unsolvable { row: i });
            }
            prev = RunCoefficients {
                p: -self.sup[i] / t,
                q: (self.rhs[i] - self.sub[i] * prev.q) / t,
            };
            coeffs.push(prev);
        }
        Ok(coeffs)
    }

    pub fn solve(&self) -> Result<Matrix<T>, SolverError> {
        self.check_rows()?;
        let coeffs = self.run_coefficients()?;
        Ok(back_substitute(&coeffs))
    }
}

/// Backward sweep, `x[n-1] = q[n-1]` and `x[i] = p[i]*x[i+1] + q[i]`.
/// Returns `x` as an `n x 1` matrix.
pub fn back_substitute<T: FloatT>(coeffs: &[RunCoefficients<T>]) -> Matrix<T> {
    let n = coeffs.len();
    let mut x = Matrix::zeros((n, 1));
    let mut next = T::zero();
    for (i, c) in coeffs.iter().enumerate().rev() {
        // p[n-1] is zero since sup[n-1] is, so next starts unused
        next = c.p * next + c.q;
        x[(i, 0)] = next;
    }
    x
}
