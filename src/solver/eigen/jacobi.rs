#![allow(non_snake_case)]
use super::{EigenResult, Eigenvalue, SweepPoint};
use crate::algebra::*;
use crate::io::{impl_print_target_for, PrintTarget};
use crate::solver::info_print::*;
use crate::solver::{SolverError, SolverSettings};
use std::io::Write;

/// Cyclic Jacobi rotation method for symmetric matrices.
///
/// Each step zeroes the largest off-diagonal entry `A[i][j]` with a plane
/// rotation `R`, updating `A ← RᵀAR` and the accumulated rotations `U ← UR`.
/// The loop ends once the off-diagonal norm `sqrt(Σ_{i<j} A[i][j]²)` is at
/// most `settings.eps`.  The eigenvalues are then the diagonal of `A` and
/// the eigenvectors the matching columns of `U`.
pub struct SymmetricEigenSolver<T: FloatT = f32> {
    pub A: Matrix<T>,
    pub settings: SolverSettings<T>,
    pub iterations: u32,
    stream: PrintTarget,
}

impl_print_target_for!(SymmetricEigenSolver);

impl<T> SymmetricEigenSolver<T>
where
    T: FloatT,
{
    pub fn new(A: &Matrix<T>, settings: SolverSettings<T>) -> Result<Self, SolverError> {
        settings.validate()?;
        if !A.is_square() {
            return Err(MatrixError::NotSquare.into());
        }
        if !A.is_symmetric(settings.symmetry_tol) {
            return Err(SolverError::NotSymmetric);
        }
        Ok(Self {
            A: A.clone(),
            settings,
            iterations: 0,
            stream: PrintTarget::default(),
        })
    }

    pub fn solve(&mut self) -> Result<EigenResult<T>, SolverError> {
        self.iterations = 0;
        print_configuration(
            &mut self.stream,
            &self.settings,
            "Jacobi rotation",
            self.A.nrows(),
        )?;

        let result = self.iterate();

        match &result {
            Ok(_) => print_footer(&mut self.stream, &self.settings, self.iterations, &"Solved")?,
            Err(e) => print_footer(&mut self.stream, &self.settings, self.iterations, e)?,
        }
        result
    }

    fn iterate(&mut self) -> Result<EigenResult<T>, SolverError> {
        let n = self.A.nrows();
        let mut A = self.A.clone();
        let mut U = Matrix::identity(n);
        let mut work = Matrix::zeros((n, n));

        print_status_header(
            &mut self.stream,
            &self.settings,
            "  i    j     a(i,j)       phi          off-norm",
        )?;

        loop {
            let t = off_diagonal_norm(&A);
            if t <= self.settings.eps {
                break;
            }
            if self.iterations >= self.settings.max_iter {
                return Err(SolverError::MaxIterations {
                    iterations: self.iterations,
                });
            }

            let (i, j) = max_off_diagonal(&A);
            let φ = rotation_angle(&A, i, j);
            self.iterations += 1;
            self.print_status(i, j, A[(i, j)], φ, t)?;

            let R = rotation(n, i, j, φ);

            // A ← Rᵀ A R
            work.mul_into(&R.transpose(), &A);
            A.mul_into(&work, &R);
            // U ← U R
            work.mul_into(&U, &R);
            std::mem::swap(&mut U, &mut work);
        }

        let values = A.diag().into_iter().map(Eigenvalue::Real).collect();
        let vectors = (0..n).map(|c| Matrix::column(&U.col_to_vec(c))).collect();

        Ok(EigenResult {
            iterations: self.iterations,
            values,
            vectors,
        })
    }

    fn print_status(&mut self, i: usize, j: usize, aij: T, φ: T, t: T) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        writeln!(
            self.stream,
            "{:>4}  {:>3}  {:>3}  {}  {}  {}",
            self.iterations,
            i,
            j,
            expformat!("{:+8.4e}", aij),
            expformat!("{:+8.4e}", φ),
            expformat!("{:8.4e}", t),
        )
    }
}

/// `sqrt(Σ_{i<j} A[i][j]²)`
pub(crate) fn off_diagonal_norm<T: FloatT>(A: &Matrix<T>) -> T {
    let n = A.nrows();
    let mut sum = T::zero();
    for i in 0..n {
        for &x in &A.row_slice(i)[(i + 1)..] {
            sum += x * x;
        }
    }
    sum.sqrt()
}

// first (i, j), i < j, with the largest |A[i][j]|
fn max_off_diagonal<T: FloatT>(A: &Matrix<T>) -> (usize, usize) {
    let n = A.nrows();
    let mut best = (0, 1);
    let mut bestval = -T::one();
    for i in 0..n {
        for j in (i + 1)..n {
            let x = A[(i, j)].abs();
            if x > bestval {
                bestval = x;
                best = (i, j);
            }
        }
    }
    best
}

fn rotation_angle<T: FloatT>(A: &Matrix<T>, i: usize, j: usize) -> T {
    let (aii, ajj) = (A[(i, i)], A[(j, j)]);
    if aii == ajj {
        T::FRAC_PI_4()
    } else {
        let (half, two): (T, T) = ((0.5).as_T(), (2.).as_T());
        half * T::atan(two * A[(i, j)] / (aii - ajj))
    }
}

fn rotation<T: FloatT>(n: usize, i: usize, j: usize, φ: T) -> Matrix<T> {
    let (s, c) = φ.sin_cos();
    let mut R = Matrix::identity(n);
    R[(i, i)] = c;
    R[(j, j)] = c;
    R[(i, j)] = -s;
    R[(j, i)] = s;
    R
}

/// Runs the Jacobi rotation method on `A` once for every precision in
/// `eps_values` and reports the number of rotations each one needed.
pub fn iteration_sweep<T: FloatT>(
    A: &Matrix<T>,
    eps_values: &[T],
    settings: &SolverSettings<T>,
) -> Result<Vec<SweepPoint<T>>, SolverError> {
    let mut points = Vec::with_capacity(eps_values.len());
    for &eps in eps_values {
        let settings = SolverSettings {
            eps,
            ..settings.clone()
        };
        let mut solver = SymmetricEigenSolver::new(A, settings)?;
        let result = solver.solve()?;
        points.push(SweepPoint {
            eps,
            iterations: result.iterations,
        });
    }
    Ok(points)
}
