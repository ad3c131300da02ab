#![allow(non_snake_case)]
use super::{qr_decompose, EigenResult, Eigenvalue};
use crate::algebra::*;
use crate::io::{impl_print_target_for, PrintTarget};
use crate::solver::info_print::*;
use crate::solver::{SolverError, SolverSettings};
use num_complex::Complex;
use std::io::Write;

/// Roots of the characteristic polynomial of the 2x2 block of `A` at
/// rows and columns `i, i+1`.
///
/// With `a1 = A[i][i]`, `a2 = A[i+1][i+1]`, `a3 = A[i+1][i]` and
/// `a4 = A[i][i+1]` the block has `λ² + bλ + c` with `b = -(a1 + a2)` and
/// `c = a1*a2 - a3*a4`, and the roots are `(-b ± √(b² - 4c))/2`.
pub fn complex_pair<T: FloatT>(A: &Matrix<T>, i: usize) -> (Complex<T>, Complex<T>) {
    let (a1, a2) = (A[(i, i)], A[(i + 1, i + 1)]);
    let (a3, a4) = (A[(i + 1, i)], A[(i, i + 1)]);

    let b = -(a1 + a2);
    let c = a1 * a2 - a3 * a4;
    let four: T = (4.).as_T();
    let half: T = (0.5).as_T();
    let d = b * b - four * c;

    if d >= T::zero() {
        let s = d.sqrt();
        (
            Complex::new((-b + s) * half, T::zero()),
            Complex::new((-b - s) * half, T::zero()),
        )
    } else {
        let s = (-d).sqrt() * half;
        (Complex::new(-b * half, s), Complex::new(-b * half, -s))
    }
}

// A position is taken as converging to a real eigenvalue while its
// last `window` subdiagonal magnitudes keep strictly decreasing
fn is_decaying<T: FloatT>(history: &[T], window: usize) -> bool {
    let start = usize::max(1, history.len().saturating_sub(window.saturating_sub(1)));
    (start..history.len()).all(|k| history[k] < history[k - 1])
}

// ‖A[from.., col]‖
fn column_tail_norm<T: FloatT>(A: &Matrix<T>, from: usize, col: usize) -> T {
    let mut sum = T::zero();
    for r in from..A.nrows() {
        sum += A[(r, col)] * A[(r, col)];
    }
    sum.sqrt()
}

/// Unshifted QR algorithm for the eigenvalues of a general square matrix.
///
/// Every iteration replaces `A = QR` by `RQ`.  Eigenvalues are split off
/// left to right as the iterates approach quasi-triangular form: a real one
/// once the column below its diagonal entry is within `eps` of zero, or a
/// complex pair from a 2x2 diagonal block once the column below the block is
/// within `eps` of zero and the block's eigenvalues moved by at most `eps`
/// since the previous iteration.  Whether a position is treated as real
/// depends on whether its subdiagonal entry has been strictly decreasing over
/// the last `settings.history_len` iterations.
pub struct QrEigenSolver<T: FloatT = f32> {
    pub A: Matrix<T>,
    pub settings: SolverSettings<T>,
    pub iterations: u32,
    stream: PrintTarget,
}

impl_print_target_for!(QrEigenSolver);

impl<T> QrEigenSolver<T>
where
    T: FloatT,
{
    pub fn new(A: &Matrix<T>, settings: SolverSettings<T>) -> Result<Self, SolverError> {
        settings.validate()?;
        if !A.is_square() {
            return Err(MatrixError::NotSquare.into());
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
        print_configuration(&mut self.stream, &self.settings, "QR algorithm", self.A.nrows())?;

        let result = self.iterate();

        match &result {
            Ok(_) => print_footer(&mut self.stream, &self.settings, self.iterations, &"Solved")?,
            Err(e) => print_footer(&mut self.stream, &self.settings, self.iterations, e)?,
        }
        result
    }

    fn iterate(&mut self) -> Result<EigenResult<T>, SolverError> {
        let n = self.A.nrows();
        let eps = self.settings.eps;
        let window = self.settings.history_len;

        let mut A = self.A.clone();
        let mut prev = Matrix::zeros((n, n));
        let mut history: Vec<Vec<T>> = vec![Vec::new(); n.saturating_sub(1)];
        let mut values = Vec::with_capacity(n);
        let mut i = 0;

        print_status_header(&mut self.stream, &self.settings, "found    subdiag(i)")?;

        while i < n {
            if self.iterations >= self.settings.max_iter {
                return Err(SolverError::MaxIterations {
                    iterations: self.iterations,
                });
            }

            let (Q, R) = qr_decompose(&A);
            std::mem::swap(&mut prev, &mut A);
            A.mul_into(&R, &Q);
            self.iterations += 1;

            for (k, h) in history.iter_mut().enumerate() {
                h.push(A[(k + 1, k)].abs());
            }

            // split off as many eigenvalues as this iterate allows
            while i < n {
                let real = i + 1 == n || is_decaying(&history[i], window);

                if real {
                    if column_tail_norm(&A, i + 1, i) > eps {
                        break;
                    }
                    values.push(Eigenvalue::Real(A[(i, i)]));
                    i += 1;
                } else {
                    if column_tail_norm(&A, i + 2, i) > eps {
                        break;
                    }
                    let (λ1, λ2) = complex_pair(&A, i);
                    let (μ1, μ2) = complex_pair(&prev, i);
                    if (λ1 - μ1).norm() > eps || (λ2 - μ2).norm() > eps {
                        break;
                    }
                    values.push(Eigenvalue::from_complex(λ1));
                    values.push(Eigenvalue::from_complex(λ2));
                    i += 2;
                }
            }

            let subdiag = if i + 1 < n {
                A[(i + 1, i)].abs()
            } else {
                T::zero()
            };
            self.print_status(values.len(), subdiag)?;
        }

        Ok(EigenResult {
            iterations: self.iterations,
            values,
            vectors: Vec::new(),
        })
    }

    fn print_status(&mut self, found: usize, subdiag: T) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        writeln!(
            self.stream,
            "{:>4}  {:>5}    {}",
            self.iterations,
            found,
            expformat!("{:8.4e}", subdiag)
        )
    }
}
