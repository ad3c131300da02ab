#![allow(non_snake_case)]
use crate::algebra::*;
use crate::io::{impl_print_target_for, PrintTarget};
use crate::solver::info_print::*;
use crate::solver::{SolverError, SolverSettings};
use std::io::Write;

/// Solution returned by [`FixedPointSolver`]
#[derive(Debug, Clone)]
pub struct FixedPointResult<T = f32> {
    /// final iterate, `n x 1`
    pub x: Matrix<T>,
    /// number of iterates computed after the starting point `x₀ = β`
    pub iterations: u32,
}

/// Fixed point iteration `x_{k+1} = α*x_k + β`, starting from `x₀ = β`.
///
/// Iteration stops at the first `k` with
/// `‖α‖/(1-‖α‖) * ‖x_{k+1} - x_k‖ <= eps`, using the Frobenius norm for
/// `α` and the 2-norm for vectors.  Since the bound only holds for a
/// contraction, `‖α‖ >= 1` is rejected before iterating.
pub struct FixedPointSolver<T: FloatT = f32> {
    pub alpha: Matrix<T>,
    pub beta: Matrix<T>,
    pub settings: SolverSettings<T>,
    pub iterations: u32,
    stream: PrintTarget,
}

impl_print_target_for!(FixedPointSolver);

impl<T> FixedPointSolver<T>
where
    T: FloatT,
{
    pub fn new(
        alpha: Matrix<T>,
        beta: Matrix<T>,
        settings: SolverSettings<T>,
    ) -> Result<Self, SolverError> {
        settings.validate_for_fixed_point()?;
        if !alpha.is_square() {
            return Err(MatrixError::NotSquare.into());
        }
        if beta.size() != (alpha.nrows(), 1) {
            return Err(MatrixError::IncompatibleDimension.into());
        }
        Ok(Self {
            alpha,
            beta,
            settings,
            iterations: 0,
            stream: PrintTarget::default(),
        })
    }

    pub fn solve(&mut self) -> Result<FixedPointResult<T>, SolverError> {
        self.iterations = 0;
        print_configuration(
            &mut self.stream,
            &self.settings,
            "fixed point iteration",
            self.alpha.nrows(),
        )?;

        let result = self.iterate();

        match &result {
            Ok(_) => print_footer(&mut self.stream, &self.settings, self.iterations, &"Solved")?,
            Err(e) => print_footer(&mut self.stream, &self.settings, self.iterations, e)?,
        }
        result
    }

    fn iterate(&mut self) -> Result<FixedPointResult<T>, SolverError> {
        let norm = self.alpha.norm_fro();
        if norm >= T::one() {
            return Err(SolverError::NotContractive {
                norm: norm.to_f64().unwrap_or(f64::NAN),
            });
        }
        let factor = norm / (T::one() - norm);
        let eps = self.settings.eps;

        print_status_header(&mut self.stream, &self.settings, "error bound")?;

        let mut x = self.beta.clone();
        let mut next = Matrix::zeros(x.size());

        loop {
            next.mul_into(&self.alpha, &x);
            next.data_mut().axpby(T::one(), self.beta.data(), T::one());
            self.iterations += 1;

            if !next.data().is_finite() {
                return Err(SolverError::Diverged {
                    iterations: self.iterations,
                });
            }

            let bound = factor * next.data().dist(x.data());
            self.print_status(bound)?;

            std::mem::swap(&mut x, &mut next);

            if bound <= eps {
                break;
            }
            if self.iterations >= self.settings.max_iter {
                return Err(SolverError::MaxIterations {
                    iterations: self.iterations,
                });
            }
        }

        Ok(FixedPointResult {
            x,
            iterations: self.iterations,
        })
    }

    fn print_status(&mut self, bound: T) -> std::io::Result<()> {
        if !self.settings.verbose {
            return Ok(());
        }
        writeln!(
            self.stream,
            "{:>4}  {}",
            self.iterations,
            expformat!("{:8.4e}", bound)
        )
    }
}
