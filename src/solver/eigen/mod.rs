//! Eigenvalue solvers.
//!
//! [`SymmetricEigenSolver`] implements the cyclic Jacobi rotation method for
//! symmetric matrices and returns eigenvectors as well as eigenvalues.
//! [`QrEigenSolver`] iterates Householder QR decompositions of a general
//! square matrix towards quasi-triangular form and returns eigenvalues only,
//! which may include complex conjugate pairs.

use crate::algebra::*;
use num_complex::Complex;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

mod householder;
mod jacobi;
mod qr;

pub use householder::*;
pub use jacobi::*;
pub use qr::*;

/// A real or complex eigenvalue
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub enum Eigenvalue<T = f32> {
    Real(T),
    Complex(Complex<T>),
}

impl<T> Eigenvalue<T>
where
    T: FloatT,
{
    /// `Real` whenever the imaginary part is exactly zero
    pub fn from_complex(z: Complex<T>) -> Self {
        if z.im == T::zero() {
            Eigenvalue::Real(z.re)
        } else {
            Eigenvalue::Complex(z)
        }
    }

    pub fn re(&self) -> T {
        match self {
            Eigenvalue::Real(x) => *x,
            Eigenvalue::Complex(z) => z.re,
        }
    }

    pub fn im(&self) -> T {
        match self {
            Eigenvalue::Real(_) => T::zero(),
            Eigenvalue::Complex(z) => z.im,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Eigenvalue::Real(_))
    }

    pub fn to_complex(&self) -> Complex<T> {
        Complex::new(self.re(), self.im())
    }
}

impl<T> std::fmt::Display for Eigenvalue<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Eigenvalue::Real(x) => write!(f, "{}", x),
            Eigenvalue::Complex(z) => {
                let sign = if z.im >= T::zero() { '+' } else { '-' };
                write!(f, "{} {} {}i", z.re, sign, z.im.abs())
            }
        }
    }
}

/// Output of an eigen solver
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct EigenResult<T = f32> {
    /// iterations (rotations for the Jacobi method) performed
    pub iterations: u32,
    pub values: Vec<Eigenvalue<T>>,
    /// `n x 1` eigenvectors, paired by position with `values`.
    /// Empty for solvers that do not produce eigenvectors.
    pub vectors: Vec<Matrix<T>>,
}

/// Iteration count of one run of a precision sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint<T = f32> {
    pub eps: T,
    pub iterations: u32,
}

#[test]
fn test_eigenvalue_display() {
    assert_eq!(Eigenvalue::Real(2.5_f32).to_string(), "2.5");
    let z = Eigenvalue::Complex(Complex::new(1.0_f32, -2.0));
    assert_eq!(z.to_string(), "1 - 2i");
    assert_eq!(z.im(), -2.0);
    assert!(!z.is_real());
    assert_eq!(
        Eigenvalue::from_complex(Complex::new(3.0_f64, 0.0)),
        Eigenvalue::Real(3.0)
    );
}
