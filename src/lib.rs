//! __numlab__ is a small dense-matrix engine for solving linear systems and
//! computing eigenvalues and eigenvectors.  It is written for numerical methods
//! coursework, so every algorithm is the textbook one, run in single precision
//! by default.
//!
//! ## Features
//!
//! * __Direct solves__: LU decomposition with partial pivoting, producing the
//!   factors $L$, $U$ and the permutation $P$ with $PA = LU$, plus
//!   determinants and inverses.
//!
//! * __Tridiagonal systems__: the Thomas ("sweep") algorithm.
//!
//! * __Fixed-point iteration__: Jacobi and Gauss-Seidel iteration matrices,
//!   iterated until the a-posteriori bound
//!   $\frac{\\|\alpha\\|}{1-\\|\alpha\\|}\\|x_{k+1}-x_k\\| \le \varepsilon$ holds.
//!
//! * __Eigenvalues__: the cyclic Jacobi rotation method for symmetric matrices and
//!   the QR algorithm with Householder reflections for general matrices,
//!   including complex conjugate pairs.
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
//!
//! let lu = LuFactors::decompose(&A).unwrap();
//! let x = lu.solve(&b).unwrap();
//! assert!(x.data().norm_inf_diff(&[1., 1., 1.]) < 1e-5);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

//Rust hates greek characters
#![allow(confusable_idents)]

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod io;
pub mod solver;
