//! Linear system and eigenvalue solvers.
//!
//! Direct methods ([LU](crate::solver::lu) and the
//! [tridiagonal](crate::solver::tridiagonal) sweep) return their result in a
//! single call.  The [iterative](crate::solver::iterative) linear solvers and
//! the [eigen](crate::solver::eigen) solvers loop until a precision `eps` is
//! met and are configured through [`SolverSettings`].  Those solvers also
//! implement [`ConfigurablePrintTarget`](crate::io::ConfigurablePrintTarget)
//! for their verbose progress output.

mod error;
pub(crate) mod info_print;
mod settings;

pub mod eigen;
pub mod iterative;
pub mod lu;
pub mod tridiagonal;

#[cfg(feature = "serde")]
pub mod json;

pub use error::*;
pub use settings::*;

pub use eigen::*;
pub use iterative::*;
pub use lu::*;
pub use tridiagonal::*;

#[cfg(feature = "serde")]
pub use json::*;
