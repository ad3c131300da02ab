//! Dense matrix type and the scalar, vector and matrix math used by the solvers.
//!
//! All internal math goes through the traits in this module, which are
//! implemented generically for floats of type [`FloatT`].

mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_traits;
mod vecmath;

pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_traits::*;

#[cfg(test)]
mod tests;
