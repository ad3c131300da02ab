use crate::algebra::*;
use derive_builder::Builder;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error type returned by settings validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Settings shared by the iterative linear solvers and the eigen solvers.
///
/// Build with [`SolverSettingsBuilder`], which validates the values on `build()`,
/// or start from `SolverSettings::default()`.

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverSettings<T: FloatT> {
    ///precision ε.  Must be positive for fixed point iteration,
    ///and may be zero for the eigen solvers
    #[builder(default = "(1e-3).as_T()")]
    pub eps: T,

    ///maximum number of iterations
    #[builder(default = "10_000")]
    pub max_iter: u32,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///number of trailing QR iterations inspected when deciding whether a
    ///subdiagonal entry is decaying (real eigenvalue) or not (complex pair)
    #[builder(default = "5")]
    pub history_len: usize,

    ///absolute tolerance for the symmetry check of the Jacobi rotation method
    #[builder(default = "(1e-5).as_T()")]
    pub symmetry_tol: T,
}

impl<T> Default for SolverSettings<T>
where
    T: FloatT,
{
    fn default() -> SolverSettings<T> {
        SolverSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> SolverSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_eps(self.eps)?;
        validate_max_iter(self.max_iter)?;
        validate_history_len(self.history_len)?;
        validate_symmetry_tol(self.symmetry_tol)?;
        Ok(())
    }

    /// Fixed point iteration additionally needs a strictly positive ε
    pub(crate) fn validate_for_fixed_point(&self) -> Result<(), SettingsError> {
        self.validate()?;
        if self.eps <= T::zero() {
            return Err(SettingsError::BadFieldValue("eps"));
        }
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SolverSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SolverSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> SolverSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(eps) = self.eps {
            validate_eps(eps)?;
        }
        if let Some(max_iter) = self.max_iter {
            validate_max_iter(max_iter)?;
        }
        if let Some(history_len) = self.history_len {
            validate_history_len(history_len)?;
        }
        if let Some(symmetry_tol) = self.symmetry_tol {
            validate_symmetry_tol(symmetry_tol)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_eps<T: FloatT>(eps: T) -> Result<(), SettingsError> {
    if !eps.is_finite() || eps < T::zero() {
        return Err(SettingsError::BadFieldValue("eps"));
    }
    Ok(())
}

fn validate_max_iter(max_iter: u32) -> Result<(), SettingsError> {
    if max_iter == 0 {
        return Err(SettingsError::BadFieldValue("max_iter"));
    }
    Ok(())
}

fn validate_history_len(history_len: usize) -> Result<(), SettingsError> {
    // need at least two samples to see a decrease
    if history_len < 2 {
        return Err(SettingsError::BadFieldValue("history_len"));
    }
    Ok(())
}

fn validate_symmetry_tol<T: FloatT>(tol: T) -> Result<(), SettingsError> {
    if !tol.is_finite() || tol < T::zero() {
        return Err(SettingsError::BadFieldValue("symmetry_tol"));
    }
    Ok(())
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = SolverSettingsBuilder::<f32>::default().build().unwrap();
    assert_eq!(settings.max_iter, 10_000);
    assert_eq!(settings.history_len, 5);
    assert!(!settings.verbose);

    // fail on bad values
    assert!(SolverSettingsBuilder::<f32>::default()
        .eps(-1.0)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::<f32>::default()
        .eps(f32::NAN)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::<f64>::default()
        .history_len(1)
        .build()
        .is_err());
    assert!(SolverSettingsBuilder::<f64>::default()
        .max_iter(0)
        .build()
        .is_err());

    // zero precision is fine for the eigen solvers
    let settings = SolverSettingsBuilder::<f64>::default()
        .eps(0.0)
        .build()
        .unwrap();
    assert!(settings.validate().is_ok());
    assert_eq!(
        settings.validate_for_fixed_point(),
        Err(SettingsError::BadFieldValue("eps"))
    );

    // directly construct a bad SolverSettings and manually check
    let settings = SolverSettings::<f64> {
        symmetry_tol: -1.0,
        ..SolverSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("symmetry_tol"))
    );
}
