use super::FloatT;

/// Elementwise and reduction operations on slices of
/// [`FloatT`](crate::algebra::FloatT).  Matrix storage is a flat slice, so
/// these back most of the arithmetic in [`Matrix`](crate::algebra::Matrix).
pub trait VectorMath {
    type T;

    /// Fill with `c`
    fn set(&mut self, c: Self::T) -> &mut Self;

    /// Multiply every entry by `c`
    fn scale(&mut self, c: Self::T) -> &mut Self;

    fn negate(&mut self) -> &mut Self;

    fn dot(&self, y: &Self) -> Self::T;

    /// Euclidean distance `‖self - y‖`
    fn dist(&self, y: &Self) -> Self::T;

    fn sumsq(&self) -> Self::T;

    /// Euclidean norm
    fn norm(&self) -> Self::T;

    /// Largest absolute entry, zero when empty
    fn norm_inf(&self) -> Self::T;

    /// `max |self[i] - b[i]|`
    fn norm_inf_diff(&self, b: &Self) -> Self::T;

    /// Position of the first entry with the largest absolute value
    fn argmax_abs(&self) -> Option<usize>;

    /// No Infs or NaNs
    fn is_finite(&self) -> bool;

    /// `self = a*x + b*self`
    fn axpby(&mut self, a: Self::T, x: &Self, b: Self::T) -> &mut Self;

    /// `self = a*x + b*y`
    fn waxpby(&mut self, a: Self::T, x: &Self, b: Self::T, y: &Self) -> &mut Self;
}

/// Whole-matrix operations on [`FloatT`](crate::algebra::FloatT) entries
pub trait MatrixMath {
    type T: FloatT;

    fn scale(&mut self, c: Self::T);

    fn negate(&mut self);

    /// Frobenius norm `sqrt(Σ A[i][j]²)`
    fn norm_fro(&self) -> Self::T;

    /// Largest absolute entry
    fn norm_max(&self) -> Self::T;
}
