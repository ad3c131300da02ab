#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Dense matrix in row major format.
///
/// Column vectors are represented as `n x 1` matrices.  The matrix is a plain
/// value type: cloning copies the underlying storage and no two matrices ever
/// share elements.
///
/// The shape is fixed at construction.  Elements can be read and written
/// either with the bounds checked [`get`](Matrix::get) / [`set`](Matrix::set)
/// pair, or by indexing with a `(row, col)` tuple, which panics when out of
/// range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Matrix<T = f32> {
    /// number of rows
    pub(crate) m: usize,
    /// number of columns
    pub(crate) n: usize,
    /// vector of data in row major format
    pub(crate) data: Vec<T>,
}
