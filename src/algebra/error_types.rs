use thiserror::Error;

/// Error type returned by dense matrix construction and indexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Element access outside of the matrix shape
    #[error("index ({row}, {col}) out of bounds for a {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Inputs have incompatible dimensions
    #[error("Incompatible dimensions")]
    IncompatibleDimension,
    /// A square matrix was required
    #[error("Matrix is not square")]
    NotSquare,
    /// Nested rows were empty
    #[error("Matrix rows must be non-empty")]
    EmptyRows,
    /// Nested rows have different lengths
    #[error("Row {row} has a different length than row 0")]
    RaggedRows { row: usize },
}
