use crate::algebra::{FloatT, Matrix, MatrixError, ShapedMatrix, VectorMath};
use std::ops::{Index, IndexMut};

impl<T> Matrix<T>
where
    T: FloatT,
{
    /// Zero filled matrix of the given `(rows, cols)` size.
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self { m, n, data }
    }

    /// `n x n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut mat = Matrix::zeros((n, n));
        mat.set_identity();
        mat
    }

    pub fn set_identity(&mut self) {
        assert!(self.m == self.n);
        self.data.set(T::zero());
        for i in 0..self.n {
            self[(i, i)] = T::one();
        }
    }

    /// Matrix from row major data.  Panics if `src` does
    /// not hold exactly `rows * cols` values.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert!(m * n == src.len());
        Self {
            m,
            n,
            data: src.to_vec(),
        }
    }

    /// `n x 1` column vector
    pub fn column(src: &[T]) -> Self {
        Self::new_from_slice((src.len(), 1), src)
    }

    /// Checks the shape against the length of the data.  Only
    /// needed for matrices that did not come from a constructor,
    /// e.g. those deserialized from a file.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.data.len() != self.m * self.n {
            return Err(MatrixError::IncompatibleDimension);
        }
        Ok(())
    }

    #[inline]
    fn check_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row >= self.m || col >= self.n {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows: self.m,
                ncols: self.n,
            });
        }
        Ok(row * self.n + col)
    }

    /// Bounds checked element read
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let idx = self.check_index(row, col)?;
        Ok(self.data[idx])
    }

    /// Bounds checked element write
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        let idx = self.check_index(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.m);
        &self.data[(row * self.n)..(row + 1) * self.n]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.m);
        &mut self.data[(row * self.n)..(row + 1) * self.n]
    }

    /// Copy of column `col`
    pub fn col_to_vec(&self, col: usize) -> Vec<T> {
        assert!(col < self.n);
        (0..self.m).map(|row| self[(row, col)]).collect()
    }

    /// Exchange two full rows in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(i < self.m && j < self.m);
        if i == j {
            return;
        }
        let n = self.n;
        let (lo, hi) = (usize::min(i, j), usize::max(i, j));
        let (head, tail) = self.data.split_at_mut(hi * n);
        head[(lo * n)..(lo + 1) * n].swap_with_slice(&mut tail[..n]);
    }

    pub fn transpose(&self) -> Self {
        let mut out = Matrix::zeros((self.n, self.m));
        for i in 0..self.m {
            for j in 0..self.n {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }

    /// Square and equal to its transpose up to the absolute tolerance `tol`
    pub fn is_symmetric(&self, tol: T) -> bool {
        if !self.is_square() {
            return false;
        }
        for r in 0..self.m {
            for c in (r + 1)..self.n {
                if T::abs(self[(r, c)] - self[(c, r)]) > tol {
                    return false;
                }
            }
        }
        true
    }

    pub fn diag(&self) -> Vec<T> {
        let k = usize::min(self.m, self.n);
        (0..k).map(|i| self[(i, i)]).collect()
    }
}

impl<T> ShapedMatrix for Matrix<T> {
    fn size(&self) -> (usize, usize) {
        (self.m, self.n)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &Self::Output {
        // row major storage wraps silently on a bad column
        // index, so both indices are checked explicitly
        assert!(idx.0 < self.m && idx.1 < self.n, "matrix index out of bounds");
        &self.data[idx.0 * self.n + idx.1]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        assert!(idx.0 < self.m && idx.1 < self.n, "matrix index out of bounds");
        &mut self.data[idx.0 * self.n + idx.1]
    }
}

impl<T, const M: usize, const N: usize> From<&[[T; N]; M]> for Matrix<T>
where
    T: FloatT,
{
    fn from(rows: &[[T; N]; M]) -> Self {
        let data = rows.iter().flat_map(|row| row.iter().copied()).collect();
        Self { m: M, n: N, data }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T>
where
    T: FloatT,
{
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        let n = rows.first().map_or(0, |r| r.len());
        if n == 0 {
            return Err(MatrixError::EmptyRows);
        }
        if let Some(row) = rows.iter().position(|r| r.len() != n) {
            return Err(MatrixError::RaggedRows { row });
        }
        let m = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self { m, n, data })
    }
}

impl<T> std::fmt::Display for Matrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for i in 0..self.m {
            write!(f, "[")?;
            for j in 0..self.n {
                write!(f, " {:>10.6}", self[(i, j)])?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}
