#![allow(non_snake_case)]
use crate::algebra::{FloatT, Matrix, MatrixMath, ShapedMatrix, VectorMath};
use std::iter::zip;
use std::ops::{Add, Mul, Sub};

impl<T: FloatT> MatrixMath for Matrix<T> {
    type T = T;

    fn scale(&mut self, c: T) {
        self.data.scale(c);
    }

    fn negate(&mut self) {
        self.data.negate();
    }

    fn norm_fro(&self) -> T {
        self.data.norm()
    }

    fn norm_max(&self) -> T {
        self.data.norm_inf()
    }
}

// Binary operations come in two flavours.  The allocating versions
// size a fresh result from the operands.  The `_into` versions write
// into `self` only, which must already have the result shape.  Since
// `self` is borrowed mutably it can never alias either input.

impl<T: FloatT> Matrix<T> {
    /// Produces `self = A + B`
    pub fn add_into(&mut self, A: &Matrix<T>, B: &Matrix<T>) {
        assert_eq!(A.size(), B.size());
        assert_eq!(self.size(), A.size());
        self.data.waxpby(T::one(), &A.data, T::one(), &B.data);
    }

    /// Produces `self = A - B`
    pub fn sub_into(&mut self, A: &Matrix<T>, B: &Matrix<T>) {
        assert_eq!(A.size(), B.size());
        assert_eq!(self.size(), A.size());
        self.data.waxpby(T::one(), &A.data, -T::one(), &B.data);
    }

    /// Produces `self = A * B`.  The caller must guarantee that
    /// `A.ncols() == B.nrows()`.
    pub fn mul_into(&mut self, A: &Matrix<T>, B: &Matrix<T>) {
        let (n, p) = A.size();
        let m = B.ncols();
        assert_eq!(p, B.nrows());
        assert_eq!(self.size(), (n, m));

        for i in 0..n {
            let Arow = A.row_slice(i);
            for j in 0..m {
                let mut acc = T::zero();
                for (t, &a) in Arow.iter().enumerate() {
                    acc += a * B[(t, j)];
                }
                self[(i, j)] = acc;
            }
        }
    }

    /// Produces `self = c * A`
    pub fn scale_into(&mut self, A: &Matrix<T>, c: T) {
        assert_eq!(self.size(), A.size());
        for (y, &x) in zip(self.data.iter_mut(), A.data.iter()) {
            *y = c * x;
        }
    }

    pub fn add(&self, B: &Matrix<T>) -> Matrix<T> {
        let mut out = Matrix::zeros(self.size());
        out.add_into(self, B);
        out
    }

    pub fn sub(&self, B: &Matrix<T>) -> Matrix<T> {
        let mut out = Matrix::zeros(self.size());
        out.sub_into(self, B);
        out
    }

    pub fn mul(&self, B: &Matrix<T>) -> Matrix<T> {
        let mut out = Matrix::zeros((self.nrows(), B.ncols()));
        out.mul_into(self, B);
        out
    }

    pub fn scaled(&self, c: T) -> Matrix<T> {
        let mut out = Matrix::zeros(self.size());
        out.scale_into(self, c);
        out
    }
}

impl<T: FloatT> Add for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Self) -> Matrix<T> {
        Matrix::add(self, rhs)
    }
}

impl<T: FloatT> Sub for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Self) -> Matrix<T> {
        Matrix::sub(self, rhs)
    }
}

impl<T: FloatT> Mul for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Self) -> Matrix<T> {
        Matrix::mul(self, rhs)
    }
}

impl<T: FloatT> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, c: T) -> Matrix<T> {
        self.scaled(c)
    }
}

#[test]
fn test_mul_into_no_alias() {
    let A = Matrix::<f64>::from(&[
        [1., 2.], //
        [3., 4.], //
    ]);
    let B = Matrix::from(&[
        [0., 1.], //
        [1., 0.], //
    ]);
    let mut C = Matrix::zeros((2, 2));
    C.mul_into(&A, &B);
    assert_eq!(C, Matrix::from(&[[2., 1.], [4., 3.]]));

    // reusing the output buffer overwrites it completely
    C.mul_into(&B, &A);
    assert_eq!(C, Matrix::from(&[[3., 4.], [1., 2.]]));
}

#[test]
fn test_norms() {
    #[rustfmt::skip]
    let A = Matrix::<f64>::from(&[
        [ 1., -2.],
        [-2.,  4.],
    ]);
    assert_eq!(A.norm_fro(), 5.0);
    assert_eq!(A.norm_max(), 4.0);
}
