#![allow(non_snake_case)]
use crate::algebra::*;

// sign(0) = +1, so that v[i] never cancels against the column norm
fn sign<T: FloatT>(x: T) -> T {
    if x >= T::zero() {
        T::one()
    } else {
        -T::one()
    }
}

/// Householder vector annihilating column `i` of `A` below the diagonal.
///
/// `v[j] = 0` for `j < i`, `v[i] = A[i][i] + sign(A[i][i])*‖A[i.., i]‖` and
/// `v[j] = A[j][i]` for `j > i`, with `sign(0) = 1`.  Requires `i` to be a valid row and column.
pub fn householder_vector<T: FloatT>(A: &Matrix<T>, i: usize) -> Matrix<T> {
    let m = A.nrows();
    assert!(i < m && i < A.ncols());

    let mut v = Matrix::zeros((m, 1));
    let mut sumsq = T::zero();
    for j in i..m {
        let aji = A[(j, i)];
        sumsq += aji * aji;
        v[(j, 0)] = aji;
    }
    let aii = A[(i, i)];
    v[(i, 0)] = aii + sign(aii) * sumsq.sqrt();
    v
}

/// The reflection `H = I - 2*v*vᵀ/(vᵀv)`, or `None` if `v` is zero
pub fn householder_matrix<T: FloatT>(v: &Matrix<T>) -> Option<Matrix<T>> {
    let vtv = v.data().sumsq();
    if vtv == T::zero() {
        return None;
    }
    let m = v.nrows();
    let two: T = (2.).as_T();
    let c = two / vtv;
    let mut H = Matrix::identity(m);
    for r in 0..m {
        for s in 0..m {
            H[(r, s)] -= c * v[(r, 0)] * v[(s, 0)];
        }
    }
    Some(H)
}

/// QR decomposition by Householder reflections, `A = Q*R`.
///
/// Columns whose reflection vector vanishes are left as they are, so `R`
/// is upper triangular except where such a column was skipped.
pub fn qr_decompose<T: FloatT>(A: &Matrix<T>) -> (Matrix<T>, Matrix<T>) {
    let (m, n) = A.size();
    let mut Q = Matrix::identity(m);
    let mut R = A.clone();
    let mut work = Matrix::zeros((m, m));
    let mut workR = Matrix::zeros((m, n));

    for i in 0..usize::min(m.saturating_sub(1), n) {
        let v = householder_vector(&R, i);
        if let Some(H) = householder_matrix(&v) {
            work.mul_into(&Q, &H);
            std::mem::swap(&mut Q, &mut work);
            workR.mul_into(&H, &R);
            std::mem::swap(&mut R, &mut workR);
        }
    }
    (Q, R)
}
