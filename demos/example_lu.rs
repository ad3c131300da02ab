#![allow(non_snake_case)]

use numlab::algebra::*;
use numlab::solver::*;

fn main() {
    #[rustfmt::skip]
    let A = Matrix::<f32>::from(&[
        [ 1., -5., -7.,  1.],
        [ 1., -3., -9., -4.],
        [-2.,  4.,  2.,  1.],
        [-9.,  9.,  5.,  3.],
    ]);
    let b = Matrix::column(&[-75., -41., 18., 29.]);

    let lu = LuFactors::decompose(&A).unwrap();
    println!("L =\n{}", lu.L);
    println!("U =\n{}", lu.U);
    println!("P =\n{}", lu.P);

    match lu.solve(&b) {
        Ok(x) => println!("x =\n{}", x),
        Err(e) => println!("error : {}", e),
    }

    println!("det(A) = {}", lu.determinant());

    match lu.inverse() {
        Ok(Ainv) => println!("inv(A) =\n{}", Ainv),
        Err(e) => println!("error : {}", e),
    }
}
