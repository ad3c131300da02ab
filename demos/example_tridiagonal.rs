use numlab::solver::*;

fn main() {
    // one (sub, diag, sup, rhs) tuple per equation
    let system = TridiagonalSystem::<f32>::from_rows(&[
        (0., -6., 5., 51.),
        (-1., 13., 6., 100.),
        (-9., -15., -4., -12.),
        (-1., -7., 1., 47.),
        (9., -18., 0., -90.),
    ])
    .unwrap();

    match system.solve() {
        Ok(x) => println!("x =\n{}", x),
        Err(e) => println!("error : {}", e),
    }
}
