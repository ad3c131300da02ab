use crate::algebra::*;

#[test]
fn test_scale_negate_set() {
    let mut x = [3., 0., 2., 1.];
    x.scale(3.);
    assert_eq!(x, [9., 0., 6., 3.]);
    x.negate();
    assert_eq!(x, [-9., 0., -6., -3.]);
    x.set(1.5);
    assert_eq!(x, [1.5; 4]);
}

#[test]
fn test_dot_norms() {
    let x = [3., -4., 0.];
    let y = [1., 1., 1.];
    assert_eq!(x.dot(&y), -1.);
    assert_eq!(x.sumsq(), 25.);
    assert_eq!(x.norm(), 5.);
    assert_eq!(x.norm_inf(), 4.);
    assert_eq!(x.dist(&[0., 0., 0.]), 5.);
    assert_eq!(x.norm_inf_diff(&y), 5.);
}

#[test]
fn test_argmax_abs() {
    assert_eq!([1., -7., 3.].argmax_abs(), Some(1));
    // ties go to the first entry
    assert_eq!([2., -2., 2.].argmax_abs(), Some(0));
    assert_eq!([0., 0.].argmax_abs(), Some(0));
    let empty: [f64; 0] = [];
    assert_eq!(empty.argmax_abs(), None);
}

#[test]
fn test_is_finite() {
    let mut x = vec![1.0_f32, 2.0, 3.0];
    assert!(x.is_finite());
    x[1] = f32::NAN;
    assert!(!x.is_finite());
    x[1] = f32::INFINITY;
    assert!(!x.is_finite());
}

#[test]
fn test_axpby_waxpby() {
    let mut y = vec![1., 2., 3.];
    let x = vec![1., 1., 1.];
    y.axpby(2., &x, -1.);
    assert_eq!(y, vec![1., 0., -1.]);

    let mut w = vec![0.; 3];
    w.waxpby(1., &x, 3., &y);
    assert_eq!(w, vec![4., 1., -2.]);
}
