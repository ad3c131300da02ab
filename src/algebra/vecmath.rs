use super::{FloatT, VectorMath};
use itertools::izip;
use std::iter::zip;

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn set(&mut self, c: T) -> &mut Self {
        self.fill(c);
        self
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.iter_mut().for_each(|x| *x *= c);
        self
    }

    fn negate(&mut self) -> &mut Self {
        self.iter_mut().for_each(|x| *x = -*x);
        self
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y).fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    fn dist(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        zip(self, y)
            .fold(T::zero(), |acc, (&a, &b)| acc + (a - b) * (a - b))
            .sqrt()
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.sumsq().sqrt()
    }

    fn norm_inf(&self) -> T {
        self.iter().fold(T::zero(), |acc, x| T::max(acc, x.abs()))
    }

    fn norm_inf_diff(&self, b: &[T]) -> T {
        assert_eq!(self.len(), b.len());
        zip(self, b).fold(T::zero(), |acc, (&x, &y)| T::max(acc, (x - y).abs()))
    }

    fn argmax_abs(&self) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;
        for (i, x) in self.iter().map(|x| x.abs()).enumerate() {
            match best {
                Some((_, b)) if x <= b => {}
                _ => best = Some((i, x)),
            }
        }
        best.map(|(i, _)| i)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());
        for (y, &x) in zip(&mut *self, x) {
            *y = a * x + b * *y;
        }
        self
    }

    fn waxpby(&mut self, a: T, x: &[T], b: T, y: &[T]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        assert_eq!(self.len(), y.len());
        for (w, &u, &v) in izip!(&mut *self, x, y) {
            *w = a * u + b * v;
        }
        self
    }
}
