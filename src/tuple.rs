use crate::math::{near_eq, EPSILON};
use approx::AbsDiffEq;
use nalgebra::Vector4;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Homogeneous 4-component tuple. `w == 1` marks a point, `w == 0` a vector.
#[derive(Clone, Copy, Debug)]
pub struct Tuple {
    v: Vector4<f64>,
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Tuple {
            v: Vector4::new(x, y, z, w),
        }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    pub fn origin() -> Self {
        Self::point(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.v[0]
    }
    pub fn y(&self) -> f64 {
        self.v[1]
    }
    pub fn z(&self) -> f64 {
        self.v[2]
    }
    pub fn w(&self) -> f64 {
        self.v[3]
    }

    pub fn is_point(&self) -> bool {
        near_eq(self.w(), 1.0)
    }

    pub fn is_vector(&self) -> bool {
        near_eq(self.w(), 0.0)
    }

    //drops the w component, turning anything into a direction
    pub fn to_vector(self) -> Self {
        Self::vector(self.x(), self.y(), self.z())
    }

    pub fn magnitude(&self) -> f64 {
        self.v.norm()
    }

    pub fn normalize(&self) -> Self {
        *self / self.magnitude()
    }

    pub fn dot(&self, rhs: &Self) -> f64 {
        self.v.xyz().dot(&rhs.v.xyz())
    }

    pub fn cross(&self, rhs: &Self) -> Self {
        let c = self.v.xyz().cross(&rhs.v.xyz());
        Self::vector(c[0], c[1], c[2])
    }

    /// Reflects `self` about `normal`.
    pub fn reflect(&self, normal: &Self) -> Self {
        *self - *normal * 2.0 * self.dot(normal)
    }
}

impl Index<usize> for Tuple {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.v[i]
    }
}

impl Add for Tuple {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Tuple { v: self.v + rhs.v }
    }
}

impl Sub for Tuple {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Tuple { v: self.v - rhs.v }
    }
}

impl Neg for Tuple {
    type Output = Self;
    fn neg(self) -> Self {
        Tuple { v: -self.v }
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Tuple { v: self.v * rhs }
    }
}

impl Div<f64> for Tuple {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Tuple { v: self.v / rhs }
    }
}

impl AbsDiffEq for Tuple {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.v
            .iter()
            .zip(other.v.iter())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::prelude::*;

    #[test]
    fn w_tags_points_and_vectors() {
        let p = Tuple::new(4.3, -4.2, 3.1, 1.0);
        assert!(p.is_point());
        assert!(!p.is_vector());
        let v = Tuple::new(4.3, -4.2, 3.1, 0.0);
        assert!(v.is_vector());
        assert!(!v.is_point());
        assert_eq!(Tuple::point(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 1.0));
        assert_eq!(Tuple::vector(4.0, -4.0, 3.0), Tuple::new(4.0, -4.0, 3.0, 0.0));
    }

    #[test]
    fn arithmetic_keeps_tags() {
        let p1 = Tuple::point(3.0, 2.0, 1.0);
        let p2 = Tuple::point(5.0, 6.0, 7.0);
        let v = Tuple::vector(5.0, 6.0, 7.0);
        assert_eq!(p1 - p2, Tuple::vector(-2.0, -4.0, -6.0));
        assert_eq!(p1 - v, Tuple::point(-2.0, -4.0, -6.0));
        assert_eq!(p1 + v, Tuple::point(8.0, 8.0, 8.0));
        assert_eq!(v - v, Tuple::vector(0.0, 0.0, 0.0));
        assert!((v + v).is_vector());
    }

    #[test]
    fn scalar_ops_and_negation() {
        let a = Tuple::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(-a, Tuple::new(-1.0, 2.0, -3.0, 4.0));
        assert_eq!(a * 3.5, Tuple::new(3.5, -7.0, 10.5, -14.0));
        assert_eq!(a * 0.5, Tuple::new(0.5, -1.0, 1.5, -2.0));
        assert_eq!(a / 2.0, Tuple::new(0.5, -1.0, 1.5, -2.0));
    }

    #[test]
    fn magnitude_and_normalize() {
        assert_abs_diff_eq!(Tuple::vector(0.0, 1.0, 0.0).magnitude(), 1.0);
        assert_abs_diff_eq!(Tuple::vector(1.0, 2.0, 3.0).magnitude(), 14f64.sqrt());
        assert_abs_diff_eq!(Tuple::vector(-1.0, -2.0, -3.0).magnitude(), 14f64.sqrt());
        assert_eq!(
            Tuple::vector(4.0, 0.0, 0.0).normalize(),
            Tuple::vector(1.0, 0.0, 0.0)
        );
        let s = 14f64.sqrt();
        assert_eq!(
            Tuple::vector(1.0, 2.0, 3.0).normalize(),
            Tuple::vector(1.0 / s, 2.0 / s, 3.0 / s)
        );
    }

    #[test]
    fn dot_ignores_w() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(a.dot(&b), 20.0);
        let p = Tuple::point(1.0, 2.0, 3.0);
        let q = Tuple::point(2.0, 3.0, 4.0);
        assert_abs_diff_eq!(p.dot(&q), 20.0);
    }

    #[test]
    fn cross_product() {
        let a = Tuple::vector(1.0, 2.0, 3.0);
        let b = Tuple::vector(2.0, 3.0, 4.0);
        assert_eq!(a.cross(&b), Tuple::vector(-1.0, 2.0, -1.0));
        assert_eq!(b.cross(&a), Tuple::vector(1.0, -2.0, 1.0));
    }

    #[test]
    fn reflection() {
        let v = Tuple::vector(1.0, -1.0, 0.0);
        let n = Tuple::vector(0.0, 1.0, 0.0);
        assert_eq!(v.reflect(&n), Tuple::vector(1.0, 1.0, 0.0));

        let v = Tuple::vector(0.0, -1.0, 0.0);
        let h = 2f64.sqrt() / 2.0;
        let n = Tuple::vector(h, h, 0.0);
        assert_eq!(v.reflect(&n), Tuple::vector(1.0, 0.0, 0.0));
    }

    #[test]
    fn random_tuples_hold_algebraic_laws() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..200 {
            let t = Tuple::new(
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
                rng.gen_range(-50.0..50.0),
            );
            assert_eq!(-(-t), t);
            assert_abs_diff_eq!(t.normalize().magnitude(), 1.0, epsilon = 1e-9);

            let p = Tuple::point(t.x(), t.y(), t.z());
            let v = Tuple::vector(t.w(), t.z(), t.y());
            assert!((p + v).is_point());
            assert!((p - v).is_point());
            assert!((p - p).is_vector());
        }
    }
}
