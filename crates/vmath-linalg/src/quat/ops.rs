use std::ops::{
    Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    traits::{Float, Scalar},
    Quat, Vec3,
};

impl<T: ApproxEq<Tolerance = T>> ApproxEq for Quat<T>
where
    T: crate::approx::DefaultTolerances + Copy,
{
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.r.abs_diff_eq(&other.r, abs_tolerance) && self.v.abs_diff_eq(&other.v, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.r.rel_diff_eq(&other.r, rel_tolerance) && self.v.rel_diff_eq(&other.v, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.r.ulps_diff_eq(&other.r, ulps_tolerance)
            && self.v.ulps_diff_eq(&other.v, ulps_tolerance)
    }
}

/// Hamilton product.
impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Quat::from_real_imaginary(
            self.r * rhs.r - self.v.dot(rhs.v),
            rhs.v * self.r + self.v * rhs.r + self.v.cross(rhs.v),
        )
    }
}

impl<T: Scalar> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// `a / b == a * b.inverse()`.
impl<T: Float> Div for Quat<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Float> DivAssign for Quat<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Quat::from_real_imaginary(self.r * rhs, self.v * rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Quat<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Quat::from_real_imaginary(self.r / rhs, self.v / rhs)
    }
}

impl<T: Scalar> DivAssign<T> for Quat<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Scalar> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::from_real_imaginary(self.r + rhs.r, self.v + rhs.v)
    }
}

impl<T: Scalar> AddAssign for Quat<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Quat::from_real_imaginary(self.r - rhs.r, self.v - rhs.v)
    }
}

impl<T: Scalar> SubAssign for Quat<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Quat::from_real_imaginary(-self.r, -self.v)
    }
}

/// Conjugate.
impl<T: Scalar + Neg<Output = T>> Not for Quat<T> {
    type Output = Self;

    fn not(self) -> Self {
        self.conjugate()
    }
}

/// Dot product.
impl<T: Scalar> BitXor for Quat<T> {
    type Output = T;

    fn bitxor(self, rhs: Self) -> T {
        self.dot(&rhs)
    }
}

/// Rotates a vector by a (unit) quaternion.
impl<T: Scalar> Mul<Quat<T>> for Vec3<T> {
    type Output = Self;

    fn mul(self, q: Quat<T>) -> Self {
        let a = q.v.cross(self);
        let b = q.v.cross(a);
        self + (a * q.r + b) * (T::ONE + T::ONE)
    }
}

impl<T: Scalar> MulAssign<Quat<T>> for Vec3<T> {
    fn mul_assign(&mut self, q: Quat<T>) {
        *self = *self * q;
    }
}

macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl Mul<Quat<$t>> for $t {
                type Output = Quat<$t>;

                fn mul(self, rhs: Quat<$t>) -> Quat<$t> {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs!(f32, f64);
