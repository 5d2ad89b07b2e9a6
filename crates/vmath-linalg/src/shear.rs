use std::{
    fmt,
    ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::{
    approx::{ApproxEq, DefaultTolerances},
    error::{canonical_index, Error},
    traits::{Scalar, Zero},
    Vec3,
};

pub type Shear6f = Shear6<f32>;
pub type Shear6d = Shear6<f64>;

/// The six shear factors of a 3D shear transform.
///
/// `xy` is the shear of x by y, `xz` of x by z, and so on. See [`Matrix::set_shear6`] for how
/// the factors map into a matrix.
///
/// [`Matrix::set_shear6`]: crate::Matrix::set_shear6
#[derive(Clone, Copy, PartialEq, Default, Hash)]
#[repr(C)]
pub struct Shear6<T> {
    pub xy: T,
    pub xz: T,
    pub yz: T,
    pub yx: T,
    pub zx: T,
    pub zy: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Shear6<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Shear6<T> {}

impl<T> Shear6<T> {
    pub const fn new(xy: T, xz: T, yz: T, yx: T, zx: T, zy: T) -> Self {
        Self {
            xy,
            xz,
            yz,
            yx,
            zx,
            zy,
        }
    }

    pub fn from_array([xy, xz, yz, yx, zx, zy]: [T; 6]) -> Self {
        Self::new(xy, xz, yz, yx, zx, zy)
    }

    pub fn into_array(self) -> [T; 6] {
        [self.xy, self.xz, self.yz, self.yx, self.zx, self.zy]
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Shear6<U> {
        Shear6::from_array(self.into_array().map(f))
    }

    fn zip_with<U, V>(self, other: Shear6<U>, mut f: impl FnMut(T, U) -> V) -> Shear6<V> {
        let mut rhs = other.into_array().into_iter();
        self.map(|l| match rhs.next() {
            Some(r) => f(l, r),
            None => unreachable!("both sides have six factors"),
        })
    }

    /// Returns the factor at `index`; negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<T, Error>
    where
        T: Copy,
    {
        Ok(self[canonical_index(index, 6)?])
    }

    pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
        self[canonical_index(index, 6)?] = value;
        Ok(())
    }
}

impl<T: Zero> Shear6<T> {
    /// A shear that leaves everything unchanged.
    pub const ZERO: Self = Self::new(T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO, T::ZERO);

    /// Creates a shear from the `xy`, `xz` and `yz` factors, with the others set to zero.
    pub fn from_xyz(xy: T, xz: T, yz: T) -> Self {
        Self::new(xy, xz, yz, T::ZERO, T::ZERO, T::ZERO)
    }
}

impl<T: Zero> From<Vec3<T>> for Shear6<T> {
    fn from(v: Vec3<T>) -> Self {
        let [xy, xz, yz] = v.into_array();
        Self::from_xyz(xy, xz, yz)
    }
}

impl<T> From<[T; 6]> for Shear6<T> {
    fn from(values: [T; 6]) -> Self {
        Self::from_array(values)
    }
}

impl<T: Scalar> Shear6<T> {
    #[inline]
    pub fn base_type_epsilon() -> T {
        T::EPSILON
    }

    pub fn negate(&mut self) -> &mut Self
    where
        T: Neg<Output = T>,
    {
        *self = -*self;
        self
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.abs_diff_eq(other, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.rel_diff_eq(other, e)
    }
}

impl<T> Index<usize> for Shear6<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.xy,
            1 => &self.xz,
            2 => &self.yz,
            3 => &self.yx,
            4 => &self.zx,
            5 => &self.zy,
            _ => panic!("shear index {} out of range", index),
        }
    }
}

impl<T> IndexMut<usize> for Shear6<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.xy,
            1 => &mut self.xz,
            2 => &mut self.yz,
            3 => &mut self.yx,
            4 => &mut self.zx,
            5 => &mut self.zy,
            _ => panic!("shear index {} out of range", index),
        }
    }
}

impl<T: ApproxEq<Tolerance = T> + DefaultTolerances + Copy> ApproxEq for Shear6<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.into_array().abs_diff_eq(&other.into_array(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.into_array().rel_diff_eq(&other.into_array(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.into_array().ulps_diff_eq(&other.into_array(), ulps_tolerance)
    }
}

impl<T: Neg<Output = T>> Neg for Shear6<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Shear6<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, |l, r| l $op r)
            }
        }

        impl<T: Scalar> $trait<T> for Shear6<T> {
            type Output = Self;

            fn $method(self, rhs: T) -> Self {
                self.map(|l| l $op rhs)
            }
        }

        impl<T: Scalar> $assign_trait for Shear6<T> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Scalar> $assign_trait<T> for Shear6<T> {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

binop!(Add, add, AddAssign, add_assign, +);
binop!(Sub, sub, SubAssign, sub_assign, -);
binop!(Mul, mul, MulAssign, mul_assign, *);
binop!(Div, div, DivAssign, div_assign, /);

impl<T: fmt::Debug> fmt::Debug for Shear6<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shear6")
            .field(&self.xy)
            .field(&self.xz)
            .field(&self.yz)
            .field(&self.yx)
            .field(&self.zx)
            .field(&self.zy)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ErrorKind, vec3};

    use super::*;

    #[test]
    fn construction() {
        let s = Shear6::from(vec3(1, 2, 3));
        assert_eq!(s, Shear6::new(1, 2, 3, 0, 0, 0));
        assert_eq!(Shear6::from([1, 2, 3, 4, 5, 6]).zy, 6);
        assert_eq!(Shear6::<i32>::default(), Shear6::ZERO);
        assert_eq!(format!("{:?}", s), "Shear6(1, 2, 3, 0, 0, 0)");
    }

    #[test]
    fn indexing() {
        let mut s = Shear6f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        assert_eq!(s[3], 4.0);
        assert_eq!(s.get(-1), Ok(6.0));
        s.set(-6, 10.0).unwrap();
        assert_eq!(s.xy, 10.0);
        assert_eq!(s.get(6).unwrap_err().kind(), ErrorKind::Bounds);
    }

    #[test]
    fn arithmetic() {
        let a = Shear6::new(1, 2, 3, 4, 5, 6);
        let b = Shear6::new(6, 5, 4, 3, 2, 1);
        assert_eq!(a + b, Shear6::new(7, 7, 7, 7, 7, 7));
        assert_eq!(a - b, Shear6::new(-5, -3, -1, 1, 3, 5));
        assert_eq!(a * b, Shear6::new(6, 10, 12, 12, 10, 6));
        assert_eq!(a * 2, Shear6::new(2, 4, 6, 8, 10, 12));
        assert_eq!(b / 2, Shear6::new(3, 2, 2, 1, 1, 0));
        assert_eq!(-a, Shear6::new(-1, -2, -3, -4, -5, -6));

        let mut c = a;
        c.negate();
        c += a;
        assert_eq!(c, Shear6::ZERO);
    }

    #[test]
    fn epsilon_equality() {
        let a = Shear6d::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let b = a + 0.01;
        assert!(a.equal_with_abs_error(&b, 0.011));
        assert!(!a.equal_with_abs_error(&b, 0.009));
        assert!(a.equal_with_rel_error(&b, 0.011));
        assert!(!a.equal_with_rel_error(&b, 0.002));
    }
}
