//! Implementations of `std::ops`.
//!
//! Every binary operator accepts another vector, an array of the same length (treated as a
//! vector), or a single scalar that is broadcast to every element. Scalars of the built-in
//! element types may also appear on the left-hand side.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt, $assign_op:tt) => {
        /// Element-wise operation.
        impl<T, const N: usize> $trait<Vector<T, N>> for Vector<T, N>
        where
            T: $trait + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                self.zip(rhs).map(|(l, r)| l $op r)
            }
        }

        /// Element-wise operation with an array treated as a vector.
        impl<T, const N: usize> $trait<[T; N]> for Vector<T, N>
        where
            T: $trait + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: [T; N]) -> Self::Output {
                self $op Vector(rhs)
            }
        }

        /// Broadcasts the scalar `rhs` to every element.
        impl<T, const N: usize> $trait<T> for Vector<T, N>
        where
            T: $trait + Copy,
        {
            type Output = Vector<T::Output, N>;

            fn $method(self, rhs: T) -> Self::Output {
                self.map(|elem| elem $op rhs)
            }
        }

        impl<T, const N: usize> $assign_trait<Vector<T, N>> for Vector<T, N>
        where
            T: $assign_trait,
        {
            fn $assign_method(&mut self, rhs: Vector<T, N>) {
                self.as_mut_slice()
                    .iter_mut()
                    .zip(rhs.into_array())
                    .for_each(|(lhs, rhs)| *lhs $assign_op rhs);
            }
        }

        impl<T, const N: usize> $assign_trait<[T; N]> for Vector<T, N>
        where
            T: $assign_trait,
        {
            fn $assign_method(&mut self, rhs: [T; N]) {
                *self $assign_op Vector(rhs);
            }
        }

        impl<T, const N: usize> $assign_trait<T> for Vector<T, N>
        where
            T: $assign_trait + Copy,
        {
            fn $assign_method(&mut self, rhs: T) {
                self.as_mut_slice().iter_mut().for_each(|lhs| *lhs $assign_op rhs);
            }
        }
    };
}

binop!(Add, add, AddAssign, add_assign, +, +=);
binop!(Sub, sub, SubAssign, sub_assign, -, -=);
binop!(Mul, mul, MulAssign, mul_assign, *, *=);
binop!(Div, div, DivAssign, div_assign, /, /=);

// Scalar on the left. Coherence rules out a generic impl, so these are spelled out per type.
macro_rules! scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn add(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const N: usize> Sub<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn sub(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self - elem)
                }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn mul(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }

            impl<const N: usize> Div<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                fn div(self, rhs: Vector<$t, N>) -> Self::Output {
                    rhs.map(|elem| self / elem)
                }
            }
        )+
    };
}

scalar_lhs!(i16, i32, i64, f32, f64);
