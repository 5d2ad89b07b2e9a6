//! Axis-aligned bounding boxes.

use std::fmt;

use crate::{
    approx::ApproxEq,
    traits::{Float, Scalar},
    Matrix, Vector,
};

pub type Box2<T> = Bounds<T, 2>;
pub type Box3<T> = Bounds<T, 3>;

pub type Box2i = Box2<i32>;
pub type Box2i64 = Box2<i64>;
pub type Box2f = Box2<f32>;
pub type Box2d = Box2<f64>;
pub type Box3i = Box3<i32>;
pub type Box3i64 = Box3<i64>;
pub type Box3f = Box3<f32>;
pub type Box3d = Box3<f64>;

/// An axis-aligned box spanning `min` to `max` (inclusive).
///
/// A box is *empty* if `max < min` along any axis. The default box is empty, with `min` at the
/// largest representable value and `max` at the lowest, so that extending it by any point yields
/// the box containing just that point.
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(C)]
pub struct Bounds<T, const N: usize> {
    pub min: Vector<T, N>,
    pub max: Vector<T, N>,
}

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Bounds<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Bounds<T, N> {}

impl<T: Scalar, const N: usize> Default for Bounds<T, N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar, const N: usize> Bounds<T, N> {
    pub fn new(min: Vector<T, N>, max: Vector<T, N>) -> Self {
        Self { min, max }
    }

    /// A box containing only `point`.
    pub fn from_point(point: Vector<T, N>) -> Self {
        Self::new(point, point)
    }

    pub fn empty() -> Self {
        Self::new(Vector::splat(T::MAX), Vector::splat(T::LOWEST))
    }

    pub fn infinite() -> Self {
        Self::new(Vector::splat(T::LOWEST), Vector::splat(T::MAX))
    }

    /// Computes the bounding box of `points`.
    ///
    /// Returns an empty box if `points` is empty.
    pub fn bounding<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Vector<T, N>>,
    {
        let mut b = Self::empty();
        for pt in points {
            b.extend_by(pt);
        }
        b
    }

    pub fn make_empty(&mut self) -> &mut Self {
        *self = Self::empty();
        self
    }

    pub fn make_infinite(&mut self) -> &mut Self {
        *self = Self::infinite();
        self
    }

    /// Grows the box to contain `point`.
    pub fn extend_by(&mut self, point: Vector<T, N>) -> &mut Self {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
        self
    }

    /// Grows the box to contain `other`.
    pub fn extend_by_box(&mut self, other: &Self) -> &mut Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    /// Extent of the box along each axis, or zero if the box is empty.
    pub fn size(&self) -> Vector<T, N> {
        if self.is_empty() {
            Vector::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vector<T, N> {
        (self.max + self.min) / (T::ONE + T::ONE)
    }

    pub fn intersects(&self, point: Vector<T, N>) -> bool {
        (0..N).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }

    pub fn intersects_box(&self, other: &Self) -> bool {
        (0..N).all(|i| other.max[i] >= self.min[i] && other.min[i] <= self.max[i])
    }

    /// Index of the axis along which the box is largest; ties favor the lower index.
    pub fn major_axis(&self) -> usize {
        let s = self.size();
        let mut major = 0;
        for i in 1..N {
            if s[i] > s[major] {
                major = i;
            }
        }
        major
    }

    pub fn is_empty(&self) -> bool {
        (0..N).any(|i| self.max[i] < self.min[i])
    }

    pub fn is_infinite(&self) -> bool {
        (0..N).all(|i| self.min[i] == T::LOWEST && self.max[i] == T::MAX)
    }

    /// Whether the box has a nonzero extent along every axis.
    pub fn has_volume(&self) -> bool {
        (0..N).all(|i| self.max[i] > self.min[i])
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.min.abs_diff_eq(&other.min, e) && self.max.abs_diff_eq(&other.max, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.min.rel_diff_eq(&other.min, e) && self.max.rel_diff_eq(&other.max, e)
    }
}

impl<T: Scalar> Bounds<T, 2> {
    pub fn corners(&self) -> [Vector<T, 2>; 4] {
        let (lo, hi) = (self.min, self.max);
        [
            crate::vec2(lo.x, lo.y),
            crate::vec2(hi.x, lo.y),
            crate::vec2(hi.x, hi.y),
            crate::vec2(lo.x, hi.y),
        ]
    }
}

impl<T: Scalar> Bounds<T, 3> {
    pub fn corners(&self) -> [Vector<T, 3>; 8] {
        let (lo, hi) = (self.min, self.max);
        std::array::from_fn(|i| {
            Vector::from_fn(|axis| if i & (1 << axis) != 0 { hi[axis] } else { lo[axis] })
        })
    }
}

macro_rules! transform {
    ($n:literal, $m:literal) => {
        impl<T: Float> Bounds<T, $n> {
            /// Returns the bounding box of this box transformed by `m`.
            ///
            /// Affine matrices take a fast path that transforms the extents directly. Projective
            /// matrices transform every corner. Empty and infinite boxes are returned unchanged.
            pub fn transform(&self, m: &Matrix<T, $m, $m>) -> Self {
                if self.is_empty() || self.is_infinite() {
                    return *self;
                }

                let affine = (0..$n).all(|row| m[(row, $n)] == T::ZERO) && m[($n, $n)] == T::ONE;
                if !affine {
                    return Self::bounding(self.corners().into_iter().map(|p| p * *m));
                }

                let mut out = Self::empty();
                for i in 0..$n {
                    out.min[i] = m[($n, i)];
                    out.max[i] = m[($n, i)];
                    for j in 0..$n {
                        let a = m[(j, i)] * self.min[j];
                        let b = m[(j, i)] * self.max[j];
                        if a < b {
                            out.min[i] += a;
                            out.max[i] += b;
                        } else {
                            out.min[i] += b;
                            out.max[i] += a;
                        }
                    }
                }
                out
            }
        }
    };
}

transform!(2, 3);
transform!(3, 4);

impl<T: Scalar, const N: usize> ApproxEq for Bounds<T, N> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.equal_with_abs_error(other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.equal_with_rel_error(other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.min.ulps_diff_eq(&other.min, ulps_tolerance)
            && self.max.ulps_diff_eq(&other.max, ulps_tolerance)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Bounds<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box{}({:?}, {:?})", N, self.min, self.max)
    }
}
