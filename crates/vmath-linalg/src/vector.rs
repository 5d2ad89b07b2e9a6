use std::{array, cmp::Ordering, fmt};

use crate::{
    approx::ApproxEq,
    error::{canonical_index, Error},
    traits::{Cast, Float, Scalar, Zero},
    One,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

pub type Vec2i = Vec2<i32>;
pub type Vec2i64 = Vec2<i64>;
pub type Vec2f = Vec2<f32>;
pub type Vec2d = Vec2<f64>;
pub type Vec3i = Vec3<i32>;
pub type Vec3i64 = Vec3<i64>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;
pub type Vec4i = Vec4<i32>;
pub type Vec4i64 = Vec4<i64>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

/// An `N`-element vector storing elements of type `T`.
///
/// Vectors are used as *row* vectors: they multiply matrices from the left (`v * m`), and affine
/// transforms keep their translation in the last matrix row.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies a single value into each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of the
///   right length via [`TryFrom`].
/// - [`Vector::cast`] converts between element types with `as` semantics.
/// - The [`Default`] implementation yields the zero vector.
///
/// # Element Access
///
/// - For vectors with up to 4 dimensions, elements can be accessed as fields `x`, `y`, `z` and
///   `w`, or through the color aliases `r`, `g`, `b` and `a`.
/// - The [`Index`] and [`IndexMut`] impls work like they do on arrays and panic when out of range.
/// - [`Vector::get`] and [`Vector::set`] accept negative indices counting from the end, and fail
///   with [`Error::IndexOutOfRange`] instead of panicking.
///
/// # Ordering
///
/// Vectors are *partially* ordered: `a <= b` holds if every element of `a` is `<=` the
/// corresponding element of `b`, and `a < b` holds if additionally `a != b`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self(array::from_fn(|_| elem))
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| match iter.next() {
            Some(pair) => pair,
            None => unreachable!("both vectors have {N} elements"),
        })
    }

    /// Returns the number of elements, `N`.
    #[inline]
    pub const fn dimensions() -> usize {
        N
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the element at `index`, counting from the end if `index` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.get(-1), Ok(3));
    /// assert!(v.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<T, Error>
    where
        T: Copy,
    {
        Ok(self.0[canonical_index(index, N)?])
    }

    /// Replaces the element at `index`, counting from the end if `index` is negative.
    pub fn set(&mut self, index: isize, value: T) -> Result<(), Error> {
        self.0[canonical_index(index, N)?] = value;
        Ok(())
    }

    /// Replaces every element at once.
    pub fn set_value(&mut self, values: [T; N]) -> &mut Self {
        self.0 = values;
        self
    }

    /// Converts each element to `U` with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(vec2(1.75f32, -2.5).cast::<i32>(), vec2(1, -2));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Machine epsilon of the element type, the default tolerance for epsilon comparisons.
    #[inline]
    pub fn base_type_epsilon() -> T {
        T::EPSILON
    }

    #[inline]
    pub fn base_type_max() -> T {
        T::MAX
    }

    #[inline]
    pub fn base_type_lowest() -> T {
        T::LOWEST
    }

    #[inline]
    pub fn base_type_smallest() -> T {
        T::SMALLEST
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T {
        self.dot(*self)
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }

    /// Negates every element in place.
    pub fn negate(&mut self) -> &mut Self
    where
        T: std::ops::Neg<Output = T>,
    {
        self.0.iter_mut().for_each(|e| *e = -*e);
        self
    }

    /// Element-wise division that fails if an integer element of `rhs` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(vec2(7, -7).checked_div(vec2(2, 2)), Some(vec2(3, -3)));
    /// assert_eq!(vec2(7, 7).checked_div(vec2(2, 0)), None);
    /// ```
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        let mut out = self;
        for (lhs, rhs) in out.0.iter_mut().zip(rhs.0) {
            *lhs = lhs.try_div(rhs)?;
        }
        Some(out)
    }

    /// Returns whether `|self[i] - other[i]| <= e` holds for every element.
    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.abs_diff_eq(other, e)
    }

    /// Returns whether `|self[i] - other[i]| <= e * |self[i]|` holds for every element.
    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.rel_diff_eq(other, e)
    }

    /// Returns whichever of `a`, `b` and `c` lies closest to `self`.
    ///
    /// Ties resolve in favor of the earlier argument.
    pub fn closest_vertex(&self, a: Self, b: Self, c: Self) -> Self
    where
        T: std::ops::Sub<Output = T>,
    {
        let dist = |v: Self| (v - *self).length2();
        let mut best = a;
        let mut best_dist = dist(a);
        for candidate in [b, c] {
            let d = dist(candidate);
            if d < best_dist {
                best = candidate;
                best_dist = d;
            }
        }
        best
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length of this [`Vector`].
    ///
    /// Vectors whose squared length would underflow are rescaled by their largest element first,
    /// so tiny vectors still report an accurate, non-zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// assert!(vec2(1e-30f32, 0.0).length() > 0.0);
    /// ```
    pub fn length(&self) -> T {
        let length2 = self.length2();
        if length2 < T::two() * T::MIN_POSITIVE {
            return self.length_tiny();
        }
        length2.sqrt()
    }

    fn length_tiny(&self) -> T {
        let max = self.0.iter().fold(T::ZERO, |acc, e| acc.max(e.abs()));
        if max == T::ZERO {
            return T::ZERO;
        }
        let scaled = *self / max;
        scaled.length2().sqrt() * max
    }

    /// Scales `self` to unit length. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len != T::ZERO {
            *self = *self / len;
        } else {
            log::trace!("normalize: leaving null vector {:?} unchanged", self);
        }
        self
    }

    /// Scales `self` to unit length, failing with [`Error::NullVector`] for a zero vector.
    pub fn try_normalize(&mut self) -> Result<&mut Self, Error> {
        let len = self.length();
        if len == T::ZERO {
            return Err(Error::NullVector);
        }
        *self = *self / len;
        Ok(self)
    }

    /// Scales `self` to unit length without checking for a zero vector.
    ///
    /// A zero vector turns into `NaN`s.
    pub fn normalize_non_null(&mut self) -> &mut Self {
        *self = *self / self.length();
        self
    }

    /// Returns `self` scaled to unit length, or `self` unchanged if it is a zero vector.
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    pub fn try_normalized(mut self) -> Result<Self, Error> {
        self.try_normalize()?;
        Ok(self)
    }

    pub fn normalized_non_null(mut self) -> Self {
        self.normalize_non_null();
        self
    }

    /// Returns the projection of `self` onto the direction of `onto`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(vec2(1.0, 1.0).project(vec2(2.0, 0.0)), vec2(1.0, 0.0));
    /// ```
    pub fn project(self, onto: Self) -> Self {
        let dir = onto.normalized();
        dir * dir.dot(self)
    }

    /// Returns the part of `t` that is orthogonal to `self`.
    pub fn orthogonal(self, t: Self) -> Self {
        t - t.project(self)
    }

    /// Reflects `self` about the plane with normal `t`.
    pub fn reflect(self, t: Self) -> Self {
        self - t * (T::two() * self.dot(t) / t.dot(t))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Computes the Z coordinate of the cross product of `self` and `other`, extended to 3D.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(vec2(1, 0).cross(vec2(0, 1)), 1);
    /// assert_eq!(vec2(0, 1).cross(vec2(1, 0)), -1);
    /// ```
    pub fn cross(self, other: Self) -> T {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.into_array();
        let [b1, b2, b3] = other.into_array();

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T: Default, const N: usize> Default for Vector<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

/// Fails with [`Error::DimensionMismatch`] if the slice does not hold exactly `N` elements.
impl<T: Copy, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(value: &[T]) -> Result<Self, Error> {
        let array: [T; N] = value.try_into().map_err(|_| Error::DimensionMismatch {
            expected: N,
            actual: value.len(),
        })?;
        Ok(Self(array))
    }
}

impl<T: PartialOrd, const N: usize> PartialOrd for Vector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let all = |pred: fn(&T, &T) -> bool| self.0.iter().zip(&other.0).all(|(a, b)| pred(a, b));
        if all(T::eq) {
            Some(Ordering::Equal)
        } else if all(T::le) {
            Some(Ordering::Less)
        } else if all(T::ge) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, error::ErrorKind};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.r, 0);
        assert_eq!(v.g, 1);
        v.r = 777;
        assert_eq!(v.x, 777);
        assert_eq!(v[0], 777);

        assert_eq!(v.get(-2), Ok(777));
        assert_eq!(v.set(-3, 0).unwrap_err().kind(), ErrorKind::Bounds);
        assert!(v.set(2, 0).is_err());
        v.set(-1, 10).unwrap();
        assert_eq!(v, [777, 10]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:?}", vec2(-3, 4)), "(-3, 4)");
    }

    #[test]
    fn from_slice() {
        let v = Vec3i::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v, vec3(1, 2, 3));
        let err = Vec3i::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        );
        assert_eq!(err.kind(), ErrorKind::Dimension);
    }

    #[test]
    fn partial_order() {
        let v1 = vec2(20, 20);
        let v2 = vec2(20, 20);
        let v3 = vec2(20, 21);

        assert!(v1 == v2);
        assert!(v1 != v3);
        assert!(!(v1 < v2));
        assert!(v1 < v3);
        assert!(v1 <= v2);
        assert!(v1 <= v3);
        assert!(!(v3 <= v1));
        assert!(!(v2 > v1));
        assert!(v3 > v1);
        assert!(v2 >= v1);
        assert!(!(v1 >= v3));

        assert_eq!(vec2(1, 2).partial_cmp(&vec2(2, 1)), None);
    }

    #[test]
    fn epsilon_equality() {
        let e = 0.005;
        let v1 = Vec2f::splat(1.0);
        let v2 = Vec2f::splat(1.0 + e);
        assert!(v1.equal_with_abs_error(&v2, e));
        assert!(v2.equal_with_abs_error(&v1, e));

        let e = 0.003;
        let v1 = Vec3d::splat(10.0);
        let v2 = Vec3d::splat(10.0 + 10.0 * e);
        assert!(v1.equal_with_rel_error(&v2, e));
        assert!(v2.equal_with_rel_error(&v1, e));
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec2(0, 1).dot(vec2(1, 1)), 1);
        assert_eq!(vec2(1.0, 0.0).cross(vec2(0.0, 1.0)), 1.0);
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
    }

    #[test]
    fn length() {
        assert_approx_eq!(vec2(1.0f32, 2.0).length(), 5.0f32.sqrt());
        assert_eq!(vec2(1, 2).length2(), 5);
        assert_eq!(Vec3f::ZERO.length(), 0.0);

        let tiny = vec3(1e-25f32, 1e-25, 0.0);
        assert_approx_eq!(tiny.length(), 2.0f32.sqrt() * 1e-25).rel(1e-5);
    }

    #[test]
    fn normalize() {
        let mut v = vec2(1.0f32, 2.0);
        v.normalize();
        assert_approx_eq!(v.length(), 1.0);

        let mut v = Vec3f::ZERO;
        v.normalize();
        assert_eq!(v, Vec3f::ZERO);
        assert_eq!(v.try_normalize().unwrap_err(), Error::NullVector);
        assert_eq!(Vec3d::ZERO.try_normalized(), Err(Error::NullVector));

        let v = vec3(1.0f64, 2.0, 3.0);
        assert_approx_eq!(v.try_normalized().unwrap().length(), 1.0);
        assert_approx_eq!(v.normalized_non_null().length(), 1.0);
    }

    #[test]
    fn project_orthogonal_reflect() {
        let s = vec2(2.0f32, 0.0);
        let t = vec2(1.0f32, 1.0);
        assert_eq!(t.project(s), vec2(1.0, 0.0));

        let o = s.orthogonal(t);
        assert_approx_eq!(o.dot(s), 0.0);

        let s = vec3(1.0f64, 1.0, 0.5);
        let t = vec3(2.0f64, 0.0, 0.0);
        let r = s.reflect(t);
        assert_approx_eq!(s.dot(t).abs(), r.dot(t).abs());
        assert_approx_eq!(r, vec3(-1.0, 1.0, 0.5));
    }

    #[test]
    fn closest_vertex() {
        let v0 = vec3(0, 0, 0);
        let v1 = vec3(5, 0, 0);
        let v2 = vec3(0, 5, 0);

        assert_eq!(vec3(1, 1, 0).closest_vertex(v0, v1, v2), v0);
        assert_eq!(vec3(4, 1, 0).closest_vertex(v0, v1, v2), v1);
        assert_eq!(vec3(1, 4, 0).closest_vertex(v0, v1, v2), v2);
    }

    #[test]
    fn integer_division() {
        assert_eq!(vec2(10, 20) / 2, vec2(5, 10));
        assert_eq!(vec2(-7, 7).checked_div(vec2(2, 2)), Some(vec2(-3, 3)));
        assert_eq!(vec2(1, 1).checked_div(vec2(1, 0)), None);
    }

    #[test]
    fn casts() {
        assert_eq!(vec3(1.9f64, -1.9, 2.0).cast::<i32>(), vec3(1, -1, 2));
        assert_eq!(vec2(3, 4).cast::<f32>(), vec2(3.0, 4.0));
    }
}
