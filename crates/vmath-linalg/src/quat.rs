mod ops;

use std::fmt;

use crate::{
    error::Error,
    traits::{Float, Scalar},
    Matrix, Vec3, Vector,
};

pub type Quatf = Quat<f32>;
pub type Quatd = Quat<f64>;

/// A quaternion consisting of a real part `r` and an imaginary part `v`.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Multiplication is the Hamilton product, so `v * (a * b)` rotates `v` by `b` first.
///
/// The default value is the identity rotation `(1, 0, 0, 0)`.
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(C)]
pub struct Quat<T> {
    /// Real part.
    pub r: T,
    /// Imaginary part.
    pub v: Vector<T, 3>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T> Quat<T> {
    pub const fn new(r: T, i: T, j: T, k: T) -> Self {
        Self {
            r,
            v: crate::vec3(i, j, k),
        }
    }

    pub fn from_real_imaginary(r: T, v: Vec3<T>) -> Self {
        Self { r, v }
    }

    pub fn r(&self) -> T
    where
        T: Copy,
    {
        self.r
    }

    pub fn v(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.v
    }
}

impl<T: Scalar> Quat<T> {
    /// The multiplicative identity, a rotation by zero radians.
    pub fn identity() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn base_type_epsilon() -> T {
        T::EPSILON
    }

    /// 4D dot product of the two quaternions. Also available as the `^` operator.
    pub fn dot(&self, other: &Self) -> T {
        self.r * other.r + self.v.dot(other.v)
    }

    pub fn length2(&self) -> T {
        self.dot(self)
    }

    /// Returns the conjugate `(r, -v)`. Also available as the `!` operator.
    pub fn conjugate(&self) -> Self
    where
        T: std::ops::Neg<Output = T>,
    {
        Self::from_real_imaginary(self.r, -self.v)
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        crate::approx::ApproxEq::abs_diff_eq(self, other, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        crate::approx::ApproxEq::rel_diff_eq(self, other, e)
    }
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion that rotates by `radians` around `axis`.
    ///
    /// `axis` does not need to be normalized.
    pub fn from_axis_angle(axis: Vec3<T>, radians: T) -> Self {
        let half = radians * T::half();
        Self::from_real_imaginary(half.cos(), axis.normalized() * half.sin())
    }

    pub fn set_axis_angle(&mut self, axis: Vec3<T>, radians: T) -> &mut Self {
        *self = Self::from_axis_angle(axis, radians);
        self
    }

    /// Returns the normalized rotation axis.
    pub fn axis(&self) -> Vec3<T> {
        self.v.normalized()
    }

    /// Returns the rotation angle in radians.
    pub fn angle(&self) -> T {
        T::two() * self.v.length().atan2(self.r)
    }

    /// Returns the length (norm) of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Scales `self` to unit length. A zero quaternion becomes the identity.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == T::ZERO {
            log::trace!("normalizing zero quaternion to identity");
            *self = Self::identity();
        } else {
            *self = *self / len;
        }
        self
    }

    pub fn normalized(mut self) -> Self {
        *self.normalize()
    }

    /// Returns the multiplicative inverse `conjugate / length²`.
    ///
    /// Fails with [`Error::Singular`] for the zero quaternion.
    pub fn try_inverse(&self) -> Result<Self, Error> {
        let len2 = self.length2();
        if len2 == T::ZERO {
            return Err(Error::Singular);
        }
        Ok(self.conjugate() / len2)
    }

    /// Returns the inverse, or the identity for the zero quaternion.
    pub fn inverse(&self) -> Self {
        self.try_inverse().unwrap_or_else(|err| {
            log::debug!("inverse of {:?} failed: {}", self, err);
            Self::identity()
        })
    }

    pub fn invert(&mut self) -> &mut Self {
        *self = self.inverse();
        self
    }

    pub fn try_invert(&mut self) -> Result<&mut Self, Error> {
        *self = self.try_inverse()?;
        Ok(self)
    }

    /// Sets `self` to the shortest rotation that turns direction `from` into direction `to`.
    ///
    /// Opposite directions yield a half turn around an arbitrary perpendicular axis.
    pub fn set_rotation(&mut self, from: Vec3<T>, to: Vec3<T>) -> &mut Self {
        let f0 = from.normalized();
        let t0 = to.normalized();

        if f0.dot(t0) >= T::ZERO {
            *self = Self::half_way_rotation(f0, t0);
            return self;
        }

        let h0 = (f0 + t0).normalized();
        if h0.length2() != T::ZERO {
            // Split the rotation in two to keep the half-way vector well-conditioned.
            *self = Self::half_way_rotation(f0, h0) * Self::half_way_rotation(h0, t0);
        } else {
            // `from` and `to` point in exactly opposite directions. Pick the coordinate axis
            // most perpendicular to `from` to build the rotation axis.
            let f02 = f0 * f0;
            let axis = if f02.x <= f02.y && f02.x <= f02.z {
                Vec3::X
            } else if f02.y <= f02.z {
                Vec3::Y
            } else {
                Vec3::Z
            };
            *self = Self::from_real_imaginary(T::ZERO, f0.cross(axis).normalized());
        }
        self
    }

    pub fn from_rotation(from: Vec3<T>, to: Vec3<T>) -> Self {
        let mut q = Self::identity();
        q.set_rotation(from, to);
        q
    }

    // `f0` and `t0` must be normalized and less than 90° apart.
    fn half_way_rotation(f0: Vec3<T>, t0: Vec3<T>) -> Self {
        let h0 = (f0 + t0).normalized();
        Self::from_real_imaginary(f0.dot(h0), f0.cross(h0))
    }

    /// Rotates `v` by computing `q * (0, v) * q⁻¹`.
    pub fn rotate_vector(&self, v: Vec3<T>) -> Vec3<T> {
        let vec = Self::from_real_imaginary(T::ZERO, v);
        (*self * vec * self.inverse()).v
    }

    /// Returns the rotation as a 3x3 matrix (for row vectors).
    pub fn to_matrix33(&self) -> Matrix<T, 3, 3> {
        let Self { r, v } = *self;
        let one = T::ONE;
        let two = T::two();
        #[rustfmt::skip]
        let m = Matrix::from_rows([
            [
                one - two * (v.y * v.y + v.z * v.z),
                two * (v.x * v.y + v.z * r),
                two * (v.z * v.x - v.y * r),
            ],
            [
                two * (v.x * v.y - v.z * r),
                one - two * (v.z * v.z + v.x * v.x),
                two * (v.y * v.z + v.x * r),
            ],
            [
                two * (v.z * v.x + v.y * r),
                two * (v.y * v.z - v.x * r),
                one - two * (v.y * v.y + v.x * v.x),
            ],
        ]);
        m
    }

    /// Returns the rotation as a 4x4 matrix without translation.
    pub fn to_matrix44(&self) -> Matrix<T, 4, 4> {
        let m3 = self.to_matrix33();
        Matrix::from_fn(|r, c| match (r, c) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => m3[(r, c)],
        })
    }

    /// Extracts the rotation of the upper 3x3 block of `m`, which must be a pure rotation.
    pub fn from_matrix(m: &Matrix<T, 4, 4>) -> Self {
        let trace = m[(0, 0)] + m[(1, 1)] + m[(2, 2)];
        let half = T::half();

        if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt();
            let r = s * half;
            let s = half / s;
            return Self::new(
                r,
                (m[(1, 2)] - m[(2, 1)]) * s,
                (m[(2, 0)] - m[(0, 2)]) * s,
                (m[(0, 1)] - m[(1, 0)]) * s,
            );
        }

        const NEXT: [usize; 3] = [1, 2, 0];
        let mut i = 0;
        if m[(1, 1)] > m[(0, 0)] {
            i = 1;
        }
        if m[(2, 2)] > m[(i, i)] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];

        let mut s = ((m[(i, i)] - (m[(j, j)] + m[(k, k)])) + T::ONE).sqrt();
        let mut v = Vec3::ZERO;
        v[i] = s * half;
        if s != T::ZERO {
            s = half / s;
        }
        v[j] = (m[(i, j)] + m[(j, i)]) * s;
        v[k] = (m[(i, k)] + m[(k, i)]) * s;
        Self::from_real_imaginary((m[(j, k)] - m[(k, j)]) * s, v)
    }

    /// Natural logarithm of a unit quaternion.
    pub fn log(&self) -> Self {
        let theta = self.r.min(T::ONE).acos();
        if theta == T::ZERO {
            return Self::from_real_imaginary(T::ZERO, self.v);
        }

        let sin = theta.sin();
        let k = if sin.abs() < T::ONE && theta.abs() >= T::MAX * sin.abs() {
            T::ONE
        } else {
            theta / sin
        };
        Self::from_real_imaginary(T::ZERO, self.v * k)
    }

    /// Exponential of a pure quaternion (real part is ignored).
    pub fn exp(&self) -> Self {
        let theta = self.v.length();
        let sin = theta.sin();
        let k = if theta.abs() < T::ONE && sin.abs() >= T::MAX * theta.abs() {
            T::ONE
        } else {
            sin / theta
        };
        Self::from_real_imaginary(theta.cos(), self.v * k)
    }

    /// Spherical linear interpolation from `self` (at `t = 0`) to `other` (at `t = 1`).
    ///
    /// Both quaternions must be normalized. The result follows the arc between the two
    /// 4D vectors, which might be the long way around for the represented rotations; see
    /// [`Quat::slerp_shortest_arc`].
    pub fn slerp(&self, other: &Self, t: T) -> Self {
        let a = angle4(self, other);
        let s = T::ONE - t;
        let q = *self * (sinx_over_x(s * a) / sinx_over_x(a) * s)
            + *other * (sinx_over_x(t * a) / sinx_over_x(a) * t);
        q.normalized()
    }

    /// Like [`Quat::slerp`], but always takes the shorter path between the two rotations.
    pub fn slerp_shortest_arc(&self, other: &Self, t: T) -> Self {
        if self.dot(other) >= T::ZERO {
            self.slerp(other, t)
        } else {
            self.slerp(&-*other, t)
        }
    }
}

/// Angle between two quaternions viewed as 4D vectors, computed in a numerically stable way.
fn angle4<T: Float>(q1: &Quat<T>, q2: &Quat<T>) -> T {
    let d = *q1 - *q2;
    let s = *q1 + *q2;
    T::two() * d.length().atan2(s.length())
}

fn sinx_over_x<T: Float>(x: T) -> T {
    if x * x < T::EPSILON {
        T::ONE
    } else {
        x.sin() / x
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Returns the rotation of the upper 3x3 block as a quaternion (see [`Quat::from_matrix`]).
    pub fn extract_quat(&self) -> Quat<T> {
        Quat::from_matrix(self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.v.as_array();
        f.debug_tuple("Quat")
            .field(&self.r)
            .field(&v[0])
            .field(&v[1])
            .field(&v[2])
            .finish()
    }
}
