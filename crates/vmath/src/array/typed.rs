//! Operations specific to arrays of vectors, colors, boxes, matrices, quaternions and Euler
//! angles.
//!
//! Everything here is a thin element-wise lift of the corresponding `vmath_linalg` method, with
//! the usual [`Operand`] broadcasting. Methods that modify elements in place fail with
//! [`ArrayError::ReadOnly`] on read-only arrays.

use vmath_linalg::{
    Bounds, Euler, EulerOrder, Float, InputLayout, Mat3, Mat4, Quat, Scalar, Vec2, Vec3, Vector,
};

use crate::error::ArrayError;

use super::{CheckedDiv, FieldView, FixedArray, Operand};

macro_rules! components {
    ($n:literal: $($name:ident = $i:literal),+) => {
        impl<T: Scalar> FixedArray<Vector<T, $n>> {
            $(
                #[doc = concat!("Returns a reference view of component ", stringify!($i), " of every element.")]
                pub fn $name(&self) -> FieldView<Vector<T, $n>, T> {
                    FieldView::new(self, |v| v[$i], |v, c| v[$i] = c)
                }
            )+
        }
    };
}

components!(2: x = 0, y = 1);
components!(3: x = 0, y = 1, z = 2, r = 0, g = 1, b = 2);
components!(4: x = 0, y = 1, z = 2, w = 3, r = 0, g = 1, b = 2, a = 3);

impl<T: Scalar, const N: usize> FixedArray<Bounds<T, N>> {
    /// Returns a reference view of the minimum corner of every box.
    pub fn min(&self) -> FieldView<Bounds<T, N>, Vector<T, N>> {
        FieldView::new(self, |b| b.min, |b, v| b.min = v)
    }

    /// Returns a reference view of the maximum corner of every box.
    pub fn max(&self) -> FieldView<Bounds<T, N>, Vector<T, N>> {
        FieldView::new(self, |b| b.max, |b, v| b.max = v)
    }

    /// Grows every box to include the corresponding point.
    pub fn extend_by<'a>(&self, points: impl Into<Operand<'a, Vector<T, N>>>) -> Result<(), ArrayError> {
        self.try_zip_update(points, |mut b, p| {
            b.extend_by(p);
            Ok(b)
        })
    }
}

impl<T: Scalar, const N: usize> FixedArray<Vector<T, N>> {
    pub fn length2(&self) -> FixedArray<T> {
        self.map(|v| v.length2())
    }

    /// Element-wise dot product.
    pub fn dot<'a>(&self, rhs: impl Into<Operand<'a, Vector<T, N>>>) -> Result<FixedArray<T>, ArrayError> {
        self.zip_map(rhs, Vector::dot)
    }

    /// Scales every vector by the corresponding scalar.
    pub fn mul_base<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError> {
        self.zip_map(rhs, |v, s| v * s)
    }

    pub fn mul_base_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError> {
        self.try_zip_update(rhs, |v, s| Ok(v * s))
    }

    /// Divides every vector by the corresponding scalar. Integer vectors fail with
    /// [`ArrayError::DivisionByZero`] for a zero divisor.
    pub fn div_base<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError> {
        self.try_zip_map(rhs, |v, s| {
            CheckedDiv::<T>::checked_div(v, s).ok_or(ArrayError::DivisionByZero)
        })
    }

    pub fn div_base_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError> {
        self.try_zip_update(rhs, |v, s| {
            CheckedDiv::<T>::checked_div(v, s).ok_or(ArrayError::DivisionByZero)
        })
    }
}

impl<T: Float, const N: usize> FixedArray<Vector<T, N>> {
    pub fn length(&self) -> FixedArray<T> {
        self.map(|v| v.length())
    }

    /// Normalizes every vector in place. Null vectors stay null.
    pub fn normalize(&self) -> Result<(), ArrayError> {
        self.update(Vector::normalized)
    }

    /// Normalizes every vector in place, failing without writing anything if any vector is null.
    pub fn try_normalize(&self) -> Result<(), ArrayError> {
        self.try_zip_update(Operand::Value(()), |v, ()| Ok(v.try_normalized()?))
    }

    pub fn normalized(&self) -> Self {
        self.map(Vector::normalized)
    }

    pub fn try_normalized(&self) -> Result<Self, ArrayError> {
        self.try_map(|v| Ok(v.try_normalized()?))
    }
}

impl<T: Scalar> FixedArray<Vec3<T>> {
    /// Element-wise cross product.
    pub fn cross<'a>(&self, rhs: impl Into<Operand<'a, Vec3<T>>>) -> Result<Self, ArrayError> {
        self.zip_map(rhs, Vec3::cross)
    }

    /// Transforms every point by the corresponding matrix, including the projective divide.
    pub fn mul_matrix<'a>(&self, m: impl Into<Operand<'a, Mat4<T>>>) -> Result<Self, ArrayError> {
        self.zip_map(m, |v, m| m.mult_vec_matrix(v))
    }

    pub fn mul_matrix_assign<'a>(&self, m: impl Into<Operand<'a, Mat4<T>>>) -> Result<(), ArrayError> {
        self.try_zip_update(m, |v, m| Ok(m.mult_vec_matrix(v)))
    }
}

impl<T: Scalar> FixedArray<Vec2<T>> {
    /// Element-wise 2D cross product, the z component of the 3D cross product.
    pub fn cross<'a>(&self, rhs: impl Into<Operand<'a, Vec2<T>>>) -> Result<FixedArray<T>, ArrayError> {
        self.zip_map(rhs, Vec2::cross)
    }

    /// Transforms every point by the corresponding homogeneous 3x3 matrix.
    pub fn mul_matrix<'a>(&self, m: impl Into<Operand<'a, Mat3<T>>>) -> Result<Self, ArrayError> {
        self.zip_map(m, |v, m| m.mult_vec_matrix(v))
    }
}

impl<T: Float> FixedArray<Vec3<T>> {
    /// Rotates every vector by the corresponding quaternion.
    pub fn mul_quat<'a>(&self, q: impl Into<Operand<'a, Quat<T>>>) -> Result<Self, ArrayError> {
        self.zip_map(q, |v, q| q.rotate_vector(v))
    }

    pub fn mul_quat_assign<'a>(&self, q: impl Into<Operand<'a, Quat<T>>>) -> Result<(), ArrayError> {
        self.try_zip_update(q, |v, q| Ok(q.rotate_vector(v)))
    }
}

macro_rules! matrix_arrays {
    ($($m:ident, $v:ident;)+) => {
        $(
            impl<T: Float> FixedArray<$m<T>> {
                /// Returns the inverse of every matrix. Singular matrices invert to the identity.
                pub fn inverse(&self) -> Self {
                    self.map(|m| m.inverse())
                }

                /// Returns the inverse of every matrix, failing with
                /// [`vmath_linalg::Error::Singular`] if any of them is singular.
                pub fn try_inverse(&self) -> Result<Self, ArrayError> {
                    self.try_map(|m| Ok(m.try_inverse()?))
                }

                /// Inverts every matrix in place. Singular matrices become the identity.
                pub fn invert(&self) -> Result<(), ArrayError> {
                    self.update(|m| m.inverse())
                }

                /// Inverts every matrix in place, writing nothing if any of them is singular.
                pub fn try_invert(&self) -> Result<(), ArrayError> {
                    self.try_zip_update(Operand::Value(()), |m, ()| Ok(m.try_inverse()?))
                }

                pub fn transpose(&self) -> Result<(), ArrayError> {
                    self.update(|m| m.transposed())
                }

                pub fn transposed(&self) -> Self {
                    self.map(|m| m.transposed())
                }

                /// Transforms each point by the corresponding matrix.
                pub fn mult_vec_matrix<'a>(
                    &self,
                    v: impl Into<Operand<'a, $v<T>>>,
                ) -> Result<FixedArray<$v<T>>, ArrayError> {
                    self.zip_map(v, |m, v| m.mult_vec_matrix(v))
                }

                /// Transforms each direction by the corresponding matrix, ignoring translation.
                pub fn mult_dir_matrix<'a>(
                    &self,
                    v: impl Into<Operand<'a, $v<T>>>,
                ) -> Result<FixedArray<$v<T>>, ArrayError> {
                    self.zip_map(v, |m, v| m.mult_dir_matrix(v))
                }
            }
        )+
    };
}

matrix_arrays! {
    Mat3, Vec2;
    Mat4, Vec3;
}

impl<T: Float> FixedArray<Quat<T>> {
    /// Rotates each vector by the corresponding quaternion.
    pub fn rotate_vector<'a>(
        &self,
        v: impl Into<Operand<'a, Vec3<T>>>,
    ) -> Result<FixedArray<Vec3<T>>, ArrayError> {
        self.zip_map(v, |q, v| q.rotate_vector(v))
    }

    /// Spherical linear interpolation towards `other`.
    pub fn slerp<'a>(&self, other: impl Into<Operand<'a, Quat<T>>>, t: T) -> Result<Self, ArrayError> {
        self.zip_map(other, |a, b| a.slerp(&b, t))
    }

    /// Like [`FixedArray::slerp`], but always interpolates along the shorter arc.
    pub fn slerp_shortest_arc<'a>(
        &self,
        other: impl Into<Operand<'a, Quat<T>>>,
        t: T,
    ) -> Result<Self, ArrayError> {
        self.zip_map(other, |a, b| a.slerp_shortest_arc(&b, t))
    }

    pub fn axis(&self) -> FixedArray<Vec3<T>> {
        self.map(|q| q.axis())
    }

    pub fn angle(&self) -> FixedArray<T> {
        self.map(|q| q.angle())
    }

    pub fn normalize(&self) -> Result<(), ArrayError> {
        self.update(Quat::normalized)
    }

    pub fn normalized(&self) -> Self {
        self.map(Quat::normalized)
    }

    pub fn inverse(&self) -> Self {
        self.map(|q| q.inverse())
    }

    pub fn invert(&self) -> Result<(), ArrayError> {
        self.update(|q| q.inverse())
    }

    pub fn to_matrix44(&self) -> FixedArray<Mat4<T>> {
        self.map(|q| q.to_matrix44())
    }

    /// Sets each quaternion to the shortest rotation taking `from` to `to`.
    pub fn set_rotation<'a, 'b>(
        &self,
        from: impl Into<Operand<'a, Vec3<T>>>,
        to: impl Into<Operand<'b, Vec3<T>>>,
    ) -> Result<(), ArrayError> {
        let pairs = self.zip_map(from, |_, f| f)?.zip_map(to, |f, t| (f, t))?;
        self.try_zip_update(&pairs, |_, (f, t)| Ok(Quat::from_rotation(f, t)))
    }

    /// Sets each quaternion to a rotation of `angle` radians about `axis`.
    pub fn set_axis_angle<'a, 'b>(
        &self,
        axis: impl Into<Operand<'a, Vec3<T>>>,
        angle: impl Into<Operand<'b, T>>,
    ) -> Result<(), ArrayError> {
        let pairs = self.zip_map(axis, |_, a| a)?.zip_map(angle, |a, r| (a, r))?;
        self.try_zip_update(&pairs, |_, (axis, radians)| Ok(Quat::from_axis_angle(axis, radians)))
    }

    /// Sets each quaternion from XYZ Euler angles.
    pub fn set_euler_xyz<'a>(&self, angles: impl Into<Operand<'a, Vec3<T>>>) -> Result<(), ArrayError> {
        self.try_zip_update(angles, |_, a| Ok(Quat::from_euler_xyz(a)))
    }

    /// Sets each quaternion to the rotation of the corresponding matrix.
    pub fn extract<'a>(&self, m: impl Into<Operand<'a, Mat4<T>>>) -> Result<(), ArrayError> {
        self.try_zip_update(m, |_, m| Ok(m.extract_quat()))
    }
}

impl<T: Float> FixedArray<Euler<T>> {
    /// Creates Euler rotations in `order` from angles given as `(x, y, z)` rotations.
    pub fn from_xyz_vectors(angles: &FixedArray<Vec3<T>>, order: EulerOrder) -> Self {
        angles.map(|a| Euler::new(a, order, InputLayout::Xyz))
    }

    pub fn to_xyz_vector(&self) -> FixedArray<Vec3<T>> {
        self.map(|e| e.to_xyz_vector())
    }

    pub fn to_quat(&self) -> FixedArray<Quat<T>> {
        self.map(|e| e.to_quat())
    }

    pub fn to_matrix44(&self) -> FixedArray<Mat4<T>> {
        self.map(|e| e.to_matrix44())
    }
}
