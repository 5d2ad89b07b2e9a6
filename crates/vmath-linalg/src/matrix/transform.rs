//! Affine transform builders.
//!
//! `set_*` methods overwrite the whole matrix with the requested transform. The remaining
//! methods concatenate a transform in front of the existing one, so that in
//! `m.translate(t).rotate(r)` the rotation is applied to points first.

use crate::{
    traits::{Float, Scalar},
    Matrix, Quat, Shear6, Vec2, Vec3, Vector,
};

impl<T: Scalar> Matrix<T, 3, 3> {
    /// Sets `self` to a 2D scaling matrix.
    pub fn set_scale(&mut self, s: Vec2<T>) -> &mut Self {
        *self = Self::from_diagonal([s.x, s.y, T::ONE]);
        self
    }

    pub fn set_uniform_scale(&mut self, s: T) -> &mut Self {
        self.set_scale(Vec2::splat(s))
    }

    /// Scales the first two rows by `s`.
    pub fn scale(&mut self, s: Vec2<T>) -> &mut Self {
        for col in 0..3 {
            self[(0, col)] *= s.x;
            self[(1, col)] *= s.y;
        }
        self
    }

    /// Sets `self` to a 2D translation matrix.
    pub fn set_translation(&mut self, t: Vec2<T>) -> &mut Self {
        self.make_identity();
        self[(2, 0)] = t.x;
        self[(2, 1)] = t.y;
        self
    }

    pub fn translation(&self) -> Vec2<T> {
        Vector::from([self[(2, 0)], self[(2, 1)]])
    }

    pub fn translate(&mut self, t: Vec2<T>) -> &mut Self {
        for col in 0..3 {
            let offset = t.x * self[(0, col)] + t.y * self[(1, col)];
            self[(2, col)] += offset;
        }
        self
    }

    /// Sets `self` to a shear along x by `h` times y.
    pub fn set_shear(&mut self, h: T) -> &mut Self {
        self.make_identity();
        self[(1, 0)] = h;
        self
    }

    /// Sets `self` to a shear along x by `h.x` times y and along y by `h.y` times x.
    pub fn set_shear_xy(&mut self, h: Vec2<T>) -> &mut Self {
        self.make_identity();
        self[(1, 0)] = h.x;
        self[(0, 1)] = h.y;
        self
    }

    pub fn shear(&mut self, h: T) -> &mut Self {
        for col in 0..3 {
            let delta = h * self[(0, col)];
            self[(1, col)] += delta;
        }
        self
    }

    pub fn shear_xy(&mut self, h: Vec2<T>) -> &mut Self {
        let p = *self;
        for col in 0..3 {
            self[(0, col)] = p[(0, col)] + h.y * p[(1, col)];
            self[(1, col)] = p[(1, col)] + h.x * p[(0, col)];
        }
        self
    }

    /// Transforms the point `v`, including translation and the projective divide.
    pub fn mult_vec_matrix(&self, v: Vec2<T>) -> Vec2<T> {
        v * *self
    }

    /// Transforms the direction `v`, ignoring translation.
    pub fn mult_dir_matrix(&self, v: Vec2<T>) -> Vec2<T> {
        Vector::from_fn(|col| v.x * self[(0, col)] + v.y * self[(1, col)])
    }
}

impl<T: Float> Matrix<T, 3, 3> {
    /// Sets `self` to a counter-clockwise rotation by `r` radians.
    pub fn set_rotation(&mut self, r: T) -> &mut Self {
        let (sin, cos) = (r.sin(), r.cos());
        self.make_identity();
        self[(0, 0)] = cos;
        self[(0, 1)] = sin;
        self[(1, 0)] = -sin;
        self[(1, 1)] = cos;
        self
    }

    pub fn rotate(&mut self, r: T) -> &mut Self {
        let mut rot = Self::identity();
        rot.set_rotation(r);
        *self = rot * *self;
        self
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Sets `self` to a 3D scaling matrix.
    pub fn set_scale(&mut self, s: Vec3<T>) -> &mut Self {
        *self = Self::from_diagonal([s.x, s.y, s.z, T::ONE]);
        self
    }

    pub fn set_uniform_scale(&mut self, s: T) -> &mut Self {
        self.set_scale(Vec3::splat(s))
    }

    /// Scales the first three rows by `s`.
    pub fn scale(&mut self, s: Vec3<T>) -> &mut Self {
        for col in 0..4 {
            for row in 0..3 {
                self[(row, col)] *= s[row];
            }
        }
        self
    }

    /// Sets `self` to a 3D translation matrix.
    pub fn set_translation(&mut self, t: Vec3<T>) -> &mut Self {
        self.make_identity();
        for col in 0..3 {
            self[(3, col)] = t[col];
        }
        self
    }

    pub fn translation(&self) -> Vec3<T> {
        Vector::from_fn(|col| self[(3, col)])
    }

    pub fn translate(&mut self, t: Vec3<T>) -> &mut Self {
        for col in 0..4 {
            let offset = t.x * self[(0, col)] + t.y * self[(1, col)] + t.z * self[(2, col)];
            self[(3, col)] += offset;
        }
        self
    }

    /// Sets `self` to a shear matrix with the `xy`, `xz` and `yz` factors taken from `h`.
    pub fn set_shear(&mut self, h: Vec3<T>) -> &mut Self {
        self.make_identity();
        self[(1, 0)] = h.x;
        self[(2, 0)] = h.y;
        self[(2, 1)] = h.z;
        self
    }

    /// Sets `self` to a shear matrix with all six factors.
    pub fn set_shear6(&mut self, h: Shear6<T>) -> &mut Self {
        self.make_identity();
        self[(0, 1)] = h.yx;
        self[(0, 2)] = h.zx;
        self[(1, 0)] = h.xy;
        self[(1, 2)] = h.zy;
        self[(2, 0)] = h.xz;
        self[(2, 1)] = h.yz;
        self
    }

    pub fn shear(&mut self, h: Vec3<T>) -> &mut Self {
        for col in 0..4 {
            let z = h.y * self[(0, col)] + h.z * self[(1, col)];
            self[(2, col)] += z;
            let y = h.x * self[(0, col)];
            self[(1, col)] += y;
        }
        self
    }

    pub fn shear6(&mut self, h: Shear6<T>) -> &mut Self {
        let p = *self;
        for col in 0..4 {
            let (p0, p1, p2) = (p[(0, col)], p[(1, col)], p[(2, col)]);
            self[(0, col)] = p0 + h.yx * p1 + h.zx * p2;
            self[(1, col)] = h.xy * p0 + p1 + h.zy * p2;
            self[(2, col)] = h.xz * p0 + h.yz * p1 + p2;
        }
        self
    }

    /// Transforms the point `v`, including translation and the projective divide.
    pub fn mult_vec_matrix(&self, v: Vec3<T>) -> Vec3<T> {
        v * *self
    }

    /// Transforms the direction `v`, ignoring translation.
    pub fn mult_dir_matrix(&self, v: Vec3<T>) -> Vec3<T> {
        Vector::from_fn(|col| {
            v.x * self[(0, col)] + v.y * self[(1, col)] + v.z * self[(2, col)]
        })
    }
}

/// Rotation block for XYZ Euler angles `r`, in row-vector convention.
fn euler_xyz_block<T: Float>(r: Vec3<T>) -> [[T; 3]; 3] {
    let (cx, cy, cz) = (r.x.cos(), r.y.cos(), r.z.cos());
    let (sx, sy, sz) = (r.x.sin(), r.y.sin(), r.z.sin());
    [
        [cz * cy, sz * cy, -sy],
        [-sz * cx + cz * sy * sx, cz * cx + sz * sy * sx, cy * sx],
        [sz * sx + cz * sy * cx, -cz * sx + sz * sy * cx, cy * cx],
    ]
}

impl<T: Float> Matrix<T, 4, 4> {
    /// Sets `self` to the rotation by the XYZ Euler angles `r` (in radians), with no translation.
    pub fn set_euler_angles(&mut self, r: Vec3<T>) -> &mut Self {
        let block = euler_xyz_block(r);
        self.make_identity();
        for (row, values) in block.into_iter().enumerate() {
            for (col, value) in values.into_iter().enumerate() {
                self[(row, col)] = value;
            }
        }
        self
    }

    /// Sets `self` to a rotation of `angle` radians around `axis`.
    ///
    /// `axis` does not need to be normalized.
    pub fn set_axis_angle(&mut self, axis: Vec3<T>, angle: T) -> &mut Self {
        let u = axis.normalized();
        let (s, c) = (angle.sin(), angle.cos());
        let t = T::ONE - c;
        #[rustfmt::skip]
        let rows = [
            [u.x * u.x * t + c,       u.x * u.y * t + u.z * s, u.x * u.z * t - u.y * s],
            [u.x * u.y * t - u.z * s, u.y * u.y * t + c,       u.y * u.z * t + u.x * s],
            [u.x * u.z * t + u.y * s, u.y * u.z * t - u.x * s, u.z * u.z * t + c],
        ];
        self.make_identity();
        for (row, values) in rows.into_iter().enumerate() {
            for (col, value) in values.into_iter().enumerate() {
                self[(row, col)] = value;
            }
        }
        self
    }

    /// Prepends the rotation by the XYZ Euler angles `r`.
    pub fn rotate(&mut self, r: Vec3<T>) -> &mut Self {
        let m = euler_xyz_block(r);
        let p = *self;
        for row in 0..3 {
            for col in 0..4 {
                self[(row, col)] =
                    m[row][0] * p[(0, col)] + m[row][1] * p[(1, col)] + m[row][2] * p[(2, col)];
            }
        }
        self
    }
}

/// Returns the rotation matrix that turns direction `from` into direction `to` along the
/// shortest arc.
pub fn rotation_matrix<T: Float>(from: Vec3<T>, to: Vec3<T>) -> Matrix<T, 4, 4> {
    let mut q = Quat::identity();
    q.set_rotation(from, to);
    q.to_matrix44()
}

/// Returns a rotation matrix that turns `from` into `to`, and the y axis into a direction
/// as close to `up` as possible.
pub fn rotation_matrix_with_up_dir<T: Float>(
    from: Vec3<T>,
    to: Vec3<T>,
    up: Vec3<T>,
) -> Matrix<T, 4, 4> {
    if from.length() == T::ZERO {
        return Matrix::identity();
    }

    let z_axis_to_from = align_z_axis_with_target_dir(from, Vec3::Y);
    let from_to_z_axis = z_axis_to_from.transposed();
    let z_axis_to_to = align_z_axis_with_target_dir(to, up);
    from_to_z_axis * z_axis_to_to
}

/// Returns a rotation matrix that maps the z axis onto `target` and the y axis onto the
/// direction closest to `up` that is perpendicular to `target`.
///
/// A null `target` defaults to the z axis and a null `up` to the y axis.
pub fn align_z_axis_with_target_dir<T: Float>(
    mut target: Vec3<T>,
    mut up: Vec3<T>,
) -> Matrix<T, 4, 4> {
    if target.length2() == T::ZERO {
        target = Vec3::Z;
    }
    if up.length2() == T::ZERO {
        up = Vec3::Y;
    }

    // `up` parallel to `target`: pick any perpendicular direction.
    if up.cross(target).length() == T::ZERO {
        up = target.cross(Vec3::X);
        if up.length() == T::ZERO {
            up = target.cross(Vec3::Z);
        }
    }

    let perp = up.cross(target);
    let target_up = target.cross(perp);

    let mut m = Matrix::identity();
    for (row, dir) in [perp, target_up, target].into_iter().enumerate() {
        let dir = dir.normalized();
        for col in 0..3 {
            m[(row, col)] = dir[col];
        }
    }
    m
}
