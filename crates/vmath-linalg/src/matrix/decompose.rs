//! Decomposition of affine matrices into scale, shear, rotation and translation, plus singular
//! value decomposition and symmetric eigensolve.
//!
//! Every decomposition that can fail comes in two flavours: `try_*` returns an [`Error`], while
//! the plain method reports failure through its return value and leaves `self` untouched.

use nalgebra::RealField;

use crate::{error::Error, traits::Float, Matrix, Vec2, Vec3, Vector};

/// Fails if dividing `row` by `scl` would overflow.
fn check_zero_scale<T: Float, const N: usize>(scl: T, row: &Vector<T, N>) -> Result<(), Error> {
    if scl.abs() < T::ONE {
        for &elem in row.as_slice() {
            if elem.abs() >= T::MAX * scl.abs() {
                return Err(Error::ZeroScale);
            }
        }
    }
    Ok(())
}

/// Divides every row by the largest element magnitude, returning that magnitude.
fn normalize_rows<T: Float, const N: usize>(rows: &mut [Vector<T, N>]) -> Result<T, Error> {
    let max_val = rows
        .iter()
        .flat_map(|row| row.as_slice())
        .fold(T::ZERO, |max, elem| max.max(elem.abs()));
    if max_val != T::ZERO {
        for row in rows.iter_mut() {
            check_zero_scale(max_val, row)?;
            *row = *row / max_val;
        }
    }
    Ok(max_val)
}

fn log_failure<E: std::fmt::Display>(what: &str, err: E) {
    log::debug!("{} failed: {}", what, err);
}

impl<T: Float> Matrix<T, 3, 3> {
    fn upper_rows(&self) -> [Vec2<T>; 2] {
        [0, 1].map(|row| Vector::from([self[(row, 0)], self[(row, 1)]]))
    }

    /// Removes scaling and shear from the upper 2x2 block, returning `(scale, shear)`.
    ///
    /// What remains is a rotation (plus the untouched translation row).
    pub fn try_extract_and_remove_scaling_and_shear(&mut self) -> Result<(Vec2<T>, T), Error> {
        let mut row = self.upper_rows();
        let max_val = normalize_rows(&mut row)?;

        let mut scl = Vec2::ZERO;
        scl.x = row[0].length();
        check_zero_scale(scl.x, &row[0])?;
        row[0] = row[0] / scl.x;

        let mut shr = row[0].dot(row[1]);
        row[1] = row[1] - row[0] * shr;

        scl.y = row[1].length();
        check_zero_scale(scl.y, &row[1])?;
        row[1] = row[1] / scl.y;
        shr = shr / scl.y;

        // Undo a reflection.
        if row[0].cross(row[1]) < T::ZERO {
            row[1] = -row[1];
            scl.y = -scl.y;
            shr = -shr;
        }

        for (r, values) in row.iter().enumerate() {
            self[(r, 0)] = values.x;
            self[(r, 1)] = values.y;
        }
        Ok((scl * max_val, shr))
    }

    pub fn extract_and_remove_scaling_and_shear(&mut self) -> Option<(Vec2<T>, T)> {
        self.try_extract_and_remove_scaling_and_shear()
            .map_err(|e| log_failure("scale/shear extraction", e))
            .ok()
    }

    pub fn try_extract_scaling_and_shear(&self) -> Result<(Vec2<T>, T), Error> {
        let mut m = *self;
        m.try_extract_and_remove_scaling_and_shear()
    }

    pub fn extract_scaling_and_shear(&self) -> Option<(Vec2<T>, T)> {
        let mut m = *self;
        m.extract_and_remove_scaling_and_shear()
    }

    pub fn try_extract_scaling(&self) -> Result<Vec2<T>, Error> {
        Ok(self.try_extract_scaling_and_shear()?.0)
    }

    pub fn extract_scaling(&self) -> Option<Vec2<T>> {
        self.extract_scaling_and_shear().map(|(scl, _)| scl)
    }

    pub fn try_sans_scaling_and_shear(&self) -> Result<Self, Error> {
        let mut m = *self;
        m.try_extract_and_remove_scaling_and_shear()?;
        Ok(m)
    }

    /// Returns `self` without scaling and shear, or `self` unchanged if that is not possible.
    pub fn sans_scaling_and_shear(&self) -> Self {
        self.try_sans_scaling_and_shear().unwrap_or(*self)
    }

    pub fn try_remove_scaling_and_shear(&mut self) -> Result<(), Error> {
        self.try_extract_and_remove_scaling_and_shear().map(drop)
    }

    pub fn remove_scaling_and_shear(&mut self) -> bool {
        self.extract_and_remove_scaling_and_shear().is_some()
    }

    /// Returns the rotation angle of the upper 2x2 block, assuming it contains no shear.
    pub fn extract_euler(&self) -> T {
        let [mut i, mut j] = self.upper_rows();
        i.normalize();
        j.normalize();
        -j.x.atan2(i.x)
    }

    /// Decomposes `self` into `(scale, shear, rotation angle, translation)`.
    pub fn try_extract_shrt(&self) -> Result<(Vec2<T>, T, T, Vec2<T>), Error> {
        let mut rot = *self;
        let (scl, shr) = rot.try_extract_and_remove_scaling_and_shear()?;
        Ok((scl, shr, rot.extract_euler(), self.translation()))
    }

    pub fn extract_shrt(&self) -> Option<(Vec2<T>, T, T, Vec2<T>)> {
        self.try_extract_shrt()
            .map_err(|e| log_failure("SHRT extraction", e))
            .ok()
    }

    /// Returns `self` with the scaling removed, keeping shear, rotation and translation.
    pub fn try_sans_scaling(&self) -> Result<Self, Error> {
        let (_, shr, rot, tr) = self.try_extract_shrt()?;
        let mut m = Self::identity();
        m.translate(tr).rotate(rot).shear(shr);
        Ok(m)
    }

    /// Like [`Matrix::try_sans_scaling`], but returns `self` unchanged on failure.
    pub fn sans_scaling(&self) -> Self {
        self.try_sans_scaling().unwrap_or(*self)
    }

    pub fn try_remove_scaling(&mut self) -> Result<(), Error> {
        *self = self.try_sans_scaling()?;
        Ok(())
    }

    /// Removes the scaling from `self`, returning `false` and leaving `self` unchanged if the
    /// matrix has a zero scale.
    pub fn remove_scaling(&mut self) -> bool {
        match self.try_remove_scaling() {
            Ok(()) => true,
            Err(e) => {
                log_failure("scale removal", e);
                false
            }
        }
    }
}

impl<T: Float> Matrix<T, 4, 4> {
    fn upper_rows(&self) -> [Vec3<T>; 3] {
        [0, 1, 2].map(|row| Vector::from_fn(|col| self[(row, col)]))
    }

    /// Removes scaling and shear from the upper 3x3 block, returning `(scale, shear)`.
    ///
    /// The shear factors are returned as `(xy, xz, yz)`.
    pub fn try_extract_and_remove_scaling_and_shear(
        &mut self,
    ) -> Result<(Vec3<T>, Vec3<T>), Error> {
        let mut row = self.upper_rows();
        let max_val = normalize_rows(&mut row)?;

        let mut scl = Vec3::ZERO;
        let mut shr = Vec3::ZERO;

        scl.x = row[0].length();
        check_zero_scale(scl.x, &row[0])?;
        row[0] = row[0] / scl.x;

        shr.x = row[0].dot(row[1]);
        row[1] = row[1] - row[0] * shr.x;

        scl.y = row[1].length();
        check_zero_scale(scl.y, &row[1])?;
        row[1] = row[1] / scl.y;
        shr.x = shr.x / scl.y;

        shr.y = row[0].dot(row[2]);
        row[2] = row[2] - row[0] * shr.y;
        shr.z = row[1].dot(row[2]);
        row[2] = row[2] - row[1] * shr.z;

        scl.z = row[2].length();
        check_zero_scale(scl.z, &row[2])?;
        row[2] = row[2] / scl.z;
        shr.y = shr.y / scl.z;
        shr.z = shr.z / scl.z;

        // Undo a reflection.
        if row[0].dot(row[1].cross(row[2])) < T::ZERO {
            for r in &mut row {
                r.negate();
            }
            scl.negate();
        }

        for (r, values) in row.iter().enumerate() {
            for c in 0..3 {
                self[(r, c)] = values[c];
            }
        }
        Ok((scl * max_val, shr))
    }

    pub fn extract_and_remove_scaling_and_shear(&mut self) -> Option<(Vec3<T>, Vec3<T>)> {
        self.try_extract_and_remove_scaling_and_shear()
            .map_err(|e| log_failure("scale/shear extraction", e))
            .ok()
    }

    pub fn try_extract_scaling_and_shear(&self) -> Result<(Vec3<T>, Vec3<T>), Error> {
        let mut m = *self;
        m.try_extract_and_remove_scaling_and_shear()
    }

    pub fn extract_scaling_and_shear(&self) -> Option<(Vec3<T>, Vec3<T>)> {
        let mut m = *self;
        m.extract_and_remove_scaling_and_shear()
    }

    pub fn try_extract_scaling(&self) -> Result<Vec3<T>, Error> {
        Ok(self.try_extract_scaling_and_shear()?.0)
    }

    pub fn extract_scaling(&self) -> Option<Vec3<T>> {
        self.extract_scaling_and_shear().map(|(scl, _)| scl)
    }

    pub fn try_sans_scaling_and_shear(&self) -> Result<Self, Error> {
        let mut m = *self;
        m.try_extract_and_remove_scaling_and_shear()?;
        Ok(m)
    }

    pub fn sans_scaling_and_shear(&self) -> Self {
        self.try_sans_scaling_and_shear().unwrap_or(*self)
    }

    pub fn try_remove_scaling_and_shear(&mut self) -> Result<(), Error> {
        self.try_extract_and_remove_scaling_and_shear().map(drop)
    }

    pub fn remove_scaling_and_shear(&mut self) -> bool {
        self.extract_and_remove_scaling_and_shear().is_some()
    }

    fn normalized_rotation(&self) -> Self {
        let mut m = Self::identity();
        for (r, mut row) in self.upper_rows().into_iter().enumerate() {
            row.normalize();
            for c in 0..3 {
                m[(r, c)] = row[c];
            }
        }
        m
    }

    /// Returns the XYZ Euler angles of the upper 3x3 block, assuming it contains no shear.
    ///
    /// The result is suitable for [`Matrix::set_euler_angles`] and [`Matrix::rotate`].
    pub fn extract_euler_xyz(&self) -> Vec3<T> {
        let m = self.normalized_rotation();

        let x = m[(1, 2)].atan2(m[(2, 2)]);

        // Remove the x rotation, leaving a rotation around y and z only.
        let mut n = Self::identity();
        n.rotate(Vector::from([-x, T::ZERO, T::ZERO]));
        let n = n * m;

        let cy = (n[(0, 0)] * n[(0, 0)] + n[(0, 1)] * n[(0, 1)]).sqrt();
        let y = (-n[(0, 2)]).atan2(cy);
        let z = (-n[(1, 0)]).atan2(n[(1, 1)]);
        Vector::from([x, y, z])
    }

    /// Returns the ZYX Euler angles of the upper 3x3 block, assuming it contains no shear.
    ///
    /// The first component holds the rotation around z, the last one the rotation around x.
    pub fn extract_euler_zyx(&self) -> Vec3<T> {
        let m = self.normalized_rotation();

        let x = -m[(1, 0)].atan2(m[(0, 0)]);

        let mut n = Self::identity();
        n.rotate(Vector::from([T::ZERO, T::ZERO, -x]));
        let n = n * m;

        let cy = (n[(2, 2)] * n[(2, 2)] + n[(2, 1)] * n[(2, 1)]).sqrt();
        let y = -(-n[(2, 0)]).atan2(cy);
        let z = -(-n[(1, 2)]).atan2(n[(1, 1)]);
        Vector::from([x, y, z])
    }

    /// Decomposes `self` into `(scale, shear, XYZ rotation, translation)`.
    pub fn try_extract_shrt(&self) -> Result<(Vec3<T>, Vec3<T>, Vec3<T>, Vec3<T>), Error> {
        let mut rot = *self;
        let (scl, shr) = rot.try_extract_and_remove_scaling_and_shear()?;
        Ok((scl, shr, rot.extract_euler_xyz(), self.translation()))
    }

    pub fn extract_shrt(&self) -> Option<(Vec3<T>, Vec3<T>, Vec3<T>, Vec3<T>)> {
        self.try_extract_shrt()
            .map_err(|e| log_failure("SHRT extraction", e))
            .ok()
    }

    pub fn try_sans_scaling(&self) -> Result<Self, Error> {
        let (_, shr, rot, tr) = self.try_extract_shrt()?;
        let mut m = Self::identity();
        m.translate(tr).rotate(rot).shear(shr);
        Ok(m)
    }

    pub fn sans_scaling(&self) -> Self {
        self.try_sans_scaling().unwrap_or(*self)
    }

    pub fn try_remove_scaling(&mut self) -> Result<(), Error> {
        *self = self.try_sans_scaling()?;
        Ok(())
    }

    pub fn remove_scaling(&mut self) -> bool {
        match self.try_remove_scaling() {
            Ok(()) => true,
            Err(e) => {
                log_failure("scale removal", e);
                false
            }
        }
    }
}

/// Per column of `m`, whether its largest-magnitude element is negative.
///
/// Decomposition routines are free to pick either sign per singular or eigen vector. Flipping
/// those columns makes results reproducible (identity in, identity out).
fn negative_columns<T: Float, const N: usize>(m: &Matrix<T, N, N>) -> [bool; N] {
    std::array::from_fn(|col| {
        let mut largest = T::ZERO;
        for row in 0..N {
            if m[(row, col)].abs() > largest.abs() {
                largest = m[(row, col)];
            }
        }
        largest < T::ZERO
    })
}

fn flip_columns<T: Float, const N: usize>(m: &mut Matrix<T, N, N>, flip: &[bool; N]) {
    for (col, _) in flip.iter().enumerate().filter(|(_, &flip)| flip) {
        for row in 0..N {
            m[(row, col)] = -m[(row, col)];
        }
    }
}

fn finish_svd<T: Float, const N: usize>(
    mut u: Matrix<T, N, N>,
    mut s: Vector<T, N>,
    mut v: Matrix<T, N, N>,
    force_positive_determinant: bool,
) -> (Matrix<T, N, N>, Vector<T, N>, Matrix<T, N, N>) {
    // Descending order of singular values.
    let mut order: [usize; N] = std::array::from_fn(|i| i);
    order.sort_by(|&a, &b| s[b].partial_cmp(&s[a]).unwrap_or(std::cmp::Ordering::Equal));
    let (u0, s0, v0) = (u, s, v);
    for (dst, &src) in order.iter().enumerate() {
        s[dst] = s0[src];
        for row in 0..N {
            u[(row, dst)] = u0[(row, src)];
            v[(row, dst)] = v0[(row, src)];
        }
    }

    let flip = negative_columns(&v);
    flip_columns(&mut u, &flip);
    flip_columns(&mut v, &flip);

    if force_positive_determinant {
        let last = N - 1;
        for m in [&mut u, &mut v] {
            if determinant(m) < T::ZERO {
                for row in 0..N {
                    m[(row, last)] = -m[(row, last)];
                }
                s[last] = -s[last];
            }
        }
    }

    (u, s, v)
}

fn determinant<T: Float, const N: usize>(m: &Matrix<T, N, N>) -> T {
    // Generic over `N`, unlike the inherent `determinant` methods.
    let mut lu = *m;
    let mut det = T::ONE;
    for i in 0..N {
        let pivot = (i..N).fold(i, |best, r| {
            if lu[(r, i)].abs() > lu[(best, i)].abs() {
                r
            } else {
                best
            }
        });
        if lu[(pivot, i)] == T::ZERO {
            return T::ZERO;
        }
        if pivot != i {
            for c in 0..N {
                let tmp = lu[(i, c)];
                lu[(i, c)] = lu[(pivot, c)];
                lu[(pivot, c)] = tmp;
            }
            det = -det;
        }
        det = det * lu[(i, i)];
        for r in i + 1..N {
            let f = lu[(r, i)] / lu[(i, i)];
            for c in i..N {
                lu[(r, c)] = lu[(r, c)] - f * lu[(i, c)];
            }
        }
    }
    det
}

fn is_symmetric<T: Float, const N: usize>(m: &Matrix<T, N, N>) -> bool {
    (0..N).all(|r| (0..r).all(|c| m[(r, c)] == m[(c, r)]))
}

macro_rules! decompositions {
    ($n:literal, $na:ident) => {
        impl<T: Float + RealField> Matrix<T, $n, $n> {
            /// Computes the singular value decomposition `self == U * diag(S) * Vᵗ`.
            ///
            /// Singular values are sorted in descending order. If `force_positive_determinant`
            /// is set, `U` and `V` are proper rotations, and the sign is moved into the last
            /// singular value instead (which may then be negative).
            pub fn singular_value_decomposition(
                &self,
                force_positive_determinant: bool,
            ) -> (Self, Vector<T, $n>, Self) {
                let a = nalgebra::$na::<T>::from_fn(|r, c| self[(r, c)]);
                let svd = nalgebra::SVD::new(a, true, true);
                let s = Vector::from_fn(|i| svd.singular_values[i]);
                let (u, v) = match (svd.u, svd.v_t) {
                    (Some(u), Some(v_t)) => (
                        Matrix::from_fn(|r, c| u[(r, c)]),
                        Matrix::from_fn(|r, c| v_t[(c, r)]),
                    ),
                    _ => unreachable!("SVD was asked for both U and Vᵗ"),
                };
                finish_svd(u, s, v, force_positive_determinant)
            }

            /// Computes the eigendecomposition `self == Q * diag(S) * Qᵗ` of a symmetric matrix.
            ///
            /// The columns of `Q` are the eigenvectors, `S` holds the matching eigenvalues.
            /// Fails with [`Error::NotSymmetric`] unless `self[(i, j)] == self[(j, i)]` for all
            /// elements.
            pub fn symmetric_eigensolve(&self) -> Result<(Self, Vector<T, $n>), Error> {
                if !is_symmetric(self) {
                    return Err(Error::NotSymmetric);
                }
                let a = nalgebra::$na::<T>::from_fn(|r, c| self[(r, c)]);
                let eigen = nalgebra::SymmetricEigen::new(a);
                let mut q = Matrix::from_fn(|r, c| eigen.eigenvectors[(r, c)]);
                let s = Vector::from_fn(|i| eigen.eigenvalues[i]);
                let flip = negative_columns(&q);
                flip_columns(&mut q, &flip);
                Ok((q, s))
            }
        }
    };
}

decompositions!(3, Matrix3);
decompositions!(4, Matrix4);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, error::ErrorKind, vec2, vec3, Mat3d, Mat3f, Mat4d, Mat4f};

    use super::*;

    #[test]
    fn sans_scaling() {
        let mut m = Mat3f::identity();
        m.translate(vec2(1.0, 2.0)).shear(7.0).scale(vec2(4.0, 5.0));
        let m2 = m.sans_scaling();
        assert_approx_eq!(m2[(0, 0)], 1.0).abs(1e-6);
        assert_approx_eq!(m2[(1, 1)], 1.0).abs(1e-6);
        assert_approx_eq!(m2[(1, 0)], 7.0).abs(1e-5);
        assert_eq!(m2.translation(), vec2(1.0, 2.0));

        let mut m3 = m;
        assert!(m3.remove_scaling());
        assert_approx_eq!(m3, m2).abs(1e-5);

        let mut zero = Mat3f::identity();
        zero.scale(vec2(0.0, 0.0));
        assert_eq!(zero.try_sans_scaling(), Err(Error::ZeroScale));
        assert_eq!(zero.sans_scaling(), zero);
        let mut z = zero;
        assert!(!z.remove_scaling());
        assert_eq!(z, zero);
        assert_eq!(z.try_remove_scaling().unwrap_err().kind(), ErrorKind::Domain);
    }

    #[test]
    fn scaling_and_shear_3d() {
        let mut sm = Mat4d::identity();
        sm.set_scale(vec3(1.0, 2.0, 3.0));
        let mut hm = Mat4d::identity();
        hm.set_shear(vec3(0.5, 1.0, 0.75));
        let m = sm * hm;
        let (s, h) = m.extract_scaling_and_shear().unwrap();
        assert_approx_eq!(s, vec3(1.0, 2.0, 3.0)).abs(1e-12);
        assert_approx_eq!(h, vec3(0.5, 1.0, 0.75)).abs(1e-12);
        assert_approx_eq!(m.extract_scaling().unwrap(), s);

        let mut r = m;
        assert!(r.remove_scaling_and_shear());
        assert_approx_eq!(r, Mat4d::identity()).abs(1e-12);
        assert_approx_eq!(m.sans_scaling_and_shear(), r);

        let mut mirrored = Mat4d::identity();
        mirrored.scale(vec3(-2.0, 1.0, 1.0));
        let s = mirrored.try_extract_scaling().unwrap();
        assert_eq!(s, vec3(-2.0, -1.0, -1.0));

        let mut zero = Mat4d::identity();
        zero.scale(vec3(1.0, 0.0, 1.0));
        assert_eq!(zero.try_extract_scaling(), Err(Error::ZeroScale));
        assert_eq!(zero.extract_scaling(), None);
        let mut z = zero;
        assert!(!z.remove_scaling_and_shear());
        assert_eq!(zero.sans_scaling_and_shear(), zero);
    }

    #[test]
    fn extract_euler() {
        let a = 0.3f64;

        let mut m = Mat3d::identity();
        m.set_rotation(-a);
        assert_approx_eq!(m.extract_euler(), -a).abs(1e-12);

        let mut m = Mat4d::identity();
        m.set_euler_angles(vec3(0.0, 0.0, -a));
        assert_approx_eq!(m.extract_euler_zyx(), vec3(-a, 0.0, 0.0)).abs(1e-15);
        assert_approx_eq!(m.extract_euler_xyz(), vec3(0.0, 0.0, -a)).abs(1e-15);

        let r = vec3(0.2, -0.4, 0.6);
        m.set_euler_angles(r);
        assert_approx_eq!(m.extract_euler_xyz(), r).abs(1e-12);
    }

    #[test]
    fn extract_shrt_3d() {
        let s = vec3(1.0, 2.0, 3.0);
        let h = vec3(0.5, 1.0, 0.75);
        let a = 0.25f64;
        let r = vec3(0.0, 0.0, -a);
        let t = vec3(4.0, 5.0, 6.0);

        let mut sm = Mat4d::identity();
        sm.set_scale(s);
        let mut hm = Mat4d::identity();
        hm.set_shear(h);
        let mut rm = Mat4d::identity();
        rm.rotate(r);
        let mut tm = Mat4d::identity();
        tm.set_translation(t);
        let m = sm * hm * rm * tm;

        let (s2, h2, r2, t2) = m.try_extract_shrt().unwrap();
        assert_approx_eq!(s2, s).abs(1e-12);
        assert_approx_eq!(h2, h).abs(1e-12);
        assert_approx_eq!(r2, r).abs(1e-12);
        assert_approx_eq!(t2, t).abs(1e-12);

        let without = m.sans_scaling();
        let mut expected = Mat4d::identity();
        expected.translate(t).rotate(r).shear(h);
        assert_approx_eq!(without, expected).abs(1e-12);
    }

    #[test]
    fn extract_shrt_2d() {
        let a = 0.25f64;
        let mut sm = Mat3d::identity();
        sm.set_scale(vec2(1.0, 2.0));
        let mut hm = Mat3d::identity();
        hm.set_shear(0.5);
        let mut rm = Mat3d::identity();
        rm.set_rotation(-a);
        let mut tm = Mat3d::identity();
        tm.set_translation(vec2(4.0, 5.0));
        let m = sm * hm * rm * tm;

        let (s, h, angle, t) = m.extract_shrt().unwrap();
        assert_approx_eq!(s, vec2(1.0, 2.0)).abs(1e-12);
        assert_approx_eq!(h, 0.5).abs(1e-12);
        assert_approx_eq!(angle, -a).abs(1e-12);
        assert_approx_eq!(t, vec2(4.0, 5.0)).abs(1e-12);
    }

    fn check_svd<const N: usize>(
        m: Matrix<f64, N, N>,
        u: Matrix<f64, N, N>,
        s: Vector<f64, N>,
        v: Matrix<f64, N, N>,
    ) {
        assert_approx_eq!(u * Matrix::from_diagonal(s) * v.transposed(), m).abs(1e-10);
        assert_approx_eq!(u * u.transposed(), Matrix::identity()).abs(1e-12);
        assert_approx_eq!(v * v.transposed(), Matrix::identity()).abs(1e-12);
        for i in 0..N - 1 {
            assert!(s[i] >= 0.0, "{:?}", s);
            assert!(s[i] >= s[i + 1].abs() - 1e-12, "{:?}", s);
        }
    }

    #[test]
    fn svd_identity() {
        let (u, s, v) = Mat3d::identity().singular_value_decomposition(false);
        assert_approx_eq!(u, Mat3d::identity()).abs(1e-15);
        assert_approx_eq!(v, Mat3d::identity()).abs(1e-15);
        assert_approx_eq!(s, vec3(1.0, 1.0, 1.0)).abs(1e-15);

        let (u, s, v) = Mat4f::identity().singular_value_decomposition(true);
        assert_approx_eq!(u, Mat4f::identity()).abs(1e-6);
        assert_approx_eq!(v, Mat4f::identity()).abs(1e-6);
        assert_approx_eq!(s, Vector::splat(1.0)).abs(1e-6);
    }

    #[test]
    fn svd_random() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let m = Mat3d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
            let (u, s, v) = m.singular_value_decomposition(false);
            check_svd(m, u, s, v);

            let (fu, fs, fv) = m.singular_value_decomposition(true);
            check_svd(m, fu, fs, fv);
            assert!(fu.determinant() > 0.0);
            assert!(fv.determinant() > 0.0);
            assert_approx_eq!(fs[2].abs(), s[2]).abs(1e-12);

            let m = Mat4d::from_fn(|_, _| rng.f64() * 2.0 - 1.0);
            let (u, s, v) = m.singular_value_decomposition(true);
            check_svd(m, u, s, v);
        }
    }

    #[test]
    fn svd_of_reflection() {
        let mut m = Mat3d::identity();
        m[(1, 1)] = -1.0;
        let (u, s, v) = m.singular_value_decomposition(true);
        assert!(u.determinant() > 0.0 && v.determinant() > 0.0);
        assert_approx_eq!(s[2], -1.0).abs(1e-12);
        check_svd(m, u, s, v);
    }

    #[test]
    fn eigensolve() {
        #[rustfmt::skip]
        let m = Mat4d::from_rows([
            [2.0, 4.0, 3.0, 6.0],
            [4.0, 1.0, 9.0, 7.0],
            [3.0, 9.0, 10.0, 13.0],
            [6.0, 7.0, 13.0, 27.0],
        ]);
        let (q, s) = m.symmetric_eigensolve().unwrap();
        assert_approx_eq!(q * Matrix::from_diagonal(s) * q.transposed(), m).abs(1e-10);
        assert_approx_eq!(q * q.transposed(), Mat4d::identity()).abs(1e-12);

        let m = Mat3f::from_rows([[2.0, 4.0, 3.0], [4.0, 1.0, 9.0], [3.0, 9.0, 10.0]]);
        let (q, s) = m.symmetric_eigensolve().unwrap();
        assert_approx_eq!(q * Matrix::from_diagonal(s) * q.transposed(), m).abs(1e-4);

        let (q, s) = Mat3d::identity().symmetric_eigensolve().unwrap();
        assert_approx_eq!(q, Mat3d::identity()).abs(1e-15);
        assert_approx_eq!(s, vec3(1.0, 1.0, 1.0)).abs(1e-12);
    }

    #[test]
    fn eigensolve_rejects_asymmetric() {
        let mut m = Mat3d::identity();
        m[(0, 1)] = 1.0;
        let err = m.symmetric_eigensolve().unwrap_err();
        assert_eq!(err, Error::NotSymmetric);
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}
