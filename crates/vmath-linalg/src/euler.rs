//! Euler angles in any of the 24 rotation orders.
//!
//! An order is named after the axes it rotates about, in sequence. Orders ending in `r` rotate
//! about the axes of the *rotating* frame, the others about the axes of the *static* frame. The
//! `XYZ` order matches [`Matrix::rotate`] and [`Matrix::set_euler_angles`].

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{approx::ApproxEq, traits::Float, Matrix, Quat, Vec3, Vector};

pub type Eulerf = Euler<f32>;
pub type Eulerd = Euler<f64>;

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

/// How the three values passed to an [`Euler`] constructor are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputLayout {
    /// The values are the rotations about the x, y and z axis, whatever the order.
    Xyz,
    /// The values are the first, second and third angle of the order.
    #[default]
    Ijk,
}

macro_rules! orders {
    ($($name:ident = $bits:literal,)+) => {
        /// Rotation order of an [`Euler`] angle triple.
        ///
        /// The discriminant packs the order's properties: the initial axis (bits 12 and 13),
        /// even parity (bit 8), a repeated initial axis (bit 4) and a static frame (bit 0).
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum EulerOrder {
            $( $name = $bits, )+
        }

        impl EulerOrder {
            /// All 24 orders.
            pub const ALL: [EulerOrder; 24] = [$( EulerOrder::$name, )+];

            /// Returns the order with the given bit encoding, if it is a legal one.
            pub fn from_bits(bits: u32) -> Option<Self> {
                match bits {
                    $( $bits => Some(EulerOrder::$name), )+
                    _ => None,
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $( EulerOrder::$name => stringify!($name), )+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( stringify!($name) => Some(EulerOrder::$name), )+
                    _ => None,
                }
            }
        }
    };
}

orders! {
    // Static axes.
    XYZ = 0x0101,
    XZY = 0x0001,
    YZX = 0x1101,
    YXZ = 0x1001,
    ZXY = 0x2101,
    ZYX = 0x2001,
    // Static axes, repeated initial axis.
    XZX = 0x0011,
    XYX = 0x0111,
    YXY = 0x1011,
    YZY = 0x1111,
    ZYZ = 0x2011,
    ZXZ = 0x2111,
    // Rotating axes.
    XYZr = 0x2000,
    XZYr = 0x2100,
    YZXr = 0x1000,
    YXZr = 0x1100,
    ZXYr = 0x0000,
    ZYXr = 0x0100,
    // Rotating axes, repeated initial axis.
    XZXr = 0x2110,
    XYXr = 0x2010,
    YXYr = 0x1110,
    YZYr = 0x1010,
    ZYZr = 0x0110,
    ZXZr = 0x0010,
}

impl EulerOrder {
    pub fn bits(self) -> u32 {
        self as u32
    }
}

impl Default for EulerOrder {
    fn default() -> Self {
        EulerOrder::XYZ
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Three rotation angles (in radians) together with the order they are applied in.
///
/// The angles are accessible as a [`Vec3`] through `Deref`, in the `i, j, k` layout of the
/// order: `e.x` is the first angle applied, which is not necessarily a rotation about x.
/// [`Euler::to_xyz_vector`] returns the angles keyed by axis instead.
///
/// Equality compares both the angles and the order.
#[derive(Clone, Copy, PartialEq)]
pub struct Euler<T> {
    angles: Vec3<T>,
    initial_axis: Axis,
    frame_static: bool,
    initial_repeated: bool,
    parity_even: bool,
}

impl<T: Float> Default for Euler<T> {
    fn default() -> Self {
        Self::with_order(EulerOrder::default())
    }
}

impl<T: Float> Euler<T> {
    /// Creates a zero rotation in the given order.
    pub fn with_order(order: EulerOrder) -> Self {
        let mut e = Self {
            angles: Vec3::ZERO,
            initial_axis: Axis::X,
            frame_static: true,
            initial_repeated: false,
            parity_even: true,
        };
        e.set_order(order);
        e
    }

    /// Creates an Euler rotation from three angles.
    pub fn new(angles: Vec3<T>, order: EulerOrder, layout: InputLayout) -> Self {
        let mut e = Self::with_order(order);
        match layout {
            InputLayout::Xyz => {
                e.set_xyz_vector(angles);
            }
            InputLayout::Ijk => e.angles = angles,
        }
        e
    }

    pub fn from_angles(x: T, y: T, z: T, order: EulerOrder, layout: InputLayout) -> Self {
        Self::new(crate::vec3(x, y, z), order, layout)
    }

    /// Converts `other` to a different rotation order, describing the same rotation.
    pub fn from_euler(other: &Self, order: EulerOrder) -> Self {
        Self::from_matrix33(&other.to_matrix33(), order)
    }

    pub fn from_matrix33(m: &Matrix<T, 3, 3>, order: EulerOrder) -> Self {
        let mut e = Self::with_order(order);
        e.extract_matrix33(m);
        e
    }

    pub fn from_matrix44(m: &Matrix<T, 4, 4>, order: EulerOrder) -> Self {
        let mut e = Self::with_order(order);
        e.extract_matrix44(m);
        e
    }

    /// Returns whether `bits` encodes one of the 24 orders.
    pub fn legal(bits: u32) -> bool {
        EulerOrder::from_bits(bits).is_some()
    }

    pub fn set_order(&mut self, order: EulerOrder) -> &mut Self {
        let bits = order.bits();
        let axis = if bits & 0x2000 != 0 {
            Axis::Z
        } else if bits & 0x1000 != 0 {
            Axis::Y
        } else {
            Axis::X
        };
        self.set(axis, bits & 0x1 == 0, bits & 0x100 != 0, bits & 0x10 != 0)
    }

    /// Sets the order from its individual properties.
    pub fn set(
        &mut self,
        initial_axis: Axis,
        relative: bool,
        parity_even: bool,
        first_repeats: bool,
    ) -> &mut Self {
        self.initial_axis = initial_axis;
        self.frame_static = !relative;
        self.parity_even = parity_even;
        self.initial_repeated = first_repeats;
        self
    }

    pub fn order(&self) -> EulerOrder {
        let mut bits = match self.initial_axis {
            Axis::Z => 0x2000,
            Axis::Y => 0x1000,
            Axis::X => 0,
        };
        if self.parity_even {
            bits |= 0x0100;
        }
        if self.initial_repeated {
            bits |= 0x0010;
        }
        if self.frame_static {
            bits |= 0x0001;
        }
        match EulerOrder::from_bits(bits) {
            Some(order) => order,
            None => unreachable!("every flag combination is a legal order"),
        }
    }

    pub fn initial_axis(&self) -> Axis {
        self.initial_axis
    }

    pub fn frame_static(&self) -> bool {
        self.frame_static
    }

    pub fn initial_repeated(&self) -> bool {
        self.initial_repeated
    }

    pub fn parity_even(&self) -> bool {
        self.parity_even
    }

    /// The axes (as indices) the first, second and third angle rotate about.
    pub fn angle_order(&self) -> (usize, usize, usize) {
        let i = self.initial_axis as usize;
        let next = (i + 1) % 3;
        let prev = (i + 2) % 3;
        if self.parity_even {
            (i, next, prev)
        } else {
            (i, prev, next)
        }
    }

    /// The positions of the x, y and z rotation within the `i, j, k` angle layout.
    pub fn angle_mapping(&self) -> (usize, usize, usize) {
        let mut m = [0; 3];
        let i = self.initial_axis as usize;
        m[i] = 0;
        m[(i + 1) % 3] = if self.parity_even { 1 } else { 2 };
        m[(i + 2) % 3] = if self.parity_even { 2 } else { 1 };
        (m[0], m[1], m[2])
    }

    /// Sets the angles from rotations about the x, y and z axis.
    pub fn set_xyz_vector(&mut self, v: Vec3<T>) -> &mut Self {
        let (i, j, k) = self.angle_mapping();
        self.angles[i] = v.x;
        self.angles[j] = v.y;
        self.angles[k] = v.z;
        self
    }

    /// Returns the rotations about the x, y and z axis.
    pub fn to_xyz_vector(&self) -> Vec3<T> {
        let (i, j, k) = self.angle_mapping();
        crate::vec3(self.angles[i], self.angles[j], self.angles[k])
    }

    /// Angles in application order, with the sign convention of the order applied.
    fn oriented_angles(&self) -> Vec3<T> {
        let a = self.angles;
        if self.frame_static {
            a
        } else {
            crate::vec3(a.z, a.y, a.x)
        }
    }

    pub fn to_matrix33(&self) -> Matrix<T, 3, 3> {
        let (i, j, k) = self.angle_order();
        let mut angles = self.oriented_angles();
        if !self.parity_even {
            angles = -angles;
        }

        let (ci, cj, ch) = (angles.x.cos(), angles.y.cos(), angles.z.cos());
        let (si, sj, sh) = (angles.x.sin(), angles.y.sin(), angles.z.sin());
        let (cc, cs, sc, ss) = (ci * ch, ci * sh, si * ch, si * sh);

        let mut m = Matrix::identity();
        if self.initial_repeated {
            m[(i, i)] = cj;
            m[(j, i)] = sj * si;
            m[(k, i)] = sj * ci;
            m[(i, j)] = sj * sh;
            m[(j, j)] = -cj * ss + cc;
            m[(k, j)] = -cj * cs - sc;
            m[(i, k)] = -sj * ch;
            m[(j, k)] = cj * sc + cs;
            m[(k, k)] = cj * cc - ss;
        } else {
            m[(i, i)] = cj * ch;
            m[(j, i)] = sj * sc - cs;
            m[(k, i)] = sj * cc + ss;
            m[(i, j)] = cj * sh;
            m[(j, j)] = sj * ss + cc;
            m[(k, j)] = sj * cs - sc;
            m[(i, k)] = -sj;
            m[(j, k)] = cj * si;
            m[(k, k)] = cj * ci;
        }
        m
    }

    pub fn to_matrix44(&self) -> Matrix<T, 4, 4> {
        let m3 = self.to_matrix33();
        Matrix::from_fn(|r, c| match (r, c) {
            (3, 3) => T::ONE,
            (3, _) | (_, 3) => T::ZERO,
            _ => m3[(r, c)],
        })
    }

    pub fn to_quat(&self) -> Quat<T> {
        let (i, j, k) = self.angle_order();
        let mut angles = self.oriented_angles();
        if !self.parity_even {
            angles.y = -angles.y;
        }

        let half = T::half();
        let (ti, tj, th) = (angles.x * half, angles.y * half, angles.z * half);
        let (ci, cj, ch) = (ti.cos(), tj.cos(), th.cos());
        let (si, sj, sh) = (ti.sin(), tj.sin(), th.sin());
        let (cc, cs, sc, ss) = (ci * ch, ci * sh, si * ch, si * sh);
        let parity = if self.parity_even { T::ONE } else { -T::ONE };

        let mut a = Vec3::ZERO;
        let r;
        if self.initial_repeated {
            a[i] = cj * (cs + sc);
            a[j] = sj * (cc + ss) * parity;
            a[k] = sj * (cs - sc);
            r = cj * (cc - ss);
        } else {
            a[i] = cj * sc - sj * cs;
            a[j] = (cj * ss + sj * cc) * parity;
            a[k] = cj * cs - sj * sc;
            r = cj * cc + sj * ss;
        }
        Quat::from_real_imaginary(r, a)
    }

    /// Sets the angles from the rotation matrix `m`, keeping the order.
    pub fn extract_matrix33(&mut self, m: &Matrix<T, 3, 3>) -> &mut Self {
        let m44 = Matrix::from_fn(|r, c| {
            if r < 3 && c < 3 {
                m[(r, c)]
            } else if r == c {
                T::ONE
            } else {
                T::ZERO
            }
        });
        self.extract_matrix44(&m44)
    }

    pub fn extract_matrix44(&mut self, m: &Matrix<T, 4, 4>) -> &mut Self {
        let (i, j, k) = self.angle_order();

        let remove_first = |first: T| {
            // Removing the first rotation leaves a rotation about two axes only, which cannot
            // suffer from gimbal lock.
            let mut r = Vec3::ZERO;
            r[i] = if self.parity_even { -first } else { first };
            let mut n = Matrix::<T, 4, 4>::identity();
            n.rotate(r);
            n * *m
        };

        let (x, y, z);
        if self.initial_repeated {
            x = m[(j, i)].atan2(m[(k, i)]);
            let n = remove_first(x);
            let sy = (n[(j, i)] * n[(j, i)] + n[(k, i)] * n[(k, i)]).sqrt();
            y = sy.atan2(n[(i, i)]);
            z = n[(j, k)].atan2(n[(j, j)]);
        } else {
            x = m[(j, k)].atan2(m[(k, k)]);
            let n = remove_first(x);
            let cy = (n[(i, i)] * n[(i, i)] + n[(i, j)] * n[(i, j)]).sqrt();
            y = (-n[(i, k)]).atan2(cy);
            z = (-n[(j, i)]).atan2(n[(j, j)]);
        }

        let mut angles = crate::vec3(x, y, z);
        if !self.parity_even {
            angles = -angles;
        }
        if !self.frame_static {
            angles = crate::vec3(angles.z, angles.y, angles.x);
        }
        self.angles = angles;
        self
    }

    pub fn extract_quat(&mut self, q: &Quat<T>) -> &mut Self {
        self.extract_matrix33(&q.to_matrix33())
    }

    /// Wraps `angle` into `[-π, π]`.
    pub fn angle_mod(angle: T) -> T {
        let pi = T::PI;
        let two_pi = pi * T::two();
        let mut angle = angle % two_pi;
        if angle < -pi {
            angle += two_pi;
        } else if angle > pi {
            angle -= two_pi;
        }
        angle
    }

    /// Adjusts each angle of `xyz_rot` by multiples of 2π to be as close as possible to the
    /// matching angle of `target`.
    pub fn simple_xyz_rotation(xyz_rot: &mut Vec3<T>, target: Vec3<T>) {
        let d = *xyz_rot - target;
        *xyz_rot = Vector::from_fn(|n| target[n] + Self::angle_mod(d[n]));
    }

    /// Replaces `xyz_rot` by the equivalent rotation (in `order`) that is closest to `target`.
    pub fn nearest_rotation(xyz_rot: &mut Vec3<T>, target: Vec3<T>, order: EulerOrder) {
        let (i, j, k) = Self::with_order(order).angle_order();
        let pi = T::PI;

        Self::simple_xyz_rotation(xyz_rot, target);

        let mut other = Vec3::ZERO;
        other[i] = pi + xyz_rot[i];
        other[j] = pi - xyz_rot[j];
        other[k] = pi + xyz_rot[k];
        Self::simple_xyz_rotation(&mut other, target);

        if (other - target).length2() < (*xyz_rot - target).length2() {
            *xyz_rot = other;
        }
    }

    /// Changes the angles (not the rotation) to be as close as possible to `target`.
    pub fn make_near(&mut self, target: &Self) -> &mut Self {
        let mut xyz_rot = self.to_xyz_vector();
        let target_xyz = if self.order() != target.order() {
            Self::from_euler(target, self.order()).to_xyz_vector()
        } else {
            target.to_xyz_vector()
        };
        Self::nearest_rotation(&mut xyz_rot, target_xyz, self.order());
        self.set_xyz_vector(xyz_rot)
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.order() == other.order() && self.angles.abs_diff_eq(&other.angles, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.order() == other.order() && self.angles.rel_diff_eq(&other.angles, e)
    }
}

impl<T: Float> Quat<T> {
    /// Creates a rotation from XYZ Euler angles, matching [`Matrix::set_euler_angles`].
    pub fn from_euler_xyz(angles: Vec3<T>) -> Self {
        Euler::new(angles, EulerOrder::XYZ, InputLayout::Ijk).to_quat()
    }
}

impl<T> Deref for Euler<T> {
    type Target = Vec3<T>;

    fn deref(&self) -> &Vec3<T> {
        &self.angles
    }
}

impl<T> DerefMut for Euler<T> {
    fn deref_mut(&mut self) -> &mut Vec3<T> {
        &mut self.angles
    }
}

impl<T: Float> ApproxEq for Euler<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.equal_with_abs_error(other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.equal_with_rel_error(other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.order() == other.order() && self.angles.ulps_diff_eq(&other.angles, ulps_tolerance)
    }
}

impl<T: Float> fmt::Debug for Euler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.angles.as_array();
        f.debug_tuple("Euler")
            .field(&a[0])
            .field(&a[1])
            .field(&a[2])
            .field(&format_args!("{}", self.order()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::{assert_approx_eq, vec3, Mat3d, Mat4d, Quatd};

    use super::*;

    #[test]
    fn order_encoding() {
        for order in EulerOrder::ALL {
            let e = Eulerd::with_order(order);
            assert_eq!(e.order(), order);
            assert!(Eulerd::legal(order.bits()));
            assert_eq!(EulerOrder::from_name(order.name()), Some(order));
        }
        assert!(!Eulerd::legal(0x3101));
        assert!(!Eulerd::legal(0x0002));

        let e = Eulerd::with_order(EulerOrder::ZYXr);
        assert_eq!(e.initial_axis(), Axis::X);
        assert!(!e.frame_static());
        assert!(e.parity_even());
        assert!(!e.initial_repeated());

        let mut e = Eulerd::default();
        assert_eq!(e.order(), EulerOrder::XYZ);
        e.set(Axis::Y, false, false, true);
        assert_eq!(e.order(), EulerOrder::YXY);
    }

    #[test]
    fn order_from_properties() {
        let mut e = Eulerd::default();

        e.set(Axis::X, false, false, true);
        assert_eq!(e.order(), EulerOrder::XZX);
        assert!(e.frame_static());
        assert!(e.initial_repeated());
        assert!(!e.parity_even());
        assert_eq!(e.initial_axis(), Axis::X);

        e.set(Axis::Y, true, false, true);
        assert_eq!(e.order(), EulerOrder::YZYr);
        assert!(!e.frame_static());
        assert!(e.initial_repeated());
        assert!(!e.parity_even());
        assert_eq!(e.initial_axis(), Axis::Y);

        e.set(Axis::Z, true, true, true);
        assert_eq!(e.order(), EulerOrder::XZXr);
        assert!(!e.frame_static());
        assert!(e.initial_repeated());
        assert!(e.parity_even());
        assert_eq!(e.initial_axis(), Axis::Z);

        // Rotating repeated orders name the axes in reverse, so the initial axis is the last one.
        for (order, axis) in [
            (EulerOrder::XZXr, Axis::Z),
            (EulerOrder::XYXr, Axis::Z),
            (EulerOrder::YXYr, Axis::Y),
            (EulerOrder::YZYr, Axis::Y),
            (EulerOrder::ZYZr, Axis::X),
            (EulerOrder::ZXZr, Axis::X),
        ] {
            let e = Eulerd::with_order(order);
            assert_eq!(e.initial_axis(), axis, "{order}");
            assert!(e.initial_repeated());
            assert!(!e.frame_static());
        }
    }

    #[test]
    fn angle_order_and_mapping() {
        let e = Eulerd::with_order(EulerOrder::XYZ);
        assert_eq!(e.angle_order(), (0, 1, 2));
        assert_eq!(e.angle_mapping(), (0, 1, 2));

        let e = Eulerd::with_order(EulerOrder::ZYX);
        assert_eq!(e.angle_order(), (2, 1, 0));
        assert_eq!(e.angle_mapping(), (2, 1, 0));

        let e = Eulerd::new(vec3(1.0, 2.0, 3.0), EulerOrder::ZYX, InputLayout::Xyz);
        assert_eq!(*e, vec3(3.0, 2.0, 1.0));
        assert_eq!(e.to_xyz_vector(), vec3(1.0, 2.0, 3.0));

        let e = Eulerd::from_angles(1.0, 2.0, 3.0, EulerOrder::ZYX, InputLayout::Ijk);
        assert_eq!(e.x, 1.0);
        assert_eq!(e.to_xyz_vector(), vec3(3.0, 2.0, 1.0));
    }

    #[test]
    fn xyz_matches_matrix_rotation() {
        let r = vec3(0.3, -0.2, 1.1);
        let e = Eulerd::new(r, EulerOrder::XYZ, InputLayout::Ijk);
        let mut m = Mat4d::identity();
        m.set_euler_angles(r);
        assert_approx_eq!(e.to_matrix44(), m).abs(1e-15);
        assert_approx_eq!(Quatd::from_euler_xyz(r).to_matrix44(), m).abs(1e-12);
    }

    #[test]
    fn round_trip_all_orders() {
        let mut rng = fastrand::Rng::with_seed(24);
        for order in EulerOrder::ALL {
            for _ in 0..10 {
                let angles = vec3(rng.f64() - 0.5, rng.f64() - 0.5, rng.f64() - 0.5) * 2.0;
                let e = Eulerd::new(angles, order, InputLayout::Ijk);
                let m = e.to_matrix33();
                assert_approx_eq!(e.to_quat().to_matrix33(), m).abs(1e-12);
                assert_approx_eq!(m.determinant(), 1.0).abs(1e-12);

                let back = Eulerd::from_matrix33(&m, order);
                assert_approx_eq!(back.to_matrix33(), m).abs(1e-12);
                assert_eq!(back.order(), order);
                let back = Eulerd::from_matrix44(&e.to_matrix44(), order);
                assert_approx_eq!(back.to_matrix33(), m).abs(1e-12);

                let mut from_quat = Eulerd::with_order(order);
                from_quat.extract_quat(&e.to_quat());
                assert_approx_eq!(from_quat.to_matrix33(), m).abs(1e-12);
            }
        }
    }

    #[test]
    fn change_order() {
        let e = Eulerd::new(vec3(0.1, 0.2, 0.3), EulerOrder::XYZ, InputLayout::Ijk);
        for order in EulerOrder::ALL {
            let converted = Eulerd::from_euler(&e, order);
            assert_eq!(converted.order(), order);
            assert_approx_eq!(converted.to_matrix33(), e.to_matrix33()).abs(1e-12);
        }
        let m = e.to_matrix44();
        assert_approx_eq!(Eulerd::from_matrix44(&m, EulerOrder::XYZ), e).abs(1e-12);
        assert_ne!(Eulerd::with_order(EulerOrder::XYZ), Eulerd::with_order(EulerOrder::ZYX));
    }

    #[test]
    fn angle_mod() {
        assert_approx_eq!(Eulerd::angle_mod(3.0 * PI / 2.0), -PI / 2.0).abs(1e-12);
        assert_eq!(Eulerd::angle_mod(0.5), 0.5);
        assert_approx_eq!(Eulerd::angle_mod(-7.0), -7.0 + 2.0 * PI).abs(1e-12);

        let mut rot = vec3(7.0, 0.0, -7.0);
        Eulerd::simple_xyz_rotation(&mut rot, Vec3::ZERO);
        assert_approx_eq!(rot, vec3(7.0 - 2.0 * PI, 0.0, 2.0 * PI - 7.0)).abs(1e-12);
    }

    #[test]
    fn make_near() {
        let target = Eulerd::new(vec3(0.0, 0.0, 0.0), EulerOrder::XYZ, InputLayout::Xyz);
        let mut e = Eulerd::new(vec3(2.0 * PI + 0.1, 0.0, 0.0), EulerOrder::XYZ, InputLayout::Xyz);
        let before = e.to_matrix33();
        e.make_near(&target);
        assert_approx_eq!(e.to_xyz_vector(), vec3(0.1, 0.0, 0.0)).abs(1e-12);
        assert_approx_eq!(e.to_matrix33(), before).abs(1e-12);

        // (π, π, π) is the identity rotation in disguise.
        let mut e = Eulerd::new(vec3(PI, PI, PI), EulerOrder::XYZ, InputLayout::Xyz);
        e.make_near(&target);
        assert_approx_eq!(e.to_xyz_vector(), Vec3::ZERO).abs(1e-12);
        assert_approx_eq!(e.to_matrix33(), Mat3d::identity()).abs(1e-12);
    }

    #[test]
    fn fmt() {
        let e = Eulerf::new(vec3(1.0, 2.0, 3.0), EulerOrder::ZXZr, InputLayout::Ijk);
        assert_eq!(format!("{:?}", e), "Euler(1.0, 2.0, 3.0, ZXZr)");
    }
}
