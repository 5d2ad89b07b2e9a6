//! Planes in 3D space.

use std::{
    fmt,
    ops::{Mul, Neg},
};

use crate::{
    approx::ApproxEq,
    error::Error,
    line::Line3,
    traits::{Float, Scalar},
    Matrix, Vec3,
};

pub type Plane3f = Plane3<f32>;
pub type Plane3d = Plane3<f64>;

/// The plane of points `p` with `p · normal == distance`.
///
/// `normal` is a unit vector, so `distance` is the signed distance of the plane from the origin.
#[derive(Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Plane3<T> {
    pub normal: Vec3<T>,
    pub distance: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Plane3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Plane3<T> {}

impl<T: Float> Plane3<T> {
    pub fn new(normal: Vec3<T>, distance: T) -> Self {
        Self {
            normal: normal.normalized(),
            distance,
        }
    }

    /// The plane through `point` that is perpendicular to `normal`.
    pub fn from_point_normal(point: Vec3<T>, normal: Vec3<T>) -> Self {
        let normal = normal.normalized();
        Self {
            normal,
            distance: normal.dot(point),
        }
    }

    /// The plane through three points. Its normal is `(p1 - p0) × (p2 - p0)`.
    ///
    /// Collinear points produce a plane with a zero normal.
    pub fn from_points(p0: Vec3<T>, p1: Vec3<T>, p2: Vec3<T>) -> Self {
        let normal = (p1 - p0).cross(p2 - p0).normalized();
        Self {
            normal,
            distance: normal.dot(p0),
        }
    }

    /// Like [`Plane3::from_points`], but fails with [`Error::Degenerate`] for collinear points.
    pub fn try_from_points(p0: Vec3<T>, p1: Vec3<T>, p2: Vec3<T>) -> Result<Self, Error> {
        let normal = (p1 - p0)
            .cross(p2 - p0)
            .try_normalized()
            .map_err(|_| Error::Degenerate("plane through collinear points"))?;
        Ok(Self {
            normal,
            distance: normal.dot(p0),
        })
    }

    /// Line parameter `t` at which `line` crosses the plane, or [`None`] if they are parallel.
    pub fn intersect_t(&self, line: &Line3<T>) -> Option<T> {
        let d = self.normal.dot(line.dir);
        if d == T::ZERO {
            return None;
        }
        Some(-(self.normal.dot(line.pos) - self.distance) / d)
    }

    /// Point at which `line` crosses the plane, or [`None`] if they are parallel.
    pub fn intersect(&self, line: &Line3<T>) -> Option<Vec3<T>> {
        self.intersect_t(line).map(|t| line.point_at(t))
    }

    /// Signed distance of `point` from the plane, positive on the side `normal` points to.
    pub fn distance_to(&self, point: Vec3<T>) -> T {
        point.dot(self.normal) - self.distance
    }

    pub fn reflect_point(&self, point: Vec3<T>) -> Vec3<T> {
        self.normal * self.distance_to(point) * -T::two() + point
    }

    pub fn reflect_vector(&self, v: Vec3<T>) -> Vec3<T> {
        self.normal * self.normal.dot(v) * T::two() - v
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.abs_diff_eq(other, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.rel_diff_eq(other, e)
    }
}

/// Transforms the plane by transforming three of its points.
impl<T: Float> Mul<Matrix<T, 4, 4>> for Plane3<T> {
    type Output = Self;

    fn mul(self, m: Matrix<T, 4, 4>) -> Self {
        // Pick the in-plane direction that is best conditioned for the cross product.
        let mut dir1 = Vec3::X.cross(self.normal);
        for axis in [Vec3::Y, Vec3::Z] {
            let candidate = axis.cross(self.normal);
            if candidate.length2() > dir1.length2() {
                dir1 = candidate;
            }
        }
        let dir2 = dir1.cross(self.normal);
        let point = self.normal * self.distance;

        Self::from_points(point * m, (point + dir2) * m, (point + dir1) * m)
    }
}

impl<T: Float> Neg for Plane3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }
}

impl<T: Scalar> ApproxEq for Plane3<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.normal.abs_diff_eq(&other.normal, abs_tolerance)
            && self.distance.abs_diff_eq(&other.distance, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.normal.rel_diff_eq(&other.normal, rel_tolerance)
            && self.distance.rel_diff_eq(&other.distance, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.normal.ulps_diff_eq(&other.normal, ulps_tolerance)
            && self.distance.ulps_diff_eq(&other.distance, ulps_tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for Plane3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane3({:?}, {:?})", self.normal, self.distance)
    }
}
