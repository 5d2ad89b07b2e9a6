//! Infinite 3D lines.

use std::{fmt, ops::Mul};

use crate::{
    approx::ApproxEq,
    error::Error,
    traits::{Float, Scalar},
    Matrix, Vec3,
};

pub type Line3f = Line3<f32>;
pub type Line3d = Line3<f64>;

/// An infinite line through `pos` along the unit direction `dir`.
#[derive(Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Line3<T> {
    pub pos: Vec3<T>,
    pub dir: Vec3<T>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Line3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Line3<T> {}

/// The x axis.
impl<T: Float> Default for Line3<T> {
    fn default() -> Self {
        Self {
            pos: Vec3::ZERO,
            dir: Vec3::X,
        }
    }
}

impl<T: Float> Line3<T> {
    /// Creates the line through `p0` and `p1`, pointing from `p0` to `p1`.
    ///
    /// If the points coincide the direction is left as the zero vector.
    pub fn from_points(p0: Vec3<T>, p1: Vec3<T>) -> Self {
        Self {
            pos: p0,
            dir: (p1 - p0).normalized(),
        }
    }

    /// Like [`Line3::from_points`], but fails with [`Error::NullVector`] if the points coincide.
    pub fn try_from_points(p0: Vec3<T>, p1: Vec3<T>) -> Result<Self, Error> {
        Ok(Self {
            pos: p0,
            dir: (p1 - p0).try_normalized()?,
        })
    }

    /// The point at parameter `t`, `t` units along the line from `pos`.
    pub fn point_at(&self, t: T) -> Vec3<T> {
        self.pos + self.dir * t
    }

    pub fn closest_point_to(&self, point: Vec3<T>) -> Vec3<T> {
        self.pos + self.dir * (point - self.pos).dot(self.dir)
    }

    pub fn distance_to(&self, point: Vec3<T>) -> T {
        (self.closest_point_to(point) - point).length()
    }

    /// The point on `self` closest to `line`.
    ///
    /// For parallel lines every point is equally close, and `pos` is returned.
    pub fn closest_point_to_line(&self, line: &Self) -> Vec3<T> {
        let to_self = self.pos - line.pos;
        let c = self.dir.dot(to_self);
        let a = line.dir.dot(self.dir);
        let f = line.dir.dot(to_self);
        let num = c - a * f;
        let denom = a * a - T::ONE;

        let abs_denom = denom.abs();
        if abs_denom < T::ONE && num.abs() >= abs_denom * T::MAX {
            return self.pos;
        }
        self.pos + self.dir * (num / denom)
    }

    /// Shortest distance between `self` and `line`.
    pub fn distance_to_line(&self, line: &Self) -> T {
        match closest_points(self, line) {
            Some((p0, p1)) => (p1 - p0).length(),
            None => line.distance_to(self.pos),
        }
    }

    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        self.pos.abs_diff_eq(&other.pos, e) && self.dir.abs_diff_eq(&other.dir, e)
    }

    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        self.pos.rel_diff_eq(&other.pos, e) && self.dir.rel_diff_eq(&other.dir, e)
    }
}

/// Computes the closest pair of points `(on_l1, on_l2)` between two lines.
///
/// Returns [`None`] for parallel lines.
pub fn closest_points<T: Float>(l1: &Line3<T>, l2: &Line3<T>) -> Option<(Vec3<T>, Vec3<T>)> {
    let w = l1.pos - l2.pos;
    let d1w = l1.dir.dot(w);
    let d2w = l2.dir.dot(w);
    let d1d2 = l1.dir.dot(l2.dir);
    let n1 = d1d2 * d2w - d1w;
    let n2 = d2w - d1d2 * d1w;
    let d = T::ONE - d1d2 * d1d2;
    let abs_d = d.abs();

    if abs_d > T::ONE || (n1.abs() < T::MAX * abs_d && n2.abs() < T::MAX * abs_d) {
        Some((l1.point_at(n1 / d), l2.point_at(n2 / d)))
    } else {
        None
    }
}

/// Where a line hits a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit<T> {
    pub point: Vec3<T>,
    /// Weights of `v0`, `v1` and `v2` that reproduce `point`.
    pub barycentric: Vec3<T>,
    /// Whether the vertices appear in clockwise order when seen from where the line comes from.
    pub front: bool,
}

/// Intersects `line` with the triangle `v0, v1, v2`.
///
/// Returns [`None`] if the line misses the triangle, runs parallel to it, or the triangle has
/// no area.
pub fn intersect_with_triangle<T: Float>(
    line: &Line3<T>,
    v0: Vec3<T>,
    v1: Vec3<T>,
    v2: Vec3<T>,
) -> Option<TriangleHit<T>> {
    let edge0 = v1 - v0;
    let edge1 = v2 - v1;
    let normal = edge1.cross(edge0).try_normalized().ok()?;

    let d = normal.dot(v0);
    let nd = normal.dot(line.dir);
    if nd == T::ZERO {
        return None;
    }
    let t = (d - normal.dot(line.pos)) / nd;
    let point = line.point_at(t);

    // Fraction of the distance from `edge`'s line towards `opposite` covered by `point`.
    let edge_fraction = |edge: Vec3<T>, origin: Vec3<T>, opposite: Vec3<T>| {
        let en = edge.normalized();
        let a = point - origin;
        let b = opposite - origin;
        let c = a - en * en.dot(a);
        let d = b - en * en.dot(b);
        let e = c.dot(d);
        let f = d.dot(d);
        (e >= T::ZERO && e <= f).then(|| e / f)
    };

    let z = edge_fraction(edge0, v0, v2)?;
    let x = edge_fraction(edge1, v1, v0)?;
    let y = T::ONE - x - z;
    if y < T::ZERO {
        return None;
    }

    Some(TriangleHit {
        point,
        barycentric: crate::vec3(x, y, z),
        front: line.dir.dot(normal) < T::ZERO,
    })
}

/// Returns whichever of `v0`, `v1` and `v2` lies closest to `line`.
pub fn closest_vertex<T: Float>(v0: Vec3<T>, v1: Vec3<T>, v2: Vec3<T>, line: &Line3<T>) -> Vec3<T> {
    let dist = |v: Vec3<T>| (v - line.closest_point_to(v)).length2();
    let mut nearest = v0;
    let mut nearest_dist = dist(v0);
    for v in [v1, v2] {
        let d = dist(v);
        if d < nearest_dist {
            nearest = v;
            nearest_dist = d;
        }
    }
    nearest
}

/// Rotates `point` around `line` by `angle` radians.
pub fn rotate_point<T: Float>(point: Vec3<T>, line: &Line3<T>, angle: T) -> Vec3<T> {
    let q = line.closest_point_to(point);
    let mut x = point - q;
    let radius = x.length();
    x.normalize();
    let y = x.cross(line.dir).normalized();
    q + x * radius * angle.cos() + y * radius * angle.sin()
}

/// Transforms both the position and the direction of the line.
impl<T: Float> Mul<Matrix<T, 4, 4>> for Line3<T> {
    type Output = Self;

    fn mul(self, m: Matrix<T, 4, 4>) -> Self {
        Self::from_points(self.pos * m, (self.pos + self.dir) * m)
    }
}

impl<T: Scalar> ApproxEq for Line3<T> {
    type Tolerance = T;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: T) -> bool {
        self.pos.abs_diff_eq(&other.pos, abs_tolerance)
            && self.dir.abs_diff_eq(&other.dir, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: T) -> bool {
        self.pos.rel_diff_eq(&other.pos, rel_tolerance)
            && self.dir.rel_diff_eq(&other.dir, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.pos.ulps_diff_eq(&other.pos, ulps_tolerance)
            && self.dir.ulps_diff_eq(&other.dir, ulps_tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for Line3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line3({:?}, {:?})", self.pos, self.dir)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, error::ErrorKind, vec3, Mat4d};

    use super::*;

    #[test]
    fn construction() {
        let l = Line3d::from_points(vec3(1.0, 1.0, 0.0), vec3(1.0, 5.0, 0.0));
        assert_eq!(l.dir, vec3(0.0, 1.0, 0.0));
        assert_eq!(l.point_at(2.0), vec3(1.0, 3.0, 0.0));
        assert_eq!(format!("{:?}", l), "Line3((1.0, 1.0, 0.0), (0.0, 1.0, 0.0))");

        let p = vec3(2.0, 2.0, 2.0);
        assert_eq!(Line3d::from_points(p, p).dir, Vec3::ZERO);
        let err = Line3d::try_from_points(p, p).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn closest_point() {
        let l = Line3d::from_points(Vec3::ZERO, vec3(2.0, 0.0, 0.0));
        assert_eq!(l.closest_point_to(vec3(3.0, 4.0, 0.0)), vec3(3.0, 0.0, 0.0));
        assert_eq!(l.distance_to(vec3(3.0, 4.0, 0.0)), 4.0);

        let other = Line3d::from_points(vec3(5.0, 1.0, 3.0), vec3(5.0, 1.0, 4.0));
        assert_approx_eq!(l.closest_point_to_line(&other), vec3(5.0, 0.0, 0.0)).abs(1e-12);
        assert_approx_eq!(l.distance_to_line(&other), 1.0).abs(1e-12);

        let (p0, p1) = closest_points(&l, &other).unwrap();
        assert_approx_eq!(p0, vec3(5.0, 0.0, 0.0)).abs(1e-12);
        assert_approx_eq!(p1, vec3(5.0, 1.0, 0.0)).abs(1e-12);

        let parallel = Line3d::from_points(vec3(0.0, 3.0, 0.0), vec3(1.0, 3.0, 0.0));
        assert_eq!(closest_points(&l, &parallel), None);
        assert_eq!(l.closest_point_to_line(&parallel), l.pos);
        assert_eq!(l.distance_to_line(&parallel), 3.0);
    }

    #[test]
    fn triangle_intersection() {
        let (v0, v1, v2) = (Vec3::ZERO, vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0));
        let down = Line3d::from_points(vec3(0.25, 0.25, 1.0), vec3(0.25, 0.25, 0.0));
        let hit = intersect_with_triangle(&down, v0, v1, v2).unwrap();
        assert_approx_eq!(hit.point, vec3(0.25, 0.25, 0.0)).abs(1e-12);
        assert_approx_eq!(hit.barycentric, vec3(0.5, 0.25, 0.25)).abs(1e-12);
        assert!(!hit.front);

        let up = Line3d::from_points(vec3(0.25, 0.25, -1.0), vec3(0.25, 0.25, 0.0));
        assert!(intersect_with_triangle(&up, v0, v1, v2).unwrap().front);

        let miss = Line3d::from_points(vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, 0.0));
        assert_eq!(intersect_with_triangle(&miss, v0, v1, v2), None);

        let parallel = Line3d::from_points(vec3(0.0, 0.0, 1.0), vec3(1.0, 0.0, 1.0));
        assert_eq!(intersect_with_triangle(&parallel, v0, v1, v2), None);
        assert_eq!(intersect_with_triangle(&down, v0, v1, v1), None);
    }

    #[test]
    fn vertices_and_rotation() {
        let l = Line3d::from_points(Vec3::ZERO, vec3(0.0, 0.0, 1.0));
        let v = closest_vertex(vec3(3.0, 0.0, 0.0), vec3(0.0, 1.0, 9.0), vec3(2.0, 0.0, 0.0), &l);
        assert_eq!(v, vec3(0.0, 1.0, 9.0));

        let p = rotate_point(vec3(1.0, 0.0, 5.0), &l, FRAC_PI_2);
        assert_approx_eq!(p, vec3(0.0, -1.0, 5.0)).abs(1e-12);
    }

    #[test]
    fn transform() {
        let l = Line3d::from_points(Vec3::ZERO, vec3(1.0, 0.0, 0.0));
        let mut m = Mat4d::identity();
        m.translate(vec3(0.0, 2.0, 0.0)).scale(vec3(3.0, 3.0, 3.0));
        let t = l * m;
        assert_approx_eq!(t.pos, vec3(0.0, 2.0, 0.0));
        assert_approx_eq!(t.dir, vec3(1.0, 0.0, 0.0));
    }
}
