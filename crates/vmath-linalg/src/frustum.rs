//! Viewing frustums and visibility tests against them.
//!
//! A frustum is described in camera space: the camera sits at the origin and looks down the
//! negative z axis. `near` and `far` are positive distances along the view direction, `left`,
//! `right`, `top` and `bottom` are the extents of the view window on the near plane.

use std::fmt;

use crate::{
    bounds::Box3,
    error::Error,
    line::Line3,
    plane::Plane3,
    traits::Float,
    vec2, vec3, Matrix, Vec2, Vec3,
};

pub type Frustumf = Frustum<f32>;
pub type Frustumd = Frustum<f64>;

/// Divides `num` by `denom`, failing where the quotient would overflow.
fn checked_div<T: Float>(num: T, denom: T, what: &'static str) -> Result<T, Error> {
    let abs_denom = denom.abs();
    if abs_denom < T::ONE && num.abs() > T::MAX * abs_denom {
        return Err(Error::Degenerate(what));
    }
    Ok(num / denom)
}

#[derive(Clone, Copy, PartialEq)]
pub struct Frustum<T> {
    near: T,
    far: T,
    left: T,
    right: T,
    top: T,
    bottom: T,
    orthographic: bool,
}

/// A perspective frustum from 0.1 to 1000 units with a 90° field of view.
impl<T: Float> Default for Frustum<T> {
    fn default() -> Self {
        Self::new(T::lit(0.1), T::lit(1000.0), -T::ONE, T::ONE, T::ONE, -T::ONE, false)
    }
}

impl<T: Float> Frustum<T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(near: T, far: T, left: T, right: T, top: T, bottom: T, orthographic: bool) -> Self {
        Self {
            near,
            far,
            left,
            right,
            top,
            bottom,
            orthographic,
        }
    }

    /// Creates a symmetric perspective frustum from a horizontal *or* a vertical field of view.
    ///
    /// See [`Frustum::set_from_fov`].
    pub fn from_fov(near: T, far: T, fovx: T, fovy: T, aspect: T) -> Result<Self, Error> {
        let mut f = Self::default();
        f.set_from_fov(near, far, fovx, fovy, aspect)?;
        Ok(f)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn set(
        &mut self,
        near: T,
        far: T,
        left: T,
        right: T,
        top: T,
        bottom: T,
        orthographic: bool,
    ) -> &mut Self {
        *self = Self::new(near, far, left, right, top, bottom, orthographic);
        self
    }

    /// Sets a symmetric perspective frustum.
    ///
    /// Exactly one of `fovx` and `fovy` (in radians) must be nonzero; the other extent follows
    /// from `aspect` (width / height).
    pub fn set_from_fov(
        &mut self,
        near: T,
        far: T,
        fovx: T,
        fovy: T,
        aspect: T,
    ) -> Result<&mut Self, Error> {
        if fovx != T::ZERO && fovy != T::ZERO {
            return Err(Error::Degenerate("fovx and fovy cannot both be nonzero"));
        }

        let two = T::two();
        if fovx != T::ZERO {
            self.right = near * (fovx / two).tan();
            self.left = -self.right;
            self.top = (self.right - self.left) / aspect / two;
            self.bottom = -self.top;
        } else {
            self.top = near * (fovy / two).tan();
            self.bottom = -self.top;
            self.right = (self.top - self.bottom) * aspect / two;
            self.left = -self.right;
        }
        self.near = near;
        self.far = far;
        self.orthographic = false;
        Ok(self)
    }

    /// Moves the near and far planes.
    ///
    /// A perspective frustum keeps its field of view, so the window extents scale with the
    /// near distance.
    pub fn modify_near_and_far(&mut self, near: T, far: T) -> &mut Self {
        if !self.orthographic {
            let near_plane = Plane3::new(vec3(T::ZERO, T::ZERO, -T::ONE), near);
            let lower_left =
                Line3::from_points(Vec3::ZERO, vec3(self.left, self.bottom, -self.near));
            let upper_right =
                Line3::from_points(Vec3::ZERO, vec3(self.right, self.top, -self.near));
            if let (Some(ll), Some(ur)) = (
                near_plane.intersect(&lower_left),
                near_plane.intersect(&upper_right),
            ) {
                self.left = ll.x;
                self.right = ur.x;
                self.top = ur.y;
                self.bottom = ll.y;
            }
        }
        self.near = near;
        self.far = far;
        self
    }

    pub fn set_orthographic(&mut self, orthographic: bool) -> &mut Self {
        self.orthographic = orthographic;
        self
    }

    pub fn near(&self) -> T {
        self.near
    }

    pub fn far(&self) -> T {
        self.far
    }

    pub fn left(&self) -> T {
        self.left
    }

    pub fn right(&self) -> T {
        self.right
    }

    pub fn top(&self) -> T {
        self.top
    }

    pub fn bottom(&self) -> T {
        self.bottom
    }

    pub fn orthographic(&self) -> bool {
        self.orthographic
    }

    /// Horizontal field of view in radians.
    pub fn fovx(&self) -> T {
        self.right.atan2(self.near) - self.left.atan2(self.near)
    }

    /// Vertical field of view in radians.
    pub fn fovy(&self) -> T {
        self.top.atan2(self.near) - self.bottom.atan2(self.near)
    }

    /// Width over height of the view window. A zero-height window yields an infinite or `NaN`
    /// ratio; [`Frustum::try_aspect`] reports it instead.
    pub fn aspect(&self) -> T {
        (self.right - self.left) / (self.top - self.bottom)
    }

    pub fn try_aspect(&self) -> Result<T, Error> {
        checked_div(
            self.right - self.left,
            self.top - self.bottom,
            "aspect ratio of zero-height frustum",
        )
    }

    /// Whether the frustum has zero extent along some axis.
    pub fn degenerate(&self) -> bool {
        self.near == self.far || self.left == self.right || self.top == self.bottom
    }

    /// Projection matrix mapping camera space to normalized device coordinates (in the
    /// row-vector convention).
    ///
    /// Returns the identity matrix for a degenerate frustum.
    pub fn projection_matrix(&self) -> Matrix<T, 4, 4> {
        self.try_projection_matrix().unwrap_or_else(|err| {
            log::debug!("{}, using identity", err);
            Matrix::identity()
        })
    }

    pub fn try_projection_matrix(&self) -> Result<Matrix<T, 4, 4>, Error> {
        const MSG: &str = "projection matrix of degenerate frustum";
        let two = T::two();
        let (rpl, rml) = (self.right + self.left, self.right - self.left);
        let (tpb, tmb) = (self.top + self.bottom, self.top - self.bottom);
        let (fpn, fmn) = (self.far + self.near, self.far - self.near);
        let (o, l) = (T::ZERO, T::ONE);

        if self.orthographic {
            let tx = checked_div(-rpl, rml, MSG)?;
            let ty = checked_div(-tpb, tmb, MSG)?;
            let tz = checked_div(-fpn, fmn, MSG)?;
            let a = checked_div(two, rml, MSG)?;
            let b = checked_div(two, tmb, MSG)?;
            let c = checked_div(-two, fmn, MSG)?;
            #[rustfmt::skip]
            let m = Matrix::from_rows([
                [a,  o,  o,  o],
                [o,  b,  o,  o],
                [o,  o,  c,  o],
                [tx, ty, tz, l],
            ]);
            Ok(m)
        } else {
            let a = checked_div(rpl, rml, MSG)?;
            let b = checked_div(tpb, tmb, MSG)?;
            let c = checked_div(-fpn, fmn, MSG)?;
            let d = checked_div(-two * self.far * self.near, fmn, MSG)?;
            let e = checked_div(two * self.near, rml, MSG)?;
            let f = checked_div(two * self.near, tmb, MSG)?;
            #[rustfmt::skip]
            let m = Matrix::from_rows([
                [e, o, o,  o],
                [o, f, o,  o],
                [a, b, c, -l],
                [o, o, d,  o],
            ]);
            Ok(m)
        }
    }

    /// Returns the sub-frustum whose view window is the given rectangle in screen space.
    pub fn window(&self, left: T, right: T, top: T, bottom: T) -> Self {
        let bl = self.screen_to_local(vec2(left, bottom));
        let tr = self.screen_to_local(vec2(right, top));
        Self::new(self.near, self.far, bl.x, tr.x, tr.y, bl.y, self.orthographic)
    }

    /// Converts from screen space (`-1..1` across the window) to a point on the near plane.
    pub fn screen_to_local(&self, s: Vec2<T>) -> Vec2<T> {
        let two = T::two();
        vec2(
            self.left + (self.right - self.left) * (T::ONE + s.x) / two,
            self.bottom + (self.top - self.bottom) * (T::ONE + s.y) / two,
        )
    }

    pub fn local_to_screen(&self, p: Vec2<T>) -> Vec2<T> {
        let (x, y) = self.local_to_screen_parts(p);
        vec2(x.0 / x.1, y.0 / y.1)
    }

    pub fn try_local_to_screen(&self, p: Vec2<T>) -> Result<Vec2<T>, Error> {
        const MSG: &str = "screen coordinates in degenerate frustum";
        let (x, y) = self.local_to_screen_parts(p);
        Ok(vec2(checked_div(x.0, x.1, MSG)?, checked_div(y.0, y.1, MSG)?))
    }

    fn local_to_screen_parts(&self, p: Vec2<T>) -> ((T, T), (T, T)) {
        let two = T::two();
        (
            (self.left - two * p.x + self.right, self.left - self.right),
            (self.bottom - two * p.y + self.top, self.bottom - self.top),
        )
    }

    /// The ray from the eye through the screen-space point `s`.
    pub fn project_screen_to_ray(&self, s: Vec2<T>) -> Line3<T> {
        let p = self.screen_to_local(s);
        if self.orthographic {
            Line3::from_points(vec3(p.x, p.y, T::ZERO), vec3(p.x, p.y, -T::ONE))
        } else {
            Line3::from_points(Vec3::ZERO, vec3(p.x, p.y, -self.near))
        }
    }

    /// Projects a camera-space point onto the screen.
    pub fn project_point_to_screen(&self, point: Vec3<T>) -> Vec2<T> {
        if self.orthographic || point.z == T::ZERO {
            self.local_to_screen(vec2(point.x, point.y))
        } else {
            let scale = self.near / -point.z;
            self.local_to_screen(vec2(point.x * scale, point.y * scale))
        }
    }

    /// Converts an integer depth buffer value in `zmin..=zmax` to a camera-space z coordinate.
    ///
    /// Values above `zmax + 1` wrap around by the range. If the range is empty the result is
    /// not finite.
    pub fn z_to_depth(&self, zval: i64, zmin: i64, zmax: i64) -> T {
        self.normalized_z_to_depth(self.normalize_z(zval, zmin, zmax))
    }

    pub fn try_z_to_depth(&self, zval: i64, zmin: i64, zmax: i64) -> Result<T, Error> {
        if zmax == zmin {
            return Err(Error::Degenerate("depth conversion with zmin == zmax"));
        }
        self.try_normalized_z_to_depth(self.normalize_z(zval, zmin, zmax))
    }

    fn normalize_z(&self, zval: i64, zmin: i64, zmax: i64) -> T {
        let zdiff = zmax - zmin;
        let zval = if zval > zmax + 1 { zval - zdiff } else { zval };
        T::from_f64((zval - zmin) as f64 / zdiff as f64)
    }

    /// Converts a depth buffer value in `0..=1` to a camera-space z coordinate.
    pub fn normalized_z_to_depth(&self, zval: T) -> T {
        let (num, denom) = self.depth_parts(zval);
        num / denom
    }

    pub fn try_normalized_z_to_depth(&self, zval: T) -> Result<T, Error> {
        let (num, denom) = self.depth_parts(zval);
        checked_div(num, denom, "depth in degenerate frustum")
    }

    fn depth_parts(&self, zval: T) -> (T, T) {
        let two = T::two();
        let zp = zval * two - T::ONE;
        if self.orthographic {
            (-(zp * (self.far - self.near) + (self.far + self.near)), two)
        } else {
            (
                two * self.far * self.near,
                zp * (self.far - self.near) - self.far - self.near,
            )
        }
    }

    /// Converts a camera-space z coordinate to an integer depth buffer value in `zmin..=zmax`.
    ///
    /// Returns `zmin` for a degenerate frustum.
    pub fn depth_to_z(&self, depth: T, zmin: i64, zmax: i64) -> i64 {
        self.try_depth_to_z(depth, zmin, zmax).unwrap_or(zmin)
    }

    pub fn try_depth_to_z(&self, depth: T, zmin: i64, zmax: i64) -> Result<i64, Error> {
        const MSG: &str = "depth in degenerate frustum";
        let two = T::two();
        let zdiff = (zmax - zmin) as f64;
        let far_minus_near = self.far - self.near;

        let zp = if self.orthographic {
            let far_plus_near = two * depth + self.far + self.near;
            checked_div(-far_plus_near, far_minus_near, MSG)?
        } else {
            let far_times_near = two * self.far * self.near;
            let far_plus_near = checked_div(far_times_near, depth, MSG)? + self.far + self.near;
            checked_div(far_plus_near, far_minus_near, MSG)?
        };
        Ok((0.5 * (zp.to_f64() + 1.0) * zdiff) as i64 + zmin)
    }

    /// Size on the near plane of a camera-space `radius` at `p`.
    pub fn screen_radius(&self, p: Vec3<T>, radius: T) -> T {
        radius * (-self.near / p.z)
    }

    pub fn try_screen_radius(&self, p: Vec3<T>, radius: T) -> Result<T, Error> {
        Ok(radius * checked_div(-self.near, p.z, "screen radius at the eye")?)
    }

    /// Camera-space size at `p` of a `radius` on the near plane.
    pub fn world_radius(&self, p: Vec3<T>, radius: T) -> T {
        radius * (p.z / -self.near)
    }

    pub fn try_world_radius(&self, p: Vec3<T>, radius: T) -> Result<T, Error> {
        Ok(radius * checked_div(p.z, -self.near, "world radius with zero near distance")?)
    }

    /// The six bounding planes in camera space, normals pointing outward.
    ///
    /// The order is top, right, bottom, left, near, far.
    pub fn planes(&self) -> [Plane3<T>; 6] {
        let (o, l) = (T::ZERO, T::ONE);
        let [top, right, bottom, left] = if self.orthographic {
            [
                Plane3::new(vec3(o, l, o), self.top),
                Plane3::new(vec3(l, o, o), self.right),
                Plane3::new(vec3(o, -l, o), -self.bottom),
                Plane3::new(vec3(-l, o, o), -self.left),
            ]
        } else {
            let a = vec3(self.left, self.bottom, -self.near);
            let b = vec3(self.left, self.top, -self.near);
            let c = vec3(self.right, self.top, -self.near);
            let d = vec3(self.right, self.bottom, -self.near);
            [
                Plane3::from_points(Vec3::ZERO, c, b),
                Plane3::from_points(Vec3::ZERO, d, c),
                Plane3::from_points(Vec3::ZERO, a, d),
                Plane3::from_points(Vec3::ZERO, b, a),
            ]
        };
        [
            top,
            right,
            bottom,
            left,
            Plane3::new(vec3(o, o, l), -self.near),
            Plane3::new(vec3(o, o, -l), self.far),
        ]
    }

    /// The bounding planes, transformed by `m` (usually the camera-to-world matrix).
    pub fn planes_transformed(&self, m: &Matrix<T, 4, 4>) -> [Plane3<T>; 6] {
        self.planes().map(|p| p * *m)
    }
}

impl<T: fmt::Debug> fmt::Debug for Frustum<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frustum")
            .field(&self.near)
            .field(&self.far)
            .field(&self.left)
            .field(&self.right)
            .field(&self.top)
            .field(&self.bottom)
            .field(&self.orthographic)
            .finish()
    }
}

/// Fast visibility tests of points, spheres and boxes against a frustum placed in the world.
#[derive(Debug, Clone, Copy)]
pub struct FrustumTest<T> {
    planes: [Plane3<T>; 6],
    camera_matrix: Matrix<T, 4, 4>,
}

impl<T: Float> Default for FrustumTest<T> {
    fn default() -> Self {
        Self::new(&Frustum::default(), &Matrix::identity())
    }
}

impl<T: Float> FrustumTest<T> {
    pub fn new(frustum: &Frustum<T>, camera_matrix: &Matrix<T, 4, 4>) -> Self {
        Self {
            planes: frustum.planes_transformed(camera_matrix),
            camera_matrix: *camera_matrix,
        }
    }

    /// Places `frustum` in the world with the camera-to-world transform `camera_matrix`.
    pub fn set_frustum(&mut self, frustum: &Frustum<T>, camera_matrix: &Matrix<T, 4, 4>) {
        *self = Self::new(frustum, camera_matrix);
    }

    pub fn camera_matrix(&self) -> &Matrix<T, 4, 4> {
        &self.camera_matrix
    }

    /// Whether `signed_dist(plane) < 0` holds for every plane.
    fn inside_all(&self, signed_dist: impl Fn(&Plane3<T>) -> T) -> bool {
        self.planes.iter().all(|p| signed_dist(p) < T::ZERO)
    }

    /// Distance from the plane of the corner of a box (given by its half extent) that lies
    /// furthest towards the plane's normal.
    fn box_offset(plane: &Plane3<T>, extent: Vec3<T>) -> T {
        let n = plane.normal;
        n.x.abs() * extent.x + n.y.abs() * extent.y + n.z.abs() * extent.z
    }

    pub fn is_visible(&self, point: Vec3<T>) -> bool {
        self.inside_all(|p| p.distance_to(point))
    }

    /// Whether any part of the sphere may be visible.
    pub fn is_visible_sphere(&self, center: Vec3<T>, radius: T) -> bool {
        self.inside_all(|p| p.distance_to(center) - radius)
    }

    /// Whether any part of the box may be visible. Empty boxes are never visible.
    pub fn is_visible_box(&self, b: &Box3<T>) -> bool {
        if b.is_empty() {
            return false;
        }
        let center = b.center();
        let extent = b.max - center;
        self.inside_all(|p| p.distance_to(center) - Self::box_offset(p, extent))
    }

    pub fn completely_contains_sphere(&self, center: Vec3<T>, radius: T) -> bool {
        self.inside_all(|p| p.distance_to(center) + radius)
    }

    pub fn completely_contains_box(&self, b: &Box3<T>) -> bool {
        if b.is_empty() {
            return false;
        }
        let center = b.center();
        let extent = b.max - center;
        self.inside_all(|p| p.distance_to(center) + Self::box_offset(p, extent))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, error::ErrorKind, Mat4d};

    use super::*;

    #[test]
    fn fields_of_view() {
        let f = Frustumd::default();
        assert_approx_eq!(f.aspect(), 1.0);
        assert!(!f.degenerate());
        assert_eq!(format!("{:?}", f), "Frustum(0.1, 1000.0, -1.0, 1.0, 1.0, -1.0, false)");

        let f = Frustumd::from_fov(1.0, 100.0, FRAC_PI_2, 0.0, 2.0).unwrap();
        assert_approx_eq!(f.right(), 1.0).abs(1e-12);
        assert_approx_eq!(f.top(), 0.5).abs(1e-12);
        assert_approx_eq!(f.fovx(), FRAC_PI_2).abs(1e-12);
        assert_approx_eq!(f.aspect(), 2.0).abs(1e-12);

        let f = Frustumd::from_fov(1.0, 100.0, 0.0, FRAC_PI_2, 2.0).unwrap();
        assert_approx_eq!(f.fovy(), FRAC_PI_2).abs(1e-12);
        assert_approx_eq!(f.right(), 2.0).abs(1e-12);

        let err = Frustumd::from_fov(1.0, 100.0, 1.0, 1.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn degenerate() {
        let f = Frustumd::new(1.0, 10.0, -1.0, 1.0, 0.0, 0.0, false);
        assert!(f.degenerate());
        assert!(f.aspect().is_infinite());
        assert_eq!(f.try_aspect().unwrap_err().kind(), ErrorKind::Domain);
        assert!(f.try_projection_matrix().is_err());
        assert_eq!(f.projection_matrix(), Mat4d::identity());
        assert!(f.try_local_to_screen(vec2(0.0, 1.0)).is_err());
    }

    #[test]
    fn perspective_projection() {
        let f = Frustumd::new(1.0, 10.0, -1.0, 1.0, 1.0, -1.0, false);
        let m = f.try_projection_matrix().unwrap();
        assert_approx_eq!(vec3(0.0, 0.0, -1.0) * m, vec3(0.0, 0.0, -1.0)).abs(1e-12);
        assert_approx_eq!(vec3(10.0, 10.0, -10.0) * m, vec3(1.0, 1.0, 1.0)).abs(1e-12);
        assert_approx_eq!(vec3(-1.0, 0.5, -1.0) * m, vec3(-1.0, 0.5, -1.0)).abs(1e-12);
    }

    #[test]
    fn orthographic_projection() {
        let f = Frustumd::new(1.0, 3.0, -2.0, 2.0, 1.0, -1.0, true);
        let m = f.projection_matrix();
        assert_approx_eq!(vec3(2.0, -1.0, -1.0) * m, vec3(1.0, -1.0, -1.0)).abs(1e-12);
        assert_approx_eq!(vec3(0.0, 0.0, -3.0) * m, vec3(0.0, 0.0, 1.0)).abs(1e-12);
    }

    #[test]
    fn near_and_far() {
        let mut f = Frustumd::new(1.0, 10.0, -1.0, 2.0, 1.0, -1.0, false);
        let fovx = f.fovx();
        f.modify_near_and_far(2.0, 20.0);
        assert_approx_eq!(f.left(), -2.0).abs(1e-12);
        assert_approx_eq!(f.right(), 4.0).abs(1e-12);
        assert_approx_eq!(f.fovx(), fovx).abs(1e-12);
        assert_eq!(f.far(), 20.0);

        f.set_orthographic(true).modify_near_and_far(5.0, 6.0);
        assert_approx_eq!(f.right(), 4.0).abs(1e-12);
        assert_eq!(f.near(), 5.0);
    }

    #[test]
    fn screen_space() {
        let f = Frustumd::new(1.0, 10.0, -2.0, 2.0, 1.0, -1.0, false);
        assert_eq!(f.screen_to_local(vec2(0.0, 0.0)), vec2(0.0, 0.0));
        assert_eq!(f.screen_to_local(vec2(1.0, -1.0)), vec2(2.0, -1.0));
        assert_eq!(f.local_to_screen(vec2(2.0, -1.0)), vec2(1.0, -1.0));

        let w = f.window(0.0, 1.0, 1.0, 0.0);
        assert_eq!((w.left(), w.right(), w.top(), w.bottom()), (0.0, 2.0, 1.0, 0.0));

        let ray = f.project_screen_to_ray(vec2(1.0, 1.0));
        assert_eq!(ray.pos, Vec3::ZERO);
        assert_approx_eq!(ray.dir, vec3(2.0, 1.0, -1.0).normalized());

        assert_approx_eq!(f.project_point_to_screen(vec3(4.0, 2.0, -2.0)), vec2(1.0, 1.0));
        assert_eq!(f.screen_radius(vec3(0.0, 0.0, -4.0), 2.0), 0.5);
        assert_eq!(f.world_radius(vec3(0.0, 0.0, -4.0), 0.5), 2.0);
        assert!(f.try_screen_radius(Vec3::ZERO, 1.0).is_err());
    }

    #[test]
    fn depth_conversion() {
        let f = Frustumd::new(1.0, 10.0, -1.0, 1.0, 1.0, -1.0, false);
        assert_approx_eq!(f.normalized_z_to_depth(0.0), -1.0).abs(1e-12);
        assert_approx_eq!(f.normalized_z_to_depth(1.0), -10.0).abs(1e-12);
        assert_approx_eq!(f.z_to_depth(0, 0, 100), -1.0).abs(1e-12);
        assert_eq!(f.depth_to_z(-1.0, 0, 100), 0);
        assert_eq!(f.depth_to_z(-10.0, 0, 100), 100);
        assert_eq!(f.try_z_to_depth(5, 3, 3).unwrap_err().kind(), ErrorKind::Domain);

        let o = Frustumd::new(1.0, 3.0, -1.0, 1.0, 1.0, -1.0, true);
        assert_approx_eq!(o.normalized_z_to_depth(0.5), -2.0).abs(1e-12);
        assert_eq!(o.depth_to_z(-2.0, 0, 1000), 500);
    }

    #[test]
    fn planes_point_outward() {
        for ortho in [false, true] {
            let f = Frustumd::new(1.0, 10.0, -1.0, 1.0, 1.0, -1.0, ortho);
            let inside = vec3(0.0, 0.0, -5.0);
            for p in f.planes() {
                assert!(p.distance_to(inside) < 0.0, "{:?}", p);
            }
            let planes = f.planes();
            assert!(planes[0].distance_to(vec3(0.0, 100.0, -5.0)) > 0.0);
            assert!(planes[5].distance_to(vec3(0.0, 0.0, -11.0)) > 0.0);
        }
    }

    #[test]
    fn visibility() {
        let f = Frustumd::new(1.0, 10.0, -1.0, 1.0, 1.0, -1.0, false);
        let mut m = Mat4d::identity();
        m.set_translation(vec3(0.0, 0.0, 100.0));
        let test = FrustumTest::new(&f, &m);

        assert!(test.is_visible(vec3(0.0, 0.0, 95.0)));
        assert!(!test.is_visible(vec3(0.0, 0.0, 105.0)));
        assert!(!test.is_visible(vec3(0.0, 0.0, 5.0)));

        assert!(test.is_visible_sphere(vec3(0.0, 0.0, 99.5), 1.0));
        assert!(!test.is_visible_sphere(vec3(0.0, 0.0, 100.5), 1.0));
        assert!(!test.completely_contains_sphere(vec3(0.0, 0.0, 99.5), 1.0));
        assert!(test.completely_contains_sphere(vec3(0.0, 0.0, 95.0), 1.0));

        let b = Box3::new(vec3(-0.5, -0.5, 94.0), vec3(0.5, 0.5, 96.0));
        assert!(test.is_visible_box(&b));
        assert!(test.completely_contains_box(&b));
        let straddling = Box3::new(vec3(-0.5, -0.5, 95.0), vec3(0.5, 0.5, 102.0));
        assert!(test.is_visible_box(&straddling));
        assert!(!test.completely_contains_box(&straddling));
        assert!(!test.is_visible_box(&Box3::new(vec3(5.0, 5.0, 99.5), vec3(6.0, 6.0, 99.6))));
        assert!(!test.is_visible_box(&Box3::empty()));

        let mut moved = FrustumTest::default();
        moved.set_frustum(&f, &Mat4d::identity());
        assert!(moved.is_visible(vec3(0.0, 0.0, -5.0)));
        assert_eq!(*moved.camera_matrix(), Mat4d::identity());
    }
}
