//! Implements [Procrustes analysis] of corresponding point sets.
//!
//! [Procrustes analysis]: https://en.wikipedia.org/wiki/Procrustes_analysis

use itertools::zip_eq;
use nalgebra::{Matrix3, Vector3};
use vmath_linalg::{Float, Mat4, Matrix, Vec3};

use crate::{
    array::FixedArray,
    error::{check_len, ArrayError},
};

/// Computes the rigid transform (and optionally a uniform scale) that best maps `from` onto `to`.
///
/// The returned matrix `m` minimizes `Σ w[i] * |from[i] * m - to[i]|²`, with `w` defaulting to
/// all ones. Rotations are always proper; reflections in the data are not recovered. Without
/// `do_scale` the scale is fixed at 1.
///
/// An empty point set yields the identity. Fails with [`ArrayError::LengthMismatch`] if `to` or
/// `weights` do not have one entry per point of `from`, and with [`ArrayError::Domain`] if the
/// weights sum to zero.
pub fn procrustes_rotation_and_translation<T: Float>(
    from: &[Vec3<T>],
    to: &[Vec3<T>],
    weights: Option<&[T]>,
    do_scale: bool,
) -> Result<Mat4<T>, ArrayError> {
    check_len(from.len(), to.len())?;
    if let Some(weights) = weights {
        check_len(from.len(), weights.len())?;
    }
    if from.is_empty() {
        return Ok(Mat4::identity());
    }

    let from = from.iter().map(|&v| to_nalgebra(v)).collect::<Vec<_>>();
    let to = to.iter().map(|&v| to_nalgebra(v)).collect::<Vec<_>>();
    let weights = match weights {
        Some(w) => w.iter().map(|w| w.to_f64()).collect(),
        None => vec![1.0; from.len()],
    };

    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(ArrayError::Domain("procrustes weights sum to zero"));
    }
    let from_centroid = weighted_centroid(&from, &weights, total);
    let to_centroid = weighted_centroid(&to, &weights, total);

    // Weighted cross-covariance of the centered point sets.
    let mut covariance = Matrix3::zeros();
    let mut from_variance = 0.0;
    for ((f, t), w) in zip_eq(zip_eq(&from, &to), &weights) {
        let f = f - from_centroid;
        let t = t - to_centroid;
        covariance += *w * f * t.transpose();
        from_variance += w * f.norm_squared();
    }

    let svd = covariance.svd(true, true);
    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return Err(ArrayError::Domain("singular value decomposition failed"));
    };
    let v = v_t.transpose();
    let u_t = u.transpose();

    // Flip the axis of the smallest singular value if that is needed to avoid a reflection.
    let d = (v * u_t).determinant().signum();
    let mut diagonal = Vector3::new(1.0, 1.0, 1.0);
    diagonal[svd.singular_values.imin()] = d;
    let rotation = v * Matrix3::from_diagonal(&diagonal) * u_t;

    let scale = if do_scale && from_variance > 0.0 {
        svd.singular_values.dot(&diagonal) / from_variance
    } else {
        1.0
    };
    let translation = to_centroid - scale * rotation * from_centroid;

    log::debug!(
        "procrustes fit of {} points: scale {scale}, translation {:?}",
        from.len(),
        translation.as_slice(),
    );

    // `m` acts on row vectors, so it holds the transposed rotation.
    Ok(Matrix::from_fn(|row, col| {
        let value = match (row, col) {
            (0..=2, 0..=2) => scale * rotation[(col, row)],
            (3, 0..=2) => translation[col],
            (3, 3) => 1.0,
            _ => 0.0,
        };
        T::from_f64(value)
    }))
}

/// Like [`procrustes_rotation_and_translation`], for points stored in arrays.
pub fn procrustes_rotation_and_translation_arrays<T: Float>(
    from: &FixedArray<Vec3<T>>,
    to: &FixedArray<Vec3<T>>,
    weights: Option<&FixedArray<T>>,
    do_scale: bool,
) -> Result<Mat4<T>, ArrayError> {
    let weights = weights.map(FixedArray::to_vec);
    procrustes_rotation_and_translation(
        &from.to_vec(),
        &to.to_vec(),
        weights.as_deref(),
        do_scale,
    )
}

fn to_nalgebra<T: Float>(v: Vec3<T>) -> Vector3<f64> {
    Vector3::new(v.x.to_f64(), v.y.to_f64(), v.z.to_f64())
}

fn weighted_centroid(points: &[Vector3<f64>], weights: &[f64], total: f64) -> Vector3<f64> {
    let mut centroid = Vector3::zeros();
    for (point, w) in zip_eq(points, weights) {
        centroid += *w * point;
    }
    centroid / total
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use vmath_linalg::{vec3, Euler, EulerOrder, InputLayout, Mat4d, Vec3d};

    use crate::array::{DoubleArray, V3dArray};

    use super::*;

    fn reference_transform() -> Mat4d {
        let mut m = Mat4d::identity();
        m.set_translation(vec3(10.0, 5.0, 0.0));
        let r = Euler::from_angles(PI, PI / 4.0, 0.0, EulerOrder::XYZ, InputLayout::Ijk);
        m * r.to_matrix44()
    }

    fn circle(n: usize) -> Vec<Vec3d> {
        (0..n)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / n as f64;
                vec3(theta.cos(), theta.sin(), 0.0)
            })
            .collect()
    }

    fn assert_maps(m: &Mat4d, from: &[Vec3d], to: &[Vec3d]) {
        for (&f, &t) in zip_eq(from, to) {
            let res = f * *m;
            assert!((res - t).length2() < 1e-5, "{:?} maps to {:?}, expected {:?}", f, res, t);
        }
    }

    #[test]
    fn planar_points() {
        let m = reference_transform();
        let from = circle(8);
        let to = from.iter().map(|&f| f * m).collect::<Vec<_>>();
        let result = procrustes_rotation_and_translation(&from, &to, None, false).unwrap();
        assert_maps(&result, &from, &to);
    }

    #[test]
    fn random_points_in_arrays() {
        let m = reference_transform();
        let mut rng = fastrand::Rng::with_seed(145);
        let from = V3dArray::from_vec((0..8).map(|_| vec3(rng.f64(), rng.f64(), rng.f64())).collect());
        let to = from.map(|f| f * m);
        let result = procrustes_rotation_and_translation_arrays(&from, &to, None, false).unwrap();
        assert_maps(&result, &from.to_vec(), &to.to_vec());
    }

    #[test]
    fn zero_weights_ignore_outliers() {
        let m = reference_transform();
        let mut from = circle(8);
        let mut to = from.iter().map(|&f| f * m).collect::<Vec<_>>();
        let mut weights = vec![1.0; 8];
        from.push(Vec3d::ZERO);
        to.push(vec3(10000.0, 10000.0, 100.0));
        weights.push(0.0);

        let result = procrustes_rotation_and_translation(&from, &to, Some(&weights[..]), false).unwrap();
        assert_maps(&result, &from[..8], &to[..8]);

        let weights = DoubleArray::from_vec(weights);
        let result = procrustes_rotation_and_translation_arrays(
            &V3dArray::from_vec(from.clone()),
            &V3dArray::from_vec(to.clone()),
            Some(&weights),
            false,
        )
        .unwrap();
        assert_maps(&result, &from[..8], &to[..8]);
    }

    #[test]
    fn uniform_scale() {
        let mut scaling = Mat4d::identity();
        scaling.set_scale(vec3(2.5, 2.5, 2.5));
        let m = scaling * reference_transform();
        let from = vec![
            vec3(-1.0, 1.0, 0.0),
            vec3(1.0, 1.0, 0.0),
            vec3(1.75, 0.0, 0.0),
            vec3(1.0, -1.5, 0.0),
            vec3(1.0, 1.0, 5.0),
        ];
        let to = from.iter().map(|&f| f * m).collect::<Vec<_>>();

        let result = procrustes_rotation_and_translation(&from, &to, None, true).unwrap();
        assert_maps(&result, &from, &to);

        // Without scaling only the rigid part is fitted.
        let rigid = procrustes_rotation_and_translation(&from, &to, None, false).unwrap();
        let x = vec3(1.0, 0.0, 0.0) * rigid - Vec3d::ZERO * rigid;
        assert!((x.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn edge_cases() {
        let empty: &[Vec3d] = &[];
        assert_eq!(
            procrustes_rotation_and_translation(empty, empty, None, true),
            Ok(Mat4d::identity())
        );

        let from = circle(3);
        assert_eq!(
            procrustes_rotation_and_translation(&from, &from[..2], None, false),
            Err(ArrayError::LengthMismatch { lhs: 3, rhs: 2 })
        );
        assert!(procrustes_rotation_and_translation(&from, &from, Some(&[1.0][..]), false).is_err());
        assert_eq!(
            procrustes_rotation_and_translation(&from, &from, Some(&[0.0; 3][..]), false)
                .unwrap_err()
                .kind(),
            crate::error::ErrorKind::Domain
        );

        let identity = procrustes_rotation_and_translation(&from, &from, None, true).unwrap();
        assert_maps(&identity, &from, &from);
    }
}
