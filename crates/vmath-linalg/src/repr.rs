//! Parsing of the textual representation produced by the `Debug` impls.
//!
//! Every value type implements [`FromStr`] for the exact syntax its `Debug` output uses, so
//! `format!("{:?}", v).parse()` reproduces `v` (up to float formatting, which Rust already
//! round-trips exactly):
//!
//! - vectors: `(1.0, 2.0, 3.0)`
//! - matrices: `[[1.0, 0.0], [0.0, 1.0]]`, one bracketed list per row
//! - everything else: `Name(field, ...)`, with enum-like fields written as identifiers
//!   (`Euler(0.0, 0.5, 1.0, ZYX)`, `Frustum(..., false)`)

use std::str::FromStr;

use crate::{
    bounds::Bounds,
    error::Error,
    euler::{Euler, EulerOrder, InputLayout},
    frustum::Frustum,
    line::Line3,
    plane::Plane3,
    shear::Shear6,
    traits::Float,
    Matrix, Quat, Vector,
};

fn parse_error(what: &str, input: &str) -> Error {
    Error::Parse(format!("{} from `{}`", what, input))
}

/// Strips `name` and the enclosing delimiters from `s`, returning the contents.
fn enclosed<'a>(s: &'a str, name: &str, open: char, close: char) -> Option<&'a str> {
    s.trim()
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix(open)?
        .strip_suffix(close)
}

/// Splits `s` at the commas that are not nested inside parentheses or brackets.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = s[start..].trim();
    if !last.is_empty() || !parts.is_empty() {
        parts.push(last);
    }
    parts
}

/// Parses the contents of `name(...)` into exactly `expected` top-level fields.
fn fields<'a>(s: &'a str, name: &str, expected: usize) -> Result<Vec<&'a str>, Error> {
    let inner = enclosed(s, name, '(', ')').ok_or_else(|| parse_error(name, s))?;
    let parts = split_top_level(inner);
    if parts.len() != expected {
        return Err(Error::DimensionMismatch {
            expected,
            actual: parts.len(),
        });
    }
    Ok(parts)
}

fn scalar<T: FromStr>(s: &str) -> Result<T, Error> {
    s.trim()
        .parse()
        .map_err(|_| parse_error(std::any::type_name::<T>(), s))
}

fn array<T: FromStr, const N: usize>(parts: &[&str]) -> Result<[T; N], Error> {
    let values = parts
        .iter()
        .map(|p| scalar(p))
        .collect::<Result<Vec<T>, _>>()?;
    let actual = values.len();
    values
        .try_into()
        .map_err(|_| Error::DimensionMismatch {
            expected: N,
            actual,
        })
}

impl<T: FromStr, const N: usize> FromStr for Vector<T, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let inner = enclosed(s, "", '(', ')').ok_or_else(|| parse_error("vector", s))?;
        Ok(Vector::from(array(&split_top_level(inner))?))
    }
}

impl<T: FromStr + Copy, const R: usize, const C: usize> FromStr for Matrix<T, R, C> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let inner = enclosed(s, "", '[', ']').ok_or_else(|| parse_error("matrix", s))?;
        let rows = split_top_level(inner);
        if rows.len() != R {
            return Err(Error::DimensionMismatch {
                expected: R,
                actual: rows.len(),
            });
        }
        let rows = rows
            .iter()
            .map(|row| {
                let inner = enclosed(row, "", '[', ']').ok_or_else(|| parse_error("matrix row", row))?;
                array::<T, C>(&split_top_level(inner))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix::from_fn(|r, c| rows[r][c]))
    }
}

impl<T: FromStr> FromStr for Quat<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let [r, i, j, k] = array(&fields(s, "Quat", 4)?)?;
        Ok(Quat::new(r, i, j, k))
    }
}

impl<T: FromStr> FromStr for Shear6<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(Shear6::from_array(array(&fields(s, "Shear6", 6)?)?))
    }
}

impl FromStr for EulerOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        EulerOrder::from_name(s.trim()).ok_or_else(|| parse_error("Euler order", s))
    }
}

impl<T: Float> FromStr for Euler<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = fields(s, "Euler", 4)?;
        let angles: [T; 3] = array(&parts[..3])?;
        let order = parts[3].parse()?;
        Ok(Euler::new(Vector::from(angles), order, InputLayout::Ijk))
    }
}

impl<T: FromStr, const N: usize> FromStr for Bounds<T, N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = fields(s, &format!("Box{}", N), 2)?;
        Ok(Bounds {
            min: parts[0].parse()?,
            max: parts[1].parse()?,
        })
    }
}

impl<T: FromStr> FromStr for Line3<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = fields(s, "Line3", 2)?;
        Ok(Line3 {
            pos: parts[0].parse()?,
            dir: parts[1].parse()?,
        })
    }
}

impl<T: FromStr> FromStr for Plane3<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = fields(s, "Plane3", 2)?;
        Ok(Plane3 {
            normal: parts[0].parse()?,
            distance: scalar(parts[1])?,
        })
    }
}

impl<T: Float> FromStr for Frustum<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = fields(s, "Frustum", 7)?;
        let [near, far, left, right, top, bottom] = array(&parts[..6])?;
        let orthographic = scalar(parts[6])?;
        Ok(Frustum::new(near, far, left, right, top, bottom, orthographic))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use crate::{
        bounds::Box3f, error::ErrorKind, vec2, vec3, Mat2d, Mat3f, Mat4d, Quatd, Vec2i, Vec3f,
        Vec4d,
    };

    use super::*;

    fn round_trip<T: FromStr<Err = Error> + Debug + PartialEq>(value: T) {
        let repr = format!("{:?}", value);
        let parsed: T = repr.parse().unwrap();
        assert_eq!(parsed, value, "{}", repr);
    }

    #[test]
    fn value_types() {
        round_trip(vec2(1, -2));
        round_trip(vec3(0.1f32, -2.5e-8, f32::MAX));
        round_trip(Vec4d::from([1.0 / 3.0, 2.0, -0.0, 1e300]));
        round_trip(Mat3f::from_fn(|r, c| (r * 3 + c) as f32 / 7.0));
        round_trip(Mat4d::identity());
        round_trip(Quatd::new(0.5, -0.25, 1.0, 2.0));
        round_trip(Shear6::new(1, 2, 3, 4, 5, 6));
        round_trip(Euler::<f64>::new(vec3(0.1, 0.2, 0.3), EulerOrder::YZXr, InputLayout::Ijk));
        round_trip(Box3f::new(vec3(-1.0, -2.0, -3.0), vec3(1.0, 2.0, 3.0)));
        round_trip(crate::bounds::Box2i::new(vec2(0, 0), vec2(4, 4)));
        round_trip(Line3::from_points(Vec3f::ZERO, vec3(1.0, 1.0, 0.0)));
        round_trip(Plane3::new(vec3(0.0f64, 3.0, 4.0), -2.5));
        round_trip(Frustum::<f32>::new(0.5, 50.0, -1.0, 1.0, 0.75, -0.75, true));
    }

    #[test]
    fn whitespace() {
        assert_eq!(" ( 1,2 ,3 ) ".parse::<Vector<i32, 3>>(), Ok(vec3(1, 2, 3)));
        assert_eq!(
            "[[1, 2],[3,4]]".parse::<Mat2d>(),
            Ok(Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]))
        );
        assert_eq!("Quat (1, 0, 0, 0)".parse::<Quatd>(), Ok(Quatd::identity()));
    }

    #[test]
    fn errors() {
        let err = "(1, 2, 3)".parse::<Vec2i>().unwrap_err();
        assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
        assert_eq!(err.kind(), ErrorKind::Dimension);

        let err = "[[1, 2], [3, 4], [5, 6]]".parse::<Mat2d>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);
        let err = "[[1, 2], [3]]".parse::<Mat2d>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Dimension);

        for bad in ["1, 2", "(1, x)", "(1, 2"] {
            let err = bad.parse::<Vec2i>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Domain, "{}", bad);
        }
        assert!("Euler(0, 0, 0, XYW)".parse::<Euler<f32>>().is_err());
        assert!("Quat(1, 0, 0)".parse::<Quatd>().is_err());
        assert!("Box2((0, 0), (1, 1))".parse::<Box3f>().is_err());
    }
}
