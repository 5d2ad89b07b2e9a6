//! Utilities for numerics.
//!
//! Scalar helpers that complement the vector and matrix operations, plus the integer division
//! flavours and float stepping functions that are applied elementwise by the array types.

use crate::traits::{Float, Scalar};

/// Machine epsilon of `T` (zero for integers).
pub fn base_type_epsilon<T: Scalar>() -> T {
    T::EPSILON
}

/// Largest value representable by `T`.
pub fn base_type_max<T: Scalar>() -> T {
    T::MAX
}

/// Smallest (most negative) value representable by `T`.
pub fn base_type_lowest<T: Scalar>() -> T {
    T::LOWEST
}

/// Smallest positive value of `T`: the smallest normal float, or 1 for integers.
pub fn base_type_smallest<T: Scalar>() -> T {
    T::SMALLEST
}

/// Linear interpolation, returning `a` at `t == 0` and `b` at `t == 1`.
pub fn lerp<T: Scalar>(a: T, b: T, t: T) -> T {
    a * (T::ONE - t) + b * t
}

/// Linear interpolation that never computes a negative intermediate, for unsigned types.
pub fn ulerp<T: Scalar>(a: T, b: T, t: T) -> T {
    if a > b {
        a - (a - b) * t
    } else {
        a + (b - a) * t
    }
}

/// Returns `t` such that `lerp(a, b, t) == m`, or zero if that would overflow.
pub fn lerpfactor<T: Float>(m: T, a: T, b: T) -> T {
    let d = b - a;
    let n = m - a;
    if d.abs() > T::ONE || n.abs() < T::MAX * d.abs() {
        n / d
    } else {
        T::ZERO
    }
}

pub fn clamp<T: Scalar>(a: T, low: T, high: T) -> T {
    if a < low {
        low
    } else if a > high {
        high
    } else {
        a
    }
}

/// Returns `1`, `-1` or `0` according to the sign of `a`.
pub fn sign<T: Scalar>(a: T) -> i32 {
    if a > T::ZERO {
        1
    } else if a < T::ZERO {
        -1
    } else {
        0
    }
}

/// Three-way comparison: `1` if `a > b`, `-1` if `a < b`, `0` otherwise.
pub fn cmp<T: Scalar>(a: T, b: T) -> i32 {
    i32::from(a > b) - i32::from(a < b)
}

/// Like [`cmp`], but values within `t` of each other compare equal.
pub fn cmpt<T: Scalar>(a: T, b: T, t: T) -> i32 {
    if a.abs_diff_eq(&b, t) {
        0
    } else {
        cmp(a, b)
    }
}

/// Whether `a` lies strictly within `t` of zero.
pub fn iszero<T: Float>(a: T, t: T) -> bool {
    a > -t && a < t
}

/// Rounds toward zero. Out-of-range values saturate.
pub fn trunc<T: Float>(x: T) -> i32 {
    x.to_f64() as i32
}

/// Rounds toward negative infinity. Out-of-range values saturate.
pub fn floor<T: Float>(x: T) -> i32 {
    x.floor().to_f64() as i32
}

/// Rounds toward positive infinity. Out-of-range values saturate.
pub fn ceil<T: Float>(x: T) -> i32 {
    -floor(-x)
}

/// Integer division rounding toward zero, as in C. [`None`] if `y` is zero or the quotient
/// overflows.
pub fn divs(x: i32, y: i32) -> Option<i32> {
    x.checked_div(y)
}

/// Remainder of [`divs`]; takes the sign of `x`.
pub fn mods(x: i32, y: i32) -> Option<i32> {
    x.checked_rem(y)
}

/// Integer division whose remainder ([`modp`]) is never negative.
pub fn divp(x: i32, y: i32) -> Option<i32> {
    x.checked_div_euclid(y)
}

/// Remainder of [`divp`], in `0..|y|`.
pub fn modp(x: i32, y: i32) -> Option<i32> {
    x.checked_rem_euclid(y)
}

/// The smallest `f32` greater than `f`. Infinities and `NaN` are returned unchanged.
pub fn succf(f: f32) -> f32 {
    if !f.is_finite() {
        return f;
    }
    let bits = f.to_bits();
    let next = if bits == 0 || bits == 0x8000_0000 {
        1
    } else if f > 0.0 {
        bits + 1
    } else {
        bits - 1
    };
    f32::from_bits(next)
}

/// The largest `f32` less than `f`. Infinities and `NaN` are returned unchanged.
pub fn predf(f: f32) -> f32 {
    if !f.is_finite() {
        return f;
    }
    let bits = f.to_bits();
    let next = if bits == 0 || bits == 0x8000_0000 {
        0x8000_0001
    } else if f > 0.0 {
        bits - 1
    } else {
        bits + 1
    };
    f32::from_bits(next)
}

/// The smallest `f64` greater than `d`. Infinities and `NaN` are returned unchanged.
pub fn succd(d: f64) -> f64 {
    if !d.is_finite() {
        return d;
    }
    let bits = d.to_bits();
    let next = if bits == 0 || bits == 0x8000_0000_0000_0000 {
        1
    } else if d > 0.0 {
        bits + 1
    } else {
        bits - 1
    };
    f64::from_bits(next)
}

/// The largest `f64` less than `d`. Infinities and `NaN` are returned unchanged.
pub fn predd(d: f64) -> f64 {
    if !d.is_finite() {
        return d;
    }
    let bits = d.to_bits();
    let next = if bits == 0 || bits == 0x8000_0000_0000_0000 {
        0x8000_0000_0000_0001
    } else if d > 0.0 {
        bits - 1
    } else {
        bits + 1
    };
    f64::from_bits(next)
}

pub fn finitef(f: f32) -> bool {
    f.is_finite()
}

pub fn finited(d: f64) -> bool {
    d.is_finite()
}
