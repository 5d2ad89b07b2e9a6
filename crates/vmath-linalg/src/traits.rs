//! Numeric traits implemented by the element types of vectors, matrices and arrays.

use std::{fmt, ops, str::FromStr};

use crate::approx::{ApproxEq, DefaultTolerances};

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// Floats use [`f32::min`]/[`f32::max`] (so a `NaN` operand loses), integers use [`Ord`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for signed numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Base element type of every value type and array in this library.
///
/// Implemented for `u8`, `i16`, `u16`, `i32`, `u32`, `i64`, `f32` and `f64`. The fallible
/// operations return [`None`] where the integer operation is undefined (division by zero,
/// overflowing exponentiation); floats follow IEEE semantics and always succeed.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Zero
    + One
    + MinMax
    + ApproxEq<Tolerance = Self>
    + DefaultTolerances
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + bytemuck::Pod
    + 'static
{
    /// Machine epsilon of the type (zero for integers).
    const EPSILON: Self;
    /// Largest representable value.
    const MAX: Self;
    /// Smallest (most negative) representable value.
    const LOWEST: Self;
    /// Smallest positive value (the smallest normal float, or `1` for integers).
    const SMALLEST: Self;
    /// Whether this is an integer type.
    const INTEGRAL: bool;
    /// Element format character, as used by buffer interchange (`struct` module syntax).
    const FORMAT: &'static str;

    /// Absolute value. The identity for unsigned types; wraps for the minimum signed integer.
    fn abs(self) -> Self;

    /// Division that fails for an integer division by zero.
    fn try_div(self, rhs: Self) -> Option<Self>;

    /// Remainder that fails for an integer division by zero.
    fn try_rem(self, rhs: Self) -> Option<Self>;

    /// Exponentiation that fails for negative or overflowing integer exponents.
    fn try_pow(self, rhs: Self) -> Option<Self>;

    fn to_f64(self) -> f64;

    /// Converts from `f64` with `as` semantics (truncating toward zero, saturating).
    fn from_f64(value: f64) -> Self;
}

/// Floating point element types.
pub trait Float:
    Scalar + Number + Sqrt + Trig + ops::Rem<Output = Self> + ops::Neg<Output = Self>
{
    const PI: Self;
    /// Smallest positive normal value.
    const MIN_POSITIVE: Self;
    const INFINITY: Self;

    fn floor(self) -> Self;
    fn powf(self, exp: Self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;

    #[inline]
    fn two() -> Self {
        Self::ONE + Self::ONE
    }

    #[inline]
    fn half() -> Self {
        Self::ONE / Self::two()
    }

    /// Converts a literal constant. Only used with values exactly representable in `f32`.
    #[inline]
    fn lit(value: f64) -> Self {
        Self::from_f64(value)
    }
}

/// Numeric conversion between element types, with `as` semantics.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! cast_impls {
    ($($from:ty),+) => {
        $( cast_impls!(@to $from; u8, i16, u16, i32, u32, i64, f32, f64); )+
    };
    (@to $from:ty; $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
cast_impls!(u8, i16, u16, i32, u32, i64, f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! zero_one {
    ($zero:literal, $one:literal; $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1; u8, u16, u32, u64, i8, i16, i32, i64);
zero_one!(0.0, 1.0; f32, f64);

macro_rules! int_scalar {
    ($($t:ty => $fmt:literal, $abs:expr, $pow:expr;)+) => {
        $(
            impl Scalar for $t {
                const EPSILON: Self = 0;
                const MAX: Self = <$t>::MAX;
                const LOWEST: Self = <$t>::MIN;
                const SMALLEST: Self = 1;
                const INTEGRAL: bool = true;
                const FORMAT: &'static str = $fmt;

                #[inline]
                fn abs(self) -> Self {
                    let abs: fn($t) -> $t = $abs;
                    abs(self)
                }

                #[inline]
                fn try_div(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }

                #[inline]
                fn try_rem(self, rhs: Self) -> Option<Self> {
                    self.checked_rem(rhs)
                }

                #[inline]
                fn try_pow(self, rhs: Self) -> Option<Self> {
                    let pow: fn($t, $t) -> Option<$t> = $pow;
                    pow(self, rhs)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }
        )+
    };
}

int_scalar! {
    u8 => "B", |v| v, |b, e| b.checked_pow(u32::from(e));
    u16 => "H", |v| v, |b, e| b.checked_pow(u32::from(e));
    u32 => "I", |v| v, |b, e| b.checked_pow(e);
    i16 => "h", |v| v.wrapping_abs(), |b, e| u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
    i32 => "i", |v| v.wrapping_abs(), |b, e| u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
    i64 => "q", |v| v.wrapping_abs(), |b, e| u32::try_from(e).ok().and_then(|e| b.checked_pow(e));
}

macro_rules! float_scalar {
    ($($t:ident => $fmt:literal;)+) => {
        $(
            impl Scalar for $t {
                const EPSILON: Self = $t::EPSILON;
                const MAX: Self = $t::MAX;
                const LOWEST: Self = $t::MIN;
                const SMALLEST: Self = $t::MIN_POSITIVE;
                const INTEGRAL: bool = false;
                const FORMAT: &'static str = $fmt;

                #[inline]
                fn abs(self) -> Self {
                    $t::abs(self)
                }

                #[inline]
                fn try_div(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }

                #[inline]
                fn try_rem(self, rhs: Self) -> Option<Self> {
                    Some(self % rhs)
                }

                #[inline]
                fn try_pow(self, rhs: Self) -> Option<Self> {
                    Some(self.powf(rhs))
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $t
                }
            }

            impl Float for $t {
                const PI: Self = std::$t::consts::PI;
                const MIN_POSITIVE: Self = $t::MIN_POSITIVE;
                const INFINITY: Self = $t::INFINITY;

                #[inline]
                fn floor(self) -> Self {
                    $t::floor(self)
                }

                #[inline]
                fn powf(self, exp: Self) -> Self {
                    $t::powf(self, exp)
                }

                #[inline]
                fn is_finite(self) -> bool {
                    $t::is_finite(self)
                }

                #[inline]
                fn is_nan(self) -> bool {
                    $t::is_nan(self)
                }
            }

            impl MinMax for $t {
                fn min(self, other: Self) -> Self {
                    $t::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $t::max(self, other)
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    $t::sqrt(self)
                }
            }

            impl Trig for $t {
                fn sin(self) -> Self {
                    $t::sin(self)
                }

                fn cos(self) -> Self {
                    $t::cos(self)
                }

                fn tan(self) -> Self {
                    $t::tan(self)
                }

                fn asin(self) -> Self {
                    $t::asin(self)
                }

                fn acos(self) -> Self {
                    $t::acos(self)
                }

                fn atan(self) -> Self {
                    $t::atan(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $t::atan2(self, other)
                }
            }
        )+
    };
}

float_scalar! {
    f32 => "f";
    f64 => "d";
}
