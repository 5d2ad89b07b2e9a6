//! Epsilon equality.
//!
//! Two flavours are provided for every value type:
//!
//! - *absolute*: `|a - b| <= e`, checked per component. This comparison is symmetric.
//! - *relative*: `|a - b| <= e * |a|`, checked per component. The tolerance scales with the
//!   left-hand operand, so swapping the operands can change the outcome.
//!
//! A third, [ULP]-based comparison is available for floats and mostly useful in tests.
//!
//! [ULP]: https://en.wikipedia.org/wiki/Unit_in_the_last_place

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for approximate equality.
///
/// Compound types compare equal if every component does.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar type of the tolerance, matching the base element type.
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether `|self - other| <= abs_tolerance` holds for every component.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether `|self - other| <= rel_tolerance * |self|` holds for every component.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other`, for every component.
    ///
    /// `NaN` never compares equal. Values of opposing sign only compare equal if both are zero.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq].
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// `|a - b| <= e`.
///
/// ```
/// # use vmath_linalg::approx::equal_with_abs_error;
/// assert!(equal_with_abs_error(1.0, 1.05, 0.1));
/// assert!(equal_with_abs_error(1.05, 1.0, 0.1));
/// assert!(!equal_with_abs_error(1.0, 1.2, 0.1));
/// ```
pub fn equal_with_abs_error<T: ApproxEq>(a: T, b: T, e: T::Tolerance) -> bool {
    a.abs_diff_eq(&b, e)
}

/// `|a - b| <= e * |a|`.
///
/// ```
/// # use vmath_linalg::approx::equal_with_rel_error;
/// assert!(equal_with_rel_error(100.0, 101.0, 0.01));
/// assert!(!equal_with_rel_error(0.0, 0.001, 0.5));
/// ```
pub fn equal_with_rel_error<T: ApproxEq>(a: T, b: T, e: T::Tolerance) -> bool {
    a.rel_diff_eq(&b, e)
}

/// Drop guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the guard is dropped. Calling [`Asserter::abs`], [`Asserter::rel`] or
/// [`Asserter::ulps`] selects the comparison; if several are selected, the values are equal if any
/// of them says so. Without any selection, the default absolute *or* relative tolerance of the
/// element type is used.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference against `abs`.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the difference against `rel` times the magnitude of the left operand.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Counts the representable values between the operands.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let abs = self
            .abs
            .take()
            .map_or(false, |abs| self.left.abs_diff_eq(self.right, abs));
        let rel = self
            .rel
            .take()
            .map_or(false, |rel| self.left.rel_diff_eq(self.right, rel));
        let ulps = self
            .ulps
            .take()
            .map_or(false, |ulps| self.left.ulps_diff_eq(self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, which is why the caller location is
    // captured in `new` and printed explicitly.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let holds = match self.kind {
            AssertionKind::Eq => equal,
            AssertionKind::Ne => !equal,
        };
        if !holds {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two values are approximately equal (see [`ApproxEq`]).
///
/// Returns an [`Asserter`] that selects the comparison and tolerance.
///
/// ```
/// # use vmath_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + 1e-7)).abs(1e-6);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two values are *not* approximately equal (see [`ApproxEq`]).
///
/// ```
/// # use vmath_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(1.0, 1.0 + 2.0 * f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}
