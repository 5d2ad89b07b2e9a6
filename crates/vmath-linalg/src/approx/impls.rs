use super::{ApproxEq, DefaultTolerances};

macro_rules! float_impls {
    ($($t:ty),+) => {
        $(
            impl ApproxEq for $t {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // inf == inf, -inf == -inf, inf != -inf, NaN != anything
                        return self == other;
                    }
                    (self - other).abs() <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    (self - other).abs() <= rel_tolerance * self.abs()
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // -0.0 == +0.0
                    }
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    u64::from(self.to_bits().abs_diff(other.to_bits())) <= u64::from(ulps_tolerance)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! int_impls {
    ($($t:ty),+) => {
        $(
            impl DefaultTolerances for $t {
                const DEFAULT_ABS_TOLERANCE: Self = 0;
                const DEFAULT_REL_TOLERANCE: Self = 0;
                const DEFAULT_ULPS_TOLERANCE: u32 = 0;
            }

            impl ApproxEq for $t {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    i128::from(self.abs_diff(*other) as u64) <= i128::from(abs_tolerance)
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                    let magnitude = i128::from(*self).abs();
                    let limit = i128::from(rel_tolerance).saturating_mul(magnitude);
                    i128::from(self.abs_diff(*other) as u64) <= limit
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    (self.abs_diff(*other) as u64) <= u64::from(ulps_tolerance)
                }
            }
        )+
    };
}
int_impls!(u8, i16, u16, i32, u32, i64);

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(self, other, ulps_tolerance)
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}
