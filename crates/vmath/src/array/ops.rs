//! Element-wise arithmetic, comparisons and reductions.
//!
//! Binary operations take an [`Operand`]: either a single value that is broadcast to every
//! element, or an array of the same length. Values convert into operands with [`Into`], so
//! `a.try_add(1.0)`, `a.try_add(&b)` and, for vector arrays, `a.try_add([1.0, 2.0, 3.0])` all
//! work.

use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

use vmath_linalg::{Scalar, Vector};

use crate::error::{check_len, ArrayError};

use super::{FixedArray, IntArray};

/// Right-hand side of an element-wise operation.
pub enum Operand<'a, T> {
    /// A single value, applied to every element.
    Value(T),
    /// An array supplying one value per element.
    Array(&'a FixedArray<T>),
}

impl<'a, T> Clone for Operand<'a, T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Operand::Value(v) => Operand::Value(v.clone()),
            Operand::Array(a) => Operand::Array(a),
        }
    }
}

impl<'a, T: Clone + fmt::Debug> fmt::Debug for Operand<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Operand::Array(a) => f.debug_tuple("Array").field(a).finish(),
        }
    }
}

impl<'a, T> From<T> for Operand<'a, T> {
    fn from(value: T) -> Self {
        Operand::Value(value)
    }
}

impl<'a, T> From<&'a FixedArray<T>> for Operand<'a, T> {
    fn from(array: &'a FixedArray<T>) -> Self {
        Operand::Array(array)
    }
}

/// Tuples broadcast to every element of a vector array.
impl<'a, T, const N: usize> From<[T; N]> for Operand<'a, Vector<T, N>> {
    fn from(tuple: [T; N]) -> Self {
        Operand::Value(Vector::from(tuple))
    }
}

/// Operand values resolved against the handle they are applied to.
enum Resolved<T> {
    Value(T),
    /// One value per position of the handle.
    Positional(Vec<T>),
    /// One value per storage position (full-length operands of mask views).
    Raw(Vec<T>),
}

impl<T: Clone> Resolved<T> {
    fn get(&self, pos: usize, raw: usize) -> T {
        match self {
            Resolved::Value(v) => v.clone(),
            Resolved::Positional(values) => values[pos].clone(),
            Resolved::Raw(values) => values[raw].clone(),
        }
    }
}

/// Division that reports integer division by zero instead of panicking.
pub trait CheckedDiv<Rhs = Self>: Sized {
    fn checked_div(self, rhs: Rhs) -> Option<Self>;
}

macro_rules! checked_div_scalars {
    ($($t:ty),+) => {
        $(
            impl CheckedDiv for $t {
                #[inline]
                fn checked_div(self, rhs: Self) -> Option<Self> {
                    Scalar::try_div(self, rhs)
                }
            }
        )+
    };
}

checked_div_scalars!(u8, i16, u16, i32, u32, i64, f32, f64);

impl<T: Scalar, const N: usize> CheckedDiv for Vector<T, N> {
    fn checked_div(self, rhs: Self) -> Option<Self> {
        Vector::checked_div(self, rhs)
    }
}

impl<T: Scalar, const N: usize> CheckedDiv<T> for Vector<T, N> {
    fn checked_div(self, rhs: T) -> Option<Self> {
        Vector::checked_div(self, Vector::splat(rhs))
    }
}

fn div_checked<T: CheckedDiv<U>, U>(a: T, b: U) -> Result<T, ArrayError> {
    a.checked_div(b).ok_or(ArrayError::DivisionByZero)
}

/// Generic element-wise machinery.
impl<T: Clone> FixedArray<T> {
    fn resolve<U: Clone>(&self, rhs: Operand<'_, U>, in_place: bool) -> Result<Resolved<U>, ArrayError> {
        match rhs {
            Operand::Value(v) => Ok(Resolved::Value(v)),
            Operand::Array(array) => {
                let values = array.to_vec();
                let len = self.len();
                if values.len() == len {
                    Ok(Resolved::Positional(values))
                } else if in_place && self.is_masked() && values.len() == self.storage_len() {
                    Ok(Resolved::Raw(values))
                } else {
                    Err(ArrayError::LengthMismatch {
                        lhs: len,
                        rhs: values.len(),
                    })
                }
            }
        }
    }

    /// Applies `f` to every element, returning a new array.
    pub fn map<R>(&self, mut f: impl FnMut(T) -> R) -> FixedArray<R> {
        self.iter().map(&mut f).collect()
    }

    /// Applies `f` to every element, returning a new array or the first error.
    pub fn try_map<R, E>(&self, f: impl FnMut(T) -> Result<R, E>) -> Result<FixedArray<R>, E> {
        self.iter().map(f).collect::<Result<Vec<_>, _>>().map(FixedArray::from_vec)
    }

    /// Combines each element with the corresponding `rhs` value, returning a new array.
    pub fn zip_map<'a, U: Clone + 'a, R>(
        &self,
        rhs: impl Into<Operand<'a, U>>,
        mut f: impl FnMut(T, U) -> R,
    ) -> Result<FixedArray<R>, ArrayError> {
        self.try_zip_map(rhs, |a, b| Ok(f(a, b)))
    }

    /// Like [`FixedArray::zip_map`], but `f` may fail.
    pub fn try_zip_map<'a, U: Clone + 'a, R>(
        &self,
        rhs: impl Into<Operand<'a, U>>,
        mut f: impl FnMut(T, U) -> Result<R, ArrayError>,
    ) -> Result<FixedArray<R>, ArrayError> {
        let rhs = self.resolve(rhs.into(), false)?;
        self.iter()
            .enumerate()
            .map(|(pos, a)| f(a, rhs.get(pos, pos)))
            .collect::<Result<Vec<_>, _>>()
            .map(FixedArray::from_vec)
    }

    /// Replaces every element `a` with `f(a)`.
    pub fn update(&self, mut f: impl FnMut(T) -> T) -> Result<(), ArrayError> {
        self.try_zip_update(Operand::Value(()), |a, ()| Ok(f(a)))
    }

    /// Replaces every element `a` with `f(a, b)`, where `b` is the corresponding `rhs` value.
    ///
    /// Mask views also accept an array operand as long as the unmasked storage; its values are
    /// then taken from the same storage positions. Nothing is written if `f` fails for any
    /// element.
    pub fn try_zip_update<'a, U: Clone + 'a>(
        &self,
        rhs: impl Into<Operand<'a, U>>,
        mut f: impl FnMut(T, U) -> Result<T, ArrayError>,
    ) -> Result<(), ArrayError> {
        self.check_writable()?;
        let rhs = self.resolve(rhs.into(), true)?;
        let updated = self
            .iter()
            .enumerate()
            .map(|(pos, a)| {
                let raw = self.raw_index(pos);
                Ok((raw, f(a, rhs.get(pos, raw))?))
            })
            .collect::<Result<Vec<_>, ArrayError>>()?;
        self.write_raw(updated)
    }

    /// Selects `self[i]` where `choice[i]` is nonzero and `other[i]` elsewhere.
    pub fn ifelse<'a>(&self, choice: &IntArray, other: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError>
    where
        T: 'a,
    {
        check_len(self.len(), choice.len())?;
        let other = self.resolve(other.into(), false)?;
        Ok(self
            .iter()
            .zip(choice.iter())
            .enumerate()
            .map(|(pos, (a, c))| if c != 0 { a } else { other.get(pos, pos) })
            .collect())
    }
}

macro_rules! arithmetic {
    ($($name:ident, $assign_name:ident, $trait:ident, $op:tt, $doc:literal;)+) => {
        $(
            impl<T: Clone + $trait<Output = T>> FixedArray<T> {
                #[doc = concat!("Element-wise ", $doc, ".")]
                pub fn $name<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError>
                where
                    T: 'a,
                {
                    self.zip_map(rhs, |a, b| a $op b)
                }

                #[doc = concat!("In-place element-wise ", $doc, ".")]
                pub fn $assign_name<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError>
                where
                    T: 'a,
                {
                    self.try_zip_update(rhs, |a, b| Ok(a $op b))
                }
            }
        )+
    };
}

arithmetic! {
    try_add, try_add_assign, Add, +, "addition";
    try_sub, try_sub_assign, Sub, -, "subtraction";
}

impl<T: Clone + Mul<Output = T>> FixedArray<T> {
    /// Element-wise multiplication.
    pub fn try_mul<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| a * b)
    }

    /// In-place element-wise multiplication.
    pub fn try_mul_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError>
    where
        T: 'a,
    {
        self.try_zip_update(rhs, |a, b| Ok(a * b))
    }
}

impl<T: Clone + CheckedDiv> FixedArray<T> {
    /// Element-wise division. Integer elements truncate toward zero and fail with
    /// [`ArrayError::DivisionByZero`] for a zero divisor; floats follow IEEE semantics.
    pub fn try_div<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError>
    where
        T: 'a,
    {
        self.try_zip_map(rhs, div_checked)
    }

    /// In-place element-wise division. Nothing is written if any division fails.
    pub fn try_div_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError>
    where
        T: 'a,
    {
        self.try_zip_update(rhs, div_checked)
    }
}

/// Operations only defined for arrays of scalars.
impl<T: Scalar> FixedArray<T> {
    /// Element-wise remainder, with the sign of the dividend.
    pub fn try_rem<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError> {
        self.try_zip_map(rhs, |a, b| a.try_rem(b).ok_or(ArrayError::DivisionByZero))
    }

    pub fn try_rem_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError> {
        self.try_zip_update(rhs, |a, b| a.try_rem(b).ok_or(ArrayError::DivisionByZero))
    }

    /// Element-wise exponentiation. Integer arrays fail for negative or overflowing exponents.
    pub fn try_pow<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<Self, ArrayError> {
        self.try_zip_map(rhs, pow)
    }

    pub fn try_pow_assign<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError> {
        self.try_zip_update(rhs, pow)
    }

    /// Raises the scalar `base` to the power of each element.
    pub fn try_rpow(&self, base: T) -> Result<Self, ArrayError> {
        self.try_map(|e| pow(base, e))
    }

    /// Sum of all elements; zero for an empty array.
    pub fn sum(&self) -> T {
        self.iter().fold(T::ZERO, |acc, e| acc + e)
    }

    /// Smallest element, or [`None`] for an empty array.
    pub fn reduce_min(&self) -> Option<T> {
        self.iter().reduce(|a, b| a.min(b))
    }

    /// Largest element, or [`None`] for an empty array.
    pub fn reduce_max(&self) -> Option<T> {
        self.iter().reduce(|a, b| a.max(b))
    }

    pub fn abs(&self) -> Self {
        self.map(Scalar::abs)
    }

    /// Clamps every element to `low..=high`.
    pub fn clamp(&self, low: T, high: T) -> Self {
        self.map(|e| vmath_linalg::num::clamp(e, low, high))
    }

    /// Linear interpolation between `self` and `other` with per-element factors `t`.
    pub fn lerp<'a, 'b>(
        &self,
        other: impl Into<Operand<'a, T>>,
        t: impl Into<Operand<'b, T>>,
    ) -> Result<Self, ArrayError> {
        let pairs = self.zip_map(other, |a, b| (a, b))?;
        pairs.zip_map(t, |(a, b), t| vmath_linalg::num::lerp(a, b, t))
    }
}

fn pow<T: Scalar>(base: T, exp: T) -> Result<T, ArrayError> {
    base.try_pow(exp)
        .ok_or(ArrayError::Domain("exponent is negative or the result overflows"))
}

/// Element-wise negation.
impl<'a, T: Clone + Neg<Output = T>> Neg for &'a FixedArray<T> {
    type Output = FixedArray<T>;

    fn neg(self) -> FixedArray<T> {
        self.map(T::neg)
    }
}

impl<T: Clone + Neg<Output = T>> FixedArray<T> {
    /// Negates every element in place.
    pub fn negate(&self) -> Result<(), ArrayError> {
        self.update(T::neg)
    }
}

fn flag(b: bool) -> i32 {
    i32::from(b)
}

impl<T: Clone + PartialEq> FixedArray<T> {
    /// Element-wise `==`, yielding `1` or `0` per element.
    pub fn cmp_eq<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a == b))
    }

    /// Element-wise `!=`, yielding `1` or `0` per element.
    pub fn cmp_ne<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a != b))
    }
}

impl<T: Clone + PartialOrd> FixedArray<T> {
    pub fn cmp_lt<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a < b))
    }

    pub fn cmp_le<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a <= b))
    }

    pub fn cmp_gt<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a > b))
    }

    pub fn cmp_ge<'a>(&self, rhs: impl Into<Operand<'a, T>>) -> Result<IntArray, ArrayError>
    where
        T: 'a,
    {
        self.zip_map(rhs, |a, b| flag(a >= b))
    }
}

#[cfg(test)]
mod tests {
    use vmath_linalg::{vec3, Quatf, Vec3f};

    use crate::{
        array::{FloatArray, QuatfArray, ShortArray, UnsignedCharArray, V3fArray},
        error::ErrorKind,
    };

    use super::*;

    fn floats() -> (FloatArray, FloatArray) {
        (
            FloatArray::from([1.0, 2.5, -3.0, 4.0, 0.5]),
            FloatArray::from([2.0, 0.5, 1.5, -8.0, 4.0]),
        )
    }

    #[test]
    fn broadcast_consistency() {
        let (f1, _) = floats();
        let v = 1.25f32;
        for (op, reference) in [
            (f1.try_add(v), (|a, b| a + b) as fn(f32, f32) -> f32),
            (f1.try_sub(v), |a, b| a - b),
            (f1.try_mul(v), |a, b| a * b),
            (f1.try_div(v), |a, b| a / b),
        ] {
            let result = op.unwrap();
            for i in 0..f1.len() {
                assert_eq!(result.at(i), reference(f1.at(i), v));
            }
        }
    }

    #[test]
    fn elementwise_consistency() {
        let (f1, f2) = floats();
        let sum = f1.try_add(&f2).unwrap();
        let quot = f1.try_div(&f2).unwrap();
        let rem = f1.try_rem(&f2).unwrap();
        let pow = f1.abs().try_pow(&f2).unwrap();
        for i in 0..f1.len() {
            assert_eq!(sum.at(i), f1.at(i) + f2.at(i));
            assert_eq!(quot.at(i), f1.at(i) / f2.at(i));
            assert_eq!(rem.at(i), f1.at(i) % f2.at(i));
            assert_eq!(pow.at(i), f1.at(i).abs().powf(f2.at(i)));
        }
        assert_eq!(-&f1, [-1.0, -2.5, 3.0, -4.0, -0.5]);
    }

    #[test]
    fn length_mismatch() {
        let (f1, _) = floats();
        let f3 = FloatArray::new(3);
        let errors = [
            f1.try_add(&f3).unwrap_err(),
            f1.try_sub(&f3).unwrap_err(),
            f1.try_mul(&f3).unwrap_err(),
            f1.try_div(&f3).unwrap_err(),
            f1.try_rem(&f3).unwrap_err(),
            f1.try_pow(&f3).unwrap_err(),
            f1.cmp_lt(&f3).unwrap_err(),
            f1.cmp_eq(&f3).unwrap_err(),
            f1.try_add_assign(&f3).unwrap_err(),
            f1.try_pow_assign(&f3).unwrap_err(),
        ];
        for err in errors {
            assert_eq!(err, ArrayError::LengthMismatch { lhs: 5, rhs: 3 });
            assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        }
    }

    #[test]
    fn integer_division() {
        let a = IntArray::from([7, -7, 9, 1]);
        assert_eq!(a.try_div(2).unwrap(), [3, -3, 4, 0]);
        assert_eq!(a.try_rem(2).unwrap(), [1, -1, 1, 1]);
        let zeros = IntArray::from([1, 1, 0, 1]);
        assert_eq!(a.try_div(&zeros), Err(ArrayError::DivisionByZero));
        assert_eq!(a.try_rem(0).unwrap_err().kind(), ErrorKind::Domain);

        // A failing in-place division leaves the array untouched.
        assert!(a.try_div_assign(&zeros).is_err());
        assert_eq!(a, [7, -7, 9, 1]);

        let s = ShortArray::from([2, 3]);
        assert_eq!(s.try_pow(3).unwrap(), [8, 27]);
        assert!(s.try_pow(-1).is_err());
        assert!(UnsignedCharArray::from([16]).try_pow(2).is_err());
        assert_eq!(IntArray::from([0, 1, 2]).try_rpow(2).unwrap(), [1, 2, 4]);
    }

    #[test]
    fn in_place() {
        let (f1, f2) = floats();
        let f = f1.copy();
        f.try_add_assign(&f2).unwrap();
        f.try_sub_assign(&f2).unwrap();
        assert_eq!(f, f1);
        f.try_mul_assign(2.0).unwrap();
        f.try_div_assign(2.0).unwrap();
        assert_eq!(f, f1);

        // Operands may alias the target.
        f.try_add_assign(&f.clone()).unwrap();
        assert_eq!(f, f1.try_mul(2.0).unwrap());

        f.negate().unwrap();
        assert_eq!(f.get(0), Ok(-2.0));
    }

    #[test]
    fn operand_debug() {
        let a = IntArray::from([1, 2]);
        assert_eq!(format!("{:?}", Operand::<i32>::from(&a)), "Array([1, 2])");
        assert_eq!(format!("{:?}", Operand::<i32>::from(3)), "Value(3)");
    }

    #[test]
    fn masked_in_place() {
        let (f1, f2) = floats();
        let m = IntArray::from([1, 0, 1, 0, 1]);

        // Full-length operand: values come from the same unmasked position.
        let f = f1.copy();
        f.mask(&m).unwrap().try_add_assign(&f2).unwrap();
        for i in 0..f.len() {
            let expected = if m.at(i) != 0 { f1.at(i) + f2.at(i) } else { f1.at(i) };
            assert_eq!(f.at(i), expected);
        }

        // Masked-length operand: values are taken in order.
        let f = f1.copy();
        let f2m = f2.mask(&m).unwrap();
        f.mask(&m).unwrap().try_mul_assign(&f2m).unwrap();
        let fm = f.mask(&m).unwrap();
        let f1m = f1.mask(&m).unwrap();
        for i in 0..fm.len() {
            assert_eq!(fm.at(i), f1m.at(i) * f2m.at(i));
        }
        assert_eq!(f.get(1), f1.get(1));

        // f[m] = f1[m] + f2[m]
        let f3 = FloatArray::new(5);
        let sum = f1.mask(&m).unwrap().try_add(&f2.mask(&m).unwrap()).unwrap();
        f3.set_mask(&m, &sum).unwrap();
        assert_eq!(f3, [3.0, 0.0, -1.5, 0.0, 4.5]);

        let err = f1
            .mask(&m)
            .unwrap()
            .try_add_assign(&FloatArray::new(4))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn comparisons() {
        let a = IntArray::from([1, 2, 3, 4]);
        let b = IntArray::from([4, 2, 1, 4]);
        assert_eq!(a.cmp_lt(&b).unwrap(), [1, 0, 0, 0]);
        assert_eq!(a.cmp_le(&b).unwrap(), [1, 1, 0, 1]);
        assert_eq!(a.cmp_gt(&b).unwrap(), [0, 0, 1, 0]);
        assert_eq!(a.cmp_ge(&b).unwrap(), [0, 1, 1, 1]);
        assert_eq!(a.cmp_eq(&b).unwrap(), [0, 1, 0, 1]);
        assert_eq!(a.cmp_ne(2).unwrap(), [1, 0, 1, 1]);

        // Comparison results work as masks.
        let big = a.mask(&a.cmp_gt(2).unwrap()).unwrap();
        assert_eq!(big, [3, 4]);

        let v = V3fArray::from([Vec3f::ZERO, vec3(1.0, 2.0, 3.0)]);
        assert_eq!(v.cmp_eq([1.0, 2.0, 3.0]).unwrap(), [0, 1]);
    }

    #[test]
    fn reductions() {
        let a = IntArray::from([3, -1, 4, 1, -5]);
        assert_eq!(a.sum(), 2);
        assert_eq!(a.reduce_min(), Some(-5));
        assert_eq!(a.reduce_max(), Some(4));
        assert_eq!(IntArray::new(0).reduce_min(), None);
        assert_eq!(a.abs(), [3, 1, 4, 1, 5]);
        assert_eq!(a.clamp(-1, 1), [1, -1, 1, 1, -1]);

        let choice = IntArray::from([1, 0, 1, 0, 0]);
        assert_eq!(a.ifelse(&choice, 0).unwrap(), [3, 0, 4, 0, 0]);
        assert_eq!(
            a.ifelse(&choice, &-&a).unwrap(),
            [3, 1, 4, -1, 5]
        );

        let f = FloatArray::from([0.0, 10.0]);
        assert_eq!(f.lerp(&FloatArray::from([1.0, 20.0]), 0.5).unwrap(), [0.5, 15.0]);
    }

    #[test]
    fn value_type_elements() {
        let v = V3fArray::from([vec3(1.0, 2.0, 3.0), vec3(-1.0, 0.0, 2.0)]);
        assert_eq!(
            v.try_add([1.0, 1.0, 1.0]).unwrap(),
            [vec3(2.0, 3.0, 4.0), vec3(0.0, 1.0, 3.0)]
        );
        assert_eq!(v.try_mul(&v).unwrap().at(0), vec3(1.0, 4.0, 9.0));
        assert_eq!(v.try_div(vec3(1.0, 2.0, 4.0)).unwrap().at(1), vec3(-1.0, 0.0, 0.5));

        let q = QuatfArray::filled(Quatf::new(1.0, 0.0, 0.0, 1.0), 2);
        let product = q.try_mul(&q).unwrap();
        assert_eq!(product.at(0), Quatf::new(1.0, 0.0, 0.0, 1.0) * Quatf::new(1.0, 0.0, 0.0, 1.0));
    }
}
