//! Two-dimensional arrays.

use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use vmath_linalg::{Color4, Scalar, Vector};

use crate::{
    array::{CheckedDiv, FixedArray, Operand},
    error::{resolve_index, ArrayError},
};

pub type IntArray2D = Array2D<i32>;
pub type FloatArray2D = Array2D<f32>;
pub type DoubleArray2D = Array2D<f64>;
pub type Color4fArray2D = Array2D<Color4<f32>>;

/// A `size.0` by `size.1` grid of elements, indexed by `(x, y)`.
///
/// Elements are stored in a [`FixedArray`] with `y` varying fastest, and share its rules: clones
/// share storage, and a read-only array rejects every write.
pub struct Array2D<T> {
    data: FixedArray<T>,
    size: (usize, usize),
}

impl<T> Clone for Array2D<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            size: self.size,
        }
    }
}

/// Right-hand side of an element-wise operation on an [`Array2D`].
pub enum Operand2D<'a, T> {
    Value(T),
    Array(&'a Array2D<T>),
}

impl<'a, T> From<T> for Operand2D<'a, T> {
    fn from(value: T) -> Self {
        Operand2D::Value(value)
    }
}

impl<'a, T> From<&'a Array2D<T>> for Operand2D<'a, T> {
    fn from(array: &'a Array2D<T>) -> Self {
        Operand2D::Array(array)
    }
}

impl<T> Array2D<T> {
    /// Creates an array from `data` laid out with `y` varying fastest.
    pub fn from_vec(data: Vec<T>, size: (usize, usize)) -> Result<Self, ArrayError> {
        if data.len() != size.0 * size.1 {
            return Err(ArrayError::LengthMismatch {
                lhs: size.0 * size.1,
                rhs: data.len(),
            });
        }
        Ok(Self {
            data: FixedArray::from_vec(data),
            size,
        })
    }

    pub fn size(&self) -> (usize, usize) {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size.0 * self.size.1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the elements as a flat array sharing this array's storage.
    pub fn as_flat(&self) -> &FixedArray<T> {
        &self.data
    }

    pub fn writable(&self) -> bool {
        self.data.writable()
    }

    pub fn make_read_only(&self) {
        self.data.make_read_only();
    }

    fn flat_index(&self, (x, y): (isize, isize)) -> Result<isize, ArrayError> {
        let x = resolve_index(x, self.size.0)?;
        let y = resolve_index(y, self.size.1)?;
        Ok((x * self.size.1 + y) as isize)
    }

    fn with_data<R>(&self, data: FixedArray<R>) -> Array2D<R> {
        Array2D {
            data,
            size: self.size,
        }
    }

    fn check_size<U>(&self, other: &Array2D<U>) -> Result<(), ArrayError> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(ArrayError::SizeMismatch {
                lhs: self.size,
                rhs: other.size,
            })
        }
    }

    fn operand<'a, U>(&self, rhs: Operand2D<'a, U>) -> Result<Operand<'a, U>, ArrayError> {
        match rhs {
            Operand2D::Value(v) => Ok(Operand::Value(v)),
            Operand2D::Array(array) => {
                self.check_size(array)?;
                Ok(Operand::Array(&array.data))
            }
        }
    }
}

impl<T: Clone> Array2D<T> {
    pub fn filled(value: T, size: (usize, usize)) -> Self {
        Self {
            data: FixedArray::filled(value, size.0 * size.1),
            size,
        }
    }

    /// Returns the element at `(x, y)`. Negative coordinates count from the end.
    pub fn get(&self, index: (isize, isize)) -> Result<T, ArrayError> {
        self.data.get(self.flat_index(index)?)
    }

    pub fn set(&self, index: (isize, isize), value: T) -> Result<(), ArrayError> {
        self.data.set(self.flat_index(index)?, value)
    }

    /// Returns an independent, writable copy.
    pub fn copy(&self) -> Self {
        self.with_data(self.data.copy())
    }

    /// Selects `self[x, y]` where `choice[x, y]` is nonzero and `other[x, y]` elsewhere.
    pub fn ifelse<'a>(
        &self,
        choice: &IntArray2D,
        other: impl Into<Operand2D<'a, T>>,
    ) -> Result<Self, ArrayError>
    where
        T: 'a,
    {
        self.check_size(choice)?;
        let other = self.operand(other.into())?;
        Ok(self.with_data(self.data.ifelse(&choice.data, other)?))
    }
}

impl<T: Clone + Default> Array2D<T> {
    pub fn new(size: (usize, usize)) -> Self {
        Self::filled(T::default(), size)
    }
}

macro_rules! arithmetic {
    ($bound:path: $($name:ident, $assign_name:ident;)+) => {
        impl<T: Clone + $bound> Array2D<T> {
            $(
                pub fn $name<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<Self, ArrayError>
                where
                    T: 'a,
                {
                    let rhs = self.operand(rhs.into())?;
                    Ok(self.with_data(self.data.$name(rhs)?))
                }

                pub fn $assign_name<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<(), ArrayError>
                where
                    T: 'a,
                {
                    let rhs = self.operand(rhs.into())?;
                    self.data.$assign_name(rhs)
                }
            )+
        }
    };
}

arithmetic!(Add<Output = T>: try_add, try_add_assign;);
arithmetic!(Sub<Output = T>: try_sub, try_sub_assign;);
arithmetic!(Mul<Output = T>: try_mul, try_mul_assign;);
arithmetic!(CheckedDiv: try_div, try_div_assign;);

impl<T: Clone + PartialOrd> Array2D<T> {
    pub fn cmp_lt<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<IntArray2D, ArrayError>
    where
        T: 'a,
    {
        let rhs = self.operand(rhs.into())?;
        Ok(self.with_data(self.data.cmp_lt(rhs)?))
    }

    pub fn cmp_gt<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<IntArray2D, ArrayError>
    where
        T: 'a,
    {
        let rhs = self.operand(rhs.into())?;
        Ok(self.with_data(self.data.cmp_gt(rhs)?))
    }

    pub fn cmp_eq<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<IntArray2D, ArrayError>
    where
        T: 'a,
    {
        let rhs = self.operand(rhs.into())?;
        Ok(self.with_data(self.data.cmp_eq(rhs)?))
    }
}

impl<T: Scalar> Array2D<T> {
    pub fn sum(&self) -> T {
        self.data.sum()
    }
}

/// Scaling of vector and color grids by scalars.
impl<T: Scalar, const N: usize> Array2D<Vector<T, N>> {
    pub fn mul_base<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<Self, ArrayError> {
        let rhs = self.operand(rhs.into())?;
        Ok(self.with_data(self.data.mul_base(rhs)?))
    }

    pub fn mul_base_assign<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<(), ArrayError> {
        let rhs = self.operand(rhs.into())?;
        self.data.mul_base_assign(rhs)
    }

    pub fn div_base<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<Self, ArrayError> {
        let rhs = self.operand(rhs.into())?;
        Ok(self.with_data(self.data.div_base(rhs)?))
    }

    pub fn div_base_assign<'a>(&self, rhs: impl Into<Operand2D<'a, T>>) -> Result<(), ArrayError> {
        let rhs = self.operand(rhs.into())?;
        self.data.div_base_assign(rhs)
    }
}

impl<T: Clone + PartialEq> PartialEq for Array2D<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.data == other.data
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for Array2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.data.to_vec();
        let mut list = f.debug_list();
        if self.size.1 > 0 {
            for row in rows.chunks(self.size.1) {
                list.entry(&row);
            }
        }
        list.finish()
    }
}
