//! Fixed-length arrays of value types, with masked reference views and slice copies.
//!
//! A [`FixedArray`] is a handle to reference-counted backing storage. Handles come in two
//! flavours:
//!
//! - *direct* handles address every element of their storage in order. [`FixedArray::new`] and
//!   friends, [`FixedArray::copy`] and [`FixedArray::slice`] create direct handles to fresh
//!   storage.
//! - *masked* handles are created by [`FixedArray::mask`]. They keep a list of the storage
//!   positions they select and read and write the parent's elements through it.
//!
//! Cloning a handle (the equivalent of a copy constructor) shares the storage; use
//! [`FixedArray::copy`] for an independent copy.
//!
//! # Writability
//!
//! The writable flag lives in the storage. [`FixedArray::make_read_only`] therefore affects every
//! handle sharing that storage, including clones and mask views created before or after the
//! call, and it cannot be undone. Slices and [`FixedArray::copy`] create new storage and are
//! always writable.
//!
//! # Threading
//!
//! Arrays use [`Rc`] and [`RefCell`] internally and are neither [`Send`] nor [`Sync`]. A handle
//! and its views must be used from the thread that created them.

mod buffer;
mod ops;
mod slice;
mod typed;
mod view;

use std::{
    cell::{Cell, Ref, RefCell},
    fmt,
    rc::Rc,
};

use itertools::Itertools;
use vmath_linalg::{Box2, Box3, Color3, Color4, Euler, Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

use crate::error::{check_len, resolve_index, ArrayError};

pub use buffer::{BufferElement, BufferInfo};
pub use ops::{CheckedDiv, Operand};
pub use slice::Slice;
pub use view::FieldView;

pub type IntArray = FixedArray<i32>;
pub type ShortArray = FixedArray<i16>;
pub type UnsignedCharArray = FixedArray<u8>;
pub type UnsignedIntArray = FixedArray<u32>;
pub type FloatArray = FixedArray<f32>;
pub type DoubleArray = FixedArray<f64>;
pub type StringArray = FixedArray<String>;

pub type V2iArray = FixedArray<Vec2<i32>>;
pub type V2fArray = FixedArray<Vec2<f32>>;
pub type V2dArray = FixedArray<Vec2<f64>>;
pub type V3iArray = FixedArray<Vec3<i32>>;
pub type V3fArray = FixedArray<Vec3<f32>>;
pub type V3dArray = FixedArray<Vec3<f64>>;
pub type V4iArray = FixedArray<Vec4<i32>>;
pub type V4fArray = FixedArray<Vec4<f32>>;
pub type V4dArray = FixedArray<Vec4<f64>>;

pub type M33fArray = FixedArray<Mat3<f32>>;
pub type M33dArray = FixedArray<Mat3<f64>>;
pub type M44fArray = FixedArray<Mat4<f32>>;
pub type M44dArray = FixedArray<Mat4<f64>>;

pub type QuatfArray = FixedArray<Quat<f32>>;
pub type QuatdArray = FixedArray<Quat<f64>>;
pub type EulerfArray = FixedArray<Euler<f32>>;
pub type EulerdArray = FixedArray<Euler<f64>>;

pub type Color3fArray = FixedArray<Color3<f32>>;
pub type Color4fArray = FixedArray<Color4<f32>>;

pub type Box2iArray = FixedArray<Box2<i32>>;
pub type Box2fArray = FixedArray<Box2<f32>>;
pub type Box2dArray = FixedArray<Box2<f64>>;
pub type Box3iArray = FixedArray<Box3<i32>>;
pub type Box3fArray = FixedArray<Box3<f32>>;
pub type Box3dArray = FixedArray<Box3<f64>>;

struct Storage<T> {
    data: RefCell<Vec<T>>,
    writable: Cell<bool>,
}

impl<T> Storage<T> {
    fn new(data: Vec<T>) -> Rc<Self> {
        Rc::new(Self {
            data: RefCell::new(data),
            writable: Cell::new(true),
        })
    }
}

/// A fixed-length array of value-type elements.
///
/// See the [module documentation](self) for the sharing and writability rules.
pub struct FixedArray<T> {
    storage: Rc<Storage<T>>,
    /// Storage positions selected by a mask view, `None` for direct handles.
    indices: Option<Rc<[usize]>>,
}

impl<T> Clone for FixedArray<T> {
    /// Returns a new handle to the same storage.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            indices: self.indices.clone(),
        }
    }
}

impl<T> FixedArray<T> {
    /// Creates an array owning `data`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            storage: Storage::new(data),
            indices: None,
        }
    }

    /// Returns the number of elements addressed by this handle.
    pub fn len(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.storage.data.borrow().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether this handle is a mask view into another array's storage.
    pub fn is_masked(&self) -> bool {
        self.indices.is_some()
    }

    /// Returns the storage positions selected by a mask view, or [`None`] for a direct handle.
    pub fn mask_indices(&self) -> Option<&[usize]> {
        self.indices.as_deref()
    }

    /// Returns whether this handle shares its storage with `other`.
    pub fn shares_storage_with<U>(&self, other: &FixedArray<U>) -> bool {
        Rc::as_ptr(&self.storage).cast::<()>() == Rc::as_ptr(&other.storage).cast::<()>()
    }

    pub fn writable(&self) -> bool {
        self.storage.writable.get()
    }

    /// Marks the storage as read-only for every handle that shares it.
    pub fn make_read_only(&self) {
        if self.storage.writable.replace(false) {
            log::debug!("array storage of {} elements made read-only", self.storage_len());
        }
    }

    fn storage_len(&self) -> usize {
        self.storage.data.borrow().len()
    }

    /// Maps a position of this handle to a position in the storage.
    fn raw_index(&self, pos: usize) -> usize {
        match &self.indices {
            Some(indices) => indices[pos],
            None => pos,
        }
    }

    fn check_writable(&self) -> Result<(), ArrayError> {
        if self.writable() {
            Ok(())
        } else {
            Err(ArrayError::ReadOnly)
        }
    }

    /// Borrows the backing storage, failing with [`ArrayError::NotContiguous`] for mask views.
    pub(crate) fn contiguous(&self) -> Result<Ref<'_, [T]>, ArrayError> {
        if self.indices.is_some() {
            return Err(ArrayError::NotContiguous);
        }
        Ok(Ref::map(self.storage.data.borrow(), |data| data.as_slice()))
    }

    /// Runs `f` on the element at position `pos` without copying it.
    pub(crate) fn with_element<R>(&self, pos: usize, f: impl FnOnce(&T) -> R) -> R {
        f(&self.storage.data.borrow()[self.raw_index(pos)])
    }

    /// Runs `f` on the element at position `pos` in place, if the storage is writable.
    pub(crate) fn modify_element<R>(
        &self,
        pos: usize,
        f: impl FnOnce(&mut T) -> R,
    ) -> Result<R, ArrayError> {
        self.check_writable()?;
        let raw = self.raw_index(pos);
        Ok(f(&mut self.storage.data.borrow_mut()[raw]))
    }

    /// Writes `values`, given as `(storage position, value)` pairs.
    fn write_raw(&self, values: impl IntoIterator<Item = (usize, T)>) -> Result<(), ArrayError> {
        self.check_writable()?;
        let mut data = self.storage.data.borrow_mut();
        for (raw, value) in values {
            data[raw] = value;
        }
        Ok(())
    }

    /// Converts a mask into the storage positions it selects.
    fn masked_indices(&self, mask: &IntArray) -> Result<Vec<usize>, ArrayError> {
        let len = self.len();
        if mask.len() != len {
            return Err(ArrayError::MaskLength {
                mask: mask.len(),
                len,
            });
        }
        Ok(mask
            .iter()
            .positions(|m| m != 0)
            .map(|pos| self.raw_index(pos))
            .collect())
    }

    /// Returns a reference view of the elements whose `mask` entry is nonzero.
    ///
    /// The view shares storage (and writability) with `self`; writes through it are visible in
    /// `self` and vice versa. Fails with [`ArrayError::MaskLength`] if `mask` and `self` differ in
    /// length.
    pub fn mask(&self, mask: &IntArray) -> Result<Self, ArrayError> {
        let indices = self.masked_indices(mask)?;
        Ok(Self {
            storage: self.storage.clone(),
            indices: Some(indices.into()),
        })
    }
}

impl<T: Clone> FixedArray<T> {
    /// Creates an array of `len` copies of `value`.
    pub fn filled(value: T, len: usize) -> Self {
        Self::from_vec(vec![value; len])
    }

    /// Creates an array from the elements of `slice`.
    pub fn from_slice(slice: &[T]) -> Self {
        Self::from_vec(slice.to_vec())
    }

    /// Returns an independent, writable copy of the addressed elements.
    pub fn copy(&self) -> Self {
        Self::from_vec(self.to_vec())
    }

    /// Returns the element at `index`. Negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<T, ArrayError> {
        let pos = resolve_index(index, self.len())?;
        Ok(self.storage.data.borrow()[self.raw_index(pos)].clone())
    }

    /// Returns the element at position `pos`, panicking if it is out of range.
    #[track_caller]
    pub fn at(&self, pos: usize) -> T {
        let len = self.len();
        assert!(pos < len, "index {pos} out of range for array of length {len}");
        self.storage.data.borrow()[self.raw_index(pos)].clone()
    }

    /// Replaces the element at `index`. Negative indices count from the end.
    pub fn set(&self, index: isize, value: T) -> Result<(), ArrayError> {
        let pos = resolve_index(index, self.len())?;
        self.write_raw([(self.raw_index(pos), value)])
    }

    /// Sets every addressed element to `value`.
    pub fn fill(&self, value: T) -> Result<(), ArrayError> {
        let raw = (0..self.len()).map(|pos| self.raw_index(pos)).collect::<Vec<_>>();
        self.write_raw(raw.into_iter().map(|r| (r, value.clone())))
    }

    /// Copies the addressed elements into a [`Vec`].
    pub fn to_vec(&self) -> Vec<T> {
        let data = self.storage.data.borrow();
        match &self.indices {
            Some(indices) => indices.iter().map(|&raw| data[raw].clone()).collect(),
            None => data.clone(),
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            pos: 0,
            end: self.len(),
        }
    }

    /// Returns a new, writable array containing the elements selected by `slice`.
    ///
    /// The result never shares storage with `self`, even if `self` is read-only or a mask view.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Self, ArrayError> {
        let positions = slice.into().positions(self.len())?;
        let data = self.storage.data.borrow();
        Ok(Self::from_vec(
            positions
                .into_iter()
                .map(|pos| data[self.raw_index(pos)].clone())
                .collect(),
        ))
    }

    /// Assigns to the elements selected by `slice`.
    ///
    /// An array operand must have exactly as many elements as the slice selects; a single value
    /// is written to every selected element.
    pub fn set_slice<'a>(
        &self,
        slice: impl Into<Slice>,
        rhs: impl Into<Operand<'a, T>>,
    ) -> Result<(), ArrayError>
    where
        T: 'a,
    {
        let positions = slice.into().positions(self.len())?;
        let raw = positions
            .iter()
            .map(|&pos| self.raw_index(pos))
            .collect::<Vec<_>>();
        match rhs.into() {
            Operand::Value(value) => self.write_raw(raw.into_iter().map(|r| (r, value.clone()))),
            Operand::Array(array) => {
                check_len(raw.len(), array.len())?;
                // Read everything first, `array` may share storage with `self`.
                let values = array.to_vec();
                self.write_raw(raw.into_iter().zip(values))
            }
        }
    }

    /// Assigns to the elements whose `mask` entry is nonzero.
    ///
    /// An array operand either has one element per selected element, or as many elements as the
    /// underlying storage, in which case the operand's element at the same storage position is
    /// used. The in-place operations of mask views follow the same rule.
    pub fn set_mask<'a>(&self, mask: &IntArray, rhs: impl Into<Operand<'a, T>>) -> Result<(), ArrayError>
    where
        T: 'a,
    {
        self.mask(mask)?.try_zip_update(rhs, |_, value| Ok(value))
    }
}

impl<T: Clone + Default> FixedArray<T> {
    /// Creates an array of `len` default elements (zero for numbers and vectors, identity for
    /// matrices and quaternions).
    pub fn new(len: usize) -> Self {
        Self::filled(T::default(), len)
    }
}

impl<T> From<Vec<T>> for FixedArray<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Clone> From<&[T]> for FixedArray<T> {
    fn from(slice: &[T]) -> Self {
        Self::from_slice(slice)
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_vec(array.into())
    }
}

impl<T> FromIterator<T> for FixedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Compares the addressed elements.
impl<T: Clone + PartialEq> PartialEq for FixedArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Clone + PartialEq> PartialEq<[T]> for FixedArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a == *b)
    }
}

impl<T: Clone + PartialEq, const N: usize> PartialEq<[T; N]> for FixedArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over copies of the elements of a [`FixedArray`].
pub struct Iter<'a, T> {
    array: &'a FixedArray<T>,
    pos: usize,
    end: usize,
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos == self.end {
            return None;
        }
        let item = self.array.at(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.pos;
        (len, Some(len))
    }
}

impl<'a, T: Clone> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.pos == self.end {
            return None;
        }
        self.end -= 1;
        Some(self.array.at(self.end))
    }
}

impl<'a, T: Clone> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Clone> IntoIterator for &'a FixedArray<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
