//! Jagged arrays: fixed-length arrays whose elements are variable-length runs of values.
//!
//! A [`VArray`] follows the rules of [`FixedArray`]: clones and mask views share storage and
//! writability, slices and [`VArray::copy`] are independent. Elements are accessed through
//! [`VElement`] reference views and resized through the [`VArray::size`] view.

use std::fmt;

use vmath_linalg::{Vec2, Vec3};

use crate::{
    array::{FixedArray, IntArray, Slice},
    error::{check_len, resolve_index, ArrayError},
};

pub type VIntArray = VArray<i32>;
pub type VFloatArray = VArray<f32>;
pub type VV2iArray = VArray<Vec2<i32>>;
pub type VV2fArray = VArray<Vec2<f32>>;
pub type VV3fArray = VArray<Vec3<f32>>;

/// A fixed number of independently sized sub-arrays.
pub struct VArray<T> {
    data: FixedArray<Vec<T>>,
}

impl<T> Clone for VArray<T> {
    /// Returns a new handle to the same storage.
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

fn checked_len(len: isize) -> Result<usize, ArrayError> {
    usize::try_from(len).map_err(|_| ArrayError::NegativeLength(len))
}

/// Copies `values` into the elements of `target` at `positions`. Nothing is written unless every
/// selected element has the same length as `values`.
fn assign<T: Clone>(
    target: &FixedArray<Vec<T>>,
    positions: &[usize],
    values: Vec<T>,
) -> Result<(), ArrayError> {
    for &pos in positions {
        check_len(target.with_element(pos, Vec::len), values.len())?;
    }
    for &pos in positions {
        target.modify_element(pos, |element| element.clone_from(&values))?;
    }
    Ok(())
}

impl<T: Clone> VArray<T> {
    /// Creates `len` empty elements.
    pub fn new(len: usize) -> Self {
        Self {
            data: FixedArray::filled(Vec::new(), len),
        }
    }

    /// Like [`VArray::new`], but takes a signed length and rejects negative ones.
    pub fn try_new(len: isize) -> Result<Self, ArrayError> {
        Ok(Self::new(checked_len(len)?))
    }

    /// Creates `len` elements, each holding the single value `value`.
    pub fn filled(value: T, len: usize) -> Self {
        Self::with_default(&[value], len)
    }

    pub fn try_filled(value: T, len: isize) -> Result<Self, ArrayError> {
        Ok(Self::filled(value, checked_len(len)?))
    }

    /// Creates `len` elements, each a copy of `default`.
    pub fn with_default(default: &[T], len: usize) -> Self {
        Self {
            data: FixedArray::filled(default.to_vec(), len),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn writable(&self) -> bool {
        self.data.writable()
    }

    /// Marks the storage read-only for every handle sharing it.
    pub fn make_read_only(&self) {
        self.data.make_read_only();
    }

    /// Returns an independent, writable deep copy.
    pub fn copy(&self) -> Self {
        Self {
            data: self.data.copy(),
        }
    }

    /// Returns a reference view of the element at `index`.
    pub fn get(&self, index: isize) -> Result<VElement<T>, ArrayError> {
        let pos = resolve_index(index, self.len())?;
        Ok(VElement {
            array: self.data.clone(),
            pos,
        })
    }

    /// Replaces the contents of the element at `index`.
    ///
    /// `values` must have as many entries as the element currently holds; resize it through
    /// [`VArray::size`] first to change its length.
    pub fn set(&self, index: isize, values: impl IntoIterator<Item = T>) -> Result<(), ArrayError> {
        let pos = resolve_index(index, self.len())?;
        assign(&self.data, &[pos], values.into_iter().collect())
    }

    /// Returns a reference view of the elements whose `mask` entry is nonzero.
    pub fn mask(&self, mask: &IntArray) -> Result<Self, ArrayError> {
        Ok(Self {
            data: self.data.mask(mask)?,
        })
    }

    /// Returns a deep copy of the elements selected by `slice`.
    pub fn slice(&self, slice: impl Into<Slice>) -> Result<Self, ArrayError> {
        Ok(Self {
            data: self.data.slice(slice)?,
        })
    }

    /// Writes `values` into every element whose `mask` entry is nonzero.
    pub fn set_mask(&self, mask: &IntArray, values: impl IntoIterator<Item = T>) -> Result<(), ArrayError> {
        let view = self.data.mask(mask)?;
        let positions = (0..view.len()).collect::<Vec<_>>();
        assign(&view, &positions, values.into_iter().collect())
    }

    /// Writes `values` into every element selected by `slice`.
    pub fn set_slice(
        &self,
        slice: impl Into<Slice>,
        values: impl IntoIterator<Item = T>,
    ) -> Result<(), ArrayError> {
        let positions = slice.into().positions(self.len())?;
        assign(&self.data, &positions, values.into_iter().collect())
    }

    /// Returns a view of the element lengths through which elements can be resized.
    pub fn size(&self) -> SizeView<T> {
        SizeView {
            array: self.data.clone(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = VElement<T>> + '_ {
        (0..self.len()).map(|pos| VElement {
            array: self.data.clone(),
            pos,
        })
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for VArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// A reference view of one element of a [`VArray`].
///
/// The view reads and writes the array's storage, so it mirrors the array's writability and sees
/// resizes made through [`VArray::size`].
pub struct VElement<T> {
    array: FixedArray<Vec<T>>,
    pos: usize,
}

impl<T: Clone> VElement<T> {
    pub fn len(&self) -> usize {
        self.array.with_element(self.pos, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn writable(&self) -> bool {
        self.array.writable()
    }

    pub fn get(&self, index: isize) -> Result<T, ArrayError> {
        self.array.with_element(self.pos, |values| {
            let i = resolve_index(index, values.len())?;
            Ok(values[i].clone())
        })
    }

    pub fn set(&self, index: isize, value: T) -> Result<(), ArrayError> {
        self.array.modify_element(self.pos, |values| {
            let i = resolve_index(index, values.len())?;
            values[i] = value;
            Ok(())
        })?
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.array.with_element(self.pos, Vec::clone)
    }

    /// Copies the values into a new, writable array.
    pub fn to_array(&self) -> FixedArray<T> {
        FixedArray::from_vec(self.to_vec())
    }
}

impl<T: Clone + fmt::Debug> fmt::Debug for VElement<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.array
            .with_element(self.pos, |values| f.debug_list().entries(values).finish())
    }
}

/// The element lengths of a [`VArray`].
pub struct SizeView<T> {
    array: FixedArray<Vec<T>>,
}

impl<T: Clone> SizeView<T> {
    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Returns the length of the element at `index`.
    pub fn get(&self, index: isize) -> Result<usize, ArrayError> {
        let pos = resolve_index(index, self.len())?;
        Ok(self.array.with_element(pos, Vec::len))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        (0..self.len())
            .map(|pos| self.array.with_element(pos, Vec::len))
            .collect()
    }
}

impl<T: Clone + Default> SizeView<T> {
    /// Resizes the element at `index` to `len` entries, keeping existing values and filling new
    /// slots with defaults.
    pub fn set(&self, index: isize, len: isize) -> Result<(), ArrayError> {
        let pos = resolve_index(index, self.len())?;
        let len = checked_len(len)?;
        self.array.modify_element(pos, |values| values.resize(len, T::default()))?;
        log::trace!("resized jagged array element {pos} to {len}");
        Ok(())
    }

    /// Resizes every element to `len` entries.
    pub fn fill(&self, len: isize) -> Result<(), ArrayError> {
        let len = checked_len(len)?;
        self.array.update(|mut values| {
            values.resize(len, T::default());
            values
        })
    }
}

#[cfg(test)]
mod tests {
    use vmath_linalg::vec2;

    use crate::error::ErrorKind;

    use super::*;

    const NUM: usize = 1000;

    #[test]
    fn construction() {
        let a1 = VIntArray::new(NUM);
        let a2 = VIntArray::filled(1, NUM);
        let a3 = a2.clone();
        assert_eq!(a1.len(), NUM);
        assert_eq!(a2.len(), NUM);
        assert_eq!(a3.len(), NUM);

        assert_eq!(VIntArray::try_new(-1).unwrap_err(), ArrayError::NegativeLength(-1));
        assert_eq!(VIntArray::try_filled(10, -1).unwrap_err().kind(), ErrorKind::Domain);

        for i in 0..4 {
            assert_eq!(a2.get(i).unwrap().get(0), Ok(1));
        }
        assert_eq!(a2.get(NUM as isize).unwrap_err().kind(), ErrorKind::Bounds);
        assert!(a1.get(0).unwrap().is_empty());
        assert_eq!(a3.get(-1).unwrap().len(), 1);
    }

    #[test]
    fn element_assignment() {
        let a2 = VIntArray::filled(1, NUM);
        let values = IntArray::from([5]);
        a2.set(0, &values).unwrap();
        assert_eq!(a2.get(0).unwrap().get(0), Ok(5));
        a2.set(-1, &values).unwrap();
        assert_eq!(a2.get(-1).unwrap().get(0), Ok(5));

        // Lengths must match the element.
        let err = a2.set(0, [1, 2]).unwrap_err();
        assert_eq!(err, ArrayError::LengthMismatch { lhs: 1, rhs: 2 });
    }

    #[test]
    fn masks_and_slices() {
        let a2 = VIntArray::filled(1, NUM);
        a2.set(0, [5]).unwrap();
        let mut bits = vec![0; NUM];
        bits[2] = 1;
        bits[3] = 1;
        let mask = IntArray::from_vec(bits);

        assert_eq!(a2.mask(&mask).unwrap().len(), 2);
        a2.set_mask(&mask, [5]).unwrap();
        let firsts = (0..4).map(|i| a2.get(i).unwrap().get(0).unwrap()).collect::<Vec<_>>();
        assert_eq!(firsts, [5, 1, 5, 5]);

        a2.get(3).unwrap().set(0, 6).unwrap();
        assert_eq!(a2.get(3).unwrap().get(0), Ok(6));
        let a2m = a2.mask(&mask).unwrap();
        let a2ms = a2m.slice(1..2).unwrap();
        assert_eq!(a2ms.get(0).unwrap().get(0), Ok(6));

        // Slice assignment through a mask view writes to the parent.
        a2m.set_slice(1..2, [9]).unwrap();
        assert_eq!(a2.get(3).unwrap().get(0), Ok(9));
        assert!(a2m.set_slice(1..2, [9, 2]).is_err());
        a2.set_slice(3..4, [17]).unwrap();
        assert_eq!(a2.get(3).unwrap().get(0), Ok(17));
        assert!(a2.set_slice(3..4, [17, 2]).is_err());

        a2.set_slice(Slice::new(Some(1), Some(4), 2), [7]).unwrap();
        assert_eq!(a2.slice(Slice::new(Some(1), Some(4), 2)).unwrap().len(), 2);
        let firsts = (0..4).map(|i| a2.get(i).unwrap().get(0).unwrap()).collect::<Vec<_>>();
        assert_eq!(firsts, [5, 7, 5, 7]);
    }

    #[test]
    fn sizes() {
        let a1 = VIntArray::new(NUM);
        a1.size().set(0, 10).unwrap();
        assert_eq!(a1.get(0).unwrap().len(), 10);
        assert_eq!(a1.size().get(0), Ok(10));

        // Element views refer to the storage.
        let a10 = a1.get(0).unwrap();
        a10.set(9, 15).unwrap();
        drop(a10);
        assert_eq!(a1.get(0).unwrap().get(9), Ok(15));

        // Shrinking keeps the leading values.
        a1.size().set(0, 3).unwrap();
        a1.size().set(0, 12).unwrap();
        assert_eq!(a1.get(0).unwrap().to_vec()[9], 0);

        assert_eq!(a1.size().set(1, -1), Err(ArrayError::NegativeLength(-1)));
        assert!(a1.size().get(NUM as isize).is_err());
    }

    #[test]
    fn read_only() {
        let len = 123;
        let a = VIntArray::new(len);
        assert!(a.writable());
        a.size().fill(10).unwrap();
        for i in 0..len as isize {
            let element = a.get(i).unwrap();
            assert_eq!(element.len(), 10);
            for j in 0..10 {
                element.set(j, (i + j) as i32).unwrap();
            }
        }
        assert_eq!(a.get(5).unwrap().get(7), Ok(12));

        a.make_read_only();
        assert!(!a.writable());
        let av = a.get(70).unwrap();
        assert_eq!(av.len(), 10);
        assert!(!av.writable());
        assert_eq!(a.get(80).unwrap().set(5, 7).unwrap_err().kind(), ErrorKind::Permission);
        assert_eq!(a.size().get(12), Ok(10));
        assert!(a.size().set(13, 12).is_err());

        let slice = a.slice(10..14).unwrap();
        assert_eq!(slice.len(), 4);
        assert!(slice.writable());
        for element in slice.iter() {
            element.set(3, 3).unwrap();
            element.set(8, 8).unwrap();
        }
        assert_eq!(a.get(10).unwrap().get(3), Ok(13));

        let mut bits = vec![0; len];
        bits[50..70].fill(1);
        let view = a.mask(&IntArray::from_vec(bits)).unwrap();
        assert_eq!(view.len(), 20);
        assert!(!view.writable());
    }

    #[test]
    fn vector_and_float_elements() {
        let a = VV2iArray::filled(vec2(17, 31), 5);
        assert_eq!(a.iter().count(), 5);
        assert!(a.iter().all(|element| element.to_vec() == [vec2(17, 31)]));
        assert!(a.get(-6).is_err());
        assert!(VV2iArray::try_new(-1).is_err());

        let defaults = VFloatArray::new(2);
        defaults.size().fill(1).unwrap();
        defaults.set(0, [42.23]).unwrap();
        defaults.set(1, [2.0]).unwrap();
        let a = VFloatArray::filled(defaults.get(1).unwrap().get(0).unwrap(), 7);
        assert_eq!(a.len(), 7);
        for element in a.iter() {
            assert_eq!(element.len(), 1);
            assert_eq!(element.get(0), Ok(2.0));
            assert_eq!(element.get(-1), Ok(2.0));
        }
        assert!(a.get(8).is_err());
        assert_eq!(format!("{:?}", a.slice(..2).unwrap()), "[[2.0], [2.0]]");
    }
}
