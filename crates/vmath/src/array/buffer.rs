//! Raw memory access for interchange with other numeric libraries.

use std::{cell::Ref, mem};

use bytemuck::Pod;
use vmath_linalg::{Scalar, Vector};

use crate::error::{check_len, ArrayError};

use super::FixedArray;

/// Element types whose arrays can be exposed as a flat, densely packed buffer.
pub trait BufferElement: Pod {
    /// The scalar type of each component.
    type Component: Scalar;

    /// Number of components per element, or [`None`] for scalars (which add no dimension to
    /// the buffer shape).
    const COMPONENTS: Option<usize>;
}

macro_rules! scalar_elements {
    ($($t:ty),+) => {
        $(
            impl BufferElement for $t {
                type Component = $t;
                const COMPONENTS: Option<usize> = None;
            }
        )+
    };
}

scalar_elements!(u8, i16, u16, i32, u32, i64, f32, f64);

impl<T: Scalar, const N: usize> BufferElement for Vector<T, N> {
    type Component = T;
    const COMPONENTS: Option<usize> = Some(N);
}

/// Layout of an array's buffer, in the terms of the Python buffer protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferInfo {
    pub ndim: usize,
    pub shape: Vec<usize>,
    /// Byte distance between consecutive indices of each dimension.
    pub strides: Vec<usize>,
    /// `struct`-module format character of the components.
    pub format: &'static str,
    /// Size of one component in bytes.
    pub item_size: usize,
    pub readonly: bool,
}

impl<T: BufferElement> FixedArray<T> {
    /// Describes the buffer of a direct handle. Mask views are not contiguous.
    pub fn buffer_info(&self) -> Result<BufferInfo, ArrayError> {
        if self.is_masked() {
            return Err(ArrayError::NotContiguous);
        }
        let item_size = mem::size_of::<T::Component>();
        let (shape, strides) = match T::COMPONENTS {
            None => (vec![self.len()], vec![item_size]),
            Some(n) => (vec![self.len(), n], vec![n * item_size, item_size]),
        };
        Ok(BufferInfo {
            ndim: shape.len(),
            shape,
            strides,
            format: T::Component::FORMAT,
            item_size,
            readonly: !self.writable(),
        })
    }

    /// Borrows the elements as raw bytes.
    ///
    /// The array cannot be modified while the returned guard is alive.
    pub fn as_bytes(&self) -> Result<Ref<'_, [u8]>, ArrayError> {
        let data = self.contiguous()?;
        Ok(Ref::map(data, |data| bytemuck::cast_slice(data)))
    }

    /// Overwrites the elements with the contents of `bytes`, which must be exactly as long as
    /// the array's buffer.
    pub fn write_bytes(&self, bytes: &[u8]) -> Result<(), ArrayError> {
        if self.is_masked() {
            return Err(ArrayError::NotContiguous);
        }
        let values = elements_from_bytes::<T>(bytes)?;
        check_len(self.len(), values.len())?;
        self.write_raw(values.into_iter().enumerate())
    }

    /// Creates an array by copying elements out of `bytes`. The bytes need not be aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArrayError> {
        elements_from_bytes(bytes).map(Self::from_vec)
    }
}

fn elements_from_bytes<T: Pod>(bytes: &[u8]) -> Result<Vec<T>, ArrayError> {
    let size = mem::size_of::<T>();
    if bytes.len() % size != 0 {
        return Err(ArrayError::Domain(
            "byte length is not a multiple of the element size",
        ));
    }
    Ok(bytes
        .chunks_exact(size)
        .map(bytemuck::pod_read_unaligned)
        .collect())
}

#[cfg(test)]
mod tests {
    use vmath_linalg::{vec2, vec3};

    use crate::array::{DoubleArray, FloatArray, IntArray, UnsignedCharArray, V2iArray, V3fArray};

    use super::*;

    #[test]
    fn scalar_layout() {
        let a = FloatArray::from([1.0, 2.0, 3.0]);
        let info = a.buffer_info().unwrap();
        assert_eq!(info.ndim, 1);
        assert_eq!(info.shape, [3]);
        assert_eq!(info.strides, [4]);
        assert_eq!(info.format, "f");
        assert_eq!(info.item_size, 4);
        assert!(!info.readonly);

        assert_eq!(DoubleArray::new(2).buffer_info().unwrap().format, "d");
        assert_eq!(UnsignedCharArray::new(2).buffer_info().unwrap().strides, [1]);
        assert_eq!(a.as_bytes().unwrap().len(), 12);
    }

    #[test]
    fn vector_layout() {
        let a = V3fArray::from([vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)]);
        let info = a.buffer_info().unwrap();
        assert_eq!(info.ndim, 2);
        assert_eq!(info.shape, [2, 3]);
        assert_eq!(info.strides, [12, 4]);

        let bytes = a.as_bytes().unwrap();
        let floats = bytes
            .chunks_exact(4)
            .map(bytemuck::pod_read_unaligned)
            .collect::<Vec<f32>>();
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        drop(bytes);

        let b = V2iArray::from_bytes(bytemuck::cast_slice(&[1i32, 2, 3, 4])).unwrap();
        assert_eq!(b, [vec2(1, 2), vec2(3, 4)]);
    }

    #[test]
    fn writes() {
        let a = IntArray::new(2);
        a.write_bytes(bytemuck::cast_slice(&[7i32, 8])).unwrap();
        assert_eq!(a, [7, 8]);
        assert_eq!(
            a.write_bytes(bytemuck::cast_slice(&[1i32])),
            Err(ArrayError::LengthMismatch { lhs: 2, rhs: 1 })
        );
        assert!(IntArray::from_bytes(&[0, 1, 2]).is_err());

        a.make_read_only();
        assert!(a.buffer_info().unwrap().readonly);
        assert_eq!(
            a.write_bytes(bytemuck::cast_slice(&[1i32, 2])),
            Err(ArrayError::ReadOnly)
        );
        // Reading stays possible.
        assert_eq!(a.as_bytes().unwrap().len(), 8);
    }

    #[test]
    fn masks_are_not_contiguous() {
        let a = IntArray::from([1, 2, 3]);
        let m = a.mask(&IntArray::from([1, 0, 1])).unwrap();
        assert_eq!(m.buffer_info(), Err(ArrayError::NotContiguous));
        assert!(m.as_bytes().is_err());
        assert!(m.write_bytes(&[0; 8]).is_err());
        // A copy of the view is contiguous again.
        assert_eq!(m.copy().buffer_info().unwrap().shape, [2]);
    }
}
