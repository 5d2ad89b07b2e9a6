//! Component views (`.x`, `.r`, `.min`, ...) of arrays of compound values.

use std::fmt;

use crate::error::{resolve_index, ArrayError};

use super::FixedArray;

/// A view of one field of every element of a [`FixedArray`].
///
/// Reads and writes go to the parent array, so the view mirrors the parent's writability and
/// sees changes made through other handles.
pub struct FieldView<V, F> {
    array: FixedArray<V>,
    get: fn(&V) -> F,
    set: fn(&mut V, F),
}

impl<V: Clone, F: Clone> FieldView<V, F> {
    pub(crate) fn new(array: &FixedArray<V>, get: fn(&V) -> F, set: fn(&mut V, F)) -> Self {
        Self {
            array: array.clone(),
            get,
            set,
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn writable(&self) -> bool {
        self.array.writable()
    }

    /// Returns the field of the element at `index`. Negative indices count from the end.
    pub fn get(&self, index: isize) -> Result<F, ArrayError> {
        Ok((self.get)(&self.array.get(index)?))
    }

    /// Replaces the field of the element at `index`, leaving the element's other fields alone.
    pub fn set(&self, index: isize, value: F) -> Result<(), ArrayError> {
        let pos = resolve_index(index, self.len())?;
        self.array.modify_element(pos, |v| (self.set)(v, value))
    }

    /// Sets the field of every element to `value`.
    pub fn fill(&self, value: F) -> Result<(), ArrayError> {
        let set = self.set;
        self.array.update(|mut v| {
            set(&mut v, value.clone());
            v
        })
    }

    /// Copies the field values into a new array.
    pub fn to_array(&self) -> FixedArray<F> {
        self.array.map(|v| (self.get)(&v))
    }

    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.array.iter().map(|v| (self.get)(&v))
    }
}

impl<V: Clone, F: Clone + fmt::Debug> fmt::Debug for FieldView<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use vmath_linalg::{vec2, vec3, vec4, Bounds, Vec3f};

    use crate::{
        array::{Box2iArray, Color4fArray, IntArray, V2iArray, V3fArray},
        error::ErrorKind,
    };

    #[test]
    fn vector_components() {
        let a = V3fArray::from([vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)]);
        let x = a.x();
        assert_eq!(x.to_array(), [1.0, 4.0]);
        assert_eq!(a.z().get(-1), Ok(6.0));

        x.set(1, 10.0).unwrap();
        assert_eq!(a.get(1), Ok(vec3(10.0, 5.0, 6.0)));
        a.y().fill(0.0).unwrap();
        assert_eq!(a.iter().map(|v| v.y).collect::<Vec<_>>(), [0.0, 0.0]);

        // Views see later writes to the parent.
        a.set(0, Vec3f::ZERO).unwrap();
        assert_eq!(x.get(0), Ok(0.0));

        assert_eq!(x.get(2).unwrap_err().kind(), ErrorKind::Bounds);
        assert_eq!(format!("{:?}", a.z()), "[0.0, 6.0]");
    }

    #[test]
    fn views_of_masks() {
        let a = V2iArray::from([vec2(1, 2), vec2(3, 4), vec2(5, 6)]);
        let m = a.mask(&IntArray::from([0, 1, 1])).unwrap();
        m.y().set(0, 40).unwrap();
        assert_eq!(a.get(1), Ok(vec2(3, 40)));
    }

    #[test]
    fn colors_and_boxes() {
        let c = Color4fArray::filled(vec4(0.1, 0.2, 0.3, 1.0), 3);
        c.a().set(2, 0.5).unwrap();
        assert_eq!(c.get(2).unwrap().a, 0.5);
        assert_eq!(c.r().to_array(), [0.1, 0.1, 0.1]);

        let b = Box2iArray::filled(Bounds::new(vec2(0, 0), vec2(1, 1)), 2);
        b.max().set(0, vec2(5, 5)).unwrap();
        assert_eq!(b.get(0).unwrap().max, vec2(5, 5));
        assert_eq!(b.min().get(0), Ok(vec2(0, 0)));
    }

    #[test]
    fn mirror_writability() {
        let a = V3fArray::new(4);
        let x = a.x();
        let r = a.r();
        assert!(x.writable());
        a.make_read_only();
        assert!(!x.writable());
        assert!(!a.y().writable());
        assert_eq!(x.set(0, 1.0).unwrap_err().kind(), ErrorKind::Permission);
        assert_eq!(r.fill(1.0).unwrap_err().kind(), ErrorKind::Permission);

        let b = Box2iArray::new(2);
        b.make_read_only();
        assert!(!b.min().writable());
        assert!(b.max().set(0, vec2(1, 1)).is_err());
    }
}
