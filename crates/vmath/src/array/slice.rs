//! Strided index ranges.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::error::ArrayError;

/// A `start:stop:step` selection of array positions.
///
/// Bounds may be negative (counting from the end) or omitted, and are clamped to the array like
/// Python slices are: `Slice::new(None, None, -1)` selects every element in reverse order, and
/// out-of-range bounds select fewer elements instead of failing.
///
/// Rust ranges convert into slices with a step of 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: isize,
}

impl Slice {
    /// The slice selecting every element.
    pub const ALL: Self = Self {
        start: None,
        stop: None,
        step: 1,
    };

    pub fn new(start: Option<isize>, stop: Option<isize>, step: isize) -> Self {
        Self { start, stop, step }
    }

    /// Returns `self` with its step replaced by `step`.
    pub fn step_by(self, step: isize) -> Self {
        Self { step, ..self }
    }

    /// Resolves the slice against an array of length `len`, returning the selected positions in
    /// selection order.
    pub fn positions(&self, len: usize) -> Result<Vec<usize>, ArrayError> {
        if self.step == 0 {
            return Err(ArrayError::ZeroStep);
        }
        let len = len as isize;
        let step = self.step;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
        let clamp = |bound: Option<isize>, default: isize| match bound {
            None => default,
            Some(b) if b < 0 => (b + len).max(lower),
            Some(b) => b.min(upper),
        };
        let start = clamp(self.start, if step > 0 { lower } else { upper });
        let stop = clamp(self.stop, if step > 0 { upper } else { lower });

        let mut positions = Vec::new();
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            positions.push(i as usize);
            i += step;
        }
        Ok(positions)
    }
}

impl Default for Slice {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self {
        Self::ALL
    }
}

impl From<Range<isize>> for Slice {
    fn from(r: Range<isize>) -> Self {
        Self::new(Some(r.start), Some(r.end), 1)
    }
}

impl From<RangeInclusive<isize>> for Slice {
    fn from(r: RangeInclusive<isize>) -> Self {
        let (start, end) = r.into_inner();
        // `..=-1` would turn into `..0`, which selects nothing.
        let stop = if end == -1 { None } else { Some(end + 1) };
        Self::new(Some(start), stop, 1)
    }
}

impl From<RangeFrom<isize>> for Slice {
    fn from(r: RangeFrom<isize>) -> Self {
        Self::new(Some(r.start), None, 1)
    }
}

impl From<RangeTo<isize>> for Slice {
    fn from(r: RangeTo<isize>) -> Self {
        Self::new(None, Some(r.end), 1)
    }
}
