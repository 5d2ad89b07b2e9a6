use thiserror::Error;

pub use vmath_linalg::ErrorKind;

/// Errors raised by array, view and jagged-array operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArrayError {
    #[error("operand lengths differ: {lhs} vs {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },

    #[error("array sizes differ: {lhs:?} vs {rhs:?}")]
    SizeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("mask of length {mask} cannot index an array of length {len}")]
    MaskLength { mask: usize, len: usize },

    #[error("index {index} is out of range for array of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("array is read-only")]
    ReadOnly,

    #[error("slice step cannot be zero")]
    ZeroStep,

    #[error("length {0} is negative")]
    NegativeLength(isize),

    #[error("integer division by zero")]
    DivisionByZero,

    #[error("{0}")]
    Domain(&'static str),

    #[error("array data is not contiguous")]
    NotContiguous,

    #[error(transparent)]
    Math(#[from] vmath_linalg::Error),
}

impl ArrayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArrayError::LengthMismatch { .. }
            | ArrayError::SizeMismatch { .. }
            | ArrayError::MaskLength { .. } => ErrorKind::ShapeMismatch,
            ArrayError::IndexOutOfRange { .. } => ErrorKind::Bounds,
            ArrayError::ReadOnly => ErrorKind::Permission,
            ArrayError::ZeroStep
            | ArrayError::NegativeLength(_)
            | ArrayError::DivisionByZero
            | ArrayError::Domain(_)
            | ArrayError::NotContiguous => ErrorKind::Domain,
            ArrayError::Math(e) => e.kind(),
        }
    }
}

/// Fails with [`ArrayError::LengthMismatch`] unless `lhs == rhs`.
pub(crate) fn check_len(lhs: usize, rhs: usize) -> Result<(), ArrayError> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(ArrayError::LengthMismatch { lhs, rhs })
    }
}

/// Resolves a possibly negative `index` against `len`, counting negative indices from the end.
pub(crate) fn resolve_index(index: isize, len: usize) -> Result<usize, ArrayError> {
    vmath_linalg::canonical_index(index, len)
        .map_err(|_| ArrayError::IndexOutOfRange { index, len })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(
            ArrayError::LengthMismatch { lhs: 1, rhs: 2 }.kind(),
            ErrorKind::ShapeMismatch
        );
        assert_eq!(ArrayError::ReadOnly.kind(), ErrorKind::Permission);
        assert_eq!(
            ArrayError::from(vmath_linalg::Error::DimensionMismatch {
                expected: 3,
                actual: 2
            })
            .kind(),
            ErrorKind::Dimension
        );
        assert_eq!(
            ArrayError::from(vmath_linalg::Error::Singular).to_string(),
            "cannot invert singular matrix"
        );
    }

    #[test]
    fn index_resolution() {
        assert_eq!(resolve_index(-1, 4), Ok(3));
        assert_eq!(
            resolve_index(4, 4),
            Err(ArrayError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(resolve_index(-5, 4).unwrap_err().kind(), ErrorKind::Bounds);
    }
}
