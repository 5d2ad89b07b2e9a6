use thiserror::Error;

/// Broad classification of an error, shared by every error type in this workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Operand lengths or shapes disagree.
    ShapeMismatch,
    /// An index lies outside the valid range.
    Bounds,
    /// A mutation was attempted on read-only data.
    Permission,
    /// The input is outside the domain of the operation (singular, degenerate, malformed).
    Domain,
    /// Values of different geometric rank were mixed.
    Dimension,
}

/// Errors raised by value-type operations on degenerate or malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("index {index} is out of range for {len} components")]
    IndexOutOfRange { index: isize, len: usize },

    #[error("cannot invert singular matrix")]
    Singular,

    #[error("cannot remove zero scaling from matrix")]
    ZeroScale,

    #[error("cannot normalize null vector")]
    NullVector,

    #[error("matrix is not symmetric")]
    NotSymmetric,

    #[error("expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("degenerate input: {0}")]
    Degenerate(&'static str),

    #[error("cannot parse {0}")]
    Parse(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::Bounds,
            Error::DimensionMismatch { .. } => ErrorKind::Dimension,
            Error::Singular
            | Error::ZeroScale
            | Error::NullVector
            | Error::NotSymmetric
            | Error::Degenerate(_)
            | Error::Parse(_) => ErrorKind::Domain,
        }
    }
}

/// Resolves a possibly negative index against a length, counting negative indices from the end.
///
/// Returns [`Error::IndexOutOfRange`] for indices outside `-len..len`.
pub fn canonical_index(index: isize, len: usize) -> Result<usize, Error> {
    let resolved = if index < 0 {
        index + len as isize
    } else {
        index
    };
    if resolved < 0 || resolved >= len as isize {
        return Err(Error::IndexOutOfRange { index, len });
    }
    Ok(resolved as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices() {
        assert_eq!(canonical_index(0, 3), Ok(0));
        assert_eq!(canonical_index(-1, 3), Ok(2));
        assert_eq!(canonical_index(-3, 3), Ok(0));
        assert_eq!(
            canonical_index(-4, 3),
            Err(Error::IndexOutOfRange { index: -4, len: 3 })
        );
        assert_eq!(canonical_index(3, 3).unwrap_err().kind(), ErrorKind::Bounds);
        assert!(canonical_index(0, 0).is_err());
    }
}
