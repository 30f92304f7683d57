//! Error type for squid.

use std::fmt::{Display, Formatter};

/// The bound an index was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Flat element index of a vector or of a matrix's row-major storage.
    Element,
    /// Row index of a matrix.
    Row,
    /// Column index of a matrix.
    Column,
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Axis::Element => "Element",
                Axis::Row => "Row",
                Axis::Column => "Column",
            }
        )
    }
}

/// Errors raised by the checked accessors and the runtime-sized
/// constructors.
///
/// Everything that can be decided from the shapes alone (multiplying
/// incompatible matrices, building from the wrong number of elements, growing
/// by the wrong amount) is rejected at compile time and never shows up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested index is outside the valid range of the axis.
    #[error("{axis} index {index} is out of bounds (must be less than {len})")]
    OutOfBounds {
        /// The axis being indexed.
        axis: Axis,
        /// The offending index.
        index: usize,
        /// The length of the axis.
        len: usize,
    },

    /// A slice of the wrong length was handed to a fixed-size constructor.
    #[error("Shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Number of elements the target shape holds.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },
}

impl Error {
    pub(crate) const fn out_of_bounds(axis: Axis, index: usize, len: usize) -> Self {
        Self::OutOfBounds { axis, index, len }
    }
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::out_of_bounds(Axis::Row, 3, 3);
        assert_eq!(
            err.to_string(),
            "Row index 3 is out of bounds (must be less than 3)"
        );

        let err = Error::ShapeMismatch {
            expected: 6,
            actual: 5,
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected 6 elements, got 5");
    }
}
