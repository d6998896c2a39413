//! Error types for u-numkit.

use thiserror::Error;

/// Error returned by every fallible operation in this crate.
///
/// All variants describe caller input errors. Nothing here is transient,
/// so retrying the same call always fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operands of incompatible length or shape.
    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Expected length (or row width).
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// An aggregate received zero elements. Carries the operation name.
    #[error("empty input to {0}")]
    EmptyInput(&'static str),

    /// Too few observations for a sample estimator.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum number of observations.
        required: usize,
        /// Observations supplied.
        actual: usize,
    },

    /// Index outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the indexed dimension.
        len: usize,
    },

    /// Distribution parameter outside its domain.
    #[error("domain precondition violated: {0}")]
    DomainPrecondition(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::ShapeMismatch`] unless both lengths agree.
pub(crate) fn ensure_same_len(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::ShapeMismatch { expected, actual })
    }
}
