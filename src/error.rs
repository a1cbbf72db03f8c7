//! The error type shared by all fallible vector operations.

use thiserror::Error;

/// Shorthand for results of fallible vector operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The ways a vector operation can fail.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value or vector of one element type was offered to a vector of
    /// another element type.
    #[error("cannot put a {found} into a vector of {expected}")]
    TypeMismatch {
        /// Name of the rejected value's type.
        found: &'static str,
        /// Name of the vector's element type.
        expected: &'static str,
    },
    /// An index, offset or range bound lies outside the live elements.
    ///
    /// Popping from an empty vector reports `index: 0, len: 0`.
    #[error("index (is {index}) out of range for vector of length {len}")]
    IndexOutOfRange {
        /// The offending index or range bound.
        index: usize,
        /// The vector's length at the time of the call.
        len: usize,
    },
}

impl Error {
    #[inline]
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}
