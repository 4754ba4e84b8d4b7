//! Errors returned when configuring or running a pattern merge.
//!
//! Every failure is a synchronous validation failure. Nothing is retried and
//! nothing is partially applied: a call that returns an error has not touched
//! its wrapper.

use thiserror::Error;

/// A convenience alias for results produced by this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The ways a pattern can be malformed.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern names fewer than two collections.
    #[error("there must be more than one collection in the pattern")]
    TooShort,

    /// An entry in the pattern could not be read as an integer.
    #[error("pattern must be all integers")]
    NotIntegers,

    /// An entry in the pattern is zero or negative.
    #[error("pattern entries must be at least 1")]
    NotPositive,

    /// An entry in the pattern is an integer too large for `usize`.
    #[error("pattern entries must fit in a usize")]
    TooLarge,
}

/// Errors produced by [`PatternMerge`][crate::PatternMerge].
///
/// # Examples
///
/// ```
/// use pattern_merge::{Error, PatternMerge};
///
/// let mut merger = PatternMerge::<Vec<u8>>::new([5, 2, 3], Some(21)).unwrap();
/// let err = merger.merge(vec![vec![1], vec![2]]).unwrap_err();
/// assert_eq!(err, Error::PatternMismatch { expected: 3, actual: 2 });
/// assert_eq!(
///     err.to_string(),
///     "number of collections must match pattern; expected 3 collections, actual: 2",
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The pattern was rejected at construction.
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    /// A total was supplied but it was zero.
    #[error("total must be at least 1")]
    InvalidTotal,

    /// The number of collections passed to a merge differs from the pattern length.
    #[error(
        "number of collections must match pattern; expected {expected} collections, actual: {actual}"
    )]
    PatternMismatch {
        /// The pattern length.
        expected: usize,
        /// The number of collections supplied.
        actual: usize,
    },

    /// The collections hold fewer elements than the configured total.
    #[error(
        "total number of elements in collections must be >= provided total; expected {expected} elements, actual: {actual}"
    )]
    InsufficientElements {
        /// The configured total.
        expected: usize,
        /// The number of elements across all collections.
        actual: usize,
    },
}
