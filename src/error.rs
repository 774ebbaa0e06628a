//! Validation failures surfaced to whoever presents the grades.

use thiserror::Error;

/// Why a total/score pair could not be graded.
///
/// Every variant aborts the current calculation; the message is meant to be
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The total was not an integer, or was zero or negative.
    #[error("Total number must be a positive integer.")]
    InvalidTotal,

    /// A whitespace-separated score token did not parse as an integer.
    #[error("Invalid score \"{token}\": scores must be integers.")]
    InvalidScore { token: String },

    /// The number of scores differs from the declared total.
    #[error("Please enter {expected} valid scores.")]
    CountMismatch { expected: String },
}
