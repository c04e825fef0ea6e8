//! Error types shared by every operation in the crate.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, SimplexError>;

/// Failure modes of simplex construction, hypersum calculation and the
/// closed-form sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimplexError {
    /// A parameter fell outside its admissible range.
    #[error("invalid parameter `{parameter}`: must be {constraint} (got {value})")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable constraint the parameter violates.
        constraint: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// An internal arithmetic invariant did not hold.
    #[error("arithmetic inconsistency: {detail}")]
    ArithmeticInconsistency {
        /// Description of the violated invariant.
        detail: String,
    },
}

impl SimplexError {
    /// Checks that `value >= 1`, naming `parameter` in the error otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`SimplexError::InvalidParameter`] when `value` is zero.
    pub fn require_positive(parameter: &'static str, value: usize) -> Result<usize> {
        if value == 0 {
            Err(Self::InvalidParameter {
                parameter,
                constraint: ">= 1",
                value,
            })
        } else {
            Ok(value)
        }
    }
}
