//! Error types.

use std::fmt;

use thiserror::Error;

/// Top-level error type for random value generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomizeError {
    /// The lower bound exceeds the upper bound.
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange {
        /// The requested lower bound, rendered for display.
        min: String,
        /// The requested upper bound, rendered for display.
        max: String,
    },

    /// A floating-point bound is NaN or infinite.
    #[error("non-finite range: [{min}, {max}]")]
    NonFiniteRange {
        /// The requested lower bound, rendered for display.
        min: String,
        /// The requested upper bound, rendered for display.
        max: String,
    },

    /// A compile-time `i64` bound does not fit in the target numeric type.
    #[error("bound {value} is not representable as {type_name}")]
    UnrepresentableBound {
        /// The bound as written.
        value: i64,
        /// Name of the target numeric type.
        type_name: &'static str,
    },
}

impl RandomizeError {
    /// Builds an `InvalidRange` error from any displayable bounds.
    pub fn invalid_range(min: &impl fmt::Display, max: &impl fmt::Display) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Builds a `NonFiniteRange` error from any displayable bounds.
    pub fn non_finite_range(min: &impl fmt::Display, max: &impl fmt::Display) -> Self {
        Self::NonFiniteRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
