//! Inclusive value ranges.

use randomize_core::error::RandomizeError;

use super::numeric::Numeric;

/// An inclusive `[min, max]` range of a numeric type.
///
/// Construction guarantees `min <= max` and, for floats, that both ends are
/// finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T: Numeric> {
    min: T,
    max: T,
}

impl<T: Numeric> Bounds<T> {
    /// Validates and builds a range.
    ///
    /// # Errors
    ///
    /// Returns `RandomizeError::NonFiniteRange` if either end is NaN or
    /// infinite, and `RandomizeError::InvalidRange` if `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, RandomizeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(RandomizeError::non_finite_range(&min, &max));
        }
        if min > max {
            return Err(RandomizeError::invalid_range(&min, &max));
        }
        Ok(Self { min, max })
    }

    /// The default range of `T`.
    #[must_use]
    pub fn full() -> Self {
        let (min, max) = T::default_bounds();
        Self { min, max }
    }

    /// Builds a range from `i64` bounds, as given through const generics.
    ///
    /// # Errors
    ///
    /// Returns `RandomizeError::UnrepresentableBound` if a bound does not fit
    /// in `T`, and `RandomizeError::InvalidRange` if `min > max`.
    pub fn from_i64(min: i64, max: i64) -> Result<Self, RandomizeError> {
        let convert = |value: i64| {
            T::from_i64(value).ok_or(RandomizeError::UnrepresentableBound {
                value,
                type_name: T::TYPE_NAME,
            })
        };
        Self::new(convert(min)?, convert(max)?)
    }

    /// Lower bound (inclusive).
    #[must_use]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    #[must_use]
    pub fn max(&self) -> T {
        self.max
    }

    /// `true` if `value` lies within the range.
    #[must_use]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// Cache identity of the range.
    pub(crate) fn key(&self) -> (T::Key, T::Key) {
        (self.min.key(), self.max.key())
    }
}
