//! Numeric types that can be sampled uniformly.

use std::fmt;
use std::hash::Hash;

use rand::distr::uniform::SampleUniform;

mod sealed {
    pub trait Sealed {}
}

/// A primitive numeric type the provider can sample.
///
/// Implemented for every primitive integer except `isize`, and for
/// `f32`/`f64`. Sealed.
pub trait Numeric:
    SampleUniform<Sampler: Send + Sync + 'static>
    + sealed::Sealed
    + Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Hashable identity of a value, used to key the distribution cache.
    type Key: Copy + Eq + Hash + Send + 'static;

    /// Name of the type, for diagnostics.
    const TYPE_NAME: &'static str;

    /// Range used when no explicit bounds are given.
    ///
    /// Integers span their representable range. Floats span the range of
    /// `i64` cast to the float type.
    fn default_bounds() -> (Self, Self);

    /// Converts a compile-time `i64` bound, or `None` if it does not fit.
    fn from_i64(value: i64) -> Option<Self>;

    /// `false` for NaN and infinities.
    fn is_finite(self) -> bool;

    /// Cache identity of this value.
    fn key(self) -> Self::Key;

    /// `self / 4`, for floats only. Exact for normal floats.
    ///
    /// Used to sample float ranges too wide for a direct uniform
    /// distribution.
    fn quartered(self) -> Option<Self>;

    /// `self * 4`, inverse of [`Numeric::quartered`].
    fn quadrupled(self) -> Self;
}

macro_rules! impl_integral {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            type Key = $ty;

            const TYPE_NAME: &'static str = stringify!($ty);

            fn default_bounds() -> (Self, Self) {
                (<$ty>::MIN, <$ty>::MAX)
            }

            fn from_i64(value: i64) -> Option<Self> {
                <$ty>::try_from(value).ok()
            }

            fn is_finite(self) -> bool {
                true
            }

            fn key(self) -> Self::Key {
                self
            }

            fn quartered(self) -> Option<Self> {
                None
            }

            fn quadrupled(self) -> Self {
                self
            }
        }
    )*};
}

macro_rules! impl_floating_point {
    ($($ty:ty => $bits:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            type Key = $bits;

            const TYPE_NAME: &'static str = stringify!($ty);

            #[allow(clippy::cast_precision_loss)]
            fn default_bounds() -> (Self, Self) {
                (i64::MIN as $ty, i64::MAX as $ty)
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_i64(value: i64) -> Option<Self> {
                Some(value as $ty)
            }

            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            fn key(self) -> Self::Key {
                self.to_bits()
            }

            fn quartered(self) -> Option<Self> {
                Some(self / 4.0)
            }

            fn quadrupled(self) -> Self {
                self * 4.0
            }
        }
    )*};
}

impl_integral!(
    i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize,
);
impl_floating_point!(f32 => u32, f64 => u64);
