//! Numeric type model, ranges and the distribution cache.

pub mod bounds;
pub(crate) mod distribution_cache;
pub mod numeric;
