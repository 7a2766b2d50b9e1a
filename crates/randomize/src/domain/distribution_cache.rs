//! Memoized uniform distributions keyed by numeric type and range.
//!
//! Each numeric type gets its own table, so `(1, 6)` as `i32` and `(1, 6)`
//! as `i64` never share an entry.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use rand::distr::uniform;
use rand::distr::{Distribution, Uniform};
use randomize_core::error::RandomizeError;
use tracing::{debug, trace};

use super::bounds::Bounds;
use super::numeric::Numeric;

type Table<T> = HashMap<(<T as Numeric>::Key, <T as Numeric>::Key), Arc<RangeDistribution<T>>>;

/// Uniform distribution over one validated inclusive range.
///
/// Float ranges whose span overflows the type (e.g. `0.0..=f64::MAX`) are
/// sampled over the range divided by four and scaled back up.
pub(crate) struct RangeDistribution<T: Numeric> {
    uniform: Uniform<T>,
    /// Original bounds, present only when `uniform` covers the quartered range.
    quartered: Option<Bounds<T>>,
}

impl<T: Numeric> Distribution<T> for RangeDistribution<T> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        let value = self.uniform.sample(rng);
        let Some(bounds) = self.quartered else {
            return value;
        };

        // Quartering rounds subnormal ends, so clamp after scaling.
        let value = value.quadrupled();
        if value < bounds.min() {
            bounds.min()
        } else if value > bounds.max() {
            bounds.max()
        } else {
            value
        }
    }
}

/// Builds the uniform distribution for `bounds`.
///
/// # Errors
///
/// Returns `RandomizeError::InvalidRange` for an empty range, and
/// `RandomizeError::NonFiniteRange` when not even the quartered span of a
/// float range is finite.
pub(crate) fn build_distribution<T: Numeric>(
    bounds: &Bounds<T>,
) -> Result<RangeDistribution<T>, RandomizeError> {
    let (min, max) = (bounds.min(), bounds.max());
    match Uniform::new_inclusive(min, max) {
        Ok(uniform) => Ok(RangeDistribution {
            uniform,
            quartered: None,
        }),
        Err(uniform::Error::EmptyRange) => Err(RandomizeError::invalid_range(&min, &max)),
        Err(uniform::Error::NonFinite) => min
            .quartered()
            .zip(max.quartered())
            .and_then(|(low, high)| Uniform::new_inclusive(low, high).ok())
            .map(|uniform| {
                debug!(
                    ty = T::TYPE_NAME,
                    %min,
                    %max,
                    "float span overflows, sampling quartered range"
                );
                RangeDistribution {
                    uniform,
                    quartered: Some(*bounds),
                }
            })
            .ok_or_else(|| RandomizeError::non_finite_range(&min, &max)),
    }
}

/// Cache of previously built distributions, bounded by entry count.
pub(crate) struct DistributionCache {
    tables: HashMap<TypeId, Box<dyn Any + Send>>,
    len: usize,
    capacity: usize,
}

impl DistributionCache {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            tables: HashMap::new(),
            len: 0,
            capacity,
        }
    }

    /// Number of cached distributions across all types.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns the cached distribution for `bounds`, building it on a miss.
    ///
    /// Once the cache is full, misses are built and returned without being
    /// stored.
    pub(crate) fn get_or_build<T: Numeric>(
        &mut self,
        bounds: &Bounds<T>,
    ) -> Result<Arc<RangeDistribution<T>>, RandomizeError> {
        let key = bounds.key();
        let table = table_mut::<T>(&mut self.tables);
        if let Some(distribution) = table.get(&key) {
            return Ok(Arc::clone(distribution));
        }

        let distribution = Arc::new(build_distribution(bounds)?);
        trace!(
            ty = T::TYPE_NAME,
            min = %bounds.min(),
            max = %bounds.max(),
            "built uniform distribution"
        );

        if self.len >= self.capacity {
            debug!(
                capacity = self.capacity,
                ty = T::TYPE_NAME,
                "distribution cache full, not memoizing"
            );
            return Ok(distribution);
        }

        table.insert(key, Arc::clone(&distribution));
        self.len += 1;
        Ok(distribution)
    }
}

/// Table for `T`, created on first use.
///
/// # Panics
///
/// Panics if a table is stored under a `TypeId` other than its own.
fn table_mut<T: Numeric>(tables: &mut HashMap<TypeId, Box<dyn Any + Send>>) -> &mut Table<T> {
    tables
        .entry(TypeId::of::<T>())
        .or_insert_with(|| Box::new(Table::<T>::new()))
        .downcast_mut::<Table<T>>()
        .expect("distribution table keyed by its own TypeId")
}
