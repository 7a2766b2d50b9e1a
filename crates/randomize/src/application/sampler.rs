//! Range-bound samplers.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::distr::Distribution;
use randomize_core::engine::BoxedEngine;

use crate::domain::bounds::Bounds;
use crate::domain::distribution_cache::RangeDistribution;
use crate::domain::numeric::Numeric;

/// Engine handle shared by a provider and every sampler it hands out.
pub(crate) type SharedEngine = Arc<Mutex<BoxedEngine>>;

/// A reusable generator bound to one inclusive range.
///
/// The distribution is fixed for the lifetime of the sampler. Each call to
/// [`Sampler::sample`] is an independent draw from the provider's engine.
/// Clones share both the distribution and the engine.
///
/// A sampler is also an endless [`Iterator`]:
///
/// ```
/// use randomize::RandomValueProvider;
///
/// let provider = RandomValueProvider::new();
/// let rolls: Vec<u8> = provider.make_sampler(1, 6).unwrap().take(10).collect();
/// assert!(rolls.iter().all(|roll| (1..=6).contains(roll)));
/// ```
#[derive(Clone)]
pub struct Sampler<T: Numeric> {
    bounds: Bounds<T>,
    distribution: Arc<RangeDistribution<T>>,
    engine: SharedEngine,
}

impl<T: Numeric> Sampler<T> {
    pub(crate) fn new(
        bounds: Bounds<T>,
        distribution: Arc<RangeDistribution<T>>,
        engine: SharedEngine,
    ) -> Self {
        Self {
            bounds,
            distribution,
            engine,
        }
    }

    /// Draws one value within the bound range.
    #[must_use]
    pub fn sample(&self) -> T {
        // A poisoned lock still guards a usable engine.
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        self.distribution.sample(&mut **engine)
    }

    /// Overwrites every slot of `dst` with a fresh draw.
    ///
    /// The engine lock is taken once for the whole slice.
    pub fn fill(&self, dst: &mut [T]) {
        let mut engine = self.engine.lock().unwrap_or_else(PoisonError::into_inner);
        for slot in dst {
            *slot = self.distribution.sample(&mut **engine);
        }
    }

    /// The range this sampler is bound to.
    #[must_use]
    pub fn bounds(&self) -> Bounds<T> {
        self.bounds
    }

    /// `true` if both samplers draw through the same memoized distribution.
    #[must_use]
    pub fn shares_distribution_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.distribution, &other.distribution)
    }

    /// Converts the sampler into an owned zero-argument closure.
    pub fn into_fn(self) -> impl Fn() -> T + Send + Sync + 'static {
        move || self.sample()
    }
}

impl<T: Numeric> Iterator for Sampler<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T: Numeric> fmt::Debug for Sampler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sampler")
            .field("type", &T::TYPE_NAME)
            .field("min", &self.bounds.min())
            .field("max", &self.bounds.max())
            .finish_non_exhaustive()
    }
}
