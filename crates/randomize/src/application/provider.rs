//! The random value provider.
//!
//! A provider owns one engine and one distribution cache. It is built once,
//! cloned cheaply, and passed to whatever needs random values.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::RngCore;
use randomize_core::clock::{Clock, SystemClock};
use randomize_core::engine::{BoxedEngine, engine_from_clock};
use randomize_core::error::RandomizeError;
use tracing::{debug, instrument};

use super::config::ProviderConfig;
use super::sampler::{Sampler, SharedEngine};
use crate::domain::bounds::Bounds;
use crate::domain::distribution_cache::{DistributionCache, build_distribution};
use crate::domain::numeric::Numeric;

/// Produces uniformly distributed values of any primitive numeric type.
///
/// ```
/// use randomize::RandomValueProvider;
///
/// let provider = RandomValueProvider::new();
///
/// let roll = provider.sample_once(1, 6).unwrap();
/// assert!((1..=6).contains(&roll));
///
/// let temperature = provider.make_sampler(-16.0, 64.0).unwrap();
/// assert!((-16.0..=64.0).contains(&temperature.sample()));
///
/// let small: i16 = provider.sample_default();
/// let ratio = provider.sample_const::<f64, -2, 3>().unwrap();
/// assert!((-2.0..=3.0).contains(&ratio));
/// # let _ = small;
/// ```
#[derive(Clone)]
pub struct RandomValueProvider {
    inner: Arc<Inner>,
}

struct Inner {
    engine: SharedEngine,
    cache: Mutex<DistributionCache>,
    config: ProviderConfig,
    seed: Option<u64>,
}

impl RandomValueProvider {
    /// A provider with the default configuration, seeded from the system
    /// clock.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a provider.
    #[must_use]
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// The configuration this provider was built with.
    #[must_use]
    pub fn config(&self) -> ProviderConfig {
        self.inner.config
    }

    /// The clock-derived seed, or `None` when the engine was injected.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.inner.seed
    }

    /// Number of distributions currently memoized.
    #[must_use]
    pub fn cached_distributions(&self) -> usize {
        self.lock_cache().len()
    }

    /// Draws one value in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `RandomizeError::InvalidRange` if `min > max` and
    /// `RandomizeError::NonFiniteRange` for NaN or infinite float bounds.
    /// Finite float ranges of any width are accepted.
    pub fn sample_once<T: Numeric>(&self, min: T, max: T) -> Result<T, RandomizeError> {
        Ok(self.make_sampler(min, max)?.sample())
    }

    /// Returns a reusable sampler bound to `[min, max]`.
    ///
    /// With memoization on, samplers for identical bounds share one
    /// distribution object. Building a sampler never draws from the engine.
    ///
    /// # Errors
    ///
    /// Same as [`RandomValueProvider::sample_once`].
    #[instrument(level = "trace", skip(self))]
    pub fn make_sampler<T: Numeric>(&self, min: T, max: T) -> Result<Sampler<T>, RandomizeError> {
        self.sampler(Bounds::new(min, max)?)
    }

    /// Returns a reusable sampler for already validated bounds.
    ///
    /// # Errors
    ///
    /// Returns `RandomizeError::NonFiniteRange` if a float range cannot be
    /// sampled even at quarter scale.
    pub fn sampler<T: Numeric>(&self, bounds: Bounds<T>) -> Result<Sampler<T>, RandomizeError> {
        let distribution = if self.inner.config.memoize {
            self.lock_cache().get_or_build(&bounds)?
        } else {
            Arc::new(build_distribution(&bounds)?)
        };
        Ok(Sampler::new(
            bounds,
            distribution,
            Arc::clone(&self.inner.engine),
        ))
    }

    /// Draws one value over the default range of `T`.
    ///
    /// Integers span their whole type; floats span `[i64::MIN, i64::MAX]`.
    ///
    /// # Panics
    ///
    /// Never in practice: default ranges are finite and ordered.
    #[must_use]
    pub fn sample_default<T: Numeric>(&self) -> T {
        self.default_sampler().sample()
    }

    /// Returns a sampler over the default range of `T`.
    ///
    /// # Panics
    ///
    /// Never in practice: default ranges are finite and ordered.
    #[must_use]
    pub fn default_sampler<T: Numeric>(&self) -> Sampler<T> {
        self.sampler(Bounds::full())
            .expect("default bounds are finite and ordered")
    }

    /// Draws one value in `[MIN, MAX]`, with the bounds fixed as generic
    /// parameters.
    ///
    /// An inverted pair fails to compile.
    ///
    /// # Errors
    ///
    /// Returns `RandomizeError::UnrepresentableBound` if `MIN` or `MAX` does
    /// not fit in `T`.
    pub fn sample_const<T: Numeric, const MIN: i64, const MAX: i64>(
        &self,
    ) -> Result<T, RandomizeError> {
        Ok(self.const_sampler::<T, MIN, MAX>()?.sample())
    }

    /// Returns a sampler over `[MIN, MAX]`, with the bounds fixed as generic
    /// parameters.
    ///
    /// ```
    /// let provider = randomize::RandomValueProvider::new();
    /// let dice = provider.const_sampler::<u8, 1, 6>().unwrap().into_fn();
    /// assert!((1..=6).contains(&dice()));
    /// ```
    ///
    /// The bounds are checked when the call is compiled:
    ///
    /// ```compile_fail
    /// let provider = randomize::RandomValueProvider::new();
    /// let _ = provider.const_sampler::<i32, 3, -2>();
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`RandomValueProvider::sample_const`].
    pub fn const_sampler<T: Numeric, const MIN: i64, const MAX: i64>(
        &self,
    ) -> Result<Sampler<T>, RandomizeError> {
        const { assert!(MIN <= MAX, "compile-time range requires MIN <= MAX") };
        self.sampler(Bounds::from_i64(MIN, MAX)?)
    }

    /// Fills `dst` with independent draws in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Same as [`RandomValueProvider::sample_once`]. `dst` is left untouched
    /// on error.
    pub fn fill<T: Numeric>(&self, dst: &mut [T], min: T, max: T) -> Result<(), RandomizeError> {
        self.make_sampler(min, max)?.fill(dst);
        Ok(())
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, DistributionCache> {
        // Entries are inserted whole; a poisoned cache is still consistent.
        self.inner
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomValueProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomValueProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomValueProvider")
            .field("config", &self.inner.config)
            .field("seed", &self.inner.seed)
            .finish_non_exhaustive()
    }
}

/// Builder for [`RandomValueProvider`].
///
/// Without an explicit clock or engine, the engine is seeded from the
/// system clock at `build` time.
#[derive(Default)]
pub struct ProviderBuilder {
    config: ProviderConfig,
    engine: Option<(BoxedEngine, Option<u64>)>,
}

impl ProviderBuilder {
    /// Replaces the configuration.
    #[must_use]
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    /// Seeds the default engine from `clock` instead of the system clock.
    #[must_use]
    pub fn clock(mut self, clock: &dyn Clock) -> Self {
        let (engine, seed) = engine_from_clock(clock);
        self.engine = Some((engine, Some(seed)));
        self
    }

    /// Uses `engine` as the bit source instead of a clock-seeded one.
    #[must_use]
    pub fn engine(mut self, engine: impl RngCore + Send + 'static) -> Self {
        let engine: BoxedEngine = Box::new(engine);
        self.engine = Some((engine, None));
        self
    }

    /// Builds the provider.
    #[must_use]
    pub fn build(self) -> RandomValueProvider {
        let (engine, seed) = self.engine.unwrap_or_else(|| {
            let (engine, seed) = engine_from_clock(&SystemClock);
            (engine, Some(seed))
        });

        debug!(
            seed = ?seed,
            memoize = self.config.memoize,
            cache_capacity = self.config.cache_capacity,
            "random value provider ready"
        );

        RandomValueProvider {
            inner: Arc::new(Inner {
                engine: Arc::new(Mutex::new(engine)),
                cache: Mutex::new(DistributionCache::with_capacity(self.config.cache_capacity)),
                config: self.config,
                seed,
            }),
        }
    }
}
