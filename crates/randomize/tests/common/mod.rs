//! Shared helpers for randomize integration tests.
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use randomize::RandomValueProvider;
use randomize_test_support::{CountingEngine, DrawCounter, FixedClock};

/// Number of trials used by the range properties.
pub const TRIALS: usize = 10_000;

/// A provider seeded from the system clock, as in production.
pub fn provider() -> RandomValueProvider {
    RandomValueProvider::new()
}

/// A provider seeded from a pinned clock.
pub fn pinned_provider() -> RandomValueProvider {
    RandomValueProvider::builder()
        .clock(&FixedClock::pinned())
        .build()
}

/// A provider whose engine reports how many draws it served.
pub fn counting_provider() -> (RandomValueProvider, DrawCounter) {
    let engine = CountingEngine::new(StdRng::seed_from_u64(0x5EED));
    let draws = engine.counter();
    let provider = RandomValueProvider::builder().engine(engine).build();
    (provider, draws)
}
