//! Engine seam and clock-based seeding.
//!
//! In production the engine is a `StdRng` seeded once from a clock reading.
//! In tests a scripted implementation is injected instead.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::clock::Clock;

/// Pseudo-random bit source as held by a provider.
pub type BoxedEngine = Box<dyn RngCore + Send>;

/// Derives a seed from the nanosecond reading of `clock`.
///
/// Falls back to microsecond resolution for instants outside the range
/// representable in nanoseconds.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn seed_from_clock(clock: &dyn Clock) -> u64 {
    let now = clock.now();
    now.timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64
}

/// Builds the default engine, seeded from `clock`.
///
/// Returns the engine together with the seed it was built from.
#[must_use]
pub fn engine_from_clock(clock: &dyn Clock) -> (BoxedEngine, u64) {
    let seed = seed_from_clock(clock);
    debug!(seed, "seeded engine from clock");
    let engine: BoxedEngine = Box::new(StdRng::seed_from_u64(seed));
    (engine, seed)
}
