//! Shared test doubles for the randomize library.

mod clock;
mod engine;

pub use clock::FixedClock;
pub use engine::{CountingEngine, DrawCounter, SequenceEngine};
