//! Test engines — scripted and instrumented `RngCore` implementations.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::RngCore;
use rand::rand_core::impls;

/// An engine that replays a predetermined sequence of 64-bit words, cycling
/// back to the start once exhausted.
///
/// `next_u32` yields the high half of the next word, so `u64::MAX` reads as
/// `u32::MAX` and `0` as `0` at either width.
#[derive(Debug, Clone)]
pub struct SequenceEngine {
    values: Vec<u64>,
    index: usize,
}

impl SequenceEngine {
    /// Create a new `SequenceEngine` with the given words.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    #[must_use]
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "SequenceEngine needs at least one word");
        Self { values, index: 0 }
    }

    /// An engine that always yields `word`.
    #[must_use]
    pub fn constant(word: u64) -> Self {
        Self::new(vec![word])
    }
}

impl RngCore for SequenceEngine {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.values[self.index % self.values.len()];
        self.index += 1;
        word
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

/// Shared handle onto the number of draws a `CountingEngine` served.
#[derive(Debug, Clone, Default)]
pub struct DrawCounter(Arc<AtomicU64>);

impl DrawCounter {
    /// Number of draws observed so far.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Wraps an engine and counts every call made on it.
///
/// The counter stays readable after the engine has been boxed and handed to
/// a provider.
#[derive(Debug)]
pub struct CountingEngine<R> {
    inner: R,
    draws: DrawCounter,
}

impl<R: RngCore> CountingEngine<R> {
    /// Wrap `inner`.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            draws: DrawCounter::default(),
        }
    }

    /// A handle that keeps reporting draws after the engine is moved.
    #[must_use]
    pub fn counter(&self) -> DrawCounter {
        self.draws.clone()
    }
}

impl<R: RngCore> RngCore for CountingEngine<R> {
    fn next_u32(&mut self) -> u32 {
        self.draws.bump();
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws.bump();
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.draws.bump();
        self.inner.fill_bytes(dst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_engine_cycles() {
        let mut engine = SequenceEngine::new(vec![1, 2, 3]);
        let words: Vec<u64> = (0..5).map(|_| engine.next_u64()).collect();
        assert_eq!(words, vec![1, 2, 3, 1, 2]);
    }

    #[test]
    fn test_sequence_engine_u32_is_high_half() {
        let mut engine = SequenceEngine::constant(0xDEAD_BEEF_0000_0001);
        assert_eq!(engine.next_u32(), 0xDEAD_BEEF);
    }

    #[test]
    #[should_panic(expected = "SequenceEngine needs at least one word")]
    fn test_sequence_engine_rejects_empty_script() {
        let _ = SequenceEngine::new(vec![]);
    }

    #[test]
    fn test_counting_engine_counts_through_moved_engine() {
        let engine = CountingEngine::new(SequenceEngine::constant(7));
        let counter = engine.counter();
        let mut boxed: Box<dyn RngCore + Send> = Box::new(engine);

        boxed.next_u64();
        boxed.next_u32();

        assert_eq!(counter.get(), 2);
    }
}
