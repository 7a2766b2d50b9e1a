//! Randomize Core — shared abstractions.
//!
//! This crate defines the error taxonomy, the clock abstraction and the
//! engine seam that the sampling crate builds on. It contains no sampling
//! logic.

pub mod clock;
pub mod engine;
pub mod error;
