//! Randomize — typed uniform random values.
//!
//! Draw one value in an inclusive range, bind a range once into a reusable
//! [`Sampler`], or fix the range in generic parameters. Identical ranges
//! share one memoized distribution object per provider.
//!
//! ```
//! use randomize::RandomValueProvider;
//!
//! let provider = RandomValueProvider::new();
//!
//! let die = provider.make_sampler(1, 12).unwrap();
//! let rolls = [die.sample(), die.sample(), die.sample()];
//! assert!(rolls.iter().all(|roll| (1..=12).contains(roll)));
//!
//! let mut noise = vec![0.0_f32; provider.sample_once(5, 1_000).unwrap()];
//! provider.fill(&mut noise, -100.0, 100.0).unwrap();
//! ```

pub mod application;
pub mod domain;

pub use application::config::ProviderConfig;
pub use application::provider::{ProviderBuilder, RandomValueProvider};
pub use application::sampler::Sampler;
pub use domain::bounds::Bounds;
pub use domain::numeric::Numeric;
pub use randomize_core::error::RandomizeError;
