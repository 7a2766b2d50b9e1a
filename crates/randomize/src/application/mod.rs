//! Provider, samplers and configuration.

pub mod config;
pub mod provider;
pub mod sampler;
