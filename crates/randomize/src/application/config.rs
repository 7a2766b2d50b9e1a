//! Provider configuration.

use serde::{Deserialize, Serialize};

/// Default upper bound on the number of memoized distributions.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Tuning knobs for a `RandomValueProvider`.
///
/// Missing fields deserialize to their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Reuse one distribution object for identical `(type, min, max)`.
    pub memoize: bool,
    /// Maximum number of memoized distributions.
    pub cache_capacity: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            memoize: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}
