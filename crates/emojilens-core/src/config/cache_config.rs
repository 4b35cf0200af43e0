use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Prediction cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum age of a cache entry in milliseconds.
    pub lifespan_ms: u64,
    /// Seed for the glyph picker. `None` seeds from OS entropy.
    pub picker_seed: Option<u64>,
}

impl CacheConfig {
    pub fn lifespan(&self) -> Duration {
        Duration::from_millis(self.lifespan_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            lifespan_ms: defaults::DEFAULT_LIFESPAN_MS,
            picker_seed: None,
        }
    }
}
