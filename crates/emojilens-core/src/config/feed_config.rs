use serde::{Deserialize, Serialize};

use super::defaults;

/// Observation feed configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Bounded channel capacity between detectors and the cache writer.
    pub capacity: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::DEFAULT_FEED_CAPACITY,
        }
    }
}
