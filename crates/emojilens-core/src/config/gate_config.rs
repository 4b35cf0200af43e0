use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Refresh gate configuration. All intervals in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub classify_interval_ms: u64,
    pub display_interval_ms: u64,
    /// Display interval while accessibility narration is running.
    pub narration_display_interval_ms: u64,
}

impl GateConfig {
    pub fn classify_interval(&self) -> Duration {
        Duration::from_millis(self.classify_interval_ms)
    }

    pub fn display_interval(&self) -> Duration {
        Duration::from_millis(self.display_interval_ms)
    }

    pub fn narration_display_interval(&self) -> Duration {
        Duration::from_millis(self.narration_display_interval_ms)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            classify_interval_ms: defaults::DEFAULT_CLASSIFY_INTERVAL_MS,
            display_interval_ms: defaults::DEFAULT_DISPLAY_INTERVAL_MS,
            narration_display_interval_ms: defaults::DEFAULT_NARRATION_DISPLAY_INTERVAL_MS,
        }
    }
}
