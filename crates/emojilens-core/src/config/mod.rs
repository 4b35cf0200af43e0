//! Configuration for every subsystem, loaded from TOML.
//!
//! Every section is `#[serde(default)]`, so an empty document yields the defaults
//! in [`defaults`].

pub mod cache_config;
pub mod catalog_config;
pub mod defaults;
pub mod feed_config;
pub mod gate_config;
pub mod matcher_config;
pub mod observability_config;

pub use cache_config::CacheConfig;
pub use catalog_config::CatalogConfig;
pub use feed_config::FeedConfig;
pub use gate_config::GateConfig;
pub use matcher_config::MatcherConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level emojilens configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub catalog: CatalogConfig,
    pub matcher: MatcherConfig,
    pub cache: CacheConfig,
    pub gate: GateConfig,
    pub feed: FeedConfig,
    pub observability: ObservabilityConfig,
}

impl LensConfig {
    /// Parse a TOML document. Missing sections and fields fall back to defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }
}
