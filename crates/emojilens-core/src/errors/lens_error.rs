use super::{CatalogError, ConfigError, FeedError};

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum LensError {
    #[error("catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("feed error: {0}")]
    FeedError(#[from] FeedError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
