mod catalog_error;
mod config_error;
mod feed_error;
mod lens_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use feed_error::FeedError;
pub use lens_error::LensError;

/// Convenience alias used across the workspace.
pub type LensResult<T> = Result<T, LensError>;
