/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {reason}")]
    Parse { reason: String },

    #[error("config file unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },
}
