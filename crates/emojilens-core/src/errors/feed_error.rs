/// Observation feed errors.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("observation feed closed; dropped label from {source_name}")]
    Closed { source_name: String },

    #[error("observation feed consumer failed: {reason}")]
    ConsumerFailed { reason: String },
}
