/// Symbol catalog load errors.
///
/// Never fatal: `Catalog::load_or_empty` downgrades every variant to an empty catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog source missing: {path}")]
    SourceMissing { path: String },

    #[error("catalog source unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("catalog source malformed: {reason}")]
    Malformed { reason: String },
}
