/// Error types for catalog loading.
///
/// Only loading can fail. Every query on a loaded catalog is total:
/// absence comes back as `None` or an empty result, never as an error.

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("dataset parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read dataset from {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("duplicate skill id: {0}")]
    DuplicateId(String),

    #[error("invalid skill id '{0}': ids must be lowercase slugs like 'component-scaffold'")]
    InvalidId(String),
}
