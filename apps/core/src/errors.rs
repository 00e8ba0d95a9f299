use thiserror::Error;

/// Library-level error type.
///
/// `parse_resume` and `score_match` never return this: they degrade to sentinel or
/// absent values instead. It covers the edges where the crate talks to its callers:
/// configuration, JSON exchange, and injected cache backends.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Cache error: {0}")]
    Cache(String),
}

impl CoreError {
    /// Stable machine-readable code, for callers that surface errors over a wire.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::InvalidConfig(_) => "INVALID_CONFIG",
            CoreError::Serialization(_) => "SERIALIZATION_ERROR",
            CoreError::Cache(_) => "CACHE_ERROR",
        }
    }
}
