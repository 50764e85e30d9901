use thiserror::Error;

/// Errors raised while decoding a report dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("invalid report dataset: {0}")]
    Json(#[from] serde_json::Error),
}
