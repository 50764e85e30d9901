//! Shared error types for the services crate.

use std::path::PathBuf;

use report_core::DatasetError;
use thiserror::Error;

/// Errors emitted while loading a report dataset.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("report data request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] DatasetError),
}
