use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use report_core::ReportDataset;

use crate::error::LoadError;

/// Where the report dataset comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Short human-readable origin, used in log lines.
    fn describe(&self) -> String;

    /// Fetch and decode the full dataset.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the resource cannot be read or is not a valid dataset.
    async fn load(&self) -> Result<ReportDataset, LoadError>;
}

//
// ─── HTTP ─────────────────────────────────────────────────────────────────────
//

/// Plain GET against a fixed URL. No auth, no query parameters.
#[derive(Clone)]
pub struct HttpDatasetSource {
    client: Client,
    url: String,
}

impl HttpDatasetSource {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn load(&self) -> Result<ReportDataset, LoadError> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::HttpStatus(response.status()));
        }

        let body = response.bytes().await?;
        Ok(ReportDataset::from_slice(&body)?)
    }
}

//
// ─── FILE ─────────────────────────────────────────────────────────────────────
//

/// Reads the dataset from a local JSON file on every load.
#[derive(Clone, Debug)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    async fn load(&self) -> Result<ReportDataset, LoadError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(ReportDataset::from_slice(&bytes)?)
    }
}

//
// ─── IN-MEMORY ────────────────────────────────────────────────────────────────
//

/// Serves a fixed dataset. Useful for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct StaticDatasetSource {
    dataset: ReportDataset,
}

impl StaticDatasetSource {
    #[must_use]
    pub fn new(dataset: ReportDataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DatasetSource for StaticDatasetSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn load(&self) -> Result<ReportDataset, LoadError> {
        Ok(self.dataset.clone())
    }
}
