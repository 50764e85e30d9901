use std::sync::Arc;
use std::time::Instant;

use report_core::{LookupKey, ReportDataset, StudentReport};
use tracing::info;

use crate::error::LoadError;
use crate::source::DatasetSource;

/// Loads the report dataset from its configured source.
#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn DatasetSource>,
}

impl ReportService {
    #[must_use]
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Fetch a fresh copy of the dataset.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the source cannot be read or decoded.
    pub async fn load_dataset(&self) -> Result<Arc<ReportDataset>, LoadError> {
        let started = Instant::now();
        let source = self.source.describe();

        // Failures are logged by whoever handles the error.
        let dataset = self.source.load().await?;
        info!(
            %source,
            students = dataset.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "report data loaded"
        );
        Ok(Arc::new(dataset))
    }

    /// Load the dataset and resolve one name against it.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` when the dataset cannot be loaded.
    pub async fn lookup(&self, key: &LookupKey) -> Result<Option<Arc<StudentReport>>, LoadError> {
        let dataset = self.load_dataset().await?;
        Ok(dataset.resolve(key))
    }
}
