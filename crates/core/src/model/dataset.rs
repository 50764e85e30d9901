use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DatasetError;
use crate::model::lookup::LookupKey;
use crate::model::report::StudentReport;

/// All reports known to the application, keyed by student name.
///
/// A dataset is immutable once decoded. Reloading produces a new value that
/// replaces the old one wholesale. Reports are shared through `Arc` so a
/// resolved report points into the dataset instead of copying it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDataset {
    students: HashMap<String, Arc<StudentReport>>,
}

impl ReportDataset {
    /// Decode a dataset from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` if the text is not a valid dataset document.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Decode a dataset from raw response bytes.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` if the bytes are not a valid dataset document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Build a dataset keyed by each report's own student name.
    #[must_use]
    pub fn from_reports(reports: impl IntoIterator<Item = StudentReport>) -> Self {
        let students = reports
            .into_iter()
            .map(|report| (report.info.name.clone(), Arc::new(report)))
            .collect();
        Self { students }
    }

    /// Exact-match lookup. No trimming or case folding is applied.
    #[must_use]
    pub fn resolve(&self, key: &LookupKey) -> Option<Arc<StudentReport>> {
        self.students.get(key.as_str()).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Student names in sorted order, for diagnostics.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.students.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
