#![forbid(unsafe_code)]

pub mod error;
pub mod model;

pub use error::DatasetError;
pub use model::{LookupKey, ReportDataset, SkillPoint, StudentInfo, StudentReport, WeeklyEntry};
