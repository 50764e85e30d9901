mod dataset;
mod lookup;
mod report;

pub use dataset::ReportDataset;
pub use lookup::LookupKey;
pub use report::{SkillPoint, StudentInfo, StudentReport, WeeklyEntry};
