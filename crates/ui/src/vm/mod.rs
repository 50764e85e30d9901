mod report_vm;
mod score_fmt;

pub use report_vm::{
    HighlightSentenceVm, ReportVm, SkillBarVm, WeeklyRowVm, map_report,
};
pub use score_fmt::{format_percent, format_score};
