use report_core::StudentReport;

use crate::vm::score_fmt::{format_percent, format_score};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillBarVm {
    pub label: String,
    pub score_str: String,
    /// Bar height relative to the tallest bar, as a CSS percentage.
    pub height: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightSentenceVm {
    /// 1-based position shown in the badge.
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeeklyRowVm {
    pub date: String,
    pub topic: String,
    pub performance: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportVm {
    pub title: String,
    pub period: String,
    pub name: String,
    pub class_label: String,
    pub skill_bars: Vec<SkillBarVm>,
    pub sentences: Vec<HighlightSentenceVm>,
    pub weekly_rows: Vec<WeeklyRowVm>,
    pub goals: Vec<String>,
    pub teacher_comment: String,
}

impl From<&StudentReport> for ReportVm {
    fn from(report: &StudentReport) -> Self {
        let max = report.max_score().filter(|max| *max > 0.0);

        let skill_bars = report
            .skill_series
            .iter()
            .map(|point| {
                let ratio = max.map_or(0.0, |max| (point.score / max).clamp(0.0, 1.0));
                SkillBarVm {
                    label: point.label.clone(),
                    score_str: format_score(point.score),
                    height: format_percent(ratio),
                }
            })
            .collect();

        let sentences = report
            .highlight_sentences
            .iter()
            .enumerate()
            .map(|(index, text)| HighlightSentenceVm {
                number: index + 1,
                text: text.clone(),
            })
            .collect();

        let weekly_rows = report
            .weekly_history
            .iter()
            .map(|entry| WeeklyRowVm {
                date: entry.date.clone(),
                topic: entry.topic.clone(),
                performance: entry.performance_label.clone(),
            })
            .collect();

        Self {
            title: report.info.title.clone(),
            period: report.info.period.clone(),
            name: report.info.name.clone(),
            class_label: report.info.class_label.clone(),
            skill_bars,
            sentences,
            weekly_rows,
            goals: report.next_goals.clone(),
            teacher_comment: report.teacher_comment.clone(),
        }
    }
}

#[must_use]
pub fn map_report(report: &StudentReport) -> ReportVm {
    ReportVm::from(report)
}
