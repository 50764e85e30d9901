use serde::{Deserialize, Serialize};

//
// ─── HEADER ───────────────────────────────────────────────────────────────────
//

/// Header block of a report: who it is about and which period it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    #[serde(rename = "class")]
    pub class_label: String,
    #[serde(rename = "reportTitle")]
    pub title: String,
    pub period: String,
}

//
// ─── SEQUENCES ────────────────────────────────────────────────────────────────
//

/// One bar of the skill chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPoint {
    #[serde(rename = "name")]
    pub label: String,
    pub score: f64,
}

/// One row of the weekly achievement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyEntry {
    pub date: String,
    pub topic: String,
    #[serde(rename = "performance")]
    pub performance_label: String,
}

//
// ─── REPORT ───────────────────────────────────────────────────────────────────
//

/// Everything shown on one student's report page.
///
/// All sequences keep the order they had in the source document. Nothing in
/// the application sorts or deduplicates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReport {
    #[serde(rename = "studentInfo")]
    pub info: StudentInfo,
    #[serde(rename = "skillsData")]
    pub skill_series: Vec<SkillPoint>,
    #[serde(rename = "sentences")]
    pub highlight_sentences: Vec<String>,
    #[serde(rename = "learningHistory")]
    pub weekly_history: Vec<WeeklyEntry>,
    #[serde(rename = "nextGoals")]
    pub next_goals: Vec<String>,
    #[serde(rename = "teacherComment")]
    pub teacher_comment: String,
}

impl StudentReport {
    /// Highest score in the skill series, if any.
    #[must_use]
    pub fn max_score(&self) -> Option<f64> {
        self.skill_series
            .iter()
            .map(|point| point.score)
            .fold(None, |acc, score| match acc {
                Some(max) if max >= score => Some(max),
                _ => Some(score),
            })
    }
}
