use dioxus::prelude::*;

use crate::vm::{HighlightSentenceVm, ReportVm, SkillBarVm, WeeklyRowVm};

#[component]
pub fn ReportView(report: ReportVm, on_back: Callback<()>) -> Element {
    rsx! {
        div { class: "card report",
            header { class: "report-header",
                div {
                    h1 { class: "report-title", "{report.title}" }
                    p { class: "report-period", "{report.period}" }
                }
                div { class: "report-student",
                    div { class: "report-student-name", "{report.name}" }
                    div { class: "report-student-class", "{report.class_label}" }
                }
            }

            Section { icon: "⭐", title: "글쓰기 성장 그래프",
                p { class: "section-caption", "첫 수업부터 지금까지 이만큼 성장했어요!" }
                SkillChart { bars: report.skill_bars.clone() }
            }

            Section { icon: "✨", title: "이달의 반짝반짝 문장",
                p { class: "section-caption", "{report.name} 학생이 쓴 멋진 문장이에요!" }
                SentenceList { sentences: report.sentences.clone() }
            }

            Section { icon: "📖", title: "주차별 목표 달성률",
                WeeklyTable { rows: report.weekly_rows.clone() }
            }

            Section { icon: "🎯", title: "다음 달의 도전!",
                div { class: "goals",
                    for goal in report.goals.iter() {
                        div { class: "goal", "🎯  {goal}" }
                    }
                }
            }

            div { class: "section comment",
                div { class: "section-heading",
                    span { class: "section-icon", "💬" }
                    h2 { "선생님의 응원 메시지" }
                }
                p { class: "comment-body", "{report.teacher_comment}" }
            }

            div { class: "report-footer",
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "처음으로 돌아가기 👋"
                }
            }
        }
    }
}

#[component]
fn Section(icon: &'static str, title: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "section",
            div { class: "section-heading",
                span { class: "section-icon", "{icon}" }
                h2 { "{title}" }
            }
            {children}
        }
    }
}

/// Vertical bar chart. Heights are precomputed by the view model.
#[component]
fn SkillChart(bars: Vec<SkillBarVm>) -> Element {
    rsx! {
        div { class: "chart",
            for bar in bars {
                div { class: "chart-column",
                    span { class: "chart-value", "{bar.score_str}" }
                    div { class: "chart-track",
                        div { class: "chart-bar", style: "height: {bar.height}" }
                    }
                    span { class: "chart-label", "{bar.label}" }
                }
            }
        }
    }
}

#[component]
fn SentenceList(sentences: Vec<HighlightSentenceVm>) -> Element {
    rsx! {
        ul { class: "sentences",
            for sentence in sentences {
                li { class: "sentence",
                    span { class: "sentence-number", "{sentence.number}" }
                    span { class: "sentence-text", "{sentence.text}" }
                }
            }
        }
    }
}

#[component]
fn WeeklyTable(rows: Vec<WeeklyRowVm>) -> Element {
    rsx! {
        div { class: "weekly",
            for row in rows {
                div { class: "weekly-row",
                    div { class: "weekly-date", "{row.date}" }
                    div { class: "weekly-topic", "{row.topic}" }
                    div { class: "weekly-performance", "{row.performance}" }
                }
            }
        }
    }
}
