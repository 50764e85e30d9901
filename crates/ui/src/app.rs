use dioxus::prelude::*;

use crate::views::ReportApp;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "생글방글 학생 리포트" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "앗! 문제가 생겼어요 😢" }
                        pre { "{errors:?}" }
                    }
                },
                ReportApp {}
            }
        }
    }
}
