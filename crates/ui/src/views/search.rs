use dioxus::prelude::*;

/// Name entry form.
///
/// The typed name lives in this component, so it starts empty every time the
/// form is shown again.
#[component]
pub fn SearchView(on_submit: Callback<String>) -> Element {
    let mut name = use_signal(String::new);

    rsx! {
        div { class: "card",
            h1 { class: "search-title",
                span { class: "sparkle", "✨" }
                "생글방글 학생 리포트"
                span { class: "sparkle", "✨" }
            }
            form {
                class: "search-form",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    on_submit.call(name());
                },
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "학생 이름을 정확히 입력해주세요",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
                button { class: "primary-button", r#type: "submit", "리포트 보러가기 🚀" }
            }
        }
    }
}
