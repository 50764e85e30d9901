use dioxus::prelude::*;

#[component]
pub fn NotFoundView(on_back: Callback<()>) -> Element {
    rsx! {
        div { class: "card",
            div { class: "not-found",
                h2 { "앗! 학생을 찾을 수 없어요 😢" }
                button {
                    class: "primary-button",
                    r#type: "button",
                    onclick: move |_| on_back.call(()),
                    "다시 찾아볼까요? 🔍"
                }
            }
        }
    }
}
