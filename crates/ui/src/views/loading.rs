use dioxus::prelude::*;

#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading", "불러오는 중이에요... ✨" }
    }
}
