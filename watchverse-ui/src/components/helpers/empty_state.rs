use dioxus::prelude::*;

/// Centered "nothing here" message
#[component]
pub fn EmptyState(title: String, #[props(default)] hint: Option<String>) -> Element {
    rsx! {
        div { class: "text-center py-20",
            h3 { class: "text-2xl font-semibold text-white mb-2", "{title}" }
            if let Some(hint) = hint {
                p { class: "text-gray-400", "{hint}" }
            }
        }
    }
}
