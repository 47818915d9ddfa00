use crate::components::button::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Catch-all for unknown routes
#[component]
pub fn NotFoundView(path: String, on_home: EventHandler<()>) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-4 text-center px-4",
            h1 { class: "text-6xl font-bold text-red-600", "404" }
            p { class: "text-xl text-white", "Page not found" }
            p { class: "text-gray-500 font-mono text-sm", "/{path}" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_home.call(()),
                "Back to Home"
            }
        }
    }
}
