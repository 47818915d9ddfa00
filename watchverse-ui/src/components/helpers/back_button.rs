//! Back button component

use crate::components::icons::ArrowLeftIcon;
use dioxus::prelude::*;

/// Back button with customizable text and callback
#[component]
pub fn BackButton(
    /// Text to display (default: "Back")
    #[props(default = "Back".to_string())]
    text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            class: "inline-flex items-center gap-2 text-gray-300 hover:text-white transition-colors",
            "data-testid": "back-button",
            onclick: move |_| on_click.call(()),
            ArrowLeftIcon { class: "w-5 h-5" }
            "{text}"
        }
    }
}
