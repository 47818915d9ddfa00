//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Inline error box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-3 bg-red-950/60 border border-red-800 text-red-100 px-4 py-3 rounded",
            role: "alert",
            AlertTriangleIcon { class: "w-5 h-5 mt-0.5 shrink-0" }
            p { class: "flex-1", "{message}" }
        }
    }
}
