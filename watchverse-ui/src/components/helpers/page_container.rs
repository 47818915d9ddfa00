//! Page container component

use dioxus::prelude::*;

/// Horizontal gutters shared by listing rows and grids
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "px-4 md:px-12 py-6", {children} }
    }
}
