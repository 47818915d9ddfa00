use crate::Route;
use dioxus::prelude::*;
use watchverse_ui::NotFoundView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        NotFoundView {
            path: segments.join("/"),
            on_home: move |_| {
                navigator().push(Route::Home {});
            },
        }
    }
}
