//! Genre filter select

use crate::components::icons::ChevronDownIcon;
use dioxus::prelude::*;
use watchverse_core::{GenreFilter, GENRES};

#[component]
pub fn GenreDropdown(selected: GenreFilter, on_change: EventHandler<GenreFilter>) -> Element {
    rsx! {
        div { class: "relative inline-block",
            select {
                class: "appearance-none bg-black border border-gray-500 text-white text-sm rounded pl-4 pr-10 py-2 cursor-pointer focus:outline-none focus:border-white",
                aria_label: "Genre",
                value: "{selected}",
                onchange: move |evt| match evt.value().parse::<GenreFilter>() {
                    Ok(filter) => on_change.call(filter),
                    Err(e) => tracing::warn!("Ignoring genre selection: {}", e),
                },
                for genre in GENRES.iter() {
                    option {
                        key: "{genre.filter}",
                        value: "{genre.filter}",
                        selected: genre.filter == selected,
                        "{genre.name}"
                    }
                }
            }
            span { class: "pointer-events-none absolute right-3 top-1/2 -translate-y-1/2 text-gray-300",
                ChevronDownIcon {}
            }
        }
    }
}
