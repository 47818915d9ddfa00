//! Header view component
//!
//! Pure, props-based component for the top navigation bar with search.

use crate::components::icons::{FilmIcon, LogOutIcon, SearchIcon};
use crate::components::text_input::{TextInput, TextInputSize, TextInputType};
use dioxus::prelude::*;

/// Navigation item for the header
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

#[component]
pub fn HeaderView(
    nav_items: Vec<NavItem>,
    on_nav_click: EventHandler<String>,
    on_brand_click: EventHandler<()>,
    search_value: String,
    on_search_change: EventHandler<String>,
    /// Fired with the raw input; the caller decides whether it is a usable query
    on_search_submit: EventHandler<String>,
    on_logout: EventHandler<()>,
) -> Element {
    let submit_value = search_value.clone();

    rsx! {
        header { class: "fixed top-0 inset-x-0 z-50 bg-gradient-to-b from-black/90 to-black/0",
            div { class: "flex items-center justify-between gap-4 px-4 md:px-12 h-16",
                div { class: "flex items-center gap-8",
                    button {
                        class: "flex items-center gap-2 text-red-600 text-2xl font-extrabold tracking-tight",
                        onclick: move |_| on_brand_click.call(()),
                        FilmIcon { class: "w-7 h-7" }
                        "WatchVerse"
                    }
                    nav { class: "hidden md:flex items-center gap-5 text-sm",
                        for item in nav_items {
                            button {
                                key: "{item.id}",
                                class: if item.is_active { "text-white font-semibold" } else { "text-gray-300 hover:text-gray-100" },
                                onclick: {
                                    let id = item.id.clone();
                                    move |_| on_nav_click.call(id.clone())
                                },
                                "{item.label}"
                            }
                        }
                    }
                }

                div { class: "flex items-center gap-4",
                    form {
                        class: "relative flex items-center",
                        role: "search",
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            on_search_submit.call(submit_value.clone());
                        },
                        span { class: "absolute left-3 text-gray-400 pointer-events-none",
                            SearchIcon { class: "w-4 h-4" }
                        }
                        div { class: "w-44 md:w-64 [&>input]:pl-9",
                            TextInput {
                                value: search_value,
                                on_input: on_search_change,
                                size: TextInputSize::Small,
                                input_type: TextInputType::Search,
                                placeholder: "Search movies...",
                            }
                        }
                    }
                    button {
                        class: "flex items-center gap-2 text-sm text-gray-300 hover:text-white",
                        onclick: move |_| on_logout.call(()),
                        LogOutIcon { class: "w-4 h-4" }
                        span { class: "hidden md:inline", "Logout" }
                    }
                }
            }
        }
    }
}
