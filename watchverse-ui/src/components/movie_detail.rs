//! Movie detail view and its not-found state

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::{BackButton, FallbackImage};
use crate::components::icons::{CalendarIcon, ClockIcon, PlayIcon, PlusIcon, StarIcon};
use crate::display_types::MovieDetailData;
use dioxus::prelude::*;

/// Full detail page body (pure, props-based)
#[component]
pub fn MovieDetailView(movie: MovieDetailData, on_back: EventHandler<()>) -> Element {
    rsx! {
        div { class: "relative min-h-screen", "data-testid": "movie-detail",
            div { class: "absolute inset-0 h-[70vh]",
                FallbackImage { image: movie.backdrop.clone(), alt: movie.title.clone() }
                div { class: "absolute inset-0 bg-gradient-to-t from-black via-black/70 to-black/30" }
            }

            div { class: "relative px-4 md:px-12 pt-24 pb-16",
                BackButton { on_click: on_back }

                div { class: "mt-8 flex flex-col md:flex-row gap-8",
                    div { class: "w-48 md:w-72 shrink-0 rounded overflow-hidden shadow-2xl aspect-[2/3]",
                        FallbackImage { image: movie.poster.clone(), alt: movie.title.clone() }
                    }

                    div { class: "flex-1 space-y-5",
                        h1 { class: "text-4xl md:text-5xl font-bold text-white", "{movie.title}" }
                        if let Some(tagline) = &movie.tagline {
                            p { class: "text-lg italic text-gray-300", "\"{tagline}\"" }
                        }

                        div { class: "flex flex-wrap items-center gap-4 text-gray-300",
                            span { class: "flex items-center gap-1 text-yellow-400",
                                StarIcon { class: "w-5 h-5" }
                                "{movie.rating}"
                            }
                            if let Some(year) = movie.year {
                                span { class: "flex items-center gap-1",
                                    CalendarIcon { class: "w-4 h-4" }
                                    "{year}"
                                }
                            }
                            if let Some(runtime) = &movie.runtime {
                                span { class: "flex items-center gap-1",
                                    ClockIcon { class: "w-4 h-4" }
                                    "{runtime}"
                                }
                            }
                        }

                        if !movie.genres.is_empty() {
                            div { class: "flex flex-wrap gap-2",
                                for genre in movie.genres.iter() {
                                    span {
                                        key: "{genre}",
                                        class: "px-3 py-1 rounded-full border border-gray-500 text-sm text-gray-200",
                                        "{genre}"
                                    }
                                }
                            }
                        }

                        div { class: "flex gap-3",
                            Button { variant: ButtonVariant::Light, size: ButtonSize::Medium,
                                PlayIcon { class: "w-5 h-5" }
                                "Play"
                            }
                            Button { variant: ButtonVariant::Secondary, size: ButtonSize::Medium,
                                PlusIcon { class: "w-5 h-5" }
                                "My List"
                            }
                        }

                        if !movie.overview.is_empty() {
                            div {
                                h2 { class: "text-xl font-semibold text-white mb-2", "Overview" }
                                p { class: "text-gray-300 leading-relaxed max-w-3xl", "{movie.overview}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shown when the backend has no movie for the requested id
#[component]
pub fn MovieNotFoundView(on_home: EventHandler<()>) -> Element {
    rsx! {
        div { class: "min-h-screen flex flex-col items-center justify-center gap-6 text-center px-4",
            h1 { class: "text-3xl font-bold text-white", "Movie not found" }
            Button {
                variant: ButtonVariant::Primary,
                size: ButtonSize::Medium,
                onclick: move |_| on_home.call(()),
                "Back to Home"
            }
        }
    }
}
