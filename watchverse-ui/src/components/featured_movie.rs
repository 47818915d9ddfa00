//! Full-bleed banner for the featured movie

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::helpers::FallbackImage;
use crate::components::icons::{InfoIcon, PlayIcon, StarIcon};
use crate::display_types::FeaturedMovieData;
use dioxus::prelude::*;

#[component]
pub fn FeaturedMovie(movie: FeaturedMovieData, on_select: EventHandler<i64>) -> Element {
    let id = movie.id;

    rsx! {
        div {
            class: "relative h-[56vw] max-h-[80vh] min-h-[420px] w-full",
            "data-testid": "featured-movie",
            div { class: "absolute inset-0",
                FallbackImage { image: movie.image.clone(), alt: movie.title.clone() }
            }
            div { class: "absolute inset-0 bg-gradient-to-r from-black/80 via-black/30 to-transparent" }
            div { class: "absolute inset-x-0 bottom-0 h-32 bg-gradient-to-t from-black to-transparent" }

            div { class: "absolute bottom-[20%] left-4 md:left-12 max-w-xl space-y-4",
                h1 { class: "text-3xl md:text-6xl font-bold text-white drop-shadow-lg",
                    "{movie.title}"
                }
                div { class: "flex items-center gap-3 text-sm md:text-base",
                    span { class: "text-green-400 font-semibold", "{movie.match_percent}% Match" }
                    if let Some(year) = movie.year {
                        span { class: "text-gray-300", "{year}" }
                    }
                    span { class: "flex items-center gap-1 text-yellow-400",
                        StarIcon { class: "w-4 h-4" }
                        "{movie.rating}"
                    }
                }
                if !movie.overview.is_empty() {
                    p { class: "text-gray-200 text-sm md:text-lg line-clamp-3 drop-shadow",
                        "{movie.overview}"
                    }
                }
                div { class: "flex gap-3",
                    Button {
                        variant: ButtonVariant::Light,
                        size: ButtonSize::Large,
                        onclick: move |_| on_select.call(id),
                        PlayIcon { class: "w-5 h-5" }
                        "Play"
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Large,
                        onclick: move |_| on_select.call(id),
                        InfoIcon { class: "w-5 h-5" }
                        "More Info"
                    }
                }
            }
        }
    }
}
