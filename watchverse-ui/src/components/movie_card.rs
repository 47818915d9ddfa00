//! Movie card component - pure view with callbacks

use crate::components::helpers::FallbackImage;
use crate::components::icons::{PlayIcon, StarIcon};
use crate::display_types::MovieCardData;
use dioxus::prelude::*;

/// Poster card used in rows and grids
///
/// Navigation is reported through `on_click` with the movie id; the card
/// never touches the router.
#[component]
pub fn MovieCard(movie: MovieCardData, on_click: EventHandler<i64>) -> Element {
    let id = movie.id;

    rsx! {
        div {
            class: "group relative cursor-pointer rounded overflow-hidden bg-gray-900 transition-transform duration-300 hover:scale-105 hover:z-10",
            "data-testid": "movie-card",
            onclick: move |_| on_click.call(id),
            div { class: "aspect-[2/3]",
                FallbackImage { image: movie.image.clone(), alt: movie.title.clone() }
            }
            div { class: "absolute inset-0 bg-gradient-to-t from-black/90 via-black/20 to-transparent opacity-0 group-hover:opacity-100 transition-opacity flex flex-col justify-end p-3",
                div { class: "flex items-center justify-center w-9 h-9 mb-2 rounded-full bg-white text-black",
                    PlayIcon { class: "w-4 h-4 ml-0.5" }
                }
                h3 { class: "text-white font-semibold text-sm leading-tight line-clamp-2",
                    "{movie.title}"
                }
                div { class: "flex items-center gap-2 mt-1 text-xs text-gray-300",
                    span { class: "flex items-center gap-1 text-yellow-400",
                        StarIcon { class: "w-3 h-3" }
                        "{movie.rating}"
                    }
                    if let Some(year) = movie.year {
                        span { "{year}" }
                    }
                }
            }
        }
    }
}
