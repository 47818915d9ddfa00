//! Horizontal rows and wrapping grids of movie cards

use crate::components::movie_card::MovieCard;
use crate::display_types::MovieCardData;
use dioxus::prelude::*;

/// Titled, horizontally scrolling row (home page sections)
#[component]
pub fn MovieRow(
    title: String,
    movies: Vec<MovieCardData>,
    on_movie_click: EventHandler<i64>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    if movies.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "mb-10",
            h2 { class: "flex items-center gap-2 text-xl md:text-2xl font-semibold text-white mb-3",
                {icon}
                "{title}"
            }
            div { class: "flex gap-3 overflow-x-auto pb-4 scrollbar-hide",
                for movie in movies {
                    div { key: "{movie.id}", class: "shrink-0 w-36 md:w-44",
                        MovieCard { movie, on_click: on_movie_click }
                    }
                }
            }
        }
    }
}

/// Responsive grid (movies page and search results)
#[component]
pub fn MovieGrid(movies: Vec<MovieCardData>, on_movie_click: EventHandler<i64>) -> Element {
    rsx! {
        div { class: "grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-6 gap-4",
            for movie in movies {
                MovieCard { key: "{movie.id}", movie, on_click: on_movie_click }
            }
        }
    }
}
