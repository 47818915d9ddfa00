use crate::pages::SearchState;
use crate::Route;
use dioxus::prelude::*;
use watchverse_core::{
    load_catalog, ApiClient, CatalogRequest, GenreFilter, Movie, MovieResponse, ViewController,
    Visible,
};
use watchverse_ui::{
    EmptyState, FeaturedMovie, FeaturedMovieData, GenreDropdown, LoadingSpinner, MovieCardData,
    MovieGrid, PageContainer,
};

#[component]
pub fn Movies() -> Element {
    rsx! {
        MoviesPage { initial_genre: GenreFilter::All }
    }
}

/// `/movies/:genre` - the segment only seeds the dropdown.
#[component]
pub fn MoviesByGenre(genre: String) -> Element {
    let initial_genre = genre.parse().unwrap_or_else(|e| {
        tracing::warn!("{}, showing all genres", e);
        GenreFilter::All
    });

    rsx! {
        MoviesPage { key: "{genre}", initial_genre }
    }
}

#[component]
fn MoviesPage(initial_genre: GenreFilter) -> Element {
    let client: ApiClient = use_context();
    let SearchState(mut search) = use_context();
    let mut genre = use_signal(|| initial_genre);
    let mut catalog = use_signal(|| ViewController::<MovieResponse>::new("movies"));
    let mut featured = use_signal(|| None::<Movie>);

    let catalog_client = client.clone();
    let _catalog = use_resource(move || {
        let client = catalog_client.clone();
        async move {
            let request = match search() {
                Some(query) => CatalogRequest::Search(query),
                None => CatalogRequest::Genre(genre()),
            };
            let ticket = catalog.write().begin();
            let result = load_catalog(&client, &request).await;
            let first = result
                .as_ref()
                .ok()
                .and_then(|page| page.results.first().cloned());
            let applied = catalog.write().finish(ticket, result);
            // The banner is picked once per visit and survives filter changes
            if applied && featured.peek().is_none() {
                featured.set(first);
            }
        }
    });

    let image_base = client.image_base_url().to_string();
    let on_movie_click = move |id: i64| {
        navigator().push(Route::MovieDetails { id });
    };

    let banner = featured
        .read()
        .as_ref()
        .map(|movie| FeaturedMovieData::from_movie(movie, &image_base));

    let grid = match catalog.read().visible() {
        Visible::Loading => rsx! {
            LoadingSpinner {}
        },
        Visible::Data(page) => rsx! {
            MovieGrid {
                movies: MovieCardData::from_movies(&page.results, &image_base),
                on_movie_click,
            }
        },
        Visible::Empty | Visible::NotFound => rsx! {
            EmptyState {
                title: "No movies found",
                hint: "Try adjusting your filters or search terms".to_string(),
            }
        },
    };

    rsx! {
        if let Some(movie) = banner {
            FeaturedMovie { movie, on_select: on_movie_click }
        }
        PageContainer {
            div { class: "flex flex-wrap items-center gap-4 mb-8",
                GenreDropdown {
                    selected: genre(),
                    on_change: move |filter: GenreFilter| {
                        tracing::debug!("Genre changed to {}", filter.label());
                        search.set(None);
                        genre.set(filter);
                    },
                }
                if let Some(query) = search().map(|q| q.as_str().to_string()) {
                    span { class: "text-gray-400", "Results for \"{query}\"" }
                }
            }
            {grid}
        }
    }
}
