use crate::pages::SearchState;
use crate::Route;
use dioxus::prelude::*;
use watchverse_core::{
    load_catalog, load_home, ApiClient, CatalogRequest, HomeFeed, MovieResponse, ViewController,
    Visible,
};
use watchverse_ui::{
    EmptyState, FeaturedMovie, FeaturedMovieData, LoadingSpinner, MovieCardData, MovieGrid,
    MovieRow, PageContainer, TrendingUpIcon,
};

#[component]
pub fn Home() -> Element {
    let client: ApiClient = use_context();
    let SearchState(search) = use_context();
    let mut feed = use_signal(|| ViewController::<HomeFeed>::new("home"));
    let mut results = use_signal(|| ViewController::<MovieResponse>::new("home search"));

    let feed_client = client.clone();
    let _feed = use_resource(move || {
        let client = feed_client.clone();
        async move {
            let ticket = feed.write().begin();
            let home = load_home(&client).await;
            feed.write().finish(ticket, Ok(home));
        }
    });

    let search_client = client.clone();
    let _search = use_resource(move || {
        let client = search_client.clone();
        async move {
            let Some(query) = search() else {
                return;
            };
            let ticket = results.write().begin();
            let result = load_catalog(&client, &CatalogRequest::Search(query)).await;
            results.write().finish(ticket, result);
        }
    });

    let image_base = client.image_base_url().to_string();
    let on_movie_click = move |id: i64| {
        navigator().push(Route::MovieDetails { id });
    };

    let search_section = search().map(|query| {
        let query_text = query.as_str().to_string();
        let body = match results.read().visible() {
            Visible::Loading => rsx! {
                LoadingSpinner { message: "Searching..." }
            },
            Visible::Data(page) => rsx! {
                MovieGrid {
                    movies: MovieCardData::from_movies(&page.results, &image_base),
                    on_movie_click,
                }
            },
            Visible::Empty | Visible::NotFound => rsx! {
                p { class: "text-gray-400", "No results found for \"{query_text}\"" }
            },
        };
        rsx! {
            section { class: "mb-12",
                h2 { class: "text-2xl font-bold mb-6", "Search Results" }
                {body}
            }
        }
    });

    let home = match feed.read().visible() {
        Visible::Data(home) => Some(home.clone()),
        Visible::Loading => {
            return rsx! {
                PageContainer {
                    {search_section}
                    LoadingSpinner {}
                }
            };
        }
        Visible::Empty | Visible::NotFound => None,
    };

    let Some(home) = home else {
        return rsx! {
            PageContainer {
                {search_section}
                EmptyState { title: "No movies found" }
            }
        };
    };

    let featured = home
        .featured()
        .map(|movie| FeaturedMovieData::from_movie(movie, &image_base));
    rsx! {
        if let Some(movie) = featured {
            FeaturedMovie { movie, on_select: on_movie_click }
        }
        PageContainer {
            {search_section}
            MovieRow {
                title: "Trending Now",
                icon: rsx! {
                    TrendingUpIcon { class: "w-6 h-6 text-red-600" }
                },
                movies: MovieCardData::from_movies(&home.trending, &image_base),
                on_movie_click,
            }
            MovieRow {
                title: "Popular Movies",
                movies: MovieCardData::from_movies(&home.popular, &image_base),
                on_movie_click,
            }
        }
    }
}
