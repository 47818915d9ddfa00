use crate::Route;
use dioxus::prelude::*;
use watchverse_core::{load_movie, ApiClient, Movie, ViewController, Visible};
use watchverse_ui::{LoadingSpinner, MovieDetailData, MovieDetailView, MovieNotFoundView};

#[component]
pub fn MovieDetails(id: i64) -> Element {
    // Keyed so moving between two detail pages starts from a fresh controller
    rsx! {
        MovieDetailsPage { key: "{id}", id }
    }
}

#[component]
fn MovieDetailsPage(id: i64) -> Element {
    let client: ApiClient = use_context();
    let mut detail = use_signal(|| ViewController::<Movie>::new("movie detail"));

    let detail_client = client.clone();
    let _detail = use_resource(move || {
        let client = detail_client.clone();
        async move {
            let ticket = detail.write().begin();
            let result = load_movie(&client, id).await;
            detail.write().finish(ticket, result);
        }
    });

    let go_home = move |_: ()| {
        navigator().push(Route::Home {});
    };

    // A failed load with nothing to show reads as "not found"; the cause is logged
    let movie = match detail.read().visible() {
        Visible::Loading => return rsx! { LoadingSpinner {} },
        Visible::Data(movie) => Some(MovieDetailData::from_movie(movie, client.image_base_url())),
        Visible::Empty | Visible::NotFound => None,
    };

    match movie {
        Some(movie) => rsx! {
            MovieDetailView { movie, on_back: move |_| navigator().go_back() }
        },
        None => rsx! {
            MovieNotFoundView { on_home: go_home }
        },
    }
}
