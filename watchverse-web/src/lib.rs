//! watchverse-web - the WatchVerse browser app
//!
//! Owns routing, the shared `ApiClient` and the reactive auth flag. Pages in
//! `pages` run the core loaders and hand display data to `watchverse-ui`.

pub mod config;
pub mod pages;
pub mod storage;

use dioxus::prelude::*;
use pages::{
    AppLayout, AuthGuard, GuestOnly, Home, Login, MovieDetails, Movies, MoviesByGenre, NotFound,
    Register,
};
use storage::LocalStorageTokenStore;
use watchverse_core::{ApiClient, Config, Session};
use watchverse_ui::ErrorDisplay;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthGuard)]
        #[layout(AppLayout)]
            #[route("/")]
            Home {},
            #[route("/movies")]
            Movies {},
            #[route("/movies/:genre")]
            MoviesByGenre { genre: String },
            #[route("/movie/:id")]
            MovieDetails { id: i64 },
        #[end_layout]
    #[end_layout]
    #[layout(GuestOnly)]
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Reactive mirror of `Session::is_authenticated`, provided as context.
#[derive(Clone, Copy)]
pub struct AuthState(pub Signal<bool>);

#[component]
pub fn App() -> Element {
    let config = use_hook(config::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        document::Title { "WatchVerse" }
        div { class: "min-h-screen bg-black text-white",
            {
                match config {
                    Ok(config) => rsx! {
                        ClientProvider { config }
                    },
                    Err(e) => rsx! {
                        div { class: "p-8",
                            ErrorDisplay { message: format!("Invalid configuration: {e}") }
                        }
                    },
                }
            }
        }
    }
}

/// Builds the client once and wires session changes into `AuthState`.
#[component]
fn ClientProvider(config: Config) -> Element {
    let client = use_hook(move || {
        let session = Session::restore(LocalStorageTokenStore);
        ApiClient::new(config, session)
    });

    let authenticated = use_signal(|| client.session().is_authenticated());
    use_hook(|| {
        client.session().on_change(move |is_authenticated| {
            tracing::debug!("Auth state changed: {}", is_authenticated);
            let mut signal = authenticated;
            signal.set(is_authenticated);
        });
        client.on_unauthorized(|event| {
            tracing::info!("Session expired while requesting {}", event.path);
        });
    });

    use_context_provider(|| client.clone());
    use_context_provider(|| AuthState(authenticated));

    rsx! {
        Router::<Route> {}
    }
}
