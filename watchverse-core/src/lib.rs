//! watchverse-core - client logic for the WatchVerse movie browser
//!
//! Holds everything that does not render: the session store, the
//! authenticated API client, typed fetchers for the movie endpoints, the
//! per-page view state controller and the loaders pages run on mount.
//! Compiles natively (for tests) and for wasm32 (for the web app).

pub mod auth;
pub mod client;
pub mod config;
pub mod images;
pub mod loaders;
pub mod models;
pub mod movies;
pub mod session;
pub mod view_state;

pub use client::{ApiClient, ApiError, ListenerId, UnauthorizedEvent};
pub use config::{Config, ConfigError};
pub use loaders::{load_catalog, load_home, load_movie, CatalogRequest, HomeFeed};
pub use models::{AuthResponse, Genre, Movie, MovieResponse};
pub use movies::{GenreFilter, GenreOption, SearchQuery, GENRES};
pub use session::{MemoryTokenStore, Session, TokenStore};
pub use view_state::{RequestTicket, ViewController, ViewData, ViewState, Visible};
