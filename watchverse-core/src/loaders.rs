//! The async work each page runs when it (re)loads.

use crate::client::{ApiClient, ApiError};
use crate::models::{Movie, MovieResponse};
use crate::movies::{GenreFilter, SearchQuery};
use crate::view_state::ViewData;
use tracing::warn;

/// Trending and popular rows for the home page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HomeFeed {
    pub trending: Vec<Movie>,
    pub popular: Vec<Movie>,
}

impl HomeFeed {
    /// Banner movie: the top trending title.
    pub fn featured(&self) -> Option<&Movie> {
        self.trending.first()
    }
}

impl ViewData for HomeFeed {
    fn is_empty(&self) -> bool {
        self.trending.is_empty() && self.popular.is_empty()
    }
}

/// Fetch both home rows concurrently and wait for both to settle.
///
/// A failed row is logged and left empty, so the page settles either way;
/// with both rows failed it simply has nothing to show.
pub async fn load_home(client: &ApiClient) -> HomeFeed {
    let (trending, popular) = futures::join!(client.trending(), client.popular());

    HomeFeed {
        trending: section("trending", trending),
        popular: section("popular", popular),
    }
}

fn section(name: &str, result: Result<MovieResponse, ApiError>) -> Vec<Movie> {
    match result {
        Ok(page) => page.results,
        Err(e) => {
            warn!("Failed to fetch {} movies: {}", name, e);
            Vec::new()
        }
    }
}

/// What the movies grid is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogRequest {
    Genre(GenreFilter),
    Search(SearchQuery),
}

pub async fn load_catalog(
    client: &ApiClient,
    request: &CatalogRequest,
) -> Result<MovieResponse, ApiError> {
    match request {
        CatalogRequest::Genre(filter) => client.discover(*filter).await,
        CatalogRequest::Search(query) => client.search(query).await,
    }
}

pub async fn load_movie(client: &ApiClient, id: i64) -> Result<Movie, ApiError> {
    client.movie(id).await
}
