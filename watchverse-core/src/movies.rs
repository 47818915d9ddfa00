//! Typed fetchers for the movie endpoints.

use crate::client::{ApiClient, ApiError};
use crate::models::{Movie, MovieResponse};
use std::fmt;
use std::str::FromStr;

/// A search string that is non-empty after trimming.
///
/// There is no way to build one from blank input, so a blank search box
/// can never reach the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Genre selection on the movies page. `All` means no filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GenreFilter {
    #[default]
    All,
    Genre(i64),
}

impl FromStr for GenreFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "" => Ok(GenreFilter::All),
            other => other
                .parse::<i64>()
                .map(GenreFilter::Genre)
                .map_err(|_| format!("unknown genre: {other}")),
        }
    }
}

impl fmt::Display for GenreFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreFilter::All => write!(f, "all"),
            GenreFilter::Genre(id) => write!(f, "{id}"),
        }
    }
}

/// Entry in the genre dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenreOption {
    pub filter: GenreFilter,
    pub name: &'static str,
}

#[rustfmt::skip]
pub const GENRES: &[GenreOption] = &[
    GenreOption { filter: GenreFilter::All, name: "All Genres" },
    GenreOption { filter: GenreFilter::Genre(28), name: "Action" },
    GenreOption { filter: GenreFilter::Genre(12), name: "Adventure" },
    GenreOption { filter: GenreFilter::Genre(16), name: "Animation" },
    GenreOption { filter: GenreFilter::Genre(35), name: "Comedy" },
    GenreOption { filter: GenreFilter::Genre(80), name: "Crime" },
    GenreOption { filter: GenreFilter::Genre(99), name: "Documentary" },
    GenreOption { filter: GenreFilter::Genre(18), name: "Drama" },
    GenreOption { filter: GenreFilter::Genre(10751), name: "Family" },
    GenreOption { filter: GenreFilter::Genre(14), name: "Fantasy" },
    GenreOption { filter: GenreFilter::Genre(36), name: "History" },
    GenreOption { filter: GenreFilter::Genre(27), name: "Horror" },
];

impl GenreFilter {
    /// Dropdown label; unknown ids show as "Genre <id>".
    pub fn label(&self) -> String {
        GENRES
            .iter()
            .find(|g| g.filter == *self)
            .map(|g| g.name.to_string())
            .unwrap_or_else(|| format!("Genre {self}"))
    }
}

impl ApiClient {
    pub async fn trending(&self) -> Result<MovieResponse, ApiError> {
        self.get("/api/movies/trending", &[]).await
    }

    pub async fn popular(&self) -> Result<MovieResponse, ApiError> {
        self.get("/api/movies/popular", &[]).await
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<MovieResponse, ApiError> {
        self.get("/api/movies/search", &[("query", query.as_str())])
            .await
    }

    /// Movies in a genre; `All` is served by the popular listing.
    pub async fn discover(&self, filter: GenreFilter) -> Result<MovieResponse, ApiError> {
        match filter {
            GenreFilter::All => self.popular().await,
            GenreFilter::Genre(id) => {
                let id = id.to_string();
                self.get("/api/movies/discover", &[("genre", id.as_str())])
                    .await
            }
        }
    }

    pub async fn movie(&self, id: i64) -> Result<Movie, ApiError> {
        self.get(&format!("/api/movies/{id}"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_is_rejected() {
        assert_eq!(SearchQuery::new(""), None);
        assert_eq!(SearchQuery::new("   "), None);
        assert_eq!(SearchQuery::new("\t\n"), None);
    }

    #[test]
    fn search_text_is_trimmed() {
        let q = SearchQuery::new("  blade runner ").unwrap();
        assert_eq!(q.as_str(), "blade runner");
    }

    #[test]
    fn genre_filter_parses_route_segment() {
        assert_eq!("all".parse::<GenreFilter>(), Ok(GenreFilter::All));
        assert_eq!("27".parse::<GenreFilter>(), Ok(GenreFilter::Genre(27)));
        assert!("horror".parse::<GenreFilter>().is_err());
    }

    #[test]
    fn genre_filter_round_trips_through_display() {
        for option in GENRES {
            let segment = option.filter.to_string();
            assert_eq!(segment.parse::<GenreFilter>(), Ok(option.filter));
        }
    }

    #[test]
    fn genre_labels() {
        assert_eq!(GenreFilter::All.label(), "All Genres");
        assert_eq!(GenreFilter::Genre(27).label(), "Horror");
        assert_eq!(GenreFilter::Genre(37).label(), "Genre 37");
    }
}
