//! Display types for UI components
//!
//! Lightweight, pre-formatted views of `watchverse_core` models so components
//! only deal in strings and image URLs.

use watchverse_core::images::{banner_image, card_image, detail_poster};
pub use watchverse_core::images::ImageSource;
use watchverse_core::Movie;

/// Grid card
#[derive(Clone, Debug, PartialEq)]
pub struct MovieCardData {
    pub id: i64,
    pub title: String,
    pub rating: String,
    pub year: Option<i32>,
    pub image: ImageSource,
}

impl MovieCardData {
    pub fn from_movie(movie: &Movie, image_base: &str) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            rating: movie.rating_label(),
            year: movie.release_year(),
            image: card_image(image_base, movie),
        }
    }

    pub fn from_movies(movies: &[Movie], image_base: &str) -> Vec<Self> {
        movies
            .iter()
            .map(|m| Self::from_movie(m, image_base))
            .collect()
    }
}

/// Featured banner at the top of a listing page
#[derive(Clone, Debug, PartialEq)]
pub struct FeaturedMovieData {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub rating: String,
    pub match_percent: u32,
    pub year: Option<i32>,
    pub image: ImageSource,
}

impl FeaturedMovieData {
    pub fn from_movie(movie: &Movie, image_base: &str) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            rating: movie.rating_label(),
            match_percent: movie.match_percent(),
            year: movie.release_year(),
            image: banner_image(image_base, movie),
        }
    }
}

/// Everything the detail page shows
#[derive(Clone, Debug, PartialEq)]
pub struct MovieDetailData {
    pub id: i64,
    pub title: String,
    pub overview: String,
    pub tagline: Option<String>,
    pub rating: String,
    pub year: Option<i32>,
    pub runtime: Option<String>,
    pub genres: Vec<String>,
    pub backdrop: ImageSource,
    pub poster: ImageSource,
}

impl MovieDetailData {
    pub fn from_movie(movie: &Movie, image_base: &str) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            overview: movie.overview.clone(),
            tagline: movie.tagline.clone(),
            rating: movie.rating_label(),
            year: movie.release_year(),
            runtime: movie.runtime_label(),
            genres: movie.genres.iter().map(|g| g.name.clone()).collect(),
            backdrop: banner_image(image_base, movie),
            poster: detail_poster(image_base, movie),
        }
    }
}
