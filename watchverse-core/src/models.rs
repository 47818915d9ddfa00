//! Wire types for the movie backend.
//!
//! The backend forwards TMDB payloads and serializes zero values for missing
//! data (`"runtime": 0`, `"tagline": ""`), so optional fields are normalized
//! on the way in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub poster_path: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub backdrop_path: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
    #[serde(default, deserialize_with = "zero_as_none")]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub tagline: Option<String>,
}

/// One page of movies as returned by the listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MovieResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default, deserialize_with = "null_as_empty_vec")]
    pub results: Vec<Movie>,
}

/// Returned by `/api/auth/login` and `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl Movie {
    /// Year of release, if the date parses.
    pub fn release_year(&self) -> Option<i32> {
        NaiveDate::parse_from_str(&self.release_date, "%Y-%m-%d")
            .ok()
            .map(|d| d.year())
    }

    /// Rating with one decimal place, e.g. `"7.2"`.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Rating as a percentage "match" score (7.24 -> 72).
    pub fn match_percent(&self) -> u32 {
        (self.vote_average.clamp(0.0, 10.0) * 10.0).round() as u32
    }

    /// Runtime as `"2h 5m"`, `None` when unknown.
    pub fn runtime_label(&self) -> Option<String> {
        self.runtime.map(format_runtime)
    }
}

pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn null_as_empty_vec<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(d)?.unwrap_or_default())
}

fn zero_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(Option::<u32>::deserialize(d)?.filter(|m| *m > 0))
}

fn blank_as_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<String>::deserialize(d)?.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_movie_detail() {
        let json = r#"{
            "id": 550,
            "title": "Fight Club",
            "overview": "An insomniac office worker...",
            "poster_path": "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg",
            "backdrop_path": "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg",
            "vote_average": 8.433,
            "release_date": "1999-10-15",
            "runtime": 139,
            "genres": [{"id": 18, "name": "Drama"}],
            "tagline": "Mischief. Mayhem. Soap."
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 550);
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.rating_label(), "8.4");
        assert_eq!(movie.match_percent(), 84);
        assert_eq!(movie.runtime_label().as_deref(), Some("2h 19m"));
        assert_eq!(movie.genres[0].name, "Drama");
        assert_eq!(movie.tagline.as_deref(), Some("Mischief. Mayhem. Soap."));
    }

    #[test]
    fn listing_entry_has_zero_values_for_detail_fields() {
        // Listing endpoints carry no runtime/genres/tagline; the backend fills in zero values
        let json = r#"{
            "id": 1,
            "title": "A",
            "overview": "",
            "poster_path": null,
            "backdrop_path": "/b.jpg",
            "vote_average": 7.2,
            "release_date": "2020-01-01",
            "runtime": 0,
            "genres": null,
            "tagline": ""
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.poster_path, "");
        assert_eq!(movie.runtime, None);
        assert!(movie.genres.is_empty());
        assert_eq!(movie.tagline, None);
        assert_eq!(movie.rating_label(), "7.2");
        assert_eq!(movie.release_year(), Some(2020));
    }

    #[test]
    fn missing_or_bad_release_date_has_no_year() {
        let movie: Movie = serde_json::from_str(r#"{"id": 3, "release_date": ""}"#).unwrap();
        assert_eq!(movie.release_year(), None);
        let movie: Movie = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(movie.release_year(), None);
    }

    #[test]
    fn parse_paged_response() {
        let json = r#"{"page": 2, "results": [{"id": 1, "title": "A"}, {"id": 2, "title": "B"}]}"#;
        let resp: MovieResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.page, 2);
        let titles: Vec<_> = resp.results.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn parse_auth_response() {
        let json = r#"{"id": 7, "username": "neo", "email": "neo@example.com", "token": "jwt-abc"}"#;
        let resp: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.username, "neo");
        assert_eq!(resp.token, "jwt-abc");
    }

    #[test]
    fn runtime_formatting() {
        assert_eq!(format_runtime(59), "0h 59m");
        assert_eq!(format_runtime(120), "2h 0m");
    }
}
