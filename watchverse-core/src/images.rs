//! Artwork URLs on the TMDB image CDN.

use crate::models::Movie;

/// Rendition widths the CDN serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    W500,
    W1280,
    Original,
}

impl ImageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageSize::W500 => "w500",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

/// An image plus the URL to swap in if it fails to load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSource {
    pub src: Option<String>,
    pub fallback: Option<String>,
}

/// `<base>/<size><path>`; `None` for an empty path.
///
/// Backend paths carry their own leading slash (`/abc.jpg`), but one is added
/// if missing.
pub fn image_url(base: &str, size: ImageSize, path: &str) -> Option<String> {
    if path.is_empty() {
        return None;
    }
    let sep = if path.starts_with('/') { "" } else { "/" };
    Some(format!("{}/{}{}{}", base, size.as_str(), sep, path))
}

/// Card artwork: the poster, falling back to the backdrop.
pub fn card_image(base: &str, movie: &Movie) -> ImageSource {
    let src = image_url(base, ImageSize::W500, &movie.poster_path);
    let fallback = image_url(base, ImageSize::W500, &movie.backdrop_path);
    collapse(src, fallback)
}

/// Banner artwork: the full-size backdrop (or poster if there is none),
/// falling back to a smaller poster.
pub fn banner_image(base: &str, movie: &Movie) -> ImageSource {
    let path = if movie.backdrop_path.is_empty() {
        &movie.poster_path
    } else {
        &movie.backdrop_path
    };
    let src = image_url(base, ImageSize::Original, path);
    let fallback = image_url(base, ImageSize::W1280, &movie.poster_path);
    collapse(src, fallback)
}

/// Poster for the detail page.
pub fn detail_poster(base: &str, movie: &Movie) -> ImageSource {
    card_image(base, movie)
}

fn collapse(src: Option<String>, fallback: Option<String>) -> ImageSource {
    match src {
        Some(src) => {
            let fallback = fallback.filter(|f| *f != src);
            ImageSource {
                src: Some(src),
                fallback,
            }
        }
        None => ImageSource {
            src: fallback,
            fallback: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://image.tmdb.org/t/p";

    fn movie(poster: &str, backdrop: &str) -> Movie {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "poster_path": poster,
            "backdrop_path": backdrop,
        }))
        .unwrap()
    }

    #[test]
    fn builds_sized_urls() {
        assert_eq!(
            image_url(BASE, ImageSize::W500, "/p.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
        assert_eq!(
            image_url(BASE, ImageSize::Original, "b.jpg").as_deref(),
            Some("https://image.tmdb.org/t/p/original/b.jpg")
        );
        assert_eq!(image_url(BASE, ImageSize::W1280, ""), None);
    }

    #[test]
    fn card_falls_back_to_backdrop() {
        let img = card_image(BASE, &movie("/p.jpg", "/b.jpg"));
        assert_eq!(img.src.as_deref(), Some("https://image.tmdb.org/t/p/w500/p.jpg"));
        assert_eq!(img.fallback.as_deref(), Some("https://image.tmdb.org/t/p/w500/b.jpg"));
    }

    #[test]
    fn card_without_poster_uses_backdrop_directly() {
        let img = card_image(BASE, &movie("", "/b.jpg"));
        assert_eq!(img.src.as_deref(), Some("https://image.tmdb.org/t/p/w500/b.jpg"));
        assert_eq!(img.fallback, None);
    }

    #[test]
    fn banner_prefers_original_backdrop() {
        let img = banner_image(BASE, &movie("/p.jpg", "/b.jpg"));
        assert_eq!(img.src.as_deref(), Some("https://image.tmdb.org/t/p/original/b.jpg"));
        assert_eq!(img.fallback.as_deref(), Some("https://image.tmdb.org/t/p/w1280/p.jpg"));

        let img = banner_image(BASE, &movie("/p.jpg", ""));
        assert_eq!(img.src.as_deref(), Some("https://image.tmdb.org/t/p/original/p.jpg"));
    }

    #[test]
    fn no_artwork_at_all() {
        assert_eq!(card_image(BASE, &movie("", "")), ImageSource::default());
    }
}
