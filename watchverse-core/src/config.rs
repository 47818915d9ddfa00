//! Backend and image CDN locations.

use thiserror::Error;

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const API_BASE_URL_VAR: &str = "WATCHVERSE_API_BASE_URL";
const IMAGE_BASE_URL_VAR: &str = "WATCHVERSE_IMAGE_BASE_URL";

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} must be an absolute http(s) URL, got {value:?}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Where the client sends API requests and loads artwork from.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub image_base_url: String,
}

impl Config {
    /// Build a config, trimming trailing slashes so paths can be appended verbatim.
    pub fn new(api_base_url: &str, image_base_url: &str) -> Result<Self, ConfigError> {
        let api_base_url = normalize(API_BASE_URL_VAR, api_base_url)?;
        let image_base_url = normalize(IMAGE_BASE_URL_VAR, image_base_url)?;
        Ok(Self {
            api_base_url,
            image_base_url,
        })
    }

    /// Read the config from the process environment, loading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        if dotenvy::dotenv().is_ok() {
            tracing::info!("Loaded environment from .env");
        }

        let api = std::env::var(API_BASE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(API_BASE_URL_VAR))?;
        let image = std::env::var(IMAGE_BASE_URL_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string());

        Self::new(&api, &image)
    }
}

fn normalize(var: &'static str, value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            var,
            value: value.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = Config::new("http://localhost:8080/", "https://img.example/t/p//").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.image_base_url, "https://img.example/t/p");
    }

    #[test]
    fn relative_api_url_is_rejected() {
        let err = Config::new("/api", DEFAULT_IMAGE_BASE_URL).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidUrl {
                var: API_BASE_URL_VAR,
                value: "/api".to_string()
            }
        );
    }
}
