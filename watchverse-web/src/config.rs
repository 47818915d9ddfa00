//! Build-time configuration for the browser app

use watchverse_core::config::DEFAULT_IMAGE_BASE_URL;
use watchverse_core::{Config, ConfigError};

/// Backend base URL baked in at build time, else the page's own origin.
pub fn load() -> Result<Config, ConfigError> {
    let api = match option_env!("WATCHVERSE_API_BASE_URL") {
        Some(url) => url.to_string(),
        None => window_origin().unwrap_or_default(),
    };
    let image = option_env!("WATCHVERSE_IMAGE_BASE_URL").unwrap_or(DEFAULT_IMAGE_BASE_URL);

    let config = Config::new(&api, image)?;
    tracing::info!("API base URL: {}", config.api_base_url);
    Ok(config)
}

fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
