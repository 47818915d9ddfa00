//! Local storage helpers

use watchverse_core::TokenStore;

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persists the session token in `window.localStorage`.
///
/// Storage being unavailable (private mode, sandboxed iframe) degrades to a
/// session that lasts until reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        get_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }

    fn save(&self, token: &str) {
        match get_storage() {
            Some(storage) => {
                if storage.set_item(TOKEN_KEY, token).is_err() {
                    tracing::warn!("Failed to persist session token");
                }
            }
            None => tracing::warn!("localStorage unavailable, session will not survive reload"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
