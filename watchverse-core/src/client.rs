//! Authenticated API client.
//!
//! One client is built at startup and handed to every page. Each request
//! carries the session's bearer token. A 401 is reported twice: as an
//! [`UnauthorizedEvent`] to every registered listener (the session's own
//! logout is registered on construction) and as `Err(ApiError::Unauthorized)`
//! to the caller.

use crate::config::Config;
use crate::session::Session;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("session rejected by the server")]
    Unauthorized,
    #[error("not found")]
    NotFound,
    #[error("server error ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Emitted when the backend rejects the session's credential.
#[derive(Clone, Debug, PartialEq)]
pub struct UnauthorizedEvent {
    pub path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type UnauthorizedListener = Rc<dyn Fn(&UnauthorizedEvent)>;

/// Error body shape used by the backend (`{"error": "..."}`).
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

struct ClientInner {
    config: Config,
    http: reqwest::Client,
    session: Session,
    listeners: RefCell<Vec<(ListenerId, UnauthorizedListener)>>,
    next_listener_id: Cell<u64>,
}

#[derive(Clone)]
pub struct ApiClient {
    inner: Rc<ClientInner>,
}

impl ApiClient {
    pub fn new(config: Config, session: Session) -> Self {
        let client = Self {
            inner: Rc::new(ClientInner {
                config,
                http: reqwest::Client::new(),
                session: session.clone(),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        };
        client.on_unauthorized(move |_| session.logout());
        client
    }

    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn image_base_url(&self) -> &str {
        &self.inner.config.image_base_url
    }

    /// Subscribe to rejected-credential events.
    pub fn on_unauthorized(&self, listener: impl Fn(&UnauthorizedEvent) + 'static) -> ListenerId {
        let id = ListenerId(self.inner.next_listener_id.get());
        self.inner.next_listener_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    pub fn remove_unauthorized_listener(&self, id: ListenerId) {
        self.inner
            .listeners
            .borrow_mut()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Authenticated GET of `path` (relative to the API base), decoding JSON.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let mut request = self.inner.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.inner.session.token() {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await.map_err(ApiError::Network)?;
        self.read_response(path, resp, true).await
    }

    /// Unauthenticated POST for the auth endpoints.
    ///
    /// A 401 here means bad credentials, not an expired session, so it is
    /// returned as a plain status error without notifying listeners.
    pub async fn post_public<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let resp = self
            .inner
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Network)?;
        self.read_response(path, resp, false).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.api_base_url, path)
    }

    async fn read_response<T: DeserializeOwned>(
        &self,
        path: &str,
        resp: reqwest::Response,
        intercept_unauthorized: bool,
    ) -> Result<T, ApiError> {
        let status = resp.status();

        if status == StatusCode::UNAUTHORIZED && intercept_unauthorized {
            warn!("Credential rejected on {}, ending session", path);
            self.emit_unauthorized(path);
            return Err(ApiError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        let body = resp.text().await.map_err(ApiError::Network)?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn emit_unauthorized(&self, path: &str) {
        let event = UnauthorizedEvent {
            path: path.to_string(),
        };
        // Snapshot so listeners may (un)subscribe while being called
        let listeners: Vec<UnauthorizedListener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_base_url", &self.inner.config.api_base_url)
            .field("session", &self.inner.session)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        let config = Config::new("http://127.0.0.1:9", "https://img.example").unwrap();
        ApiClient::new(config, Session::in_memory())
    }

    #[test]
    fn listener_ids_are_distinct_and_removable() {
        let client = client();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let a = client.on_unauthorized(move |_| h.set(h.get() + 1));
        let b = client.on_unauthorized(|_| {});
        assert_ne!(a, b);

        client.remove_unauthorized_listener(a);
        client.emit_unauthorized("/api/movies/popular");
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn emitting_logs_the_session_out() {
        let client = client();
        client.session().login("tok");
        client.emit_unauthorized("/api/movies/trending");
        assert!(!client.session().is_authenticated());
    }

    #[test]
    fn urls_are_joined_to_the_base() {
        assert_eq!(
            client().url("/api/movies/42"),
            "http://127.0.0.1:9/api/movies/42"
        );
    }
}
