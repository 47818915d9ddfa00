//! Shared helpers: tracing for tests and a scripted stand-in for the backend.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use watchverse_core::{ApiClient, Config, Session};

/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

#[derive(Clone, Debug)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

/// Backend that answers each path with a canned status and JSON body and
/// records every request it sees. Unscripted paths answer 404.
#[derive(Clone, Default)]
pub struct MockBackend {
    routes: Arc<Mutex<HashMap<String, (u16, Value)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[allow(dead_code)]
impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: Value) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    /// Serve on an ephemeral local port and return the base URL.
    pub async fn start(&self) -> String {
        let app = Router::new()
            .fallback(handle)
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        format!("http://{addr}")
    }
}

async fn handle(
    State(backend): State<MockBackend>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    backend.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let scripted = backend.routes.lock().unwrap().get(&path).cloned();
    match scripted {
        Some((status, value)) => {
            let status = StatusCode::from_u16(status).expect("valid status");
            (status, Json(value)).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "not found"})),
        )
            .into_response(),
    }
}

/// Client pointed at `base_url` with a signed-in in-memory session.
#[allow(dead_code)]
pub fn signed_in_client(base_url: &str, token: &str) -> ApiClient {
    let config = Config::new(base_url, "https://image.tmdb.org/t/p").expect("config");
    let session = Session::in_memory();
    session.login(token);
    ApiClient::new(config, session)
}

#[allow(dead_code)]
pub fn movie_json(id: i64, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "overview": format!("{title} overview"),
        "poster_path": format!("/poster-{id}.jpg"),
        "backdrop_path": format!("/backdrop-{id}.jpg"),
        "vote_average": 6.5,
        "release_date": "2021-06-01",
        "runtime": 0,
        "genres": null,
        "tagline": ""
    })
}

#[allow(dead_code)]
pub fn page_json(movies: Vec<Value>) -> Value {
    serde_json::json!({ "page": 1, "results": movies })
}
