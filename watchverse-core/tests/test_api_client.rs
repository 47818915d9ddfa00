//! Authenticated client behavior against a scripted backend.
//!
//! Tests:
//! - Bearer token on every request
//! - 401 logs out exactly once per call and rejects the call
//! - Other failures stay local to the caller
mod support;
use crate::support::{page_json, signed_in_client, tracing_init, MockBackend};
use std::cell::Cell;
use std::rc::Rc;
use watchverse_core::{ApiClient, ApiError, Config, Session};

#[tokio::test]
async fn test_requests_carry_bearer_token() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond("/api/movies/trending", 200, page_json(vec![]));
    let base = backend.start().await;

    let client = signed_in_client(&base, "jwt-123");
    client.trending().await.expect("trending");

    let requests = backend.requests_to("/api/movies/trending");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer jwt-123"));
}

#[tokio::test]
async fn test_signed_out_requests_have_no_authorization() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond("/api/movies/popular", 200, page_json(vec![]));
    let base = backend.start().await;

    let config = Config::new(&base, "https://image.tmdb.org/t/p").unwrap();
    let client = ApiClient::new(config, Session::in_memory());
    client.popular().await.expect("popular");

    assert_eq!(backend.requests()[0].authorization, None);
}

#[tokio::test]
async fn test_unauthorized_logs_out_once_and_rejects() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond(
        "/api/movies/popular",
        401,
        serde_json::json!({"error": "Invalid token"}),
    );
    let base = backend.start().await;

    let client = signed_in_client(&base, "expired");
    let logouts = Rc::new(Cell::new(0));
    let counter = logouts.clone();
    client.session().on_change(move |authed| {
        if !authed {
            counter.set(counter.get() + 1);
        }
    });
    let events = Rc::new(Cell::new(0));
    let seen = events.clone();
    client.on_unauthorized(move |event| {
        assert_eq!(event.path, "/api/movies/popular");
        seen.set(seen.get() + 1);
    });

    let result = client.popular().await;

    assert!(matches!(result, Err(ApiError::Unauthorized)));
    assert!(!client.session().is_authenticated());
    assert_eq!(logouts.get(), 1);
    assert_eq!(events.get(), 1);
}

#[tokio::test]
async fn test_each_unauthorized_call_emits_its_own_event() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond("/api/movies/trending", 401, serde_json::json!({}));
    let base = backend.start().await;

    let client = signed_in_client(&base, "expired");
    let events = Rc::new(Cell::new(0));
    let seen = events.clone();
    client.on_unauthorized(move |_| seen.set(seen.get() + 1));

    let _ = client.trending().await;
    let _ = client.trending().await;

    assert_eq!(events.get(), 2);
    assert!(!client.session().is_authenticated());
}

#[tokio::test]
async fn test_server_error_does_not_log_out() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond(
        "/api/movies/trending",
        500,
        serde_json::json!({"error": "upstream timeout"}),
    );
    let base = backend.start().await;

    let client = signed_in_client(&base, "tok");
    let err = client.trending().await.unwrap_err();

    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream timeout");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_forbidden_is_not_treated_as_unauthorized() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond("/api/movies/trending", 403, serde_json::json!("nope"));
    let base = backend.start().await;

    let client = signed_in_client(&base, "tok");
    let err = client.trending().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 403, .. }));
    assert!(client.session().is_authenticated());
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    tracing_init();
    let backend = MockBackend::new();
    backend.respond("/api/movies/trending", 200, serde_json::json!({"page": "one"}));
    let base = backend.start().await;

    let client = signed_in_client(&base, "tok");
    let err = client.trending().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    tracing_init();
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = signed_in_client(&format!("http://{addr}"), "tok");
    let err = client.popular().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)));
    assert!(client.session().is_authenticated());
}
