//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_core::repository::ProfileRepository;
use folio_test_support::InMemoryProfileRepository;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::routes;
use folio_api::state::AppState;

/// Build the full app router over the given repository. Uses the same
/// route structure as `main.rs`.
pub fn build_app(repository: Arc<dyn ProfileRepository>) -> Router {
    let app_state = AppState::new(repository);

    Router::new()
        .merge(routes::health::router())
        .nest("/api/profiles", routes::profiles::router())
        .with_state(app_state)
}

/// Build the app over a fresh in-memory repository, returning the
/// repository too so tests can seed and inspect raw stored state.
pub fn build_in_memory_app() -> (Router, Arc<InMemoryProfileRepository>) {
    let repository = Arc::new(InMemoryProfileRepository::new());
    (build_app(repository.clone()), repository)
}

/// Send a request with an optional JSON body and return the response.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(json).unwrap())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "GET", uri, None).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "POST", uri, Some(body)).await
}

/// Send a PUT request with a JSON body and return the response.
pub async fn put_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    send_json(app, "PUT", uri, Some(body)).await
}

/// Send a DELETE request and return the response.
pub async fn delete_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send_json(app, "DELETE", uri, None).await
}

/// Create a profile through the API and return its id as a string.
pub async fn create_profile(app: Router, name: &str, email: &str) -> String {
    let (status, json) = post_json(
        app,
        "/api/profiles",
        &serde_json::json!({ "name": name, "email": email }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_str().unwrap().to_owned()
}
