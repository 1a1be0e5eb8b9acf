// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{header, Request};
use std::sync::Arc;
use workout_tracker::config::Config;
use workout_tracker::db::Database;
use workout_tracker::routes::create_router;
use workout_tracker::AppState;

/// Create a test app with a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::new(Config::default(), Arc::new(Database::new())));
    create_router(state)
}

/// Build a JSON request.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request.
#[allow(dead_code)]
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
