/// Common test utilities for Monopereo integration tests
///
/// This file contains shared functions for all integration tests: building
/// the application over the built-in data or a custom fixture, and sending
/// requests to it.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use monopereo::{
    create_app,
    repo::{InMemoryRepository, RepoHandle},
    store::{DataStore, Fixture},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Creates a test application serving the built-in users and items
///
/// ### Returns
///
/// An Axum Router configured with all routes
pub fn create_test_app() -> Router {
    let repo: RepoHandle = Arc::new(InMemoryRepository::seeded());
    create_app(repo)
}

/// Creates a test application serving the given fixture
#[allow(dead_code)]
pub fn create_test_app_with(fixture: Fixture) -> Router {
    let store = DataStore::from_fixture(fixture).unwrap();
    let repo: RepoHandle = Arc::new(InMemoryRepository::new(store));
    create_app(repo)
}

/// Sends a GET request and returns the status code and the raw body
pub async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Sends a GET request and parses the response body as JSON
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_raw(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

/// Extracts the `id` field of every object in a JSON array
#[allow(dead_code)]
pub fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}
