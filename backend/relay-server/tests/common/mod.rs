#![allow(dead_code)]

//! Test infrastructure for relay-server API tests

use relay_client::{V0Client, WebhookNotifier};
use relay_server::{AppState, BuildResponse, build_router};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_PROJECT_URL_BASE: &str = "https://v0.app/chat";

/// Create AppState pointing the generation API at `upstream_uri`
pub fn create_test_app_state(upstream_uri: &str, api_key: Option<&str>) -> AppState {
    AppState {
        v0_client: V0Client::new(upstream_uri),
        notifier: WebhookNotifier::new(),
        api_key: api_key.map(String::from),
        project_url_base: TEST_PROJECT_URL_BASE.to_string(),
    }
}

/// POST a JSON value to /api/build-app
pub async fn post_build(state: AppState, body: Value) -> (StatusCode, BuildResponse) {
    post_build_raw(state, &body.to_string()).await
}

/// POST a raw body to /api/build-app with a JSON content type
pub async fn post_build_raw(state: AppState, body: &str) -> (StatusCode, BuildResponse) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/build-app")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_build(state, request).await
}

/// POST a raw body to /api/build-app without any content type header
pub async fn post_build_untyped(state: AppState, body: &str) -> (StatusCode, BuildResponse) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/build-app")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_build(state, request).await
}

async fn send_build(state: AppState, request: Request<Body>) -> (StatusCode, BuildResponse) {
    let app = build_router(state);

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: BuildResponse = serde_json::from_slice(&bytes).unwrap();

    (status, parsed)
}

/// GET a path and return status plus body text
pub async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
