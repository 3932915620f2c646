use crate::{ApiError, BuildResponse, FAILURE_MESSAGE, handle_panic};

use relay_client::ClientError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_of(response: Response) -> BuildResponse {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_failure_body() {
    let response = ApiError::missing_fields().into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_of(response).await;
    assert!(!body.success);
    assert_eq!(body.message, FAILURE_MESSAGE);
    assert_eq!(
        body.error.as_deref(),
        Some("Missing required fields: v0_task and development_plan are required")
    );
    assert_eq!(body.project_url, None);
}

#[tokio::test]
async fn test_config_error_returns_500_naming_the_variable() {
    let response = ApiError::missing_api_key().into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert_eq!(
        body.error.as_deref(),
        Some("V0_API_KEY environment variable is not configured")
    );
}

#[tokio::test]
async fn test_upstream_error_returns_500_with_status_and_body() {
    let error = ApiError::Upstream {
        status: 429,
        body: "rate limited".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert_eq!(body.error.as_deref(), Some("v0 API error: 429 - rate limited"));
}

#[tokio::test]
async fn test_internal_error_message_has_no_source_location() {
    let response = ApiError::internal("connection reset").into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert_eq!(body.error.as_deref(), Some("connection reset"));
}

#[test]
fn test_client_upstream_error_maps_to_upstream() {
    let client_error = ClientError::upstream(StatusCode::BAD_GATEWAY, "bad gateway".to_string());

    let api_error = ApiError::from(client_error);

    match api_error {
        ApiError::Upstream { status, body, .. } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[test]
fn test_client_json_error_maps_to_internal() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let expected = json_error.to_string();

    let api_error = ApiError::from(ClientError::from_json(json_error));

    assert!(matches!(api_error, ApiError::Internal { ref message, .. } if *message == expected));
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_panic_with_string_payload_becomes_internal_error() {
    let response = handle_panic(Box::new(String::from("handler exploded")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_of(response).await;
    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("handler exploded"));
}

#[tokio::test]
async fn test_panic_with_str_payload_becomes_internal_error() {
    let response = handle_panic(Box::new("static message"));

    let body = body_of(response).await;
    assert_eq!(body.error.as_deref(), Some("static message"));
}

#[tokio::test]
async fn test_panic_with_opaque_payload_uses_generic_message() {
    let response = handle_panic(Box::new(42_u32));

    let body = body_of(response).await;
    assert_eq!(body.error.as_deref(), Some("Unknown error occurred"));
}

#[test]
fn test_request_body_decode_error_maps_to_internal() {
    let decode_error = serde_json::from_slice::<crate::BuildRequest>(b"{ not json").unwrap_err();
    let expected = decode_error.to_string();

    let api_error = ApiError::from(decode_error);

    assert!(matches!(api_error, ApiError::Internal { ref message, .. } if *message == expected));
    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
