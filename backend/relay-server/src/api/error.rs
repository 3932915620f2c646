//! REST API error types
//!
//! Every failure is rendered as a `BuildResponse` with `success: false`, so
//! the form and automation callers only ever parse one JSON shape.

use crate::BuildResponse;

use relay_client::ClientError;
use relay_config::API_KEY_ENV_VAR;

use std::any::Any;
use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

/// Error text for requests missing the task or the plan
pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: v0_task and development_plan are required";

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Client input is missing or empty (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The relay is missing configuration it needs (500)
    #[error("Configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// The generation API answered with a non-success status (500)
    #[error("Upstream error: {status} - {body} {location}")]
    Upstream {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    /// Anything else (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn missing_fields() -> Self {
        ApiError::Validation {
            message: MISSING_FIELDS_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_api_key() -> Self {
        ApiError::Config {
            message: format!("{} environment variable is not configured", API_KEY_ENV_VAR),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Config { .. } | ApiError::Upstream { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The text placed in the response's `error` field (no source location)
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation { message, .. }
            | ApiError::Config { message, .. }
            | ApiError::Internal { message, .. } => message.clone(),
            ApiError::Upstream { status, body, .. } => {
                format!("v0 API error: {} - {}", status, body)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if matches!(self, ApiError::Validation { .. }) {
            log::warn!("{}", self);
        } else {
            log::error!("{}", self);
        }

        let status = self.status_code();
        let body = BuildResponse::failed(self.client_message());

        (status, Json(body)).into_response()
    }
}

/// Convert outbound client errors to API errors
impl From<ClientError> for ApiError {
    #[track_caller]
    fn from(e: ClientError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            ClientError::Upstream { status, body, .. } => ApiError::Upstream {
                status: status.as_u16(),
                body,
                location,
            },
            ClientError::Http { message, .. } | ClientError::Json { message, .. } => {
                ApiError::Internal { message, location }
            }
        }
    }
}

/// Convert request body decoding failures to API errors
///
/// A body that is not JSON is an unexpected failure (500), not a validation
/// error.
impl From<serde_json::Error> for ApiError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ApiError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Turn a panic caught by `CatchPanicLayer` into the standard error body
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown error occurred".to_string()
    };

    ApiError::internal(message).into_response()
}

pub type Result<T> = std::result::Result<T, ApiError>;
