use crate::{AppState, build_app, form, handle_panic, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Form front-end
        .route("/", get(form::build_form))
        // Relay endpoint
        .route("/api/build-app", post(build_app))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        // A panic in a handler becomes a JSON 500 instead of a dropped connection
        .layer(CatchPanicLayer::custom(handle_panic))
        // CORS middleware (automation tools call the endpoint cross-origin)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
