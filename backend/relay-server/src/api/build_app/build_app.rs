//! Build relay handler
//!
//! Validates the request, sends one composed prompt to the v0 chat API and
//! optionally tells the caller's webhook where the project lives.

use crate::{ApiError, ApiResult, AppState, BuildRequest, BuildResponse, compose_prompt};

use relay_client::WebhookPayload;

use axum::{Json, body::Bytes, extract::State};
use log::{error, info, warn};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/build-app
///
/// Order of checks: body, required fields, credential, upstream call.
/// The webhook runs last and can never turn a built app into a failure.
///
/// The body is decoded as JSON whatever its `Content-Type`, so raw-body
/// callers still get a 400 for missing fields.
pub async fn build_app(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<BuildResponse>> {
    let request: BuildRequest = serde_json::from_slice(&body)?;
    let (task, plan) = request.required_fields()?;

    let api_key = state.api_key().ok_or_else(ApiError::missing_api_key)?;

    let request_id = Uuid::new_v4();
    info!("[{}] Starting app build process", request_id);
    info!("[{}] Task: {}", request_id, task);
    info!(
        "[{}] Development plan length: {}",
        request_id,
        plan.chars().count()
    );

    let prompt = compose_prompt(task, plan);
    let chat = state.v0_client.create_chat(api_key, &prompt).await?;

    let project_url = chat
        .project_url(&state.project_url_base)
        .ok_or_else(|| ApiError::internal("v0 API response contained neither a url nor an id"))?;

    info!(
        "[{}] Chat created successfully: {}",
        request_id,
        chat.id.as_deref().unwrap_or("<no id>")
    );

    if let Some(webhook_url) = request.webhook_url() {
        notify_webhook(&state, request_id, webhook_url, chat.id.as_deref(), &project_url).await;
    }

    Ok(Json(BuildResponse::built(chat.id, project_url)))
}

// =============================================================================
// Helpers
// =============================================================================

/// Best-effort completion notice; failures are logged and swallowed
async fn notify_webhook(
    state: &AppState,
    request_id: Uuid,
    webhook_url: &str,
    chat_id: Option<&str>,
    project_url: &str,
) {
    let payload = WebhookPayload::completed(chat_id, project_url);

    match state.notifier.notify(webhook_url, &payload).await {
        Ok(status) if status.is_success() => {
            info!("[{}] Notification sent to webhook", request_id);
        }
        Ok(status) => {
            warn!(
                "[{}] Webhook responded with status {}, ignoring",
                request_id, status
            );
        }
        Err(e) => {
            error!(
                "[{}] Failed to send webhook notification: {}",
                request_id, e
            );
        }
    }
}
