use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Status reported for every successful build
pub const COMPLETED_STATUS: &str = "completed";

/// Body POSTed to the caller's webhook after a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
    pub project_url: String,
    /// RFC 3339, UTC, millisecond precision (e.g. `2026-01-01T12:00:00.000Z`)
    pub timestamp: String,
}

impl WebhookPayload {
    /// A `completed` notification stamped with the current time
    pub fn completed(chat_id: Option<&str>, project_url: &str) -> Self {
        Self {
            status: COMPLETED_STATUS.to_string(),
            chat_id: chat_id.map(String::from),
            project_url: project_url.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
