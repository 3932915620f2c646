use crate::{ApiError, ApiResult};

use serde::{Deserialize, Serialize};

/// Body of `POST /api/build-app`
///
/// Every field is optional on the wire so that a missing task or plan is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildRequest {
    /// What v0 should build
    #[serde(rename = "v0_task", default, skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,

    /// Detailed requirements for the build
    #[serde(
        rename = "development_plan",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub plan: Option<String>,

    /// Notified once the build has been created
    #[serde(
        rename = "n8n_webhook_url",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub webhook_url: Option<String>,
}

impl BuildRequest {
    /// The task and plan, or a validation error if either is missing or empty
    #[track_caller]
    pub fn required_fields(&self) -> ApiResult<(&str, &str)> {
        let task = self.task.as_deref().filter(|s| !s.is_empty());
        let plan = self.plan.as_deref().filter(|s| !s.is_empty());

        match (task, plan) {
            (Some(task), Some(plan)) => Ok((task, plan)),
            _ => Err(ApiError::missing_fields()),
        }
    }

    /// The webhook URL, if one was supplied and is non-empty
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|s| !s.is_empty())
    }
}
