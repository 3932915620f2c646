use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "App built successfully";
pub const FAILURE_MESSAGE: &str = "Failed to build app";

/// Response of `POST /api/build-app`, for success and failure alike
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResponse {
    pub success: bool,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BuildResponse {
    pub fn built(chat_id: Option<String>, project_url: String) -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
            chat_id,
            project_url: Some(project_url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            chat_id: None,
            project_url: None,
            error: Some(error.into()),
        }
    }
}
