use crate::{ChatCreated, ClientError, ClientResult, CreateChatRequest};

use reqwest::Client as ReqwestClient;

const CHATS_PATH: &str = "/chats";

/// HTTP client for the v0 chat API
#[derive(Debug, Clone)]
pub struct V0Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl V0Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "https://api.v0.dev")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Create a chat seeded with `prompt`.
    ///
    /// The credential is passed per call because the relay checks for it on
    /// every request rather than at startup.
    ///
    /// # Errors
    /// * `ClientError::Http` - the request could not be sent or the body read
    /// * `ClientError::Upstream` - non-success status; carries the raw body
    /// * `ClientError::Json` - success status but the body is not a chat
    pub async fn create_chat(&self, api_key: &str, prompt: &str) -> ClientResult<ChatCreated> {
        let url = format!("{}{}", self.base_url, CHATS_PATH);
        let body = CreateChatRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::upstream(status, text));
        }

        let chat: ChatCreated = serde_json::from_str(&text)?;
        Ok(chat)
    }
}
