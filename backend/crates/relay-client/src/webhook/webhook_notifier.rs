use crate::{ClientResult, WebhookPayload};

use reqwest::{Client as ReqwestClient, StatusCode};

/// Posts build notifications to caller-supplied webhook URLs
#[derive(Debug, Clone, Default)]
pub struct WebhookNotifier {
    client: ReqwestClient,
}

impl WebhookNotifier {
    pub fn new() -> Self {
        Self {
            client: ReqwestClient::new(),
        }
    }

    /// POST `payload` to `url` once.
    ///
    /// Returns the webhook's status; a non-success status is not an error
    /// here, callers decide what to make of it.
    pub async fn notify(&self, url: &str, payload: &WebhookPayload) -> ClientResult<StatusCode> {
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response.status())
    }
}
