use relay_client::{V0Client, WebhookNotifier};
use relay_config::UpstreamConfig;

/// Shared, immutable state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub v0_client: V0Client,
    pub notifier: WebhookNotifier,
    /// Generation API credential; checked on every build request
    pub api_key: Option<String>,
    /// Base for project URLs when the API response carries none
    pub project_url_base: String,
}

impl AppState {
    pub fn from_config(config: &UpstreamConfig) -> Self {
        Self {
            v0_client: V0Client::new(&config.base_url),
            notifier: WebhookNotifier::new(),
            api_key: config.api_key().map(String::from),
            project_url_base: config.project_url_base.clone(),
        }
    }

    /// The credential, if one is configured and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
