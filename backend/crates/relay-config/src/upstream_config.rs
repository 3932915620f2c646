use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROJECT_URL_BASE, DEFAULT_UPSTREAM_BASE_URL};

use serde::Deserialize;

/// Configuration for the code-generation API
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the generation API; chats are created at `{base_url}/chats`
    pub base_url: String,
    /// Base used to build a project URL when the API response carries none
    pub project_url_base: String,
    /// Bearer credential. Usually supplied through `V0_API_KEY`.
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_UPSTREAM_BASE_URL),
            project_url_base: String::from(DEFAULT_PROJECT_URL_BASE),
            api_key: None,
        }
    }
}

// Hand-written so the credential never reaches a log line.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("project_url_base", &self.project_url_base)
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .finish()
    }
}

impl UpstreamConfig {
    /// The credential, treating an empty value the same as an unset one
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// The credential is checked per request, so a missing key is not an error here.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_http_url("upstream.base_url", &self.base_url)?;
        Self::validate_http_url("upstream.project_url_base", &self.project_url_base)?;
        Ok(())
    }

    #[track_caller]
    fn validate_http_url(name: &str, value: &str) -> ConfigErrorResult<()> {
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));

        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
            _ => Err(ConfigError::upstream(format!(
                "{} must be an http(s) URL, got '{}'",
                name, value
            ))),
        }
    }
}
