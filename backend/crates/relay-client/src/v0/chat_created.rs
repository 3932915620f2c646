use serde::Deserialize;

/// The parts of a created chat the relay reads; everything else is ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChatCreated {
    #[serde(default)]
    pub id: Option<String>,

    /// Web URL of the generated project, when the API provides one
    #[serde(default)]
    pub url: Option<String>,
}

impl ChatCreated {
    /// Project URL for this chat.
    ///
    /// Uses `url` when present and non-empty, otherwise `{project_url_base}/{id}`.
    /// None when the response carries neither.
    pub fn project_url(&self, project_url_base: &str) -> Option<String> {
        if let Some(url) = self.url.as_deref().filter(|url| !url.is_empty()) {
            return Some(url.to_string());
        }

        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(|id| format!("{}/{}", project_url_base.trim_end_matches('/'), id))
    }
}
