use serde::{Deserialize, Serialize};

/// Role of the author of every prompt the relay sends
pub const USER_ROLE: &str = "user";

/// A single message in a chat creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// A message authored by the user
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: USER_ROLE.to_string(),
            content: content.into(),
        }
    }
}
