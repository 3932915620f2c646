use crate::ChatMessage;

use serde::{Deserialize, Serialize};

/// Body of `POST /chats`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub messages: Vec<ChatMessage>,
}

impl CreateChatRequest {
    /// A new chat seeded with one user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(prompt)],
        }
    }
}
