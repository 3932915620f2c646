//! relay-client
//!
//! Outbound HTTP clients used by the relay: the v0 chat API that turns a
//! prompt into a generated project, and the optional completion webhook.

pub(crate) mod error;
pub(crate) mod v0;
pub(crate) mod webhook;


pub use error::{ClientError, Result as ClientResult};
pub use v0::{
    chat_created::ChatCreated,
    chat_message::ChatMessage,
    create_chat_request::CreateChatRequest,
    v0_client::V0Client,
};
pub use webhook::{
    webhook_notifier::WebhookNotifier,
    webhook_payload::{COMPLETED_STATUS, WebhookPayload},
};
