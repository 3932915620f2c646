pub(crate) mod chat_created;
pub(crate) mod chat_message;
pub(crate) mod create_chat_request;
pub(crate) mod v0_client;
