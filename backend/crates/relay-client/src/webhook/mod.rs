pub(crate) mod webhook_notifier;
pub(crate) mod webhook_payload;
