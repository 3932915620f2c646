#[allow(clippy::module_inception)]
pub mod build_app;
pub mod build_request;
pub mod build_response;
pub mod prompt;
