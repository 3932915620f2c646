pub mod build_app;
pub mod error;
