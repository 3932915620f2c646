pub mod api;
pub mod app_state;
pub mod error;
pub mod form;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    build_app::{
        build_app::build_app,
        build_request::BuildRequest,
        build_response::{BuildResponse, FAILURE_MESSAGE, SUCCESS_MESSAGE},
        prompt::{DEVELOPMENT_PLAN_HEADING, compose_prompt},
    },
    error::ApiError,
    error::Result as ApiResult,
    error::handle_panic,
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
