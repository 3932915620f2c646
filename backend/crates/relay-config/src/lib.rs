mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod upstream_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use upstream_config::UpstreamConfig;

/// Environment variable holding the generation API credential
pub const API_KEY_ENV_VAR: &str = "V0_API_KEY";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_UPSTREAM_BASE_URL: &str = "https://api.v0.dev";
const DEFAULT_PROJECT_URL_BASE: &str = "https://v0.app/chat";
