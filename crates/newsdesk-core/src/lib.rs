//! Shared configuration for the newsdesk workspace.

mod app_config;
mod config;

use thiserror::Error;

pub use app_config::{AppConfig, DEFAULT_NEWS_QUERY, MAX_ARTICLES_LIMIT};
pub use config::{load_app_config, load_app_config_with_overrides};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
