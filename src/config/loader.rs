//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load configuration from a TOML file, apply `BASE_URL`, and validate.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, |key| std::env::var(key).ok())?;
    tracing::info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Build configuration from defaults and the environment only.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    parse_config("", |key| std::env::var(key).ok())
}

/// Parse, override, and validate configuration text.
pub fn parse_config<F>(content: &str, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config: AppConfig = toml::from_str(content)?;
    config.apply_env(lookup);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
