//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable names recognized by [`apply_env_overrides`].
pub mod env {
    pub const SERVER_HOST: &str = "SERVER_HOST";
    pub const SERVER_PORT: &str = "SERVER_PORT";
    pub const SERVER_TIMEOUT: &str = "SERVER_TIMEOUT";
    pub const SERVER_MAX_BODY_BYTES: &str = "SERVER_MAX_BODY_BYTES";
    pub const DATABASE_TYPE: &str = "DATABASE_TYPE";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    pub const METRICS_ENABLED: &str = "METRICS_ENABLED";
    pub const METRICS_ADDRESS: &str = "METRICS_ADDRESS";
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(std::io::Error),

    #[error("Parse error: {0}")]
    Parse(toml::de::Error),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },

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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = parse_config_file(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Build the runtime configuration.
///
/// Starts from `path` (or defaults), applies process environment overrides,
/// then validates the result once.
pub fn load(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    load_with(path, |key| std::env::var(key).ok())
}

fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(path) => parse_config_file(path)?,
        None => AppConfig::default(),
    };
    let config = apply_env_overrides(base, lookup)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Override fields from environment variables.
///
/// `lookup` returns the value for a variable name, if set.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup(env::SERVER_HOST) {
        config.server.host = host;
    }
    if let Some(port) = parsed(&lookup, env::SERVER_PORT)? {
        config.server.port = port;
    }
    if let Some(timeout) = parsed(&lookup, env::SERVER_TIMEOUT)? {
        config.server.timeout_secs = timeout;
    }
    if let Some(limit) = parsed(&lookup, env::SERVER_MAX_BODY_BYTES)? {
        config.server.max_body_bytes = limit;
    }
    if let Some(kind) = lookup(env::DATABASE_TYPE) {
        config.database.kind = kind;
    }
    if let Some(level) = lookup(env::LOG_LEVEL) {
        config.observability.log_level = level;
    }
    if let Some(format) = parsed(&lookup, env::LOG_FORMAT)? {
        config.observability.log_format = format;
    }
    if let Some(enabled) = parsed(&lookup, env::METRICS_ENABLED)? {
        config.observability.metrics_enabled = enabled;
    }
    if let Some(address) = lookup(env::METRICS_ADDRESS) {
        config.observability.metrics_address = address;
    }

    Ok(config)
}

fn parsed<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { key, value }),
    }
}
