//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_PORT: &str = "PROXY_PORT";
pub const ENV_IP: &str = "PROXY_IP";
pub const ENV_ENDPOINT: &str = "CRAWL4AI_ENDPOINT";
pub const ENV_TIMEOUT_SECS: &str = "CRAWL4AI_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "PROXY_LOG_LEVEL";
pub const ENV_METRICS_ADDRESS: &str = "PROXY_METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {key}: {reason}")]
    Env {
        key: &'static str,
        value: String,
        reason: String,
    },

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

/// Load configuration from an optional TOML file, then apply the process
/// environment on top and validate the result.
pub fn load_config(path: Option<&Path>) -> Result<ProxyConfig, ConfigError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_config`] with an injectable environment lookup.
pub fn load_config_with<F>(path: Option<&Path>, lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => ProxyConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply environment overrides. Empty values count as unset.
pub fn apply_env_overrides<F>(config: &mut ProxyConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(port) = get(ENV_PORT) {
        config.listener.port = parse_env(ENV_PORT, port)?;
    }
    if let Some(ip) = get(ENV_IP) {
        config.listener.ip = Some(ip);
    }
    if let Some(endpoint) = get(ENV_ENDPOINT) {
        config.crawl4ai.endpoint = endpoint;
    }
    if let Some(timeout) = get(ENV_TIMEOUT_SECS) {
        config.crawl4ai.timeout_secs = parse_env(ENV_TIMEOUT_SECS, timeout)?;
    }
    if let Some(level) = get(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }
    if let Some(address) = get(ENV_METRICS_ADDRESS) {
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = address;
    }

    Ok(())
}

fn parse_env<T>(key: &'static str, value: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|e: T::Err| ConfigError::Env {
        key,
        reason: e.to_string(),
        value,
    })
}
