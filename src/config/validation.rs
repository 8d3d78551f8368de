//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend endpoint is a usable http(s) URL
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("crawl4ai.endpoint '{0}' is not a valid URL: {1}")]
    InvalidEndpoint(String, String),

    #[error("crawl4ai.endpoint '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("crawl4ai.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("listener.ip '{0}' is not an IP address")]
    InvalidIp(String),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let endpoint = &config.crawl4ai.endpoint;
    match Url::parse(endpoint) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(endpoint.clone()));
        }
        Ok(_) => {}
        Err(e) => errors.push(ValidationError::InvalidEndpoint(endpoint.clone(), e.to_string())),
    }

    if config.crawl4ai.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if let Some(ip) = &config.listener.ip {
        if ip.parse::<IpAddr>().is_err() {
            errors.push(ValidationError::InvalidIp(ip.clone()));
        }
    }

    let observability = &config.observability;
    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
