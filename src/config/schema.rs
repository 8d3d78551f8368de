//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits so an optional TOML file can supply them;
//! environment overrides are applied on top by the loader.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the crawl proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address, port).
    pub listener: ListenerConfig,

    /// Crawl4AI backend the proxy translates requests for.
    pub crawl4ai: Crawl4aiConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind IP. `None` binds all interfaces.
    pub ip: Option<String>,

    /// Listen port.
    pub port: u16,
}

impl ListenerConfig {
    /// Address string handed to the TCP listener, e.g. `0.0.0.0:9999`.
    pub fn bind_address(&self) -> String {
        let ip = self.ip.as_deref().unwrap_or("0.0.0.0");
        if ip.contains(':') {
            format!("[{}]:{}", ip, self.port)
        } else {
            format!("{}:{}", ip, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            ip: None,
            port: 9999,
        }
    }
}

/// Crawl4AI backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Crawl4aiConfig {
    /// Markdown endpoint URL (e.g., "http://localhost:11235/md").
    pub endpoint: String,

    /// Timeout for a single backend call in seconds.
    pub timeout_secs: u64,
}

impl Crawl4aiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Crawl4aiConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11235/md".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProxyConfig::default();
        assert_eq!(config.listener.port, 9999);
        assert_eq!(config.listener.bind_address(), "0.0.0.0:9999");
        assert_eq!(config.crawl4ai.endpoint, "http://localhost:11235/md");
        assert_eq!(config.crawl4ai.timeout(), Duration::from_secs(30));
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_bind_address_with_ip() {
        let listener = ListenerConfig {
            ip: Some("127.0.0.1".into()),
            port: 8000,
        };
        assert_eq!(listener.bind_address(), "127.0.0.1:8000");

        let v6 = ListenerConfig {
            ip: Some("::1".into()),
            port: 8000,
        };
        assert_eq!(v6.bind_address(), "[::1]:8000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ProxyConfig = toml::from_str(
            r#"
            [crawl4ai]
            endpoint = "http://crawler:11235/md"
            "#,
        )
        .unwrap();

        assert_eq!(config.crawl4ai.endpoint, "http://crawler:11235/md");
        assert_eq!(config.crawl4ai.timeout_secs, 30);
        assert_eq!(config.listener, ListenerConfig::default());
    }
}
