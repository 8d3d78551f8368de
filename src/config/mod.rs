//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional config file (TOML) via loader.rs
//!     → .env / process environment overrides via loader.rs
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; changes require a restart
//! - All fields have defaults so the proxy runs with no config at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Crawl4aiConfig, ListenerConfig, ObservabilityConfig, ProxyConfig};
