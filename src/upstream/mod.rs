//! Upstream (Crawl4AI) subsystem.
//!
//! # Data Flow
//! ```text
//! URL
//!     → types.rs (BackendPayload {url, f: "fit", q: null, c: "0"})
//!     → client.rs (POST to endpoint, timeout)
//!     → BackendResult | UpstreamError
//! ```

pub mod client;
pub mod types;

pub use client::{CrawlBackend, UpstreamClient};
pub use types::{BackendPayload, BackendResult, UpstreamError};
