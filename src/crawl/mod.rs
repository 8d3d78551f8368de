//! Crawl request pipeline.
//!
//! # Data Flow
//! ```text
//! CrawlRequest {urls}
//!     → batch.rs (one backend call per URL, in order)
//!     → transform.rs (markdown → ProxyRecord)
//!     → Vec<ProxyRecord> | GatewayError (first failure wins)
//! ```

pub mod batch;
pub mod transform;

use serde::{Deserialize, Serialize};

pub use batch::{crawl_batch, GatewayError, BAD_GATEWAY_DETAIL, INVALID_JSON_DETAIL};
pub use transform::{to_record, ProxyRecord, RecordMetadata};

/// Inbound body of `POST /crawl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CrawlRequest {
    pub urls: Vec<String>,
}
