//! Batch crawl driver.
//!
//! # Responsibilities
//! - Call the backend once per URL, in request order
//! - Collect records through the transformer
//! - Stop at the first failure and report it as a gateway error
//!
//! # Design Decisions
//! - Strictly sequential: output order equals input order and at most one
//!   backend call is in flight per inbound request
//! - All-or-nothing: no partial results, no retries

use thiserror::Error;

use crate::crawl::transform::{to_record, ProxyRecord};
use crate::observability::metrics;
use crate::upstream::{BackendPayload, CrawlBackend, UpstreamError};

pub const BAD_GATEWAY_DETAIL: &str = "bad gateway";
pub const INVALID_JSON_DETAIL: &str = "bad gateway - invalid json received from crawl api";

/// A backend failure that aborted the batch.
#[derive(Debug, Error)]
#[error("crawl of {url} failed: {source}")]
pub struct GatewayError {
    /// URL whose backend call failed.
    pub url: String,
    pub source: UpstreamError,
}

impl GatewayError {
    /// Caller-facing text. Only an unparseable body is distinguished.
    pub fn detail(&self) -> &'static str {
        match self.source {
            UpstreamError::InvalidJson(_) => INVALID_JSON_DETAIL,
            UpstreamError::BadStatus(_) | UpstreamError::Transport(_) => BAD_GATEWAY_DETAIL,
        }
    }
}

/// Crawl every URL through `backend`, returning one record per URL in order.
pub async fn crawl_batch<B>(backend: &B, urls: &[String]) -> Result<Vec<ProxyRecord>, GatewayError>
where
    B: CrawlBackend + Sync,
{
    let mut records = Vec::with_capacity(urls.len());

    for url in urls {
        let payload = BackendPayload::for_url(url.as_str());

        match backend.fetch(&payload).await {
            Ok(result) => {
                metrics::record_backend_call("ok");
                records.push(to_record(url, result));
            }
            Err(source) => {
                metrics::record_backend_call(source.kind());
                return Err(GatewayError {
                    url: url.clone(),
                    source,
                });
            }
        }
    }

    Ok(records)
}
