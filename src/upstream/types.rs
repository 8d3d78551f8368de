//! Wire types and errors for the Crawl4AI markdown endpoint.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Content filter hint sent with every request.
pub const FILTER_FIT: &str = "fit";

/// Cache bypass flag ("0" = do not serve from cache).
pub const CACHE_DISABLED: &str = "0";

/// Body of a single `POST /md` call.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BackendPayload {
    pub url: String,
    pub f: &'static str,
    /// Always serialized, as `null`.
    pub q: Option<String>,
    pub c: &'static str,
}

impl BackendPayload {
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            f: FILTER_FIT,
            q: None,
            c: CACHE_DISABLED,
        }
    }
}

/// The subset of the backend response the proxy reads.
///
/// Crawl4AI returns more fields (`url`, `filter`, `success`, ...); they are
/// ignored. A missing or `null` `markdown` is treated as empty text.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct BackendResult {
    #[serde(default)]
    pub markdown: Option<String>,
}

impl BackendResult {
    pub fn markdown_or_empty(self) -> String {
        self.markdown.unwrap_or_default()
    }
}

/// Failure of a single upstream call.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Backend answered with anything other than 200.
    #[error("crawl api returned {0}")]
    BadStatus(StatusCode),

    /// Connection refused, DNS failure, timeout, or body read failure.
    #[error("crawl api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Body is not a JSON object with an optional string `markdown`.
    #[error("invalid json from crawl api: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::BadStatus(_) => "bad_status",
            UpstreamError::Transport(_) => "transport",
            UpstreamError::InvalidJson(_) => "invalid_json",
        }
    }
}
