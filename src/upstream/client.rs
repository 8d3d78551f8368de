//! HTTP client for the Crawl4AI backend.
//!
//! # Responsibilities
//! - POST one payload per call to the configured endpoint
//! - Enforce the per-call timeout
//! - Classify failures (status, transport, body)
//!
//! # Design Decisions
//! - No retries: a failed call is reported once and the caller decides
//! - One client per inbound request; it is dropped when the request ends

use reqwest::{Client, StatusCode};
use std::future::Future;

use crate::config::Crawl4aiConfig;
use crate::upstream::types::{BackendPayload, BackendResult, UpstreamError};

/// Anything that can turn a payload into a backend result.
///
/// Implemented by [`UpstreamClient`]; tests provide scripted backends.
pub trait CrawlBackend {
    fn fetch(
        &self,
        payload: &BackendPayload,
    ) -> impl Future<Output = Result<BackendResult, UpstreamError>> + Send;
}

/// Crawl4AI markdown endpoint client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
    endpoint: String,
}

impl UpstreamClient {
    /// Build a client bound to the configured endpoint and timeout.
    pub fn new(config: &Crawl4aiConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl CrawlBackend for UpstreamClient {
    async fn fetch(&self, payload: &BackendPayload) -> Result<BackendResult, UpstreamError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::BadStatus(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
