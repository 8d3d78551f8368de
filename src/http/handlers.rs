//! API handlers: `/crawl`, `/health` and `/`.

use axum::{
    extract::{rejection::JsonRejection, ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Instant;

use crate::crawl::{crawl_batch, CrawlRequest, ProxyRecord};
use crate::http::request::{request_id, JsonBody};
use crate::http::response::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::UpstreamClient;

pub const SERVICE_NAME: &str = "OpenWebUI to Crawl4AI Proxy";
pub const ENDPOINTS: [&str; 2] = ["/crawl", "/health"];

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub service: String,
    pub endpoints: Vec<String>,
    pub crawl4ai: String,
    pub proxy_port: u16,
}

/// Liveness only; the backend is not contacted.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}

pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        endpoints: ENDPOINTS.iter().map(|e| e.to_string()).collect(),
        crawl4ai: state.config.crawl4ai.endpoint.clone(),
        proxy_port: state.config.listener.port,
    })
}

/// Crawl every URL through Crawl4AI and answer with records in request order.
pub async fn crawl(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<JsonBody<CrawlRequest>, JsonRejection>,
) -> Result<Json<Vec<ProxyRecord>>, ApiError> {
    let start_time = Instant::now();
    let request_id = request_id(&headers);
    let client = addr.ip();

    let JsonBody(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            let err = ApiError::from(rejection);
            tracing::warn!(request_id = %request_id, client = %client, error = %err, "Rejected crawl request");
            metrics::record_request(err.status().as_u16(), start_time);
            return Err(err);
        }
    };

    tracing::info!(
        request_id = %request_id,
        client = %client,
        urls = ?request.urls,
        "Request to crawl"
    );
    metrics::record_urls(request.urls.len());

    // The client lives only for this request.
    let result = match UpstreamClient::new(&state.config.crawl4ai) {
        Ok(upstream) => crawl_batch(&upstream, &request.urls)
            .await
            .map_err(ApiError::from),
        Err(e) => Err(ApiError::from(e)),
    };

    match result {
        Ok(records) => {
            tracing::info!(request_id = %request_id, client = %client, status = 200, records = records.len(), "Crawl completed");
            metrics::record_request(200, start_time);
            Ok(Json(records))
        }
        Err(err) => {
            let status = err.status();
            tracing::warn!(
                request_id = %request_id,
                client = %client,
                status = status.as_u16(),
                error = %err,
                "Crawl failed"
            );
            metrics::record_request(status.as_u16(), start_time);
            Err(err)
        }
    }
}
