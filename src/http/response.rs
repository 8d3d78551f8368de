//! Error responses.
//!
//! # Responsibilities
//! - Map crawl failures to `502 Bad Gateway`
//! - Map malformed request bodies to the extractor's own 4xx status
//! - Render every error as `{"detail": "..."}`

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::crawl::{GatewayError, BAD_GATEWAY_DETAIL};
use crate::upstream::UpstreamError;

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body missing, not JSON, or not `{"urls": [...]}`.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] JsonRejection),

    /// A backend call failed and the batch was aborted.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The upstream client could not be constructed.
    #[error("upstream client unavailable: {0}")]
    Client(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(rejection) => rejection.status(),
            ApiError::Gateway(_) | ApiError::Client(_) => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::InvalidRequest(rejection) => rejection.body_text(),
            ApiError::Gateway(e) => e.detail().to_string(),
            ApiError::Client(_) => BAD_GATEWAY_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.detail() }))).into_response()
    }
}
