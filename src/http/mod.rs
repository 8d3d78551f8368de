//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, CORS, tracing)
//!     → request.rs (assign/propagate request ID, JSON body extraction)
//!     → handlers.rs (/crawl, /health, /)
//!     → response.rs (errors → {"detail": ...})
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, JsonBody, UuidRequestId, X_REQUEST_ID};
pub use response::ApiError;
pub use server::{AppState, HttpServer};
