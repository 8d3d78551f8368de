//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP layer and crawl pipeline produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, opt-in)
//! ```
//!
//! # Design Decisions
//! - Every log line for a request carries its request ID
//! - Metrics are cheap and silently dropped when no exporter is installed

pub mod logging;
pub mod metrics;
