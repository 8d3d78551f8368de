//! OpenWebUI → Crawl4AI translation proxy library.

pub mod config;
pub mod crawl;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
