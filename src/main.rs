//! OpenWebUI → Crawl4AI proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                 CRAWL PROXY                  │
//!                        │                                              │
//!   POST /crawl {urls}   │  ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//!   ─────────────────────┼─▶│   http   │───▶│  crawl  │───▶│ upstream │─┼──▶ Crawl4AI /md
//!                        │  │ handlers │    │  batch  │    │  client  │ │    (one call per URL,
//!   [{page_content,      │  └──────────┘    └────┬────┘    └──────────┘ │     sequential)
//!     metadata}]         │        ▲              │                      │
//!   ◀────────────────────┼────────┴──────── transform                   │
//!                        │                                              │
//!                        │  config · lifecycle · observability          │
//!                        └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;

use crawl4ai_proxy::config::load_config;
use crawl4ai_proxy::lifecycle;
use crawl4ai_proxy::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "crawl4ai-proxy", version)]
#[command(about = "Translate OpenWebUI web-loader requests into Crawl4AI calls", long_about = None)]
struct Args {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, env = "PROXY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&config.observability);

    tracing::info!("crawl4ai-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        crawl4ai = %config.crawl4ai.endpoint,
        timeout_secs = config.crawl4ai.timeout_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
