//! dexboard - DEX market overview
//!
//! Loads every dashboard section once, optionally runs the DCA checker for a
//! pair address, and prints the fragments or writes them into an HTML page.
//!
//! # Usage
//! ```sh
//! cargo run -- --pair <ADDRESS> --output dashboard.html
//! DEXBOARD_MODE=mock cargo run -- --metrics
//! ```

use anyhow::Result;
use clap::Parser;
use dexboard::application::{Dashboard, DcaOutcome};
use dexboard::config::{Config, Mode};
use dexboard::domain::ports::{MarketDataProvider, RenderTarget};
use dexboard::infrastructure::mock::DEMO_PAIR_ADDRESS;
use dexboard::infrastructure::observability::Metrics;
use dexboard::infrastructure::{DexScreenerProvider, MockMarketDataProvider};
use dexboard::interfaces::{ConsoleRenderTarget, HtmlPageTarget};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "dexboard", version, about = "DEX market overview and DCA checker")]
struct Args {
    /// Pair address to run the DCA checker against
    #[arg(long)]
    pair: Option<String>,

    /// Write a full HTML page instead of printing fragments
    #[arg(long)]
    output: Option<PathBuf>,

    /// Serve built-in demo data instead of calling the live API
    #[arg(long)]
    mock: bool,

    /// Print prometheus metrics after the run
    #[arg(long)]
    metrics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only rendered output
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();

    info!("dexboard {} starting...", env!("CARGO_PKG_VERSION"));

    let mut config = Config::from_env()?;
    if args.mock {
        config.mode = Mode::Mock;
    }
    info!(
        "Configuration loaded: Mode={:?}, Chain={}, Timeout={}ms",
        config.mode, config.provider.chain, config.provider.request_timeout_ms
    );

    let provider: Arc<dyn MarketDataProvider> = match config.mode {
        Mode::Live => Arc::new(
            DexScreenerProvider::builder()
                .base_url(config.provider.base_url.clone())
                .http_settings(config.provider.http_settings())
                .build()?,
        ),
        Mode::Mock => {
            info!("Mock mode: demo pair address is {}", DEMO_PAIR_ADDRESS);
            Arc::new(MockMarketDataProvider::demo())
        }
    };

    let page = args.output.as_ref().map(|_| {
        let page = HtmlPageTarget::new();
        Arc::new(match &args.pair {
            Some(address) => page.with_pair_input(address.clone()),
            None => page,
        })
    });
    let target: Arc<dyn RenderTarget> = match &page {
        Some(page) => page.clone() as Arc<dyn RenderTarget>,
        None => Arc::new(ConsoleRenderTarget::stdout()),
    };

    let metrics = if config.observability.metrics_enabled {
        Some(Metrics::new()?)
    } else {
        None
    };

    let mut dashboard = Dashboard::new(provider, target, config.to_dashboard_settings()?);
    if let Some(metrics) = &metrics {
        dashboard = dashboard.with_metrics(metrics.clone());
    }

    let report = dashboard.initialize().await;
    let failed = report.failed();
    if !failed.is_empty() {
        warn!("Sections rendered with errors: {:?}", failed);
    }

    if let Some(address) = &args.pair {
        match dashboard.check_dca(address).await {
            DcaOutcome::Simulated(result) => info!(
                "DCA: invested ${} at avg ${:.2} (current ${:.2})",
                result.total_invested, result.avg_price, result.current_price
            ),
            DcaOutcome::NotFound => warn!("DCA: pair {} not found", address),
            DcaOutcome::Failed { reason } => warn!("DCA: {}", reason),
        }
    }

    if let (Some(page), Some(path)) = (&page, &args.output) {
        page.write_to(path)?;
        info!("Page written to {}", path.display());
    }

    if args.metrics {
        match &metrics {
            Some(metrics) => print!("{}", metrics.render()),
            None => warn!("--metrics given but METRICS_ENABLED=false"),
        }
    }

    Ok(())
}
