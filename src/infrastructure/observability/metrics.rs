//! Prometheus metrics definitions for dexboard
//!
//! All metrics use the `dexboard_` prefix.

use prometheus::{CounterVec, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::Arc;

/// Prometheus metrics for dashboard sections and provider calls
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Section renders by section title and outcome
    pub section_renders_total: CounterVec,
    /// Provider request latency in seconds
    pub provider_request_seconds: HistogramVec,
    /// Provider request failures by endpoint and error kind
    pub provider_errors_total: CounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let section_renders_total = CounterVec::new(
            Opts::new(
                "dexboard_section_renders_total",
                "Total section renders by outcome",
            ),
            &["section", "outcome"],
        )?;
        registry.register(Box::new(section_renders_total.clone()))?;

        let provider_request_seconds = HistogramVec::new(
            HistogramOpts::new(
                "dexboard_provider_request_seconds",
                "Market data provider request latency in seconds",
            )
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["endpoint"],
        )?;
        registry.register(Box::new(provider_request_seconds.clone()))?;

        let provider_errors_total = CounterVec::new(
            Opts::new(
                "dexboard_provider_errors_total",
                "Market data provider failures by endpoint and kind",
            ),
            &["endpoint", "kind"],
        )?;
        registry.register(Box::new(provider_errors_total.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            section_renders_total,
            provider_request_seconds,
            provider_errors_total,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn inc_section(&self, section: &str, outcome: &str) {
        self.section_renders_total
            .with_label_values(&[section, outcome])
            .inc();
    }

    pub fn observe_request(&self, endpoint: &str, seconds: f64) {
        self.provider_request_seconds
            .with_label_values(&[endpoint])
            .observe(seconds);
    }

    pub fn inc_provider_error(&self, endpoint: &str, kind: &str) {
        self.provider_errors_total
            .with_label_values(&[endpoint, kind])
            .inc();
    }
}
