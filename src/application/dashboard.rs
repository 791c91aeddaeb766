use crate::application::formatting::{dca_fragment, error_fragment, message_fragment};
use crate::application::sections::Section;
use crate::domain::dca::{DcaPlan, DcaSimulationResult};
use crate::domain::errors::ProviderError;
use crate::domain::ports::{MarketDataProvider, RenderTarget};
use crate::domain::slots::DisplaySlot;
use crate::infrastructure::observability::Metrics;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const PAIR_NOT_FOUND_MESSAGE: &str = "Pair not found! Enter a valid Solana pair address.";

#[derive(Debug, Clone)]
pub struct DashboardSettings {
    /// Chain used for single-pair lookups
    pub chain: String,
    pub request_timeout: Duration,
    pub dca_plan: DcaPlan,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            chain: "solana".to_string(),
            request_timeout: Duration::from_secs(10),
            dca_plan: DcaPlan::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionOutcome {
    Rendered { items: usize },
    Failed { reason: String },
}

impl SectionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Rendered { .. } => "rendered",
            Self::Failed { .. } => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DcaOutcome {
    Simulated(DcaSimulationResult),
    NotFound,
    Failed { reason: String },
}

/// Result of a page-load pass, one entry per section in display order
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub outcomes: Vec<(Section, SectionOutcome)>,
}

impl LoadReport {
    pub fn outcome(&self, section: Section) -> Option<&SectionOutcome> {
        self.outcomes
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, o)| o)
    }

    pub fn failed(&self) -> Vec<Section> {
        self.outcomes
            .iter()
            .filter(|(_, o)| !o.is_rendered())
            .map(|(s, _)| *s)
            .collect()
    }
}

/// Runs the fetch-transform-render sections against a provider and a render target.
///
/// Every failure is recovered per section: the slot receives an explanatory
/// message and the other sections are unaffected.
pub struct Dashboard {
    provider: Arc<dyn MarketDataProvider>,
    target: Arc<dyn RenderTarget>,
    settings: DashboardSettings,
    metrics: Option<Metrics>,
}

impl Dashboard {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        target: Arc<dyn RenderTarget>,
        settings: DashboardSettings,
    ) -> Self {
        Self {
            provider,
            target,
            settings,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Page-load entry point. Starts every section concurrently and waits for
    /// all of them; completion order follows provider latency.
    pub async fn initialize(&self) -> LoadReport {
        info!("Dashboard: Loading {} sections", Section::ALL.len());

        let transactions = self.load_transactions();
        let (overview, trends, tokens, smart_money) = futures::join!(
            self.load_overview(),
            self.load_daily_trends(),
            self.load_top_tokens(),
            self.load_smart_money(),
        );

        let report = LoadReport {
            outcomes: vec![
                (Section::Overview, overview),
                (Section::DailyTrends, trends),
                (Section::TopTokens, tokens),
                (Section::Transactions, transactions),
                (Section::SmartMoney, smart_money),
            ],
        };

        let failed = report.failed();
        if failed.is_empty() {
            info!("Dashboard: All sections rendered");
        } else {
            warn!("Dashboard: {} section(s) failed: {:?}", failed.len(), failed);
        }
        report
    }

    pub async fn load_overview(&self) -> SectionOutcome {
        self.load_section(Section::Overview).await
    }

    pub async fn load_daily_trends(&self) -> SectionOutcome {
        self.load_section(Section::DailyTrends).await
    }

    pub async fn load_top_tokens(&self) -> SectionOutcome {
        self.load_section(Section::TopTokens).await
    }

    pub async fn load_smart_money(&self) -> SectionOutcome {
        self.load_section(Section::SmartMoney).await
    }

    /// Static demo data, no provider call
    pub fn load_transactions(&self) -> SectionOutcome {
        let section = Section::Transactions;
        let outcome = match self.write(section.slot(), &section.fragment(&[])) {
            Ok(()) => SectionOutcome::Rendered {
                items: section.cap(),
            },
            Err(reason) => SectionOutcome::Failed { reason },
        };
        self.record_section(section, &outcome);
        outcome
    }

    pub async fn load_section(&self, section: Section) -> SectionOutcome {
        let Some(term) = section.search_term() else {
            return self.load_transactions();
        };

        debug!("Dashboard: Fetching {} (q={})", section, term);

        let outcome = match self
            .fetch("search", self.provider.search(term))
            .await
        {
            Ok(pairs) => {
                let received = pairs.len();
                let selected = section.select(pairs);
                debug!(
                    "Dashboard: {} kept {} of {} pairs",
                    section,
                    selected.len(),
                    received
                );
                match self.write(section.slot(), &section.fragment(&selected)) {
                    Ok(()) => SectionOutcome::Rendered {
                        items: selected.len(),
                    },
                    Err(reason) => SectionOutcome::Failed { reason },
                }
            }
            Err(e) => {
                warn!("Dashboard: {} failed: {}", section, e);
                let reason = self.show_failure(
                    section.slot(),
                    &error_fragment(section.title(), &e.to_string()),
                    e.to_string(),
                );
                SectionOutcome::Failed { reason }
            }
        };

        self.record_section(section, &outcome);
        outcome
    }

    /// Look up `address` on the configured chain and run the DCA simulation
    /// against its current price.
    pub async fn check_dca(&self, address: &str) -> DcaOutcome {
        let slot = DisplaySlot::DcaResult;
        let address = address.trim();

        if address.is_empty() {
            info!("DCA Checker: Empty pair address");
            return self.show_not_found(slot);
        }

        info!(
            "DCA Checker: Looking up {} on {}",
            address, self.settings.chain
        );

        let pair = match self
            .fetch("pair", self.provider.pair(&self.settings.chain, address))
            .await
        {
            Ok(Some(pair)) => pair,
            Ok(None) => {
                info!("DCA Checker: Pair {} not found", address);
                return self.show_not_found(slot);
            }
            Err(e) => {
                warn!("DCA Checker: Lookup failed: {}", e);
                let reason =
                    self.show_failure(slot, &error_fragment(slot.title(), &e.to_string()), e.to_string());
                return DcaOutcome::Failed { reason };
            }
        };

        let Some(current_price) = pair.price_usd_value() else {
            let reason = format!("Pair {} has no USD price", pair.symbol_pair());
            warn!("DCA Checker: {}", reason);
            let reason = self.show_failure(slot, &message_fragment(&reason), reason.clone());
            return DcaOutcome::Failed { reason };
        };

        match self.settings.dca_plan.simulate(current_price) {
            Ok(result) => {
                info!(
                    "DCA Checker: {} invested={} tokens={:.4} avg={:.4} current={:.4}",
                    pair.symbol_pair(),
                    result.total_invested,
                    result.total_tokens,
                    result.avg_price,
                    result.current_price
                );
                match self.write(slot, &dca_fragment(&result)) {
                    Ok(()) => DcaOutcome::Simulated(result),
                    Err(reason) => DcaOutcome::Failed { reason },
                }
            }
            Err(e) => {
                warn!("DCA Checker: Simulation rejected: {}", e);
                let reason = self.show_failure(
                    slot,
                    &message_fragment(&format!("Cannot simulate DCA: {e}")),
                    e.to_string(),
                );
                DcaOutcome::Failed { reason }
            }
        }
    }

    /// Await a provider call under the request timeout, recording latency
    async fn fetch<T, F>(&self, endpoint: &str, call: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, ProviderError>>,
    {
        let started = Instant::now();
        let timeout = self.settings.request_timeout;

        let result = match tokio::time::timeout(timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(ProviderError::Timeout {
                duration_ms: timeout.as_millis() as u64,
            }),
        };

        if let Some(metrics) = &self.metrics {
            metrics.observe_request(endpoint, started.elapsed().as_secs_f64());
            if let Err(e) = &result {
                metrics.inc_provider_error(endpoint, e.kind());
            }
        }
        result
    }

    fn write(&self, slot: DisplaySlot, fragment: &str) -> Result<(), String> {
        self.target.render(slot, fragment).map_err(|e| {
            warn!("Dashboard: Failed to render {}: {:#}", slot, e);
            format!("render failed: {e}")
        })
    }

    /// Put a failure message in `slot`. A render error is appended to `reason`.
    fn show_failure(&self, slot: DisplaySlot, fragment: &str, reason: String) -> String {
        match self.write(slot, fragment) {
            Ok(()) => reason,
            Err(render) => format!("{reason} ({render})"),
        }
    }

    fn show_not_found(&self, slot: DisplaySlot) -> DcaOutcome {
        match self.write(slot, PAIR_NOT_FOUND_MESSAGE) {
            Ok(()) => DcaOutcome::NotFound,
            Err(reason) => DcaOutcome::Failed { reason },
        }
    }

    fn record_section(&self, section: Section, outcome: &SectionOutcome) {
        if let Some(metrics) = &self.metrics {
            metrics.inc_section(section.title(), outcome.label());
        }
    }
}
