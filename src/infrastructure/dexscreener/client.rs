//! DexScreener REST client
//!
//! Implements `MarketDataProvider` over the public endpoints:
//! - `GET /latest/dex/search?q=<term>`
//! - `GET /latest/dex/pairs/<chain>/<address>`

use crate::domain::errors::ProviderError;
use crate::domain::market::{QueryResult, TradingPairRecord};
use crate::domain::ports::MarketDataProvider;
use crate::infrastructure::core::http_client_factory::{
    HttpClientFactory, HttpClientSettings, build_url_with_query,
};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::ClientWithMiddleware;
use tracing::{debug, info};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://api.dexscreener.com";

pub struct DexScreenerProvider {
    client: ClientWithMiddleware,
    base_url: String,
    request_timeout_ms: u64,
}

impl DexScreenerProvider {
    pub fn builder() -> DexScreenerProviderBuilder {
        DexScreenerProviderBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, term: &str) -> Result<Url, ProviderError> {
        build_url_with_query(&self.base_url, &["latest", "dex", "search"], &[("q", term)])
            .map_err(|e| ProviderError::Transport {
                endpoint: "/latest/dex/search".to_string(),
                reason: format!("{e:#}"),
            })
    }

    pub fn pair_url(&self, chain: &str, address: &str) -> Result<Url, ProviderError> {
        build_url_with_query::<&str, &str>(
            &self.base_url,
            &["latest", "dex", "pairs", chain, address],
            &[],
        )
        .map_err(|e| ProviderError::Transport {
            endpoint: "/latest/dex/pairs".to_string(),
            reason: format!("{e:#}"),
        })
    }

    async fn get_query(&self, url: Url) -> Result<QueryResult, ProviderError> {
        let endpoint = endpoint_of(&url);
        debug!("DexScreener: GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| match e {
            reqwest_middleware::Error::Reqwest(err) if err.is_timeout() => {
                ProviderError::Timeout {
                    duration_ms: self.request_timeout_ms,
                }
            }
            other => ProviderError::Transport {
                endpoint: endpoint.clone(),
                reason: other.to_string(),
            },
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ProviderError::Transport {
            endpoint: endpoint.clone(),
            reason: e.to_string(),
        })?;

        parse_query_body(&endpoint, &body)
    }
}

#[async_trait]
impl MarketDataProvider for DexScreenerProvider {
    async fn search(&self, term: &str) -> Result<Vec<TradingPairRecord>, ProviderError> {
        let url = self.search_url(term)?;
        let result = self.get_query(url).await?;
        info!(
            "DexScreener: search '{}' returned {} pairs",
            term,
            result.pairs.len()
        );
        Ok(result.pairs)
    }

    async fn pair(
        &self,
        chain: &str,
        address: &str,
    ) -> Result<Option<TradingPairRecord>, ProviderError> {
        let url = self.pair_url(chain, address)?;
        match self.get_query(url).await {
            Ok(result) => Ok(result.into_single()),
            Err(ProviderError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[derive(Default)]
pub struct DexScreenerProviderBuilder {
    base_url: Option<String>,
    http: Option<HttpClientSettings>,
}

impl DexScreenerProviderBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn http_settings(mut self, settings: HttpClientSettings) -> Self {
        self.http = Some(settings);
        self
    }

    pub fn build(self) -> Result<DexScreenerProvider> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| anyhow::anyhow!("Invalid DexScreener base URL {}: {}", base_url, e))?;

        let http = self.http.unwrap_or_default();
        let client = HttpClientFactory::create_client(&http)?;

        Ok(DexScreenerProvider {
            client,
            base_url,
            request_timeout_ms: http.request_timeout.as_millis() as u64,
        })
    }
}

/// Decode a provider body. An empty body counts as "no results".
pub fn parse_query_body(endpoint: &str, body: &str) -> Result<QueryResult, ProviderError> {
    if body.trim().is_empty() {
        return Ok(QueryResult::default());
    }
    serde_json::from_str(body).map_err(|e| ProviderError::Malformed {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}

fn endpoint_of(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}
