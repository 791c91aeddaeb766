use anyhow::{Context, Result};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct HttpClientSettings {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Retries for transient failures; `0` disables the retry middleware
    pub max_retries: u32,
    pub pool_max_idle_per_host: usize,
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            max_retries: 0,
            pool_max_idle_per_host: 5,
        }
    }
}

pub struct HttpClientFactory;

impl HttpClientFactory {
    /// Creates an HTTP client with timeouts and, when enabled, exponential
    /// backoff retries for transient errors
    pub fn create_client(settings: &HttpClientSettings) -> Result<ClientWithMiddleware> {
        let client = Client::builder()
            .pool_max_idle_per_host(settings.pool_max_idle_per_host)
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .user_agent(concat!("dexboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        let builder = ClientBuilder::new(client);
        let builder = if settings.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(settings.max_retries);
            builder.with(RetryTransientMiddleware::new_with_policy(retry_policy))
        } else {
            builder
        };

        Ok(builder.build())
    }
}

/// Join `path` onto `base_url` and append encoded query parameters.
pub fn build_url_with_query<K, V>(base_url: &str, path: &[&str], params: &[(K, V)]) -> Result<Url>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut url = Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Base URL cannot carry a path: {}", base_url))?;
        segments.pop_if_empty();
        segments.extend(path);
    }

    if !params.is_empty() {
        let mut query = url.query_pairs_mut();
        for (k, v) in params {
            query.append_pair(k.as_ref(), v.as_ref());
        }
    }

    Ok(url)
}
