//! Low-level HTTP client — `GeckoHttp`.
//!
//! One method per consumed CoinGecko endpoint. Returns wire types
//! (conversion to domain types happens at the sub-client boundary).
//! Internal to the SDK — `PortfolioClient` wraps this.

use crate::domain::coin::wire::CoinMarketsEntry;
use crate::domain::history::wire::MarketChartResponse;
use crate::domain::price::wire::SimplePriceEntry;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::network::VS_CURRENCY;
use crate::shared::{CoinId, HistoryWindow};

use async_lock::RwLock;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing;

/// Low-level HTTP client for the CoinGecko REST API.
pub struct GeckoHttp {
    base_url: String,
    client: Client,
    /// Demo API key sent as `x-cg-demo-api-key`. NEVER exposed publicly.
    api_key: Arc<RwLock<Option<String>>>,
}

impl GeckoHttp {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(Duration::from_secs(30))
                .pool_max_idle_per_host(10);
        }

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            api_key: Arc::new(RwLock::new(api_key)),
        }
    }

    /// Swap the demo API key used for subsequent requests.
    pub async fn set_api_key(&self, key: Option<String>) {
        *self.api_key.write().await = key;
    }

    // ── Coin catalog ─────────────────────────────────────────────────────

    /// `GET /coins/markets` — top coins by market cap, one page.
    pub async fn get_coin_markets(
        &self,
        per_page: Option<u32>,
        page: Option<u32>,
    ) -> Result<Vec<CoinMarketsEntry>, HttpError> {
        let url = format!(
            "{}/coins/markets?vs_currency={}&order=market_cap_desc&per_page={}&page={}&sparkline=false&price_change_percentage=24h",
            self.base_url,
            VS_CURRENCY,
            per_page.unwrap_or(250),
            page.unwrap_or(1),
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Spot prices ──────────────────────────────────────────────────────

    /// `GET /simple/price` — spot price + 24h change for a set of ids.
    pub async fn get_simple_price(
        &self,
        ids: &[CoinId],
    ) -> Result<HashMap<String, SimplePriceEntry>, HttpError> {
        let joined = ids
            .iter()
            .map(|id| id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies={}&include_24hr_change=true",
            self.base_url,
            urlencoding::encode(&joined),
            VS_CURRENCY,
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Historical series ────────────────────────────────────────────────

    /// `GET /coins/{id}/market_chart` — historical price series for one coin.
    pub async fn get_market_chart(
        &self,
        id: &CoinId,
        window: HistoryWindow,
    ) -> Result<MarketChartResponse, HttpError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency={}&days={}&interval={}",
            self.base_url,
            urlencoding::encode(id.as_str()),
            VS_CURRENCY,
            window.days(),
            window.interval(),
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match &retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let delay = match &e {
                        HttpError::ServerError { status, .. }
                            if config.retryable_statuses.contains(status) =>
                        {
                            Some(config.delay_for_attempt(attempt))
                        }
                        HttpError::RateLimited { retry_after_ms }
                            if config.retryable_statuses.contains(&429) =>
                        {
                            Some(config.delay_for_rate_limit(attempt, *retry_after_ms))
                        }
                        HttpError::Timeout => Some(config.delay_for_attempt(attempt)),
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable.then(|| config.delay_for_attempt(attempt))
                        }
                        _ => None,
                    };

                    match delay {
                        Some(delay) if attempt < config.max_retries => {
                            tracing::debug!(
                                attempt = attempt + 1,
                                max = config.max_retries,
                                delay_ms = delay.as_millis() as u64,
                                "Retrying request to {}",
                                url
                            );
                            futures_timer::Delay::new(delay).await;
                            last_error = Some(e);
                        }
                        _ => return Err(e),
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = self.api_key.read().await.as_ref() {
            req = req.header("x-cg-demo-api-key", key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let status_code = status.as_u16();
        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<u64>().ok())
            .map(|secs| secs * 1000);
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => Err(HttpError::Unauthorized),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited { retry_after_ms }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for GeckoHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            api_key: self.api_key.clone(),
        }
    }
}
