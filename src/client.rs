//! High-level client — `PortfolioClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::domain::coin::client::Coins;
use crate::domain::coin::Coin;
use crate::domain::history::client::History;
use crate::domain::portfolio::client::Portfolio;
use crate::domain::price::client::Prices;
use crate::error::SdkError;
use crate::http::GeckoHttp;

use async_lock::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioSubClient;
pub use crate::domain::price::client::Prices as PricesClient;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.prices()`, `client.portfolio()`,
/// `client.history()`.
pub struct PortfolioClient {
    pub(crate) http: GeckoHttp,
    /// Catalog cache: full coin list + fetched_at. One entry; the catalog
    /// is fetched whole and changes slowly upstream.
    pub(crate) catalog_cache: Arc<RwLock<Option<(Vec<Coin>, Instant)>>>,
    /// Cache TTL for the catalog.
    pub(crate) catalog_ttl: Duration,
}

impl PortfolioClient {
    pub fn builder() -> PortfolioClientBuilder {
        PortfolioClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    /// Clear all caches.
    pub async fn clear_caches(&self) {
        *self.catalog_cache.write().await = None;
    }
}

impl Clone for PortfolioClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            catalog_cache: self.catalog_cache.clone(),
            catalog_ttl: self.catalog_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct PortfolioClientBuilder {
    base_url: String,
    api_key: Option<String>,
    catalog_ttl: Duration,
}

impl Default for PortfolioClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            api_key: None,
            catalog_ttl: Duration::from_secs(3600),
        }
    }
}

impl PortfolioClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// CoinGecko demo API key, sent as `x-cg-demo-api-key`.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn catalog_ttl(mut self, ttl: Duration) -> Self {
        self.catalog_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<PortfolioClient, SdkError> {
        Ok(PortfolioClient {
            http: GeckoHttp::new(&self.base_url, self.api_key),
            catalog_cache: Arc::new(RwLock::new(None)),
            catalog_ttl: self.catalog_ttl,
        })
    }
}
