//! Coins sub-client — catalog fetch + TTL cache.

use crate::client::PortfolioClient;
use crate::domain::coin::Coin;
use crate::error::{HttpError, SdkError};
use crate::shared::CoinId;
use std::time::Instant;

/// Sub-client for catalog operations.
pub struct Coins<'a> {
    pub(crate) client: &'a PortfolioClient,
}

impl<'a> Coins<'a> {
    /// Get the coin catalog (top coins by market cap). Uses TTL cache.
    ///
    /// Rows that fail validation are skipped, not fatal: one malformed
    /// listing must not empty the picker.
    pub async fn list(&self) -> Result<Vec<Coin>, SdkError> {
        {
            let cache = self.client.catalog_cache.read().await;
            if let Some((coins, fetched_at)) = cache.as_ref() {
                if fetched_at.elapsed() < self.client.catalog_ttl {
                    return Ok(coins.clone());
                }
            }
        }

        let rows = self.client.http.get_coin_markets(None, None).await?;
        let mut coins = Vec::with_capacity(rows.len());
        for row in rows {
            match Coin::try_from(row) {
                Ok(coin) => coins.push(coin),
                Err(e) => tracing::warn!("Skipping malformed catalog row: {e}"),
            }
        }

        *self.client.catalog_cache.write().await = Some((coins.clone(), Instant::now()));
        Ok(coins)
    }

    /// Look up a single coin by id in the (possibly cached) catalog.
    pub async fn get(&self, id: &CoinId) -> Result<Coin, SdkError> {
        let coins = self.list().await?;
        coins
            .into_iter()
            .find(|c| &c.id == id)
            .ok_or_else(|| SdkError::Http(HttpError::NotFound(format!("Coin not found: {id}"))))
    }

    /// Drop the cached catalog; the next `list()` refetches.
    pub async fn invalidate(&self) {
        *self.client.catalog_cache.write().await = None;
    }
}
