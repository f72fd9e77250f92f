//! Prices sub-client — spot price queries.

use crate::client::PortfolioClient;
use crate::domain::price::{convert, PriceMap};
use crate::error::SdkError;
use crate::shared::CoinId;

/// Sub-client for spot price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a PortfolioClient,
}

impl<'a> Prices<'a> {
    /// Get current USD price + 24h change for a set of ids.
    ///
    /// An empty id set short-circuits to an empty map without touching
    /// the network.
    pub async fn get(&self, ids: &[CoinId]) -> Result<PriceMap, SdkError> {
        if ids.is_empty() {
            return Ok(PriceMap::new());
        }
        let raw = self.client.http.get_simple_price(ids).await?;
        Ok(convert::into_price_map(raw))
    }
}
