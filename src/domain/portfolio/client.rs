//! Portfolio sub-client — fetch prices, produce a valuation.

use crate::client::PortfolioClient;
use crate::domain::holding::Holding;
use crate::domain::portfolio::{value_holdings, Valuation};
use crate::domain::price::PriceMap;
use crate::shared::CoinId;

/// Sub-client for portfolio valuation.
pub struct Portfolio<'a> {
    pub(crate) client: &'a PortfolioClient,
}

impl<'a> Portfolio<'a> {
    /// Value the given holdings at current prices.
    ///
    /// A failed price fetch degrades to zero-valued rows rather than an
    /// error: the tracker renders a portfolio with stale/absent quotes
    /// instead of rendering nothing.
    pub async fn value(&self, holdings: &[Holding]) -> Valuation {
        if holdings.is_empty() {
            return Valuation::empty();
        }

        let mut ids: Vec<CoinId> = holdings.iter().map(|h| h.id.clone()).collect();
        ids.sort();
        ids.dedup();

        let prices = match self.client.prices().get(&ids).await {
            Ok(prices) => prices,
            Err(e) => {
                tracing::warn!("Price fetch failed, valuing portfolio at zero: {e}");
                PriceMap::new()
            }
        };

        value_holdings(holdings, &prices)
    }
}
