//! History sub-client — parallel per-asset fetches, one aggregated series.

use crate::client::PortfolioClient;
use crate::domain::history::{aggregate_series, HistoryPoint};
use crate::domain::holding::Holding;
use crate::shared::HistoryWindow;
use futures_util::future::join_all;

/// Sub-client for portfolio history.
pub struct History<'a> {
    pub(crate) client: &'a PortfolioClient,
}

impl<'a> History<'a> {
    /// Build the portfolio value series over the requested window.
    ///
    /// One `market_chart` request per holding, issued concurrently and
    /// awaited together. A failed fetch yields an empty series for that
    /// asset — one bad upstream call must not blank the whole chart.
    pub async fn portfolio(&self, holdings: &[Holding], window: HistoryWindow) -> Vec<HistoryPoint> {
        if holdings.is_empty() {
            return Vec::new();
        }

        let fetches = holdings.iter().map(|h| {
            let http = &self.client.http;
            async move {
                match http.get_market_chart(&h.id, window).await {
                    Ok(resp) => (h.amount, resp.prices),
                    Err(e) => {
                        tracing::warn!("History fetch for {} failed, charting without it: {e}", h.id);
                        (h.amount, Vec::new())
                    }
                }
            }
        });

        aggregate_series(join_all(fetches).await)
    }
}
