//! Portfolio domain — current valuation with value-weighted 24h change.

#[cfg(feature = "http")]
pub mod client;

use crate::domain::holding::Holding;
use crate::domain::price::PriceMap;
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// One valued holding row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub amount: f64,
    /// Spot price in USD; `0.0` when the gateway returned no quote.
    pub price: f64,
    /// Trailing-24h change in percent; `0.0` when unquoted.
    pub change_24h_pct: f64,
    /// `amount * price`, in USD.
    pub value: f64,
}

/// Valued rows plus portfolio-level aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub rows: Vec<PortfolioRow>,
    /// Total portfolio value in USD.
    pub total: f64,
    /// 24h change in percent, weighted by each row's current USD value.
    /// Exactly `0.0` for an empty or zero-valued portfolio.
    pub weighted_change_pct: f64,
}

impl Valuation {
    pub fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0.0,
            weighted_change_pct: 0.0,
        }
    }
}

/// Value a holdings list against current prices.
///
/// Holdings missing from the price map are still emitted, valued at zero;
/// a bad upstream quote never drops a row. The weighted change sums each
/// row's implied 24h dollar move (`value * change / 100`) and expresses
/// the sum as a percentage of the current total.
pub fn value_holdings(holdings: &[Holding], prices: &PriceMap) -> Valuation {
    let rows: Vec<PortfolioRow> = holdings
        .iter()
        .map(|h| {
            let info = prices.get(&h.id).copied().unwrap_or_default();
            PortfolioRow {
                id: h.id.clone(),
                symbol: h.symbol.clone(),
                name: h.name.clone(),
                amount: h.amount,
                price: info.price,
                change_24h_pct: info.change_24h_pct,
                value: h.amount * info.price,
            }
        })
        .collect();

    let total: f64 = rows.iter().map(|r| r.value).sum();
    let weighted_change_pct = if total == 0.0 {
        0.0
    } else {
        let dollar_change: f64 = rows.iter().map(|r| r.value * r.change_24h_pct / 100.0).sum();
        dollar_change / total * 100.0
    };

    Valuation {
        rows,
        total,
        weighted_change_pct,
    }
}
