//! Price domain — spot prices with 24h change.

#[cfg(feature = "http")]
pub mod client;
pub(crate) mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spot price + 24h change for one coin.
///
/// Ephemeral: refreshed on whatever polling cadence the caller chooses
/// (the reference UI polls every 30 s); never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    /// Spot price in USD.
    pub price: f64,
    /// Trailing-24h change in percent (`-2.5` means −2.5%).
    pub change_24h_pct: f64,
}

/// Current prices keyed by coin id. Ids the gateway did not quote are absent.
pub type PriceMap = HashMap<CoinId, PriceInfo>;
