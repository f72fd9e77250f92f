//! Wire types for historical price series (REST).

use serde::{Deserialize, Serialize};

/// Raw response from `/coins/{id}/market_chart`.
///
/// `prices` arrives as `[[ms_epoch, price], …]`; the sibling
/// `market_caps` and `total_volumes` arrays are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketChartResponse {
    #[serde(default)]
    pub prices: Vec<(i64, f64)>,
}
