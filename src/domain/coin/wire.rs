//! Wire types for the coin catalog (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw row from `/coins/markets`.
///
/// The endpoint returns far more than the catalog needs; only the fields
/// the listing UI consumes are modeled, the rest are ignored on
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketsEntry {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}
