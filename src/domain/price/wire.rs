//! Wire types for spot prices (REST).

use serde::{Deserialize, Serialize};

/// Raw per-coin entry from `/simple/price`.
///
/// CoinGecko omits `usd_24h_change` for coins with no 24h data and can
/// omit `usd` entirely for unpriced listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimplePriceEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usd_24h_change: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_simple_price_response_shape() {
        let json = r#"{
            "bitcoin": {"usd": 50000.0, "usd_24h_change": 1.2345},
            "ethereum": {"usd": 3000.5, "usd_24h_change": -2.5}
        }"#;
        let map: HashMap<String, SimplePriceEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(map["bitcoin"].usd, Some(50000.0));
        assert_eq!(map["ethereum"].usd_24h_change, Some(-2.5));
    }

    #[test]
    fn test_simple_price_missing_change_field() {
        let json = r#"{"newcoin": {"usd": 0.01}}"#;
        let map: HashMap<String, SimplePriceEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(map["newcoin"].usd, Some(0.01));
        assert_eq!(map["newcoin"].usd_24h_change, None);
    }
}
