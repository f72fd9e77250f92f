//! Conversion: raw `/simple/price` map → PriceMap.

use super::wire::SimplePriceEntry;
use super::{PriceInfo, PriceMap};
use std::collections::HashMap;

impl From<SimplePriceEntry> for PriceInfo {
    fn from(e: SimplePriceEntry) -> Self {
        Self {
            price: e.usd.unwrap_or(0.0),
            change_24h_pct: e.usd_24h_change.unwrap_or(0.0),
        }
    }
}

/// Build a `PriceMap` from the raw response. Ids the gateway skipped stay
/// absent; missing fields inside a present entry default to zero.
pub(crate) fn into_price_map(raw: HashMap<String, SimplePriceEntry>) -> PriceMap {
    raw.into_iter()
        .map(|(id, entry)| (id.into(), entry.into()))
        .collect()
}
