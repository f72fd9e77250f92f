//! Network constants for the CoinGecko gateway.

/// Default REST API base URL (CoinGecko v3).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Quote currency used for every price, value, and chart request.
pub const VS_CURRENCY: &str = "usd";
