//! Coin domain — catalog entries, validation, conversion.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated catalog entry: one listed coin.
///
/// Static per session — the catalog is fetched once and cached (1 h TTL);
/// prices live in the `price` domain, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    /// Ticker symbol, uppercased (`BTC`).
    pub symbol: String,
    pub name: String,
    /// Logo URL.
    pub image: String,
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    MissingId,
    MissingName,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing coin id"),
            ValidationError::MissingName => write!(f, "Missing coin name"),
        }
    }
}

impl std::error::Error for ValidationError {}
