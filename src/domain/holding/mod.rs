//! Holding domain — user-recorded asset quantities + persistence seam.

pub mod state;
pub mod store;

pub use state::HoldingsState;
pub use store::{HoldingsStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use store::JsonFileStore;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// A user's recorded quantity of one asset.
///
/// `symbol` and `name` are denormalized from the catalog at add time so a
/// holdings list renders without a catalog fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Owned quantity; non-negative.
    pub amount: f64,
}

impl Holding {
    pub fn new(id: impl Into<CoinId>, symbol: &str, name: &str, amount: f64) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            amount,
        }
    }
}
