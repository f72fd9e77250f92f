//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format CoinGecko sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko coin identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Sampling granularity of a historical price series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[default]
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "daily")]
    Daily,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── HistoryWindow ───────────────────────────────────────────────────────────

/// Requested chart range in days, clamped to `[1, 365]` on construction.
///
/// Granularity is derived from the range: windows past 90 days request
/// daily samples, shorter windows request hourly samples. Coarser samples
/// on long ranges keep timestamps aligned across assets at the cost of
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoryWindow {
    days: u32,
}

pub const MIN_WINDOW_DAYS: u32 = 1;
pub const MAX_WINDOW_DAYS: u32 = 365;
pub const DEFAULT_WINDOW_DAYS: u32 = 90;

impl HistoryWindow {
    pub fn new(days: u32) -> Self {
        Self {
            days: days.clamp(MIN_WINDOW_DAYS, MAX_WINDOW_DAYS),
        }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn interval(&self) -> Interval {
        if self.days > 90 {
            Interval::Daily
        } else {
            Interval::Hourly
        }
    }
}

impl Default for HistoryWindow {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl From<u32> for HistoryWindow {
    fn from(days: u32) -> Self {
        Self::new(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_interval_serde() {
        let i: Interval = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(i, Interval::Daily);
        assert_eq!(i.as_str(), "daily");
    }

    #[test]
    fn test_window_clamps_low() {
        assert_eq!(HistoryWindow::new(0).days(), 1);
        assert_eq!(HistoryWindow::new(1).days(), 1);
    }

    #[test]
    fn test_window_clamps_high() {
        assert_eq!(HistoryWindow::new(365).days(), 365);
        assert_eq!(HistoryWindow::new(366).days(), 365);
        assert_eq!(HistoryWindow::new(10_000).days(), 365);
    }

    #[test]
    fn test_window_default_is_90_days() {
        assert_eq!(HistoryWindow::default().days(), 90);
    }

    #[test]
    fn test_interval_boundary_at_90_days() {
        assert_eq!(HistoryWindow::new(90).interval(), Interval::Hourly);
        assert_eq!(HistoryWindow::new(91).interval(), Interval::Daily);
        assert_eq!(HistoryWindow::new(365).interval(), Interval::Daily);
        assert_eq!(HistoryWindow::new(1).interval(), Interval::Hourly);
    }
}
