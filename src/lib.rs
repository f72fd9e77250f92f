//! # Coinfolio SDK
//!
//! A Rust SDK for crypto portfolio tracking, backed by the CoinGecko REST
//! API. Supports both native and WASM targets.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, domain models, pure aggregation (always available, WASM-safe)
//! 2. **HTTP API** — `GeckoHttp` with per-endpoint retry policies
//! 3. **High-Level Client** — `PortfolioClient` with nested sub-clients and caching
//!
//! The two computations at the center — current valuation with a
//! value-weighted 24h change, and the merged portfolio-value history
//! series — are pure functions over already-fetched data
//! ([`domain::portfolio::value_holdings`],
//! [`domain::history::aggregate_series`]) and usable without the HTTP
//! layer.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinfolio_sdk::prelude::*;
//!
//! let client = PortfolioClient::builder().build()?;
//!
//! let holdings = vec![Holding::new("bitcoin", "BTC", "Bitcoin", 0.5)];
//! let valuation = client.portfolio().value(&holdings).await;
//! let chart = client.history().portfolio(&holdings, HistoryWindow::new(90)).await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `PortfolioClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, HistoryWindow, Interval};

    // Domain types — coin catalog
    pub use crate::domain::coin::Coin;

    // Domain types — prices
    pub use crate::domain::price::{PriceInfo, PriceMap};

    // Domain types — holdings (includes state container + stores)
    pub use crate::domain::holding::{Holding, HoldingsState, HoldingsStore, MemoryStore};
    #[cfg(not(target_arch = "wasm32"))]
    pub use crate::domain::holding::JsonFileStore;

    // Domain types — valuation, history
    pub use crate::domain::history::{aggregate_series, HistoryPoint};
    pub use crate::domain::portfolio::{value_holdings, PortfolioRow, Valuation};

    // Errors
    pub use crate::error::{SdkError, StoreError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CoinsClient, HistoryClient, PortfolioClient, PortfolioClientBuilder, PortfolioSubClient,
        PricesClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
