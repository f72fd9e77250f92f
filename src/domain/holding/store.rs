//! Holdings persistence — injected key-value seam.
//!
//! Mirrors the reference app's device-local storage: a small mutable list
//! that survives reloads, scoped to one user/device. Hosts inject an
//! implementation; aggregation code never touches storage directly.

use super::Holding;
use crate::error::StoreError;
use std::sync::Mutex;

/// Persistence seam for the holdings list.
pub trait HoldingsStore {
    /// Load the persisted list. A store that has never been written
    /// loads as an empty list, not an error.
    fn load(&self) -> Result<Vec<Holding>, StoreError>;

    /// Persist the full list, replacing whatever was stored.
    fn save(&self, holdings: &[Holding]) -> Result<(), StoreError>;
}

// ─── MemoryStore ─────────────────────────────────────────────────────────────

/// In-process store for tests and hosts that bring their own storage glue
/// (e.g. a WASM host backed by browser storage).
#[derive(Debug, Default)]
pub struct MemoryStore {
    holdings: Mutex<Vec<Holding>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HoldingsStore for MemoryStore {
    fn load(&self) -> Result<Vec<Holding>, StoreError> {
        Ok(self.holdings.lock().expect("holdings lock poisoned").clone())
    }

    fn save(&self, holdings: &[Holding]) -> Result<(), StoreError> {
        *self.holdings.lock().expect("holdings lock poisoned") = holdings.to_vec();
        Ok(())
    }
}

// ─── JsonFileStore ───────────────────────────────────────────────────────────

/// JSON file on disk — the native equivalent of the reference app's
/// `localStorage` key.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl HoldingsStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Holding>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, holdings: &[Holding]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(holdings)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}
