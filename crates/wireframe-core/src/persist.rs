//! Persistence channel for the per-page activation flag.
//!
//! Only `{ active, mode }` crosses this boundary, keyed by page identity. The kernel reads it
//! once during initialization; history and snapshots are deliberately never persisted, they are
//! reconstructed empty on every page load.
//!
//! A failing store is a channel failure, not a kernel failure: callers log and carry on with
//! default state.

use crate::classify::Mode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Persisted activation state for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationRecord {
    /// Whether the page was in edit mode.
    pub active: bool,
    /// The mode that was active (meaningful only when `active`).
    pub mode: Mode,
}

impl Default for ActivationRecord {
    fn default() -> Self {
        Self {
            active: false,
            mode: Mode::Text,
        }
    }
}

/// Error raised by an activation store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The underlying channel is unavailable.
    Channel(String),
    /// A persisted payload could not be encoded or decoded.
    Payload(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Channel(msg) => write!(f, "persistence channel unavailable: {}", msg),
            StoreError::Payload(msg) => write!(f, "invalid activation payload: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Key-value persistence for activation records, addressed by page identity.
pub trait ActivationStore {
    /// Load the record for a page, `Ok(None)` when nothing was stored.
    fn load(&self, page_key: &str) -> Result<Option<ActivationRecord>, StoreError>;

    /// Store the record for a page, overwriting any previous value.
    fn save(&mut self, page_key: &str, record: &ActivationRecord) -> Result<(), StoreError>;
}

/// In-memory store holding JSON payloads, mirroring a browser-style key-value area.
#[derive(Debug, Default)]
pub struct MemoryActivationStore {
    entries: HashMap<String, String>,
}

impl MemoryActivationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no page has stored state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ActivationStore for MemoryActivationStore {
    fn load(&self, page_key: &str) -> Result<Option<ActivationRecord>, StoreError> {
        match self.entries.get(page_key) {
            None => Ok(None),
            Some(payload) => serde_json::from_str(payload)
                .map(Some)
                .map_err(|e| StoreError::Payload(e.to_string())),
        }
    }

    fn save(&mut self, page_key: &str, record: &ActivationRecord) -> Result<(), StoreError> {
        let payload =
            serde_json::to_string(record).map_err(|e| StoreError::Payload(e.to_string()))?;
        self.entries.insert(page_key.to_string(), payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let mut store = MemoryActivationStore::new();
        let record = ActivationRecord {
            active: true,
            mode: Mode::Image,
        };

        store.save("https://example.com/pricing", &record).unwrap();
        let loaded = store.load("https://example.com/pricing").unwrap();
        assert_eq!(loaded, Some(record));
    }

    #[test]
    fn test_load_missing_page_is_none() {
        let store = MemoryActivationStore::new();
        assert_eq!(store.load("https://example.com/").unwrap(), None);
    }

    #[test]
    fn test_pages_are_independent() {
        let mut store = MemoryActivationStore::new();
        store
            .save(
                "page-a",
                &ActivationRecord {
                    active: true,
                    mode: Mode::Ai,
                },
            )
            .unwrap();

        assert_eq!(store.load("page-b").unwrap(), None);
        assert_eq!(store.load("page-a").unwrap().unwrap().mode, Mode::Ai);
    }

    #[test]
    fn test_payload_is_plain_json() {
        let mut store = MemoryActivationStore::new();
        store
            .save(
                "page",
                &ActivationRecord {
                    active: true,
                    mode: Mode::Text,
                },
            )
            .unwrap();
        let raw = store.entries.get("page").unwrap();
        assert_eq!(raw, "{\"active\":true,\"mode\":\"text\"}");
    }
}
