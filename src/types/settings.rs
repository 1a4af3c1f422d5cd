use serde::{Deserialize, Serialize};

use crate::types::errors::SettingsError;

/// Default number of entries kept in the recent-history list.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Storage key holding the serialized history list.
pub const DEFAULT_HISTORY_KEY: &str = "aa-topic-history";

/// Storage key holding the serialized favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "aa-topic-favorites";

/// Top-level settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DeckSettings {
    pub history_capacity: usize,
    pub history_key: String,
    pub favorites_key: String,
    pub hydration: HydrationPolicy,
    pub backend: StorageBackend,
    /// Overrides the platform data directory for file and SQLite backends.
    pub data_dir: Option<String>,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            hydration: HydrationPolicy::default(),
            backend: StorageBackend::default(),
            data_dir: None,
        }
    }
}

impl DeckSettings {
    /// Checks the invariants the containers and the adapter rely on.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.history_capacity == 0 {
            return Err(SettingsError::InvalidValue(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.history_key.is_empty() || self.favorites_key.is_empty() {
            return Err(SettingsError::InvalidValue(
                "storage keys cannot be empty".to_string(),
            ));
        }
        if self.history_key == self.favorites_key {
            return Err(SettingsError::InvalidValue(format!(
                "history_key and favorites_key must differ (both '{}')",
                self.history_key
            )));
        }
        Ok(())
    }
}

/// How persisted lists are treated when they are loaded back.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HydrationPolicy {
    /// Stored data is trusted and installed as-is.
    #[default]
    Verbatim,
    /// Stored data is deduplicated, capped and sorted before installation.
    Normalize,
}

/// Which key-value store backs persistence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    /// One JSON file per key under the data directory.
    #[default]
    File,
    /// A `kv` table in `topicdeck.db` under the data directory.
    Sqlite,
    /// Process memory only; nothing survives a restart.
    Memory,
    /// Persistence disabled.
    None,
    /// Browser `localStorage` (requires the `web` feature).
    Web,
}
