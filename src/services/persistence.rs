//! Persistence adapter for topicdeck.
//!
//! Moves the history and favorites lists between the in-memory managers and a
//! [`KeyValueStore`] as JSON. Neither direction ever fails the caller: storage
//! and parse failures are logged, published on the diagnostic channel, and
//! otherwise treated as "no data". Each key is handled on its own, so a bad
//! value under one key does not affect the other.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::managers::favorites_manager::{FavoritesManager, FavoritesManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::managers::observable::{Observable, SubscriptionId};
use crate::storage::KeyValueStore;
use crate::types::errors::StorageError;
use crate::types::settings::{
    DeckSettings, HydrationPolicy, DEFAULT_FAVORITES_KEY, DEFAULT_HISTORY_KEY,
};
use crate::types::topic::{FavoriteTopic, HistoryEntry};

/// Reads and writes both lists through an injected key-value store.
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
    history_key: String,
    favorites_key: String,
    hydration: HydrationPolicy,
    diagnostics: Observable<Option<StorageError>>,
    failures: u64,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    /// Creates an adapter using the default keys and verbatim hydration.
    pub fn new(store: S) -> Self {
        Self {
            store,
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            favorites_key: DEFAULT_FAVORITES_KEY.to_string(),
            hydration: HydrationPolicy::Verbatim,
            diagnostics: Observable::new(None),
            failures: 0,
        }
    }

    /// Creates an adapter with keys and hydration policy taken from `settings`.
    pub fn with_settings(store: S, settings: &DeckSettings) -> Self {
        Self {
            store,
            history_key: settings.history_key.clone(),
            favorites_key: settings.favorites_key.clone(),
            hydration: settings.hydration,
            diagnostics: Observable::new(None),
            failures: 0,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn history_key(&self) -> &str {
        &self.history_key
    }

    pub fn favorites_key(&self) -> &str {
        &self.favorites_key
    }

    /// The most recent persistence failure, if any occurred.
    pub fn last_error(&self) -> Option<&StorageError> {
        self.diagnostics.get().as_ref()
    }

    /// Number of failures reported since the adapter was created.
    pub fn failure_count(&self) -> u64 {
        self.failures
    }

    /// Subscribes to persistence failures. The callback also receives the
    /// current value (`None` until something fails) right away.
    pub fn subscribe_diagnostics<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Option<StorageError>) + 'static,
    {
        self.diagnostics.subscribe(callback)
    }

    pub fn unsubscribe_diagnostics(&mut self, id: SubscriptionId) -> bool {
        self.diagnostics.unsubscribe(id)
    }

    /// Hydrates both managers from the store.
    ///
    /// Does nothing when the store is unavailable. An absent key, or one
    /// holding an empty string, leaves the corresponding manager untouched.
    pub fn load_from_storage(
        &mut self,
        history: &mut HistoryManager,
        favorites: &mut FavoritesManager,
    ) {
        if !self.store.is_available() {
            tracing::debug!("storage unavailable, skipping load");
            return;
        }

        let history_key = self.history_key.clone();
        if let Some(entries) = self.read_list::<HistoryEntry>(&history_key) {
            let entries = match self.hydration {
                HydrationPolicy::Verbatim => entries,
                HydrationPolicy::Normalize => {
                    HistoryManager::normalize(entries, history.capacity())
                }
            };
            tracing::debug!(key = %history_key, count = entries.len(), "history hydrated");
            history.init(entries);
        }

        let favorites_key = self.favorites_key.clone();
        if let Some(entries) = self.read_list::<FavoriteTopic>(&favorites_key) {
            let entries = match self.hydration {
                HydrationPolicy::Verbatim => entries,
                HydrationPolicy::Normalize => FavoritesManager::normalize(entries),
            };
            tracing::debug!(key = %favorites_key, count = entries.len(), "favorites hydrated");
            favorites.init(entries);
        }
    }

    /// Writes both lists to the store.
    ///
    /// Does nothing when the store is unavailable. A failure on one key does
    /// not prevent the other from being written.
    pub fn save_to_storage(
        &mut self,
        history_data: &[HistoryEntry],
        favorites_data: &[FavoriteTopic],
    ) {
        if !self.store.is_available() {
            tracing::debug!("storage unavailable, skipping save");
            return;
        }

        let history_key = self.history_key.clone();
        self.write_list(&history_key, history_data);

        let favorites_key = self.favorites_key.clone();
        self.write_list(&favorites_key, favorites_data);
    }

    fn read_list<T: DeserializeOwned>(&mut self, key: &str) -> Option<Vec<T>> {
        let raw = match self.store.get_item(key) {
            Ok(Some(raw)) if raw.is_empty() => return None,
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.report(e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(e) => {
                self.report(StorageError::Parse {
                    key: key.to_string(),
                    message: e.to_string(),
                });
                None
            }
        }
    }

    fn write_list<T: Serialize>(&mut self, key: &str, data: &[T]) {
        let json = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                self.report(StorageError::Serialization {
                    key: key.to_string(),
                    message: e.to_string(),
                });
                return;
            }
        };

        match self.store.set_item(key, &json) {
            Ok(()) => tracing::trace!(key = %key, bytes = json.len(), "saved"),
            Err(e) => self.report(e),
        }
    }

    fn report(&mut self, error: StorageError) {
        tracing::error!(error = %error, "persistence failure");
        self.failures += 1;
        self.diagnostics.set(Some(error));
    }
}
