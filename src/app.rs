//! App Core for topicdeck.
//!
//! The explicitly constructed state object that owns the history and
//! favorites managers together with the persistence adapter. Its lifetime is
//! the application's: `start` hydrates, `save` persists on demand, and
//! `shutdown` persists once more before dropping everything.

use crate::managers::favorites_manager::{FavoritesManager, FavoritesManagerTrait};
use crate::managers::history_manager::{HistoryManager, HistoryManagerTrait};
use crate::services::persistence::PersistenceAdapter;
use crate::storage::{self, KeyValueStore, NoopStore};
use crate::types::settings::DeckSettings;

/// Central application struct holding both managers and the adapter.
pub struct App {
    pub settings: DeckSettings,
    pub history: HistoryManager,
    pub favorites: FavoritesManager,
    pub persistence: PersistenceAdapter<Box<dyn KeyValueStore>>,
}

impl App {
    /// Creates an App over an already opened store. Nothing is loaded yet.
    pub fn new(settings: DeckSettings, store: Box<dyn KeyValueStore>) -> Self {
        let history = HistoryManager::new(settings.history_capacity);
        let favorites = FavoritesManager::new();
        let persistence = PersistenceAdapter::with_settings(store, &settings);

        Self {
            settings,
            history,
            favorites,
            persistence,
        }
    }

    /// Creates an App using the backend named in `settings`.
    ///
    /// If the backend cannot be opened the App still starts, with persistence
    /// disabled.
    pub fn from_settings(settings: DeckSettings) -> Self {
        let store = match storage::open_backend(&settings) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    backend = ?settings.backend,
                    error = %e,
                    "storage backend unavailable, persistence disabled"
                );
                Box::new(NoopStore)
            }
        };
        Self::new(settings, store)
    }

    /// Hydrates both managers from storage.
    pub fn start(&mut self) {
        self.persistence
            .load_from_storage(&mut self.history, &mut self.favorites);
        tracing::info!(
            history = self.history.len(),
            favorites = self.favorites.len(),
            "state hydrated"
        );
    }

    /// Persists the current contents of both managers.
    ///
    /// Returns `true` only if the store is available and both lists were
    /// written without a new failure.
    pub fn save(&mut self) -> bool {
        if !self.persistence.store().is_available() {
            return false;
        }
        let failures = self.persistence.failure_count();
        self.persistence
            .save_to_storage(self.history.entries(), self.favorites.entries());
        self.persistence.failure_count() == failures
    }

    /// Saves one last time and consumes the App.
    pub fn shutdown(mut self) {
        if self.save() {
            tracing::info!("state saved on shutdown");
        } else if !self.persistence.store().is_available() {
            tracing::info!("persistence disabled, nothing saved on shutdown");
        } else {
            tracing::warn!(
                error = ?self.persistence.last_error(),
                "state not fully saved on shutdown"
            );
        }
    }
}
