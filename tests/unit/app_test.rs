//! Unit tests for the App lifecycle: construct, start, mutate, save, shutdown.

use tempfile::TempDir;

use topicdeck::app::App;
use topicdeck::managers::favorites_manager::FavoritesManagerTrait;
use topicdeck::managers::history_manager::HistoryManagerTrait;
use topicdeck::storage::{KeyValueStore, MemoryStore, NoopStore};
use topicdeck::types::errors::StorageError;
use topicdeck::types::settings::{DeckSettings, StorageBackend};
use topicdeck::types::topic::Topic;

/// Store that reads nothing and refuses every write.
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("read-only".to_string()))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("read-only".to_string()))
    }
}

fn settings_in(dir: &TempDir, backend: StorageBackend) -> DeckSettings {
    DeckSettings {
        backend,
        data_dir: Some(dir.path().to_string_lossy().to_string()),
        ..DeckSettings::default()
    }
}

#[test]
fn test_state_survives_restart_with_file_backend() {
    let dir = TempDir::new().unwrap();

    let mut app = App::from_settings(settings_in(&dir, StorageBackend::File));
    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));
    app.favorites.toggle(Topic::new("t2", "c", "Topic 2", "d"));
    let history = app.history.entries().to_vec();
    let favorites = app.favorites.entries().to_vec();
    app.shutdown();

    let mut restarted = App::from_settings(settings_in(&dir, StorageBackend::File));
    restarted.start();

    assert_eq!(restarted.history.entries(), history.as_slice());
    assert_eq!(restarted.favorites.entries(), favorites.as_slice());
}

#[test]
fn test_state_survives_restart_with_sqlite_backend() {
    let dir = TempDir::new().unwrap();

    let mut app = App::from_settings(settings_in(&dir, StorageBackend::Sqlite));
    app.start();
    app.favorites.add(Topic::new("t1", "c", "Topic 1", "d"));
    assert!(app.save());
    drop(app);

    let mut restarted = App::from_settings(settings_in(&dir, StorageBackend::Sqlite));
    restarted.start();

    assert!(restarted.favorites.contains("t1"));
}

#[test]
fn test_no_backend_starts_empty_and_saves_nothing() {
    let dir = TempDir::new().unwrap();

    let mut app = App::from_settings(settings_in(&dir, StorageBackend::None));
    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));
    app.shutdown();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(not(feature = "web"))]
#[test]
fn test_unopenable_backend_falls_back_to_noop() {
    let settings = DeckSettings {
        backend: StorageBackend::Web,
        ..DeckSettings::default()
    };
    let mut app = App::from_settings(settings);

    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));

    assert!(!app.save());
    assert!(!app.persistence.store().is_available());
    assert_eq!(app.history.len(), 1);
}

#[test]
fn test_history_capacity_comes_from_settings() {
    let settings = DeckSettings {
        history_capacity: 2,
        ..DeckSettings::default()
    };
    let mut app = App::new(settings, Box::new(MemoryStore::new()));

    for n in 0..5 {
        app.history
            .add(Topic::new(&format!("t{}", n), "c", "T", "d"));
    }

    assert_eq!(app.history.len(), 2);
}

#[test]
fn test_save_reports_success_on_working_store() {
    let mut app = App::new(DeckSettings::default(), Box::new(MemoryStore::new()));
    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));

    assert!(app.save());
    assert!(app.persistence.last_error().is_none());
}

#[test]
fn test_save_reports_nothing_saved_without_storage() {
    let mut app = App::new(DeckSettings::default(), Box::new(NoopStore));
    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));

    assert!(!app.save());
    assert_eq!(app.persistence.failure_count(), 0);
}

#[test]
fn test_save_reports_failed_writes() {
    let mut app = App::new(DeckSettings::default(), Box::new(ReadOnlyStore));
    app.start();
    app.favorites.add(Topic::new("t1", "c", "Topic 1", "d"));

    assert!(!app.save());
    assert!(matches!(
        app.persistence.last_error(),
        Some(StorageError::Access(_))
    ));

    // A later save is judged on its own failures, not earlier ones.
    assert!(!app.save());
    assert_eq!(app.persistence.failure_count(), 4);
}

#[test]
fn test_lookalike_keys_survive_restart_with_file_backend() {
    let dir = TempDir::new().unwrap();
    let settings = DeckSettings {
        history_key: "my keys".to_string(),
        favorites_key: "my_keys".to_string(),
        ..settings_in(&dir, StorageBackend::File)
    };

    let mut app = App::from_settings(settings.clone());
    app.start();
    app.history.add(Topic::new("t1", "c", "Topic 1", "d"));
    app.favorites.add(Topic::new("t2", "c", "Topic 2", "d"));
    assert!(app.save());
    drop(app);

    let mut restarted = App::from_settings(settings);
    restarted.start();

    assert_eq!(restarted.history.len(), 1);
    assert_eq!(restarted.history.entries()[0].topic.id, "t1");
    assert!(restarted.favorites.contains("t2"));
    assert!(restarted.persistence.last_error().is_none());
}
