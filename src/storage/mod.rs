//! topicdeck storage layer.
//!
//! Defines the synchronous [`KeyValueStore`] interface the persistence adapter
//! writes through, and the backends that implement it.
//!
//! # Usage
//!
//! ```no_run
//! use topicdeck::storage::{FileStore, KeyValueStore};
//!
//! let mut store = FileStore::new("/tmp/topicdeck");
//! store.set_item("greeting", "\"hello\"").expect("write failed");
//! assert_eq!(store.get_item("greeting").unwrap().as_deref(), Some("\"hello\""));
//! ```

pub mod file;
pub mod memory;
pub mod migrations;
pub mod noop;
pub mod sqlite;
#[cfg(feature = "web")]
pub mod web;

use std::path::PathBuf;

use crate::platform;
use crate::types::errors::StorageError;
use crate::types::settings::{DeckSettings, StorageBackend};

pub use file::FileStore;
pub use memory::MemoryStore;
pub use noop::NoopStore;
pub use sqlite::SqliteStore;
#[cfg(feature = "web")]
pub use web::LocalStorage;

/// File name of the SQLite database inside the data directory.
pub const SQLITE_FILE_NAME: &str = "topicdeck.db";

/// A synchronous string-to-string store.
pub trait KeyValueStore {
    /// Whether the store is usable in the current execution context.
    /// The persistence adapter skips all work when this returns `false`.
    fn is_available(&self) -> bool {
        true
    }

    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Resolves the directory file-backed stores write into.
pub fn data_dir(settings: &DeckSettings) -> PathBuf {
    match &settings.data_dir {
        Some(dir) => PathBuf::from(dir),
        None => platform::get_data_dir(),
    }
}

/// Opens the backend selected in `settings`.
///
/// # Errors
/// Returns `StorageError::Unavailable` if the backend cannot be opened in
/// this build or environment.
pub fn open_backend(settings: &DeckSettings) -> Result<Box<dyn KeyValueStore>, StorageError> {
    match settings.backend {
        StorageBackend::File => Ok(Box::new(FileStore::new(data_dir(settings)))),
        StorageBackend::Sqlite => {
            let path = data_dir(settings).join(SQLITE_FILE_NAME);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Unavailable(format!(
                        "cannot create {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
            let store = SqliteStore::open(&path)
                .map_err(|e| StorageError::Unavailable(e.to_string()))?;
            Ok(Box::new(store))
        }
        StorageBackend::Memory => Ok(Box::new(MemoryStore::new())),
        StorageBackend::None => Ok(Box::new(NoopStore)),
        StorageBackend::Web => open_web_backend(),
    }
}

#[cfg(feature = "web")]
fn open_web_backend() -> Result<Box<dyn KeyValueStore>, StorageError> {
    Ok(Box::new(LocalStorage))
}

#[cfg(not(feature = "web"))]
fn open_web_backend() -> Result<Box<dyn KeyValueStore>, StorageError> {
    Err(StorageError::Unavailable(
        "built without the `web` feature".to_string(),
    ))
}
