use super::KeyValueStore;
use crate::types::errors::StorageError;

/// Store for contexts without persistence (headless runs, tests, servers).
///
/// Reports itself unavailable, so loads and saves are skipped entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn is_available(&self) -> bool {
        false
    }

    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
