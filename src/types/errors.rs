use std::fmt;

// === StorageError ===

/// Errors raised while reading or writing persisted state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// No key-value store exists in the current execution context.
    Unavailable(String),
    /// The store exists but refused the read or write.
    Access(String),
    /// A stored value is not valid JSON for the expected shape.
    Parse { key: String, message: String },
    /// An in-memory value could not be encoded as JSON.
    Serialization { key: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::Access(msg) => write!(f, "Storage access failed: {}", msg),
            StorageError::Parse { key, message } => {
                write!(f, "Stored value for '{}' is not valid JSON: {}", key, message)
            }
            StorageError::Serialization { key, message } => {
                write!(f, "Failed to serialize value for '{}': {}", key, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::Access(e.to_string())
    }
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
