// topicdeck platform paths for macOS
// Config: ~/Library/Application Support/topicdeck
// Data:   ~/Library/Application Support/topicdeck/data

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for topicdeck on macOS.
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("topicdeck")
}

/// Returns the data directory for topicdeck on macOS.
pub fn get_data_dir() -> PathBuf {
    get_config_dir().join("data")
}
