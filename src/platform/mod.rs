// topicdeck platform abstraction
// Provides platform-specific config and data directories for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` to pick the implementation at compile time. Other
// targets (including wasm) fall back to directories relative to the working
// directory; the browser backend never touches the filesystem.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for topicdeck.
///
/// - **Linux**: `~/.config/topicdeck` (or `$XDG_CONFIG_HOME/topicdeck`)
/// - **macOS**: `~/Library/Application Support/topicdeck`
/// - **Windows**: `%APPDATA%/topicdeck`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".topicdeck").join("config")
    }
}

/// Returns the platform-specific data directory for topicdeck.
///
/// - **Linux**: `~/.local/share/topicdeck` (or `$XDG_DATA_HOME/topicdeck`)
/// - **macOS**: `~/Library/Application Support/topicdeck/data`
/// - **Windows**: `%LOCALAPPDATA%/topicdeck`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".topicdeck").join("data")
    }
}
