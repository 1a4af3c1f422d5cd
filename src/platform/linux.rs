// topicdeck platform paths for Linux
// Config: ~/.config/topicdeck
// Data:   ~/.local/share/topicdeck

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "topicdeck";

/// Returns the configuration directory for topicdeck on Linux.
pub fn get_config_dir() -> PathBuf {
    config_dir_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

/// Returns the data directory for topicdeck on Linux.
pub fn get_data_dir() -> PathBuf {
    data_dir_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

/// `$XDG_CONFIG_HOME/topicdeck` if set and non-empty, otherwise `~/.config/topicdeck`.
fn config_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg.filter(|x| !x.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join(APP_DIR),
        None => home_or_tmp(home).join(".config").join(APP_DIR),
    }
}

/// `$XDG_DATA_HOME/topicdeck` if set and non-empty, otherwise `~/.local/share/topicdeck`.
fn data_dir_from(xdg: Option<String>, home: Option<String>) -> PathBuf {
    match xdg.filter(|x| !x.is_empty()) {
        Some(xdg) => PathBuf::from(xdg).join(APP_DIR),
        None => home_or_tmp(home).join(".local").join("share").join(APP_DIR),
    }
}

fn home_or_tmp(home: Option<String>) -> PathBuf {
    PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")))
}
