//! Unit tests for the SettingsEngine public API.
//!
//! These tests exercise default fallback, round-tripping through disk,
//! validation, single-field updates and reset.

use std::fs;

use rstest::rstest;
use tempfile::TempDir;

use topicdeck::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use topicdeck::types::errors::SettingsError;
use topicdeck::types::settings::{DeckSettings, HydrationPolicy, StorageBackend};

fn engine_in(dir: &TempDir) -> SettingsEngine {
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_file() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, DeckSettings::default());
    assert_eq!(settings.history_capacity, 10);
    assert_eq!(settings.history_key, "aa-topic-history");
    assert_eq!(settings.favorites_key, "aa-topic-favorites");
}

#[test]
fn test_update_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    let custom = DeckSettings {
        history_capacity: 25,
        hydration: HydrationPolicy::Normalize,
        backend: StorageBackend::Sqlite,
        data_dir: Some("/var/lib/topicdeck".to_string()),
        ..DeckSettings::default()
    };

    engine.update(custom.clone()).unwrap();

    let mut reloaded = engine_in(&dir);
    assert_eq!(reloaded.load().unwrap(), custom);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{ "backend": "memory", "hydration": "normalize" }"#,
    )
    .unwrap();
    let mut engine = engine_in(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings.backend, StorageBackend::Memory);
    assert_eq!(settings.hydration, HydrationPolicy::Normalize);
    assert_eq!(settings.history_capacity, 10);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ backend: ").unwrap();
    let mut engine = engine_in(&dir);

    let err = engine.load().unwrap_err();

    assert!(matches!(err, SettingsError::SerializationError(_)));
    assert_eq!(engine.get_settings(), &DeckSettings::default());
}

#[rstest]
#[case(r#"{ "history_capacity": 0 }"#)]
#[case(r#"{ "history_key": "same", "favorites_key": "same" }"#)]
#[case(r#"{ "favorites_key": "" }"#)]
fn test_invalid_values_are_rejected(#[case] content: &str) {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), content).unwrap();
    let mut engine = engine_in(&dir);

    let err = engine.load().unwrap_err();

    assert!(matches!(err, SettingsError::InvalidValue(_)), "got {:?}", err);
}

#[test]
fn test_set_value_updates_single_field() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine.load().unwrap();

    engine
        .set_value("history_capacity", serde_json::json!(5))
        .unwrap();

    assert_eq!(engine.get_settings().history_capacity, 5);
    let mut reloaded = engine_in(&dir);
    assert_eq!(reloaded.load().unwrap().history_capacity, 5);
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);

    let err = engine
        .set_value("backend", serde_json::json!("floppy"))
        .unwrap_err();

    assert!(matches!(err, SettingsError::InvalidValue(_)));
    assert_eq!(engine.get_settings().backend, StorageBackend::File);
}

#[test]
fn test_update_rejects_invalid_settings() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    let invalid = DeckSettings {
        history_capacity: 0,
        ..DeckSettings::default()
    };

    assert!(engine.update(invalid).is_err());
    assert!(!dir.path().join("settings.json").exists());
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in(&dir);
    engine
        .set_value("backend", serde_json::json!("none"))
        .unwrap();

    engine.reset().unwrap();

    let mut reloaded = engine_in(&dir);
    assert_eq!(reloaded.load().unwrap(), DeckSettings::default());
}
