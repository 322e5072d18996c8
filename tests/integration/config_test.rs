//! Integration tests for configuration persistence.

use std::fs;
use std::path::PathBuf;

use calorie_burn::storage::config::{
    load_config_from, save_config_to, AppConfig, ConfigError, ConfigStore, Theme,
};
use tempfile::TempDir;

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = AppConfig::default();
    config.ui.theme = Theme::Dark;
    config.ui.font_scale = 1.2;
    config.model.model_path = PathBuf::from("/opt/models/forest.json");

    save_config_to(&config, &path).unwrap();
    let loaded = load_config_from(&path).unwrap();

    assert_eq!(loaded.ui, config.ui);
    assert_eq!(loaded.model, config.model);
    assert_eq!(loaded.version, config.version);
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(loaded.ui.theme, Theme::Light);
    assert!(loaded.ui.show_sidebar);
    assert_eq!(loaded.model.model_path, PathBuf::from("assets/calories_model.json"));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "version = [unterminated").unwrap();

    assert!(matches!(load_config_from(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_unparseable_file_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let original = "version = \"0.1.0\"\n[model]\nmodel_path = \"/opt/forest.json\"\n[ui\n";
    fs::write(&path, original).unwrap();

    let mut store = ConfigStore::open(&path);
    assert!(store.path().is_none());
    assert_eq!(store.config.ui.theme, Theme::Light);

    store.config.ui.theme = Theme::Dark;
    assert!(!store.save().unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_store_saves_when_file_loaded_or_missing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut store = ConfigStore::open(&path);
    assert_eq!(store.path(), Some(path.as_path()));

    store.config.ui.theme = Theme::Dark;
    assert!(store.save().unwrap());
    assert_eq!(load_config_from(&path).unwrap().ui.theme, Theme::Dark);
}

#[test]
fn test_unusable_font_scale_is_corrected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "version = \"0.1.0\"\n[ui]\ntheme = \"dark\"\nfont_scale = 0.0\nshow_sidebar = true\n",
    )
    .unwrap();

    assert_eq!(load_config_from(&path).unwrap().ui.font_scale, 1.0);

    fs::write(
        &path,
        "version = \"0.1.0\"\n[ui]\ntheme = \"dark\"\nfont_scale = 9.0\nshow_sidebar = true\n",
    )
    .unwrap();
    assert_eq!(load_config_from(&path).unwrap().ui.font_scale, 3.0);
}
