//! Config file loading

use std::fs;

use pageshell::config;

#[test]
fn explicit_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\nsidebar_width = 30\nmouse = false\n").unwrap();

    let loaded = config::load(Some(&path));
    assert!(loaded.warning.is_none());
    assert_eq!(loaded.path.as_deref(), Some(path.as_path()));
    assert_eq!(loaded.config.ui.sidebar_width(), 30);
    assert!(!loaded.config.ui.mouse);
}

#[test]
fn invalid_file_falls_back_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui\nsidebar_width = ").unwrap();

    let loaded = config::load(Some(&path));
    assert!(loaded.warning.is_some());
    assert_eq!(loaded.config, config::Config::default());
}

#[test]
fn missing_explicit_file_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let loaded = config::load(Some(&path));
    assert!(loaded.warning.unwrap().contains("unreadable"));
    assert_eq!(loaded.config, config::Config::default());
}
