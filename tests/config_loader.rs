//! Config file loading and validation.

use shelfview::config::{Config, ConfigError};
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.listing.debounce(), Duration::from_millis(500));
    assert_eq!(config.listing.description_limit, 400);
    assert_eq!(config.listing.skeleton_count, 8);
    assert_eq!(config.listing.fallback_total, 40);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://127.0.0.1:9000"
locale = "ae-ar"

[listing]
debounce_ms = 250

[logging]
level = "debug"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "http://127.0.0.1:9000");
    assert_eq!(config.api.locale, "ae-ar");
    assert_eq!(config.api.listing_path, "/api/web/products");
    assert_eq!(config.listing.debounce(), Duration::from_millis(250));
    assert_eq!(config.listing.price_max, 500);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, None);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn zero_debounce_is_rejected() {
    let (_dir, path) = write_config("[listing]\ndebounce_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("debounce"));
}

#[test]
fn empty_base_url_is_rejected() {
    let (_dir, path) = write_config("[api]\nbase_url = \"\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn relative_listing_path_is_rejected() {
    let (_dir, path) = write_config("[api]\nlisting_path = \"api/products\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn price_step_must_fit_the_range() {
    let (_dir, path) = write_config("[listing]\nprice_max = 100\nprice_step = 200\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
