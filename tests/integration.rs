// SPDX-License-Identifier: MPL-2.0
use webgrab::config::{self, Config, DEFAULT_ENDPOINT};
use webgrab::i18n::fluent::I18n;
use webgrab::scrape::{self, download};
use webgrab::ui::theming::ThemeMode;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    // Load i18n with french config
    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config_language() {
    let config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn config_round_trip_preserves_every_preference() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        language: Some("fr".to_string()),
        endpoint: Some("http://127.0.0.1:8080/scrape".to_string()),
        download_dir: Some(PathBuf::from("/tmp/webgrab-downloads")),
        theme_mode: ThemeMode::Dark,
    };

    config::save_to_path(&config, &path).expect("Failed to save config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded, config);
}

#[test]
fn corrupt_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "][ this is not toml").expect("Failed to write file");

    let loaded = config::load_from_path(&path).expect("Load should tolerate corrupt files");
    assert_eq!(loaded.effective_endpoint(), DEFAULT_ENDPOINT);
}

#[test]
fn scrape_response_parsing_matches_service_contract() {
    // Full reply
    let images =
        scrape::parse_response(r#"{"images": ["https://a/1.png", "https://a/2.png"]}"#).unwrap();
    assert_eq!(images.len(), 2);

    // No images found: absent field, not an error
    let images = scrape::parse_response("{}").unwrap();
    assert!(images.is_empty());

    // Garbage is an error
    assert!(scrape::parse_response("<!DOCTYPE html>").is_err());
}

#[test]
fn suggested_filenames_are_usable_on_disk() {
    assert_eq!(
        download::suggested_filename("https://cdn.example.com/photos/cat.png?w=640"),
        "cat.png"
    );

    // A bare host has no usable segment and yields a timestamped name
    let fallback = download::suggested_filename("https://example.com");
    assert!(fallback.starts_with("image-"));
    assert!(!fallback.contains('/'));
    assert!(!fallback.contains(':'));
}

#[tokio::test]
async fn fetch_against_unreachable_endpoint_reports_connection_error() {
    use webgrab::error::FetchError;
    use webgrab::scrape::ScrapeClient;

    // Discard port on loopback refuses the connection immediately.
    let client = ScrapeClient::new("http://127.0.0.1:9").expect("client construction");
    let result = client.fetch_images("https://example.com".to_string()).await;

    match result {
        Err(FetchError::Connection(_) | FetchError::Other(_)) => {}
        other => panic!("expected a connection-class error, got {other:?}"),
    }
}
