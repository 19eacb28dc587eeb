//! Integration tests for faultcode-config crate.

use faultcode_common::test_utils::write_file;
use faultcode_config::{Config, ConfigCache, ConfigLoader};
use faultcode_i18n::Locale;

#[test]
fn test_load_from_file_validates() {
    let dir = tempfile::tempdir().unwrap();
    let templates = dir.path().join("locales");
    std::fs::create_dir_all(&templates).unwrap();
    write_file(
        dir.path(),
        "faultcode.toml",
        &format!(
            "[i18n]\ndefault_locale = \"fr-FR\"\ntemplates_dir = {:?}\n",
            templates.display().to_string()
        ),
    );

    let config = ConfigLoader::load_from_file(dir.path().join("faultcode.toml")).unwrap();
    assert_eq!(config.i18n.templates_dir.as_deref(), Some(templates.as_path()));
    assert_eq!(
        config.i18n.default_locale().unwrap(),
        Locale::parse("fr-FR").unwrap()
    );
}

#[test]
fn test_load_from_file_rejects_missing_templates_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "faultcode.toml",
        "[i18n]\ntemplates_dir = \"/definitely/not/here\"\n",
    );
    assert!(ConfigLoader::load_from_file(dir.path().join("faultcode.toml")).is_err());
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ConfigLoader::load_from_file("/definitely/not/faultcode.toml").unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_config_cache() {
    let config = Config::default();
    let cache = ConfigCache::new(config.clone());

    // Should be able to get the config
    let cached_config = cache.get();
    assert_eq!(cached_config.i18n, config.i18n);

    // Should be able to update the config
    let mut new_config = config;
    new_config.i18n.default_locale = Some("fr-FR".to_string());
    cache.update(new_config);

    let updated_config = cache.get();
    assert_eq!(updated_config.i18n.default_locale.as_deref(), Some("fr-FR"));
}
