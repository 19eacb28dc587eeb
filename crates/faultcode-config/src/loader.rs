//! Configuration loading from TOML files with environment variable overrides.

use crate::schema::Config;
use faultcode_common::{FaultcodeError, Result};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "FAULTCODE_CONFIG";
/// Overrides `i18n.default_locale`.
pub const LOCALE_VAR: &str = "FAULTCODE_LOCALE";
/// Overrides `i18n.templates_dir`.
pub const TEMPLATES_DIR_VAR: &str = "FAULTCODE_TEMPLATES_DIR";
/// Overrides `i18n.cache_templates`.
pub const CACHE_TEMPLATES_VAR: &str = "FAULTCODE_CACHE_TEMPLATES";
/// Overrides `logging.level`.
pub const LOG_LEVEL_VAR: &str = "FAULTCODE_LOG_LEVEL";

/// File consulted when `FAULTCODE_CONFIG` is unset.
const DEFAULT_CONFIG_FILE: &str = "faultcode.toml";

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Config> {
        toml::from_str(content)
            .map_err(|e| FaultcodeError::config_with_source("failed to parse TOML configuration", e))
    }

    /// Load, override from the environment and validate a configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading configuration file");
        let content = std::fs::read_to_string(path).map_err(|e| {
            FaultcodeError::config_with_source(format!("cannot read {}", path.display()), e)
        })?;
        let mut config = Self::from_toml(&content)?;
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `FAULTCODE_CONFIG`, `./faultcode.toml`, or
    /// defaults, in that order, then apply environment overrides.
    pub fn load() -> Result<Config> {
        if let Ok(path) = env::var(CONFIG_PATH_VAR) {
            return Self::load_from_file(path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).is_file() {
            return Self::load_from_file(DEFAULT_CONFIG_FILE);
        }

        info!("No configuration file found, using defaults");
        let mut config = Config::default();
        Self::apply_env_overrides(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
        Self::apply_overrides(config, |var| env::var(var).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(locale) = lookup(LOCALE_VAR) {
            config.i18n.default_locale = Some(locale);
        }

        if let Some(dir) = lookup(TEMPLATES_DIR_VAR) {
            config.i18n.templates_dir = Some(PathBuf::from(dir));
        }

        if let Some(cache) = lookup(CACHE_TEMPLATES_VAR) {
            config.i18n.cache_templates = cache.trim().parse().map_err(|e| {
                FaultcodeError::config_with_source(
                    format!("failed to parse environment variable '{CACHE_TEMPLATES_VAR}'"),
                    e,
                )
            })?;
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.logging.level = level;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultcode_common::LogFormat;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_from_toml() {
        let config = ConfigLoader::from_toml(
            r#"
[i18n]
default_locale = "sv-SE"
templates_dir = "locales"

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();
        assert_eq!(config.i18n.default_locale.as_deref(), Some("sv-SE"));
        assert_eq!(config.i18n.templates_dir, Some(PathBuf::from("locales")));
        assert!(config.i18n.cache_templates);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(ConfigLoader::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let err = ConfigLoader::from_toml("[i18n\n").unwrap_err();
        assert!(matches!(err, FaultcodeError::Config { .. }));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        ConfigLoader::apply_overrides(
            &mut config,
            lookup(&[
                (LOCALE_VAR, "de-DE"),
                (TEMPLATES_DIR_VAR, "/srv/locales"),
                (CACHE_TEMPLATES_VAR, "false"),
                (LOG_LEVEL_VAR, "faultcode=trace"),
            ]),
        )
        .unwrap();
        assert_eq!(config.i18n.default_locale.as_deref(), Some("de-DE"));
        assert_eq!(config.i18n.templates_dir, Some(PathBuf::from("/srv/locales")));
        assert!(!config.i18n.cache_templates);
        assert_eq!(config.logging.level, "faultcode=trace");
    }

    #[test]
    fn test_bad_bool_override() {
        let mut config = Config::default();
        let err = ConfigLoader::apply_overrides(&mut config, lookup(&[(CACHE_TEMPLATES_VAR, "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains(CACHE_TEMPLATES_VAR));
    }
}
