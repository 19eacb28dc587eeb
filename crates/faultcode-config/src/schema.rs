//! Configuration schema definitions using serde.

use faultcode_common::{LoggingConfig, Result};
use faultcode_i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Message localization configuration.
    pub i18n: I18nConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Message localization configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale used when a caller does not name one. Unset means the
    /// process locale from the environment.
    pub default_locale: Option<String>,
    /// Root directory of Fluent template files. Unset means no template
    /// store; only default formats are used.
    pub templates_dir: Option<PathBuf>,
    /// Whether loaded template collections are cached.
    pub cache_templates: bool,
}

impl I18nConfig {
    /// The configured default locale, or the process locale when unset.
    pub fn default_locale(&self) -> Result<Locale> {
        self.default_locale
            .as_deref()
            .map_or_else(|| Ok(Locale::system()), Locale::parse)
    }
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        crate::validator::ConfigValidator::validate(self)
    }
}
