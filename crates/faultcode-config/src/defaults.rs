//! Default values.

use crate::schema::{Config, I18nConfig};
use faultcode_common::LoggingConfig;

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: None,
            templates_dir: None,
            cache_templates: true,
        }
    }
}
