//! Runtime validation of configuration values.

use crate::schema::Config;
use faultcode_common::{FaultcodeError, Result};
use faultcode_i18n::Locale;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(tag) = &config.i18n.default_locale {
            Locale::parse(tag).map_err(|_| {
                FaultcodeError::validation_field(
                    format!("'{tag}' is not a valid locale"),
                    "i18n.default_locale",
                )
            })?;
        }

        if let Some(dir) = &config.i18n.templates_dir {
            if !dir.is_dir() {
                return Err(FaultcodeError::validation_field(
                    format!("{} is not a directory", dir.display()),
                    "i18n.templates_dir",
                ));
            }
        }

        if config.logging.level.trim().is_empty() {
            return Err(FaultcodeError::validation_field(
                "log level cannot be empty",
                "logging.level",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_bad_locale_is_rejected() {
        let mut config = Config::default();
        config.i18n.default_locale = Some("not a locale!".to_string());
        match ConfigValidator::validate(&config).unwrap_err() {
            FaultcodeError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("i18n.default_locale"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_templates_dir_is_rejected() {
        let mut config = Config::default();
        config.i18n.templates_dir = Some("/definitely/not/a/dir".into());
        assert!(ConfigValidator::validate(&config).is_err());
    }

    #[test]
    fn test_empty_log_level_is_rejected() {
        let mut config = Config::default();
        config.logging.level = "  ".to_string();
        assert!(ConfigValidator::validate(&config).is_err());
    }
}
