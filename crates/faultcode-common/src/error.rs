//! Error types and utilities for faultcode

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for faultcode operations
pub type Result<T> = std::result::Result<T, FaultcodeError>;

/// Main error type for faultcode's own operations.
///
/// Fault messages themselves never produce this type: template store
/// failures are reported here and then absorbed by the resolver.
#[derive(Error, Debug)]
pub enum FaultcodeError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A locale tag that does not parse as a language identifier
    #[error("Invalid locale: {tag}")]
    InvalidLocale { tag: String },

    /// A template collection could not be read
    #[error("Failed to load template collection {}", path.display())]
    TemplateLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A template collection is syntactically malformed
    #[error("Failed to parse template collection {}: {errors:?}", path.display())]
    TemplateParse { path: PathBuf, errors: Vec<String> },

    /// Template store failure that does not fit the other variants
    #[error("Template store error: {message}")]
    Store { message: String },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },
}

impl FaultcodeError {
    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new invalid locale error
    pub fn invalid_locale(tag: impl Into<String>) -> Self {
        Self::InvalidLocale { tag: tag.into() }
    }

    /// Create a new template store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store {
            message: msg.into(),
        }
    }

    /// Create a new validation error for a specific field
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}
