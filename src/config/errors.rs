//! Configuration error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or checking a [`super::ValidatorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration text is not valid JSON for the config shape
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A separator was configured as the empty string
    #[error("The {0} separator must not be empty")]
    EmptySeparator(&'static str),

    /// Clause and choices separators are identical
    #[error("Clause and choices separators must differ (both are '{0}')")]
    SameSeparators(String),

    /// A message template dropped one of its placeholders
    #[error("Message template {message} must contain the {{{placeholder}}} placeholder")]
    MissingPlaceholder {
        message: &'static str,
        placeholder: &'static str,
    },
}
