//! Validator configuration
//!
//! Holds the tag separators and the message catalog. Every field has a serde
//! default, so a config file only needs the keys it overrides:
//!
//! ```json
//! { "messages": { "RequiredField": "Campo obrigatório." } }
//! ```

mod errors;
mod messages;

pub use errors::{ConfigError, ConfigResult};
pub use messages::{MessageCatalog, MessageKind};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration shared by every validation call of a [`crate::Validator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Separates clauses of a tag (default: ";")
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Separates values of a `choices=` clause (default: ",")
    #[serde(default = "default_choices_separator")]
    pub choices_separator: String,

    /// Error message templates
    #[serde(default)]
    pub messages: MessageCatalog,
}

fn default_separator() -> String {
    ";".to_string()
}

fn default_choices_separator() -> String {
    ",".to_string()
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            choices_separator: default_choices_separator(),
            messages: MessageCatalog::default(),
        }
    }
}

impl ValidatorConfig {
    /// Create a config with a custom message catalog
    pub fn with_messages(messages: MessageCatalog) -> Self {
        Self {
            messages,
            ..Self::default()
        }
    }

    /// Parses and checks a JSON config document.
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate_structure()?;
        Ok(config)
    }

    /// Loads and checks a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks the config itself (not any input).
    ///
    /// Separators must be non-empty and distinct, and every template must keep
    /// the placeholders of its kind.
    pub fn validate_structure(&self) -> ConfigResult<()> {
        if self.separator.is_empty() {
            return Err(ConfigError::EmptySeparator("clause"));
        }
        if self.choices_separator.is_empty() {
            return Err(ConfigError::EmptySeparator("choices"));
        }
        if self.separator == self.choices_separator {
            return Err(ConfigError::SameSeparators(self.separator.clone()));
        }

        for kind in MessageKind::ALL {
            let template = self.messages.template(kind);
            for &placeholder in kind.placeholders() {
                if !template.contains(&format!("{{{}}}", placeholder)) {
                    return Err(ConfigError::MissingPlaceholder {
                        message: kind.key(),
                        placeholder,
                    });
                }
            }
        }

        Ok(())
    }
}
