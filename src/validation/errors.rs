//! Validation error records
//!
//! Error codes:
//! - JSONFORM_INVALID_JSON (input is not a JSON object)
//! - JSONFORM_UNKNOWN_FIELD (key not declared by the form)
//! - JSONFORM_INVALID_FORMAT (value not coercible to the declared kind)
//! - JSONFORM_OUT_OF_BOUNDS (min/max violation)
//! - JSONFORM_INVALID_CHOICE (value outside the declared set)
//! - JSONFORM_MISSING_REQUIRED (required field never seen)

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::coerce::render_raw;
use crate::config::{MessageCatalog, MessageKind};
use crate::schema::Choices;

/// Field name used for input that could not be decoded.
pub const JSON_FIELD: &str = "json";

/// Category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidationErrorCode {
    /// Input is not a decodable JSON object; reported alone
    InvalidJson,
    /// Input key has no declared field
    UnknownField,
    /// Value could not be coerced to the declared kind
    InvalidFormat,
    /// Length or value outside min/max
    OutOfBounds,
    /// Value not among the declared choices
    InvalidChoice,
    /// Required field absent from input
    MissingRequired,
}

impl ValidationErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationErrorCode::InvalidJson => "JSONFORM_INVALID_JSON",
            ValidationErrorCode::UnknownField => "JSONFORM_UNKNOWN_FIELD",
            ValidationErrorCode::InvalidFormat => "JSONFORM_INVALID_FORMAT",
            ValidationErrorCode::OutOfBounds => "JSONFORM_OUT_OF_BOUNDS",
            ValidationErrorCode::InvalidChoice => "JSONFORM_INVALID_CHOICE",
            ValidationErrorCode::MissingRequired => "JSONFORM_MISSING_REQUIRED",
        }
    }
}

impl fmt::Display for ValidationErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One violation found while validating input.
///
/// Ordering is by field path, then message, so callers that need a stable
/// report can simply sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
#[error("Field {field}: {message}")]
pub struct ValidationError {
    field: String,
    message: String,
    code: ValidationErrorCode,
}

impl ValidationError {
    /// Create an error from its parts
    pub fn new(code: ValidationErrorCode, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }

    pub(crate) fn invalid_json(messages: &MessageCatalog, raw: &str) -> Self {
        Self::new(
            ValidationErrorCode::InvalidJson,
            JSON_FIELD,
            messages.render(MessageKind::InvalidFormat, &[("value", raw)]),
        )
    }

    pub(crate) fn unknown_field(messages: &MessageCatalog, field: impl Into<String>) -> Self {
        Self::new(
            ValidationErrorCode::UnknownField,
            field,
            messages.render(MessageKind::InvalidField, &[]),
        )
    }

    pub(crate) fn invalid_format(messages: &MessageCatalog, field: impl Into<String>, raw: &Value) -> Self {
        let value = render_raw(raw);
        Self::new(
            ValidationErrorCode::InvalidFormat,
            field,
            messages.render(MessageKind::InvalidFormat, &[("value", value.as_str())]),
        )
    }

    pub(crate) fn out_of_bounds(
        messages: &MessageCatalog,
        field: impl Into<String>,
        kind: MessageKind,
        bound: &str,
    ) -> Self {
        Self::new(
            ValidationErrorCode::OutOfBounds,
            field,
            messages.render(kind, &[("bound", bound)]),
        )
    }

    pub(crate) fn invalid_choice(
        messages: &MessageCatalog,
        field: impl Into<String>,
        value: &str,
        choices: &Choices,
    ) -> Self {
        let choices = choices.to_string();
        Self::new(
            ValidationErrorCode::InvalidChoice,
            field,
            messages.render(
                MessageKind::InvalidChoice,
                &[("value", value), ("choices", choices.as_str())],
            ),
        )
    }

    pub(crate) fn missing_required(messages: &MessageCatalog, field: impl Into<String>) -> Self {
        Self::new(
            ValidationErrorCode::MissingRequired,
            field,
            messages.render(MessageKind::RequiredField, &[]),
        )
    }

    /// Path of the offending field (e.g. `person.name`, `items[2].code`)
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Rendered human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error category
    pub fn code(&self) -> ValidationErrorCode {
        self.code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = ValidationError::new(ValidationErrorCode::UnknownField, "test_field", "test message.");
        assert_eq!(err.to_string(), "Field test_field: test message.");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationErrorCode::InvalidJson.code(), "JSONFORM_INVALID_JSON");
        assert_eq!(ValidationErrorCode::UnknownField.code(), "JSONFORM_UNKNOWN_FIELD");
        assert_eq!(ValidationErrorCode::InvalidFormat.code(), "JSONFORM_INVALID_FORMAT");
        assert_eq!(ValidationErrorCode::OutOfBounds.code(), "JSONFORM_OUT_OF_BOUNDS");
        assert_eq!(ValidationErrorCode::InvalidChoice.code(), "JSONFORM_INVALID_CHOICE");
        assert_eq!(ValidationErrorCode::MissingRequired.code(), "JSONFORM_MISSING_REQUIRED");
    }

    #[test]
    fn test_invalid_json_uses_json_field() {
        let err = ValidationError::invalid_json(&MessageCatalog::default(), "{\"name\": \"Daniel\",}");
        assert_eq!(err.field(), "json");
        assert_eq!(err.code(), ValidationErrorCode::InvalidJson);
        assert_eq!(
            err.message(),
            "This field has an invalid format ({\"name\": \"Daniel\",})."
        );
    }

    #[test]
    fn test_invalid_format_renders_raw_value() {
        let messages = MessageCatalog::default();
        let err = ValidationError::invalid_format(&messages, "code", &json!("Daniel"));
        assert_eq!(err.message(), "This field has an invalid format (Daniel).");

        let err = ValidationError::invalid_format(&messages, "owners[0]", &json!([]));
        assert_eq!(err.message(), "This field has an invalid format ([]).");
    }

    #[test]
    fn test_invalid_choice_lists_choices() {
        let err = ValidationError::invalid_choice(
            &MessageCatalog::default(),
            "code",
            "101",
            &Choices::Integer(vec![1, 2]),
        );
        assert_eq!(
            err.message(),
            "This field has an invalid choice (101). The valid choices are (1, 2)"
        );
    }

    #[test]
    fn test_errors_sort_by_field() {
        let mut errors = vec![
            ValidationError::missing_required(&MessageCatalog::default(), "name"),
            ValidationError::unknown_field(&MessageCatalog::default(), "age"),
        ];
        errors.sort();
        assert_eq!(errors[0].field(), "age");
        assert_eq!(errors[1].field(), "name");
    }
}
