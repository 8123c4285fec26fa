//! Validation orchestrator
//!
//! Validation semantics:
//! - Input must decode to a JSON object, otherwise a single `json` error is
//!   returned and the target is left untouched
//! - Every input key must match a declared field (lowerCamel of its name)
//! - Every declared field is validated by its declared kind
//! - Every required field must appear in the input
//! - All violations are collected; nothing short-circuits across fields
//!
//! A field is committed into the target only when its own checks pass, so a
//! failed call may still leave the target partially filled.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

use super::errors::ValidationError;
use super::list::validate_list;
use super::path::field_path;
use super::scalar::validate_scalar;
use crate::config::ValidatorConfig;
use crate::form::{Binding, Form, FormDescriptor};
use crate::schema::{FieldKind, SchemaMap};

/// Validates JSON input into forms.
///
/// Holds no per-call state; one validator may serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Decodes `raw` and validates it into `target`.
    ///
    /// # Arguments
    ///
    /// * `raw` - JSON text, expected to hold an object
    /// * `target` - Form receiving every value that passes its checks
    ///
    /// # Returns
    ///
    /// Every violation found; empty means the input is valid. When `raw` is
    /// not a JSON object the result is one error at field `json` whose
    /// message carries the raw text.
    pub fn validate<T: Form>(&self, raw: &[u8], target: &mut T) -> Vec<ValidationError> {
        let root = match serde_json::from_slice::<Value>(raw) {
            Ok(root) => root,
            Err(err) => {
                debug!(error = %err, "input is not valid JSON");
                return vec![ValidationError::invalid_json(
                    &self.config.messages,
                    &String::from_utf8_lossy(raw),
                )];
            }
        };

        match root {
            Value::Object(object) => self.validate_root(&object, target),
            _ => {
                debug!("input root is not a JSON object");
                vec![ValidationError::invalid_json(
                    &self.config.messages,
                    &String::from_utf8_lossy(raw),
                )]
            }
        }
    }

    /// Validates an already-decoded tree into `target`.
    pub fn validate_value<T: Form>(&self, value: &Value, target: &mut T) -> Vec<ValidationError> {
        match value {
            Value::Object(object) => self.validate_root(object, target),
            other => {
                debug!("input root is not a JSON object");
                vec![ValidationError::invalid_json(&self.config.messages, &other.to_string())]
            }
        }
    }

    fn validate_root<T: Form>(&self, object: &Map<String, Value>, target: &mut T) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.validate_object(object, target, "", &mut errors);
        debug!(errors = errors.len(), "validation finished");
        errors
    }

    /// Validates one object level into `target`, appending to `errors`.
    ///
    /// `parent` is the path of this level, empty at the root.
    pub(crate) fn validate_object<T: Form>(
        &self,
        object: &Map<String, Value>,
        target: &mut T,
        parent: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let descriptor = FormDescriptor::<T>::describe();
        let schema = SchemaMap::from_descriptor(&descriptor, &self.config);
        let messages = &self.config.messages;
        let mut seen: HashSet<&str> = HashSet::with_capacity(object.len());

        trace!(path = parent, fields = schema.len(), keys = object.len(), "validating object");

        for (key, value) in object {
            let path = field_path(parent, key);

            let Some(entry) = schema.get(key) else {
                errors.push(ValidationError::unknown_field(messages, path));
                continue;
            };
            seen.insert(entry.name());

            let field = entry.schema();
            let binding = descriptor.fields()[entry.position()].binding();

            match (field.kind, binding) {
                (FieldKind::Text, Binding::Text(access)) => {
                    validate_scalar(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::Integer, Binding::Integer(access)) => {
                    validate_scalar(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::Real, Binding::Real(access)) => {
                    validate_scalar(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::Boolean, Binding::Boolean(access)) => {
                    validate_scalar(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::TextList, Binding::TextList(access)) => {
                    validate_list(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::IntegerList, Binding::IntegerList(access)) => {
                    validate_list(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::RealList, Binding::RealList(access)) => {
                    validate_list(messages, field, value, &path, access(target), errors)
                }
                (FieldKind::Object, Binding::Object(nested))
                | (FieldKind::ObjectList, Binding::ObjectList(nested)) => {
                    nested.validate_into(self, target, field, value, &path, errors)
                }
                (FieldKind::Unset, _) => {
                    trace!(path = %path, "field has no declared type, skipping");
                }
                (kind, binding) => {
                    warn!(
                        path = %path,
                        kind = %kind,
                        slot = binding.shape(),
                        "declared type does not match field slot, skipping"
                    );
                }
            }
        }

        for entry in schema.entries() {
            if entry.schema().required && !seen.contains(entry.name()) {
                errors.push(ValidationError::missing_required(messages, field_path(parent, entry.name())));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorCode;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Account {
        login: Option<String>,
        age: Option<i64>,
        score: Option<f64>,
        email: Option<String>,
        notes: Option<String>,
    }

    impl Form for Account {
        fn describe(form: &mut FormDescriptor<Self>) {
            form.text("Login", "type=string;required=true", |a| &mut a.login)
                .integer("Age", "type=int;min=18", |a| &mut a.age)
                .real("Score", "type=int", |a| &mut a.score)
                .text("Email", "required=true;type=string", |a| &mut a.email)
                .text("Notes", "", |a| &mut a.notes);
        }
    }

    #[test]
    fn test_valid_input_fills_target() {
        let mut account = Account::default();
        let errors = Validator::default().validate(br#"{"login": "ada", "age": "36", "email": "a@b"}"#, &mut account);
        assert!(errors.is_empty());
        assert_eq!(account.login.as_deref(), Some("ada"));
        assert_eq!(account.age, Some(36));
    }

    #[test]
    fn test_invalid_json_is_single_error() {
        let mut account = Account::default();
        let errors = Validator::default().validate(b"{\"login\": ", &mut account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "json");
        assert_eq!(errors[0].code(), ValidationErrorCode::InvalidJson);
        assert_eq!(errors[0].message(), "This field has an invalid format ({\"login\": ).");
        assert!(account.login.is_none());
    }

    #[test]
    fn test_non_object_root_is_invalid_json() {
        let mut account = Account::default();
        let errors = Validator::default().validate(b"[1, 2]", &mut account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "This field has an invalid format ([1, 2]).");

        let errors = Validator::default().validate_value(&json!("x"), &mut account);
        assert_eq!(errors[0].field(), "json");
        assert_eq!(errors[0].message(), "This field has an invalid format (\"x\").");
    }

    #[test]
    fn test_required_errors_in_declaration_order() {
        let mut account = Account::default();
        let errors = Validator::default().validate_value(&json!({}), &mut account);
        let fields: Vec<&str> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(fields, ["login", "email"]);
        assert!(errors.iter().all(|e| e.code() == ValidationErrorCode::MissingRequired));
    }

    #[test]
    fn test_required_satisfied_by_invalid_value() {
        let mut account = Account::default();
        let errors = Validator::default().validate_value(&json!({"login": [], "email": "x"}), &mut account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), ValidationErrorCode::InvalidFormat);
        assert!(account.login.is_none());
    }

    #[test]
    fn test_unknown_keys_reported_with_path() {
        let mut account = Account::default();
        let errors =
            Validator::default().validate_value(&json!({"login": "a", "email": "b", "Login": "c"}), &mut account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field(), "Login");
        assert_eq!(errors[0].message(), "This field is invalid.");
    }

    #[test]
    fn test_mismatched_and_untyped_fields_are_skipped() {
        let mut account = Account::default();
        let errors = Validator::default().validate_value(
            &json!({"login": "a", "email": "b", "score": "nope", "notes": {}}),
            &mut account,
        );
        assert!(errors.is_empty());
        assert!(account.score.is_none());
        assert!(account.notes.is_none());
    }

    #[test]
    fn test_rejected_field_does_not_block_others() {
        let mut account = Account::default();
        let errors = Validator::default().validate_value(&json!({"login": "a", "email": "b", "age": 3}), &mut account);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message(), "This field must be at least 18.");
        assert_eq!(account.login.as_deref(), Some("a"));
        assert!(account.age.is_none());
    }

    #[test]
    fn test_validator_is_reusable() {
        let validator = Validator::default();
        for _ in 0..3 {
            let mut account = Account::default();
            let errors = validator.validate_value(&json!({"login": "a"}), &mut account);
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field(), "email");
        }
    }
}
