//! Nested forms
//!
//! A nested object is validated in place against the child form's own schema,
//! with child paths prefixed by the parent field path.

use serde_json::Value;

use super::errors::ValidationError;
use super::list::{expect_list, length_violations};
use super::path::index_path;
use super::validator::Validator;
use crate::form::{Accessor, Form, NestedBinding};
use crate::schema::FieldSchema;

/// Single nested form field of parent `P`.
pub(crate) struct ObjectBinding<P, C> {
    access: Accessor<P, C>,
}

impl<P, C> ObjectBinding<P, C> {
    pub(crate) fn new(access: Accessor<P, C>) -> Self {
        Self { access }
    }
}

impl<P, C: Form> NestedBinding<P> for ObjectBinding<P, C> {
    fn validate_into(
        &self,
        validator: &Validator,
        parent: &mut P,
        _schema: &FieldSchema,
        value: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let Value::Object(object) = value else {
            errors.push(ValidationError::invalid_format(&validator.config().messages, path, value));
            return;
        };

        // Child fields commit individually, so the child is kept even when
        // some of its fields were rejected.
        let mut child = C::default();
        validator.validate_object(object, &mut child, path, errors);
        *(self.access)(parent) = Some(child);
    }
}

/// List-of-forms field of parent `P`.
pub(crate) struct ObjectListBinding<P, C> {
    access: Accessor<P, Vec<C>>,
}

impl<P, C> ObjectListBinding<P, C> {
    pub(crate) fn new(access: Accessor<P, Vec<C>>) -> Self {
        Self { access }
    }
}

impl<P, C: Form> NestedBinding<P> for ObjectListBinding<P, C> {
    fn validate_into(
        &self,
        validator: &Validator,
        parent: &mut P,
        schema: &FieldSchema,
        value: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let messages = &validator.config().messages;

        let items = match expect_list(messages, value, path) {
            Ok(items) => items,
            Err(err) => {
                errors.push(err);
                return;
            }
        };

        let violations = length_violations(messages, schema, items.len(), path);
        if !violations.is_empty() {
            errors.extend(violations);
            return;
        }

        let before = errors.len();
        let mut children = Vec::with_capacity(items.len());

        for (i, item) in items.iter().enumerate() {
            let element_path = index_path(path, i);
            match item {
                Value::Object(object) => {
                    let mut child = C::default();
                    validator.validate_object(object, &mut child, &element_path, errors);
                    children.push(child);
                }
                other => errors.push(ValidationError::invalid_format(messages, element_path, other)),
            }
        }

        if errors.len() == before {
            *(self.access)(parent) = Some(children);
        }
    }
}
