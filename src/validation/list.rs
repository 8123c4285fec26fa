//! Scalar list validation
//!
//! Stages, each stopping the field when it reports anything:
//! 1. shape: the value must be a list
//! 2. length against min/max
//! 3. per-element coercion, one error per bad element at `field[i]`
//! 4. choices, checked on the de-duplicated values at their new indexes

use std::collections::HashSet;

use serde_json::Value;

use super::errors::ValidationError;
use super::path::index_path;
use super::scalar::{bound_violations, Scalar};
use crate::config::{MessageCatalog, MessageKind};
use crate::schema::{FieldSchema, Quantity};

const LENGTH_MESSAGES: (MessageKind, MessageKind) = (MessageKind::InvalidMinList, MessageKind::InvalidMaxList);

/// Returns the elements of a list value, or the error for a non-list.
pub(crate) fn expect_list<'v>(
    messages: &MessageCatalog,
    value: &'v Value,
    path: &str,
) -> Result<&'v [Value], ValidationError> {
    match value {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(ValidationError::invalid_format(messages, path, other)),
    }
}

/// Length violations of a list with `len` elements.
pub(crate) fn length_violations(
    messages: &MessageCatalog,
    schema: &FieldSchema,
    len: usize,
    path: &str,
) -> Vec<ValidationError> {
    bound_violations(messages, schema, Quantity::length(len), LENGTH_MESSAGES, path)
}

/// Removes repeated values, keeping the first occurrence of each.
pub(crate) fn dedup<S: Scalar>(mut values: Vec<S>) -> Vec<S> {
    let mut seen = HashSet::with_capacity(values.len());
    values.retain(|value| seen.insert(value.key()));
    values
}

/// Validates a scalar list field and commits the de-duplicated list when clean.
pub(crate) fn validate_list<S: Scalar>(
    messages: &MessageCatalog,
    schema: &FieldSchema,
    value: &Value,
    path: &str,
    slot: &mut Option<Vec<S>>,
    errors: &mut Vec<ValidationError>,
) {
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

    let mut coerced = Vec::with_capacity(items.len());
    let mut malformed = Vec::new();
    for (i, item) in items.iter().enumerate() {
        match S::coerce(item) {
            Some(element) => coerced.push(element),
            None => malformed.push(ValidationError::invalid_format(messages, index_path(path, i), item)),
        }
    }
    if !malformed.is_empty() {
        errors.extend(malformed);
        return;
    }

    let unique = dedup(coerced);

    let mut violations = Vec::new();
    if let Some(choices) = &schema.choices {
        for (i, element) in unique.iter().enumerate() {
            if !element.is_choice(choices) {
                violations.push(ValidationError::invalid_choice(
                    messages,
                    index_path(path, i),
                    &element.render(),
                    choices,
                ));
            }
        }
    }

    if violations.is_empty() {
        *slot = Some(unique);
    } else {
        errors.extend(violations);
    }
}
