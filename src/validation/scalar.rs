//! Scalar validation
//!
//! Checks run in a fixed order: format (exclusive, stops everything else),
//! then min, max and choices, which are all reported together. The coerced
//! value is committed only when no check failed.

use std::hash::Hash;

use serde_json::Value;

use super::coerce::{coerce_boolean, coerce_integer, coerce_real, coerce_text, render_float};
use super::errors::ValidationError;
use crate::config::{MessageCatalog, MessageKind};
use crate::schema::{Choices, FieldSchema, Quantity};

/// One scalar kind: how to coerce it, measure it against bounds, match it
/// against choices and render it in messages.
pub(crate) trait Scalar: Clone + PartialEq {
    /// Message kinds for (min, max) violations
    const BOUND_MESSAGES: (MessageKind, MessageKind);

    /// Identity used to drop repeated list elements
    type Key: Eq + Hash;

    fn coerce(value: &Value) -> Option<Self>;

    /// Quantity compared against bounds, if the kind has one
    fn magnitude(&self) -> Option<Quantity>;

    fn is_choice(&self, choices: &Choices) -> bool;

    fn render(&self) -> String;

    fn key(&self) -> Self::Key;
}

impl Scalar for String {
    const BOUND_MESSAGES: (MessageKind, MessageKind) =
        (MessageKind::InvalidMinString, MessageKind::InvalidMaxString);

    type Key = String;

    fn coerce(value: &Value) -> Option<Self> {
        coerce_text(value)
    }

    fn magnitude(&self) -> Option<Quantity> {
        Some(Quantity::length(self.chars().count()))
    }

    fn is_choice(&self, choices: &Choices) -> bool {
        match choices {
            Choices::Text(values) => values.contains(self),
            _ => true,
        }
    }

    fn render(&self) -> String {
        self.clone()
    }

    fn key(&self) -> String {
        self.clone()
    }
}

impl Scalar for i64 {
    const BOUND_MESSAGES: (MessageKind, MessageKind) =
        (MessageKind::InvalidMinNumber, MessageKind::InvalidMaxNumber);

    type Key = i64;

    fn coerce(value: &Value) -> Option<Self> {
        coerce_integer(value)
    }

    fn magnitude(&self) -> Option<Quantity> {
        Some(Quantity::Integer(*self))
    }

    fn is_choice(&self, choices: &Choices) -> bool {
        match choices {
            Choices::Integer(values) => values.contains(self),
            _ => true,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn key(&self) -> i64 {
        *self
    }
}

impl Scalar for f64 {
    const BOUND_MESSAGES: (MessageKind, MessageKind) =
        (MessageKind::InvalidMinNumber, MessageKind::InvalidMaxNumber);

    type Key = u64;

    fn coerce(value: &Value) -> Option<Self> {
        coerce_real(value)
    }

    fn magnitude(&self) -> Option<Quantity> {
        Some(Quantity::Real(*self))
    }

    fn is_choice(&self, choices: &Choices) -> bool {
        match choices {
            Choices::Real(values) => values.contains(self),
            _ => true,
        }
    }

    fn render(&self) -> String {
        render_float(*self)
    }

    // -0.0 and 0.0 are the same element.
    fn key(&self) -> u64 {
        if *self == 0.0 {
            0.0f64.to_bits()
        } else {
            self.to_bits()
        }
    }
}

impl Scalar for bool {
    // Booleans never carry bounds; the kinds are never rendered.
    const BOUND_MESSAGES: (MessageKind, MessageKind) =
        (MessageKind::InvalidMinNumber, MessageKind::InvalidMaxNumber);

    type Key = bool;

    fn coerce(value: &Value) -> Option<Self> {
        coerce_boolean(value)
    }

    fn magnitude(&self) -> Option<Quantity> {
        None
    }

    fn is_choice(&self, _choices: &Choices) -> bool {
        true
    }

    fn render(&self) -> String {
        self.to_string()
    }

    fn key(&self) -> bool {
        *self
    }
}

/// Min/max violations of `magnitude` under `schema`, min first.
pub(crate) fn bound_violations(
    messages: &MessageCatalog,
    schema: &FieldSchema,
    magnitude: Quantity,
    (min_message, max_message): (MessageKind, MessageKind),
    path: &str,
) -> Vec<ValidationError> {
    let mut violations = Vec::new();

    if let Some(min) = schema.min {
        if magnitude < min {
            violations.push(ValidationError::out_of_bounds(messages, path, min_message, &min.to_string()));
        }
    }
    if let Some(max) = schema.max {
        if magnitude > max {
            violations.push(ValidationError::out_of_bounds(messages, path, max_message, &max.to_string()));
        }
    }

    violations
}

/// Validates one scalar field and commits it into `slot` when clean.
pub(crate) fn validate_scalar<S: Scalar>(
    messages: &MessageCatalog,
    schema: &FieldSchema,
    value: &Value,
    path: &str,
    slot: &mut Option<S>,
    errors: &mut Vec<ValidationError>,
) {
    let Some(coerced) = S::coerce(value) else {
        errors.push(ValidationError::invalid_format(messages, path, value));
        return;
    };

    let mut violations = match coerced.magnitude() {
        Some(magnitude) => bound_violations(messages, schema, magnitude, S::BOUND_MESSAGES, path),
        None => Vec::new(),
    };

    if let Some(choices) = &schema.choices {
        if !coerced.is_choice(choices) {
            violations.push(ValidationError::invalid_choice(messages, path, &coerced.render(), choices));
        }
    }

    if violations.is_empty() {
        *slot = Some(coerced);
    } else {
        errors.extend(violations);
    }
}
