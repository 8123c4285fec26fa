//! Tag parsing
//!
//! A tag is a list of clauses such as `type=int;required=true;min=1;max=10`.
//! Clauses are applied left to right, so bounds and choices are read with the
//! kind established so far. Unrecognized or malformed clauses are ignored.

use super::types::{Choices, FieldKind, FieldSchema};

/// Parses one field's tag into its schema.
pub fn parse_tag(tag: &str, separator: &str, choices_separator: &str) -> FieldSchema {
    let mut schema = FieldSchema::default();

    for clause in tag.split(separator) {
        if let Some(value) = clause.strip_prefix("required=") {
            if value == "true" {
                schema.required = true;
            }
        } else if let Some(value) = clause.strip_prefix("type=") {
            match FieldKind::from_tag(value) {
                Some(kind) => schema.kind = kind,
                None => tracing::trace!(clause, "ignoring unknown field type"),
            }
        } else if let Some(value) = clause.strip_prefix("min=") {
            if let Some(bound) = schema.parse_bound(value) {
                schema.min = Some(bound);
            }
        } else if let Some(value) = clause.strip_prefix("max=") {
            if let Some(bound) = schema.parse_bound(value) {
                schema.max = Some(bound);
            }
        } else if let Some(value) = clause.strip_prefix("choices=") {
            if !value.is_empty() {
                schema.choices = Choices::parse(schema.kind, value, choices_separator);
            }
        } else if !clause.is_empty() {
            tracing::trace!(clause, "ignoring unrecognized tag clause");
        }
    }

    schema
}
