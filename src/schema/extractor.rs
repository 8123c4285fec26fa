//! Schema extraction
//!
//! Turns a form's declared fields into an immutable map keyed by the
//! lowerCamel name that decoded JSON keys are matched against.

use std::collections::HashMap;

use super::tag::parse_tag;
use super::types::FieldSchema;
use crate::case::lower_camel;
use crate::config::ValidatorConfig;
use crate::form::{Form, FormDescriptor};

/// One extracted field.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEntry {
    name: String,
    schema: FieldSchema,
    position: usize,
}

impl SchemaEntry {
    /// JSON key of the field (lowerCamel of the declared name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extracted rules
    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Index of the declaration this entry came from
    pub fn position(&self) -> usize {
        self.position
    }
}

/// Extracted schema of one form level.
///
/// Exactly one entry per distinct key; when two declarations map to the same
/// key the later one wins. Iteration follows declaration order.
#[derive(Debug, Clone, Default)]
pub struct SchemaMap {
    entries: Vec<SchemaEntry>,
    index: HashMap<String, usize>,
}

impl SchemaMap {
    /// Extracts a schema from `(declared name, tag)` pairs.
    pub fn from_definitions<'a, I>(definitions: I, config: &ValidatorConfig) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut map = SchemaMap::default();

        for (position, (declared, tag)) in definitions.into_iter().enumerate() {
            let entry = SchemaEntry {
                name: lower_camel(declared),
                schema: parse_tag(tag, &config.separator, &config.choices_separator),
                position,
            };

            match map.index.get(&entry.name) {
                Some(&slot) => map.entries[slot] = entry,
                None => {
                    map.index.insert(entry.name.clone(), map.entries.len());
                    map.entries.push(entry);
                }
            }
        }

        map
    }

    /// Extracts the schema of a described form.
    pub fn from_descriptor<T>(descriptor: &FormDescriptor<T>, config: &ValidatorConfig) -> Self {
        Self::from_definitions(
            descriptor.fields().iter().map(|field| (field.name(), field.tag())),
            config,
        )
    }

    /// Extracts the schema of form type `T`.
    pub fn of<T: Form>(config: &ValidatorConfig) -> Self {
        Self::from_descriptor(&FormDescriptor::<T>::describe(), config)
    }

    /// Looks up a field by JSON key
    pub fn get(&self, key: &str) -> Option<&SchemaEntry> {
        self.index.get(key).map(|&slot| &self.entries[slot])
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    /// Number of distinct fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the form declares no fields
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Choices, FieldKind, Quantity};

    fn extract(definitions: &[(&str, &str)]) -> SchemaMap {
        SchemaMap::from_definitions(definitions.iter().copied(), &ValidatorConfig::default())
    }

    #[test]
    fn test_keys_are_lower_camel() {
        let map = extract(&[
            ("Name", "type=string;required=true"),
            ("PreviousCodes", "type=[]int;choices=1,2"),
        ]);

        assert_eq!(map.len(), 2);
        let name = map.get("name").unwrap();
        assert_eq!(name.schema().kind, FieldKind::Text);
        assert!(name.schema().required);

        let codes = map.get("previousCodes").unwrap();
        assert_eq!(codes.schema().choices, Some(Choices::Integer(vec![1, 2])));
        assert_eq!(codes.position(), 1);

        assert!(map.get("Name").is_none());
    }

    #[test]
    fn test_later_duplicate_wins() {
        let map = extract(&[("Code", "type=int"), ("code", "type=string")]);
        assert_eq!(map.len(), 1);
        let entry = map.get("code").unwrap();
        assert_eq!(entry.schema().kind, FieldKind::Text);
        assert_eq!(entry.position(), 1);
    }

    #[test]
    fn test_entries_keep_declaration_order() {
        let map = extract(&[("B", "type=int"), ("A", "type=int"), ("C", "")]);
        let names: Vec<&str> = map.entries().iter().map(SchemaEntry::name).collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(map.get("c").unwrap().schema().kind, FieldKind::Unset);
    }

    #[test]
    fn test_custom_separator_config() {
        let config = ValidatorConfig {
            separator: "|".into(),
            ..ValidatorConfig::default()
        };
        let map = SchemaMap::from_definitions([("Age", "type=int|min=18")], &config);
        assert_eq!(map.get("age").unwrap().schema().min, Some(Quantity::Integer(18)));
    }

    #[test]
    fn test_empty_form() {
        let map = extract(&[]);
        assert!(map.is_empty());
    }
}
