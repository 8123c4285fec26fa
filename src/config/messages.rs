//! Message catalog for validation errors
//!
//! Templates use named placeholders (`{value}`, `{bound}`, `{choices}`) that
//! are substituted in a single pass, so interpolated input text is never
//! re-expanded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one template of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Input key not declared by the form
    InvalidField,
    /// Value could not be coerced to the declared kind
    InvalidFormat,
    /// Text shorter than its min bound
    InvalidMinString,
    /// Text longer than its max bound
    InvalidMaxString,
    /// Number below its min bound
    InvalidMinNumber,
    /// Number above its max bound
    InvalidMaxNumber,
    /// List with fewer elements than its min bound
    InvalidMinList,
    /// List with more elements than its max bound
    InvalidMaxList,
    /// Required field never seen in input
    RequiredField,
    /// Value outside the declared choice set
    InvalidChoice,
}

impl MessageKind {
    /// Every kind, in catalog order.
    pub const ALL: [MessageKind; 10] = [
        MessageKind::InvalidField,
        MessageKind::InvalidFormat,
        MessageKind::InvalidMinString,
        MessageKind::InvalidMaxString,
        MessageKind::InvalidMinNumber,
        MessageKind::InvalidMaxNumber,
        MessageKind::InvalidMinList,
        MessageKind::InvalidMaxList,
        MessageKind::RequiredField,
        MessageKind::InvalidChoice,
    ];

    /// Returns the catalog key, as used in configuration files.
    pub fn key(&self) -> &'static str {
        match self {
            MessageKind::InvalidField => "InvalidField",
            MessageKind::InvalidFormat => "InvalidFormat",
            MessageKind::InvalidMinString => "InvalidMinString",
            MessageKind::InvalidMaxString => "InvalidMaxString",
            MessageKind::InvalidMinNumber => "InvalidMinNumber",
            MessageKind::InvalidMaxNumber => "InvalidMaxNumber",
            MessageKind::InvalidMinList => "InvalidMinList",
            MessageKind::InvalidMaxList => "InvalidMaxList",
            MessageKind::RequiredField => "RequiredField",
            MessageKind::InvalidChoice => "InvalidChoice",
        }
    }

    /// Returns the placeholders a template of this kind must keep.
    pub fn placeholders(&self) -> &'static [&'static str] {
        match self {
            MessageKind::InvalidField | MessageKind::RequiredField => &[],
            MessageKind::InvalidFormat => &["value"],
            MessageKind::InvalidMinString
            | MessageKind::InvalidMaxString
            | MessageKind::InvalidMinNumber
            | MessageKind::InvalidMaxNumber
            | MessageKind::InvalidMinList
            | MessageKind::InvalidMaxList => &["bound"],
            MessageKind::InvalidChoice => &["value", "choices"],
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Human-readable templates, one per [`MessageKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MessageCatalog {
    pub invalid_field: String,
    pub invalid_format: String,
    pub invalid_min_string: String,
    pub invalid_max_string: String,
    pub invalid_min_number: String,
    pub invalid_max_number: String,
    pub invalid_min_list: String,
    pub invalid_max_list: String,
    pub required_field: String,
    pub invalid_choice: String,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self {
            invalid_field: "This field is invalid.".into(),
            invalid_format: "This field has an invalid format ({value}).".into(),
            invalid_min_string: "This field must have at least {bound} characters.".into(),
            invalid_max_string: "This field must not have more than {bound} characters.".into(),
            invalid_min_number: "This field must be at least {bound}.".into(),
            invalid_max_number: "This field must be at most {bound}.".into(),
            invalid_min_list: "This field must have at least {bound} elements.".into(),
            invalid_max_list: "This field must not have more than {bound} elements.".into(),
            required_field: "This field is required.".into(),
            invalid_choice: "This field has an invalid choice ({value}). The valid choices are ({choices})"
                .into(),
        }
    }
}

impl MessageCatalog {
    /// Returns the raw template for a kind.
    pub fn template(&self, kind: MessageKind) -> &str {
        match kind {
            MessageKind::InvalidField => &self.invalid_field,
            MessageKind::InvalidFormat => &self.invalid_format,
            MessageKind::InvalidMinString => &self.invalid_min_string,
            MessageKind::InvalidMaxString => &self.invalid_max_string,
            MessageKind::InvalidMinNumber => &self.invalid_min_number,
            MessageKind::InvalidMaxNumber => &self.invalid_max_number,
            MessageKind::InvalidMinList => &self.invalid_min_list,
            MessageKind::InvalidMaxList => &self.invalid_max_list,
            MessageKind::RequiredField => &self.required_field,
            MessageKind::InvalidChoice => &self.invalid_choice,
        }
    }

    /// Renders the template for `kind`, substituting `{name}` placeholders.
    ///
    /// Unknown placeholders are left in place verbatim.
    pub fn render(&self, kind: MessageKind, args: &[(&str, &str)]) -> String {
        interpolate(self.template(kind), args)
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        let substitution = tail.find('}').and_then(|end| {
            let name = &tail[1..end];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, end))
        });

        match substitution {
            Some((value, end)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_keep_placeholders() {
        let catalog = MessageCatalog::default();
        for kind in MessageKind::ALL {
            for placeholder in kind.placeholders() {
                let token = format!("{{{}}}", placeholder);
                assert!(catalog.template(kind).contains(&token), "{} lacks {}", kind, token);
            }
        }
    }

    #[test]
    fn test_render_substitutes_named_values() {
        let catalog = MessageCatalog::default();
        let message = catalog.render(MessageKind::InvalidChoice, &[("value", "3"), ("choices", "1, 2")]);
        assert_eq!(message, "This field has an invalid choice (3). The valid choices are (1, 2)");
    }

    #[test]
    fn test_render_does_not_reexpand_values() {
        let catalog = MessageCatalog::default();
        let message = catalog.render(
            MessageKind::InvalidChoice,
            &[("value", "{choices}"), ("choices", "a")],
        );
        assert_eq!(message, "This field has an invalid choice ({choices}). The valid choices are (a)");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(interpolate("x {nope} y", &[("value", "1")]), "x {nope} y");
        assert_eq!(interpolate("unclosed {value", &[("value", "1")]), "unclosed {value");
    }

    #[test]
    fn test_catalog_keys_are_pascal_case() {
        let json = serde_json::to_value(MessageCatalog::default()).unwrap();
        for kind in MessageKind::ALL {
            assert!(json.get(kind.key()).is_some(), "missing key {}", kind.key());
        }
    }

    #[test]
    fn test_partial_catalog_falls_back_to_defaults() {
        let catalog: MessageCatalog =
            serde_json::from_str(r#"{"RequiredField": "Campo obrigatório."}"#).unwrap();
        assert_eq!(catalog.required_field, "Campo obrigatório.");
        assert_eq!(catalog.invalid_field, MessageCatalog::default().invalid_field);
    }
}
