//! jsonform - Validate and coerce JSON input into typed forms
//!
//! A form declares each of its fields with a tag of rules
//! (`type=int;required=true;min=1;choices=1,2,3`). Validation decodes the
//! input, coerces every value to its declared kind, and reports every
//! violation with the path of the offending field.
//!
//! ```ignore
//! use jsonform::{Form, FormDescriptor};
//!
//! #[derive(Default)]
//! struct Signup {
//!     name: Option<String>,
//!     age: Option<i64>,
//! }
//!
//! impl Form for Signup {
//!     fn describe(form: &mut FormDescriptor<Self>) {
//!         form.text("Name", "type=string;required=true;max=40", |s| &mut s.name)
//!             .integer("Age", "type=int;min=18", |s| &mut s.age);
//!     }
//! }
//!
//! let mut signup = Signup::default();
//! let errors = jsonform::validate(br#"{"name": "Ada", "age": "36"}"#, &mut signup);
//! assert!(errors.is_empty());
//! ```

pub mod case;
pub mod config;
pub mod form;
pub mod schema;
pub mod validation;

pub use config::{ConfigError, ConfigResult, MessageCatalog, MessageKind, ValidatorConfig};
pub use form::{Form, FormDescriptor};
pub use schema::{FieldKind, FieldSchema, SchemaMap};
pub use validation::{ValidationError, ValidationErrorCode, Validator};

/// Validates `raw` into `target` with the default configuration.
///
/// See [`Validator::validate`].
pub fn validate<T: Form>(raw: &[u8], target: &mut T) -> Vec<ValidationError> {
    Validator::default().validate(raw, target)
}
