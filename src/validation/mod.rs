//! Validation subsystem
//!
//! Decodes JSON input, coerces every declared field to its kind, checks
//! bounds and choices, and fills the caller's form.
//!
//! # Invariants
//!
//! - Every violation is reported, not just the first
//! - A field is written only when all of its own checks pass
//! - Error paths are dotted for nested fields and indexed for list elements
//! - Validation never panics on any input

mod coerce;
mod errors;
mod list;
pub(crate) mod nested;
mod path;
mod scalar;
mod validator;

pub use coerce::{coerce_boolean, coerce_integer, coerce_real, coerce_text, render_float, render_raw};
pub use errors::{ValidationError, ValidationErrorCode, JSON_FIELD};
pub use path::{field_path, index_path};
pub use validator::Validator;
