//! Schema subsystem
//!
//! Field rules are declared as tag strings next to each form field and
//! extracted once per validation level.
//!
//! # Design Principles
//!
//! - Extracted schemas are immutable and may be shared across calls
//! - Malformed clauses never fail extraction, they are dropped
//! - Bounds and choices are parsed according to the declared kind

mod extractor;
mod tag;
mod types;

pub use extractor::{SchemaEntry, SchemaMap};
pub use tag::parse_tag;
pub use types::{Choices, FieldKind, FieldSchema, Quantity};
