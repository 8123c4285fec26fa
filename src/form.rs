//! Form descriptors
//!
//! A form is a caller-owned struct whose fields are filled by validation. It
//! describes itself once: for every field, the declared name, the tag with its
//! rules, and an accessor returning the field's slot.
//!
//! ```ignore
//! #[derive(Default)]
//! struct Person {
//!     name: Option<String>,
//!     age: Option<i64>,
//! }
//!
//! impl Form for Person {
//!     fn describe(form: &mut FormDescriptor<Self>) {
//!         form.text("Name", "type=string;required=true", |p| &mut p.name)
//!             .integer("Age", "type=int;min=0", |p| &mut p.age);
//!     }
//! }
//! ```

use serde_json::Value;

use crate::schema::FieldSchema;
use crate::validation::nested::{ObjectBinding, ObjectListBinding};
use crate::validation::{ValidationError, Validator};

/// Accessor for a field slot of form `T` holding a `V`.
pub type Accessor<T, V> = fn(&mut T) -> &mut Option<V>;

/// A struct that can be filled from decoded JSON.
pub trait Form: Default + 'static {
    /// Declares the fields of this form.
    fn describe(form: &mut FormDescriptor<Self>);
}

/// Validates a nested value into a field of parent form `P`.
pub trait NestedBinding<P> {
    /// Validates `value` at `path` and commits into `parent` as the field's
    /// rules allow, appending every violation to `errors`.
    fn validate_into(
        &self,
        validator: &Validator,
        parent: &mut P,
        schema: &FieldSchema,
        value: &Value,
        path: &str,
        errors: &mut Vec<ValidationError>,
    );
}

/// Typed slot of one declared field.
pub enum Binding<T> {
    Text(Accessor<T, String>),
    Integer(Accessor<T, i64>),
    Real(Accessor<T, f64>),
    Boolean(Accessor<T, bool>),
    TextList(Accessor<T, Vec<String>>),
    IntegerList(Accessor<T, Vec<i64>>),
    RealList(Accessor<T, Vec<f64>>),
    Object(Box<dyn NestedBinding<T>>),
    ObjectList(Box<dyn NestedBinding<T>>),
}

impl<T> Binding<T> {
    /// Short description of the slot type, for diagnostics
    pub fn shape(&self) -> &'static str {
        match self {
            Binding::Text(_) => "Option<String>",
            Binding::Integer(_) => "Option<i64>",
            Binding::Real(_) => "Option<f64>",
            Binding::Boolean(_) => "Option<bool>",
            Binding::TextList(_) => "Option<Vec<String>>",
            Binding::IntegerList(_) => "Option<Vec<i64>>",
            Binding::RealList(_) => "Option<Vec<f64>>",
            Binding::Object(_) => "Option<form>",
            Binding::ObjectList(_) => "Option<Vec<form>>",
        }
    }
}

/// One declared field.
pub struct FieldDescriptor<T> {
    name: String,
    tag: String,
    binding: Binding<T>,
}

impl<T> FieldDescriptor<T> {
    /// Declared name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw tag string
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Slot accessor
    pub fn binding(&self) -> &Binding<T> {
        &self.binding
    }
}

/// Ordered field declarations of form `T`.
pub struct FormDescriptor<T> {
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> FormDescriptor<T> {
    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    fn push(&mut self, name: &str, tag: &str, binding: Binding<T>) -> &mut Self {
        self.fields.push(FieldDescriptor {
            name: name.to_string(),
            tag: tag.to_string(),
            binding,
        });
        self
    }

    pub fn text(&mut self, name: &str, tag: &str, access: Accessor<T, String>) -> &mut Self {
        self.push(name, tag, Binding::Text(access))
    }

    pub fn integer(&mut self, name: &str, tag: &str, access: Accessor<T, i64>) -> &mut Self {
        self.push(name, tag, Binding::Integer(access))
    }

    pub fn real(&mut self, name: &str, tag: &str, access: Accessor<T, f64>) -> &mut Self {
        self.push(name, tag, Binding::Real(access))
    }

    pub fn boolean(&mut self, name: &str, tag: &str, access: Accessor<T, bool>) -> &mut Self {
        self.push(name, tag, Binding::Boolean(access))
    }

    pub fn text_list(&mut self, name: &str, tag: &str, access: Accessor<T, Vec<String>>) -> &mut Self {
        self.push(name, tag, Binding::TextList(access))
    }

    pub fn integer_list(&mut self, name: &str, tag: &str, access: Accessor<T, Vec<i64>>) -> &mut Self {
        self.push(name, tag, Binding::IntegerList(access))
    }

    pub fn real_list(&mut self, name: &str, tag: &str, access: Accessor<T, Vec<f64>>) -> &mut Self {
        self.push(name, tag, Binding::RealList(access))
    }
}

impl<T: Form> FormDescriptor<T> {
    /// Collects the declarations of `T`.
    pub fn describe() -> Self {
        let mut descriptor = FormDescriptor { fields: Vec::new() };
        T::describe(&mut descriptor);
        descriptor
    }

    /// Declares a nested form field.
    pub fn object<C: Form>(&mut self, name: &str, tag: &str, access: Accessor<T, C>) -> &mut Self {
        self.push(name, tag, Binding::Object(Box::new(ObjectBinding::new(access))))
    }

    /// Declares a list-of-forms field.
    pub fn object_list<C: Form>(&mut self, name: &str, tag: &str, access: Accessor<T, Vec<C>>) -> &mut Self {
        self.push(name, tag, Binding::ObjectList(Box::new(ObjectListBinding::new(access))))
    }
}
