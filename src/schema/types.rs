//! Schema type definitions
//!
//! Recognized type tags:
//! - string, int, float, bool: scalars
//! - struct: nested form
//! - []string, []int, []float: homogeneous scalar lists
//! - []struct: list of nested forms

use std::cmp::Ordering;
use std::fmt;

use crate::validation::render_float;

/// Declared kind of a field, selected by the `type=` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldKind {
    /// UTF-8 text
    Text,
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Real,
    /// Boolean
    Boolean,
    /// Nested form
    Object,
    /// List of text values
    TextList,
    /// List of integers
    IntegerList,
    /// List of reals
    RealList,
    /// List of nested forms
    ObjectList,
    /// No recognized `type=` clause; the field is never validated
    #[default]
    Unset,
}

impl FieldKind {
    /// Parses the value of a `type=` clause.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "string" => Some(FieldKind::Text),
            "int" => Some(FieldKind::Integer),
            "float" => Some(FieldKind::Real),
            "bool" => Some(FieldKind::Boolean),
            "struct" => Some(FieldKind::Object),
            "[]string" => Some(FieldKind::TextList),
            "[]int" => Some(FieldKind::IntegerList),
            "[]float" => Some(FieldKind::RealList),
            "[]struct" => Some(FieldKind::ObjectList),
            _ => None,
        }
    }

    /// Returns the tag spelling of this kind
    pub fn tag_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "int",
            FieldKind::Real => "float",
            FieldKind::Boolean => "bool",
            FieldKind::Object => "struct",
            FieldKind::TextList => "[]string",
            FieldKind::IntegerList => "[]int",
            FieldKind::RealList => "[]float",
            FieldKind::ObjectList => "[]struct",
            FieldKind::Unset => "unset",
        }
    }

    /// Whether min/max bound the number of elements rather than a value.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldKind::TextList | FieldKind::IntegerList | FieldKind::RealList | FieldKind::ObjectList
        )
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag_name())
    }
}

/// Allowed values of a field, homogeneous with the field's element kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices {
    Text(Vec<String>),
    Integer(Vec<i64>),
    Real(Vec<f64>),
}

impl Choices {
    /// Parses the value of a `choices=` clause for a field of `kind`.
    ///
    /// Numeric pieces that do not parse are dropped. Returns `None` when no
    /// piece survives or the kind never carries choices.
    pub fn parse(kind: FieldKind, raw: &str, separator: &str) -> Option<Self> {
        let pieces = raw.split(separator);
        let choices = match kind {
            FieldKind::Text | FieldKind::TextList => Choices::Text(pieces.map(str::to_string).collect()),
            FieldKind::Integer | FieldKind::IntegerList => {
                Choices::Integer(pieces.filter_map(|p| p.parse().ok()).collect())
            }
            FieldKind::Real | FieldKind::RealList => {
                Choices::Real(pieces.filter_map(|p| p.parse().ok()).collect())
            }
            FieldKind::Boolean | FieldKind::Object | FieldKind::ObjectList | FieldKind::Unset => return None,
        };

        if choices.is_empty() {
            None
        } else {
            Some(choices)
        }
    }

    /// Number of declared choices
    pub fn len(&self) -> usize {
        match self {
            Choices::Text(values) => values.len(),
            Choices::Integer(values) => values.len(),
            Choices::Real(values) => values.len(),
        }
    }

    /// Whether no choice was declared
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = match self {
            Choices::Text(values) => values.clone(),
            Choices::Integer(values) => values.iter().map(i64::to_string).collect(),
            Choices::Real(values) => values.iter().map(|v| render_float(*v)).collect(),
        };
        write!(f, "{}", rendered.join(", "))
    }
}

/// A declared bound, or the measured size of a value checked against one.
///
/// Integer kinds and lengths stay integral so large values compare exactly;
/// only real fields carry fractional quantities.
#[derive(Debug, Clone, Copy)]
pub enum Quantity {
    Integer(i64),
    Real(f64),
}

impl Quantity {
    /// Quantity of a length, saturating at `i64::MAX`
    pub fn length(len: usize) -> Self {
        Quantity::Integer(i64::try_from(len).unwrap_or(i64::MAX))
    }

    fn as_f64(&self) -> f64 {
        match self {
            Quantity::Integer(i) => *i as f64,
            Quantity::Real(f) => *f,
        }
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Quantity::Integer(a), Quantity::Integer(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Integer(i) => write!(f, "{}", i),
            Quantity::Real(r) => write!(f, "{}", render_float(*r)),
        }
    }
}

/// Validation rules of one declared field.
///
/// Immutable once extracted; whether a field was seen during a validation
/// call is tracked by the caller, not here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSchema {
    /// Declared kind
    pub kind: FieldKind,
    /// Whether the field must appear in input
    pub required: bool,
    /// Lower bound: length for text and lists, value for numbers
    pub min: Option<Quantity>,
    /// Upper bound, same interpretation as `min`
    pub max: Option<Quantity>,
    /// Allowed values, if any were declared
    pub choices: Option<Choices>,
}

impl FieldSchema {
    /// Create a schema of the given kind with no constraints
    pub fn of(kind: FieldKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Parses a `min=`/`max=` value the way this field's kind reads bounds.
    ///
    /// Lengths and integer values are integral; only real fields accept a
    /// fractional bound. Booleans and objects take no bounds.
    pub fn parse_bound(&self, raw: &str) -> Option<Quantity> {
        match self.kind {
            FieldKind::Text
            | FieldKind::Integer
            | FieldKind::TextList
            | FieldKind::IntegerList
            | FieldKind::RealList
            | FieldKind::ObjectList => raw.parse().ok().map(Quantity::Integer),
            FieldKind::Real => raw.parse().ok().map(Quantity::Real),
            FieldKind::Boolean | FieldKind::Object | FieldKind::Unset => None,
        }
    }
}
