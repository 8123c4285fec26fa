//! Scalar coercers
//!
//! Each coercer interprets an arbitrary decoded value as one scalar kind,
//! accepting the equivalent representations of that kind. Failure is `None`,
//! never a panic; the caller turns it into an InvalidFormat error.

use serde_json::{Number, Value};

/// Largest magnitude rendered in plain integral notation.
const PLAIN_INTEGRAL_LIMIT: f64 = 1e21;

/// Text: native text as-is, numbers and booleans by their canonical rendering.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(render_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integer: base-10 text, integral numbers inside the i64 range.
pub fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Some(i);
            }
            if n.is_u64() {
                return None;
            }
            n.as_f64().and_then(integral)
        }
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Real: float text and any number.
pub fn coerce_real(value: &Value) -> Option<f64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_f64(),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Boolean: native booleans, text and numbers rendering as a boolean literal.
pub fn coerce_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_bool_literal(s),
        Value::Number(n) => parse_bool_literal(&render_number(n)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Recognized boolean literals.
fn parse_bool_literal(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is out of range.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Canonical text of a real: integral values without a fractional part,
/// everything else in shortest round-trip form.
pub fn render_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < PLAIN_INTEGRAL_LIMIT {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Canonical text of a decoded number.
pub fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(render_float).unwrap_or_else(|| n.to_string())
    }
}

/// Text of a raw value as interpolated into messages: strings bare, numbers
/// canonical, anything else as compact JSON.
pub fn render_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => render_number(n),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_text_coercion() {
        assert_eq!(coerce_text(&json!("Daniel")), Some("Daniel".into()));
        assert_eq!(coerce_text(&json!(123)), Some("123".into()));
        assert_eq!(coerce_text(&json!(12.3)), Some("12.3".into()));
        assert_eq!(coerce_text(&json!(12.0)), Some("12".into()));
        assert_eq!(coerce_text(&json!(true)), Some("true".into()));
        assert_eq!(coerce_text(&json!(null)), None);
        assert_eq!(coerce_text(&json!([])), None);
        assert_eq!(coerce_text(&json!({})), None);
    }

    #[test]
    fn test_integer_coercion() {
        assert_eq!(coerce_integer(&json!(123)), Some(123));
        assert_eq!(coerce_integer(&json!(-7)), Some(-7));
        assert_eq!(coerce_integer(&json!("123")), Some(123));
        assert_eq!(coerce_integer(&json!(12.0)), Some(12));
        assert_eq!(coerce_integer(&json!(12.5)), None);
        assert_eq!(coerce_integer(&json!("12.0")), None);
        assert_eq!(coerce_integer(&json!("Daniel")), None);
        assert_eq!(coerce_integer(&json!(true)), None);
        assert_eq!(coerce_integer(&json!(u64::MAX)), None);
        assert_eq!(coerce_integer(&json!(1e300)), None);
    }

    #[test]
    fn test_real_coercion() {
        assert_eq!(coerce_real(&json!(12.3)), Some(12.3));
        assert_eq!(coerce_real(&json!(123)), Some(123.0));
        assert_eq!(coerce_real(&json!("12.3")), Some(12.3));
        assert_eq!(coerce_real(&json!("Daniel")), None);
        assert_eq!(coerce_real(&json!(false)), None);
        assert_eq!(coerce_real(&json!(null)), None);
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(coerce_boolean(&json!(true)), Some(true));
        assert_eq!(coerce_boolean(&json!("true")), Some(true));
        assert_eq!(coerce_boolean(&json!("False")), Some(false));
        assert_eq!(coerce_boolean(&json!(1)), Some(true));
        assert_eq!(coerce_boolean(&json!(1.0)), Some(true));
        assert_eq!(coerce_boolean(&json!(0)), Some(false));
        assert_eq!(coerce_boolean(&json!(123)), None);
        assert_eq!(coerce_boolean(&json!("yes")), None);
        assert_eq!(coerce_boolean(&json!([true])), None);
    }

    #[test]
    fn test_render_float() {
        assert_eq!(render_float(1.0), "1");
        assert_eq!(render_float(101.0), "101");
        assert_eq!(render_float(12.3), "12.3");
        assert_eq!(render_float(-0.5), "-0.5");
        assert_eq!(render_float(1e21), "1000000000000000000000");
    }

    #[test]
    fn test_render_raw() {
        assert_eq!(render_raw(&json!("Daniel")), "Daniel");
        assert_eq!(render_raw(&json!(123)), "123");
        assert_eq!(render_raw(&json!({})), "{}");
        assert_eq!(render_raw(&json!([1, "a"])), "[1,\"a\"]");
        assert_eq!(render_raw(&json!(null)), "null");
    }

    proptest! {
        #[test]
        fn prop_integer_representations_agree(i in any::<i64>()) {
            prop_assert_eq!(coerce_integer(&json!(i)), Some(i));
            prop_assert_eq!(coerce_integer(&json!(i.to_string())), Some(i));
        }

        #[test]
        fn prop_integral_reals_coerce_to_integers(i in -(1i64 << 52)..(1i64 << 52)) {
            prop_assert_eq!(coerce_integer(&json!(i as f64)), Some(i));
        }

        #[test]
        fn prop_real_representations_agree(f in -1e15f64..1e15f64) {
            let from_text = coerce_real(&json!(f.to_string()));
            prop_assert_eq!(coerce_real(&json!(f)), Some(f));
            prop_assert_eq!(from_text, Some(f));
        }

        #[test]
        fn prop_number_text_round_trips(i in any::<i64>()) {
            let text = coerce_text(&json!(i)).unwrap();
            prop_assert_eq!(coerce_integer(&json!(text)), Some(i));
        }
    }
}
