//! Shared helpers for integration tests

use jsonform::ValidationError;

/// (field, message) pairs of `errors`, sorted for order-free comparison.
pub fn sorted(errors: Vec<ValidationError>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = errors
        .into_iter()
        .map(|e| (e.field().to_string(), e.message().to_string()))
        .collect();
    pairs.sort();
    pairs
}

/// Expected (field, message) pairs, sorted like [`sorted`].
pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = expected
        .iter()
        .map(|(f, m)| (f.to_string(), m.to_string()))
        .collect();
    pairs.sort();
    pairs
}
