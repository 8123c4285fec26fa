//! Field paths
//!
//! Root fields are bare (`name`), nested fields are dotted (`person.name`),
//! list elements are indexed from zero (`owners[1]`, `people[0].name`).

/// Joins a field name onto its parent path.
pub fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", parent, field)
    }
}

/// Path of the element at `index` of the list at `path`.
pub fn index_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}
