//! Name casing helpers
//!
//! Declared field names are written the way a struct author would spell them
//! (`PersonList`), while decoded JSON keys use lowerCamel (`personList`).

/// Lowercases the first character of every space-separated word.
///
/// The rest of each word is left untouched, so `PreviousCodes` becomes
/// `previousCodes` and an already lowerCamel name maps to itself.
pub fn lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (i, word) in name.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
