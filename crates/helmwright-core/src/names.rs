//! Name casing helpers
//!
//! Generated task names embed domain-object keys with an uppercased first
//! character (`foo` -> `helmPackageFooChart`). The same rule applies to every
//! embedded key; captured keys are decapitalized symmetrically before
//! registry lookup.

/// Uppercase the first character of a name
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character of a captured key
pub fn decapitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
