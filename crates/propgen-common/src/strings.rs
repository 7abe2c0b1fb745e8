//! Identifier helpers shared by the extractor and the class-name resolvers.
//!
//! Case conversion only ever touches the first character: `uncapitalize("URL")`
//! is `"uRL"`, matching how accessor names map back onto property names.

/// Upper-case the first character of `value`, leaving the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character of `value`, leaving the rest untouched.
pub fn uncapitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A fully qualified type name split at its last `.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    /// Everything before the last dot; empty for the default package.
    pub package: &'a str,
    /// The simple (unqualified) name.
    pub simple_name: &'a str,
}

/// Split a fully qualified name into package and simple name.
///
/// Returns `None` for an empty name. A name without dots lives in the
/// default package, so its package part is the empty string.
pub fn split_qualified_name(value: &str) -> Option<QualifiedName<'_>> {
    if value.is_empty() {
        return None;
    }
    match value.rfind('.') {
        Some(dot) => Some(QualifiedName {
            package: &value[..dot],
            simple_name: &value[dot + 1..],
        }),
        None => Some(QualifiedName {
            package: "",
            simple_name: value,
        }),
    }
}

#[cfg(test)]
#[path = "../tests/strings_tests.rs"]
mod tests;
