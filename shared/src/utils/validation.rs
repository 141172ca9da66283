//! Common validation utilities

/// Check if a string carries a value (whitespace-only counts as missing)
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Names of the fields whose values are blank, in the order given.
///
/// ```
/// use prown_shared::validation::blank_fields;
///
/// let missing = blank_fields(&[("email", "a@x.com"), ("password", " ")]);
/// assert_eq!(missing, vec!["password"]);
/// ```
pub fn blank_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| !not_blank(value))
        .map(|(name, _)| *name)
        .collect()
}
