//! Small string checks that need no pattern table.

use std::borrow::Cow;

/// Removes every `-` and ` ` from `value`.
///
/// Borrows when there is nothing to remove.
#[must_use]
pub fn strip_separators(value: &str) -> Cow<'_, str> {
    if value.contains(['-', ' ']) {
        Cow::Owned(value.chars().filter(|c| !matches!(c, '-' | ' ')).collect())
    } else {
        Cow::Borrowed(value)
    }
}

/// `true` if lowercasing leaves `value` unchanged.
#[must_use]
pub fn is_lowercase(value: &str) -> bool {
    value.to_lowercase() == value
}

/// `true` if uppercasing leaves `value` unchanged.
#[must_use]
pub fn is_uppercase(value: &str) -> bool {
    value.to_uppercase() == value
}

/// `"true"` in any ASCII case.
#[must_use]
pub fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// `"false"` in any ASCII case.
#[must_use]
pub fn is_false(value: &str) -> bool {
    value.eq_ignore_ascii_case("false")
}
