//! UUID validator.

/// Length of the hyphenated form, `8-4-4-4-12`.
const HYPHENATED_LEN: usize = 36;

/// Returns `true` if `value` is a hyphenated UUID of any version.
///
/// Braced, URN and simple (no hyphens) forms are rejected.
///
/// # Examples
///
/// ```
/// use textshape_validator::validators::uuid::is_uuid;
///
/// assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
/// assert!(!is_uuid("550e8400e29b41d4a716446655440000"));
/// ```
#[must_use]
pub fn is_uuid(value: &str) -> bool {
    value.len() == HYPHENATED_LEN && ::uuid::Uuid::try_parse(value).is_ok()
}
