//! ISBN-10 / ISBN-13 checksum validator.
//!
//! The value is stripped of dashes and spaces, must then fully match the
//! version's digit-shape pattern, and finally must carry a valid check digit.

use regex::Regex;

use crate::patterns::IsbnVersion;
use crate::validators::text::strip_separators;

/// Returns `true` if `value` is an ISBN of the given version.
///
/// `shape` is the version's digit-shape matcher from the pattern table.
///
/// # Examples
///
/// ```
/// use textshape_validator::patterns::{IsbnVersion, PatternTable};
/// use textshape_validator::validators::isbn::is_isbn;
///
/// let table = PatternTable::default();
/// let shape = table.isbn(IsbnVersion::Isbn10);
/// assert!(is_isbn(IsbnVersion::Isbn10, "0-306-40615-2", shape));
/// assert!(!is_isbn(IsbnVersion::Isbn10, "0-306-40615-3", shape));
/// ```
pub fn is_isbn(version: IsbnVersion, value: &str, shape: &Regex) -> bool {
    let sanitized = strip_separators(value);
    if !shape.is_match(&sanitized) {
        return false;
    }

    let checksum_ok = match version {
        IsbnVersion::Isbn10 => isbn10_checksum(sanitized.as_bytes()),
        IsbnVersion::Isbn13 => isbn13_checksum(sanitized.as_bytes()),
    };
    checksum_ok.unwrap_or(false)
}

fn digit(byte: u8) -> Option<u32> {
    char::from(byte).to_digit(10)
}

/// Weights 1..=10 by position; the check position may be `X` (ten).
fn isbn10_checksum(bytes: &[u8]) -> Option<bool> {
    let (body, check) = match bytes {
        [body @ .., check] if body.len() == 9 => (body, *check),
        _ => return None,
    };

    let mut sum = 0;
    for (position, &byte) in body.iter().enumerate() {
        sum += (position as u32 + 1) * digit(byte)?;
    }
    let check = if check.eq_ignore_ascii_case(&b'X') {
        10
    } else {
        digit(check)?
    };
    sum += 10 * check;

    Some(sum % 11 == 0)
}

/// Alternating weights 1 and 3 over the first twelve digits.
fn isbn13_checksum(bytes: &[u8]) -> Option<bool> {
    let (body, check) = match bytes {
        [body @ .., check] if body.len() == 12 => (body, *check),
        _ => return None,
    };

    let mut sum = 0;
    for (position, &byte) in body.iter().enumerate() {
        let weight = if position % 2 == 0 { 1 } else { 3 };
        sum += weight * digit(byte)?;
    }
    let expected = (10 - sum % 10) % 10;

    Some(digit(check)? == expected)
}
