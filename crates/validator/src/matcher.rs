//! Regex predicate builder
//!
//! Every simple-format validator reduces to "does the *whole* value match
//! this pattern". Patterns are stored unanchored in the pattern table and
//! anchored here, so a table entry never has to remember `^...$`.
//!
//! Compiled patterns are memoized per pattern text for the life of the
//! process. The memo is a pure cache: compiling the same text twice yields
//! a matcher with identical behavior.

use std::sync::LazyLock;

use dashmap::DashMap;
use regex::Regex;

static COMPILED: LazyLock<DashMap<String, Regex>> = LazyLock::new(DashMap::new);

/// Wraps `pattern` so that it only matches the entire input.
#[must_use]
pub fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

/// Compiles `pattern` as a full-string matcher, reusing an earlier
/// compilation of the same text when available.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(regex) = COMPILED.get(pattern) {
        return Ok(regex.clone());
    }

    tracing::trace!(pattern, "compiling pattern");
    let regex = Regex::new(&anchor(pattern))?;
    COMPILED.insert(pattern.to_owned(), regex.clone());
    Ok(regex)
}

/// Returns `true` iff the entire `value` matches `pattern`.
///
/// # Examples
///
/// ```
/// use textshape_validator::matcher::matches;
///
/// assert!(matches("[0-9]+", "123").unwrap());
/// assert!(!matches("[0-9]+", "a123").unwrap()); // not a substring search
/// ```
pub fn matches(pattern: &str, value: &str) -> Result<bool, regex::Error> {
    Ok(compile(pattern)?.is_match(value))
}

/// Number of distinct pattern texts compiled so far.
#[must_use]
pub fn compiled_count() -> usize {
    COMPILED.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_string_only() {
        assert!(matches("[a-z]+", "abc").unwrap());
        assert!(!matches("[a-z]+", "abc1").unwrap());
        assert!(!matches("[a-z]+", "1abc").unwrap());
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        // Without the group, `^a|b$` would accept "ax".
        assert!(!matches("a|b", "ax").unwrap());
        assert!(!matches("a|b", "xb").unwrap());
        assert!(matches("a|b", "b").unwrap());
    }

    #[test]
    fn test_trailing_newline_is_not_ignored() {
        assert!(!matches("[0-9]+", "12\n").unwrap());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches("(unclosed", "x").is_err());
    }

    #[test]
    fn test_memoized_results_are_identical() {
        let first = compile("[0-9]{3}-memo").unwrap();
        let second = compile("[0-9]{3}-memo").unwrap();

        assert_eq!(first.as_str(), second.as_str());
        assert!(compiled_count() >= 1);
        for value in ["123-memo", "12-memo", "", "abc"] {
            assert_eq!(first.is_match(value), second.is_match(value));
        }
    }
}
