//! String length measurement
//!
//! By default, length is measured in extended grapheme clusters, so a
//! combining sequence or an emoji with modifiers counts as one. The other
//! modes exist for callers that need code-point or byte limits.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count user-perceived characters.
    #[default]
    Graphemes,
    /// Count Unicode scalar values.
    Chars,
    /// Count UTF-8 bytes.
    Bytes,
}

impl LengthMode {
    /// Measures `input` according to this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::LengthMode;
    ///
    /// let accented = "e\u{301}"; // "é" as base letter plus combining accent
    /// assert_eq!(LengthMode::Graphemes.measure(accented), 1);
    /// assert_eq!(LengthMode::Chars.measure(accented), 2);
    /// assert_eq!(LengthMode::Bytes.measure(accented), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Graphemes => input.graphemes(true).count(),
            LengthMode::Chars => input.chars().count(),
            LengthMode::Bytes => input.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_is_the_same_in_every_mode() {
        for mode in [LengthMode::Graphemes, LengthMode::Chars, LengthMode::Bytes] {
            assert_eq!(mode.measure("hello"), 5);
            assert_eq!(mode.measure(""), 0);
        }
    }

    #[test]
    fn test_multibyte_scalar() {
        assert_eq!(LengthMode::Graphemes.measure("日本"), 2);
        assert_eq!(LengthMode::Chars.measure("日本"), 2);
        assert_eq!(LengthMode::Bytes.measure("日本"), 6);
    }

    #[test]
    fn test_emoji_sequence_is_one_grapheme() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
        assert_eq!(LengthMode::Graphemes.measure(family), 1);
        assert_eq!(LengthMode::Chars.measure(family), 5);
    }

    #[test]
    fn test_default_is_graphemes() {
        assert_eq!(LengthMode::default(), LengthMode::Graphemes);
    }
}
