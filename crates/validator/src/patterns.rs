//! Pattern table
//!
//! The literal regular expressions behind the simple-format validators and
//! the keyed tables (phone by locale, IP block by version, ISBN by version).
//! Pattern text is data: the engine never inspects it beyond compiling it
//! with [`matcher::compile`](crate::matcher::compile).
//!
//! A [`PatternTable`] is the compiled, immutable form. Each
//! [`Configuration`](crate::Configuration) owns one; the built-in table is
//! shared, and [`PatternTable::builder`] produces substitutes for tests or
//! for hosts that need extra phone locales.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::foundation::ConfigError;
use crate::matcher;

// ============================================================================
// PATTERN TEXT
// ============================================================================

/// Email address.
pub const EMAIL: &str = r"[\w._%+-|]+@[\w0-9.-]+\.[A-Za-z]{2,6}";
/// ASCII letters.
pub const ALPHA: &str = r"[a-zA-Z]+";
/// Padded base64.
pub const BASE64: &str = r"(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?";
/// Visa, MasterCard, Discover, Amex, Diners Club and JCB numbers.
pub const CREDIT_CARD: &str = r"(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|6(?:011|5[0-9][0-9])[0-9]{12}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|(?:2131|1800|35\d{3})\d{11})";
/// Three or six digit hex color, upper case, optional `#`.
pub const HEX_COLOR: &str = r"#?([0-9A-F]{3}|[0-9A-F]{6})";
/// Upper case hexadecimal digits.
pub const HEXADECIMAL: &str = r"[0-9A-F]+";
/// 7-bit ASCII.
pub const ASCII: &str = r"[\x00-\x7F]+";
/// Optionally signed integer.
pub const NUMERIC: &str = r"[-+]?[0-9]+";
/// Float with optional sign, fraction and exponent.
pub const FLOAT: &str = r"([\+-]?\d+)?\.?\d*([eE][\+-]\d+)?";
/// Digits and ASCII letters.
pub const ALPHANUMERIC: &str = r"[\d[A-Za-z]]+";
/// Dotted-quad IPv4 address.
pub const IPV4: &str = r"(25[0-5]|2[0-4]\d|1\d{2}|\d{1,2})\.(25[0-5]|2[0-4]\d|1\d{2}|\d{1,2})\.(25[0-5]|2[0-4]\d|1\d{2}|\d{1,2})\.(25[0-5]|2[0-4]\d|1\d{2}|\d{1,2})";
/// A single 16-bit IPv6 block.
pub const IPV6_BLOCK: &str = r"[0-9A-Fa-f]{1,4}";

/// IP patterns keyed by version.
pub const IP_PATTERNS: &[(&str, &str)] = &[("4", IPV4), ("6", IPV6_BLOCK)];

/// ISBN digit-shape patterns keyed by version.
pub const ISBN_PATTERNS: &[(&str, &str)] =
    &[("10", r"(?:[0-9]{9}X|[0-9]{10})"), ("13", r"(?:[0-9]{13})")];

/// Mobile phone patterns keyed by locale.
pub const PHONE_PATTERNS: &[(&str, &str)] = &[
    ("zh-CN", r"(\+?0?86\-?)?1[345789]\d{9}"),
    ("en-ZA", r"(\+?27|0)\d{9}"),
    ("en-AU", r"(\+?61|0)4\d{8}"),
    ("en-HK", r"(\+?852\-?)?[569]\d{3}\-?\d{4}"),
    ("fr-FR", r"(\+?33|0)[67]\d{8}"),
    ("pt-PT", r"(\+351)?9[1236]\d{7}"),
    ("el-GR", r"(\+30)?((2\d{9})|(69\d{8}))"),
    ("en-GB", r"(\+?44|0)7\d{9}"),
    // Exchange code may not be N11.
    ("en-US", r"(\+?1)?[2-9]\d{2}[2-9](?:1[02-9]|[02-9]\d)\d{4}"),
    ("en-ZM", r"(\+26)?09[567]\d{7}"),
    ("ru-RU", r"(\+?7|8)?9\d{9}"),
];

// ============================================================================
// KEYS
// ============================================================================

/// Fixed-name entries of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatternName {
    /// See [`EMAIL`].
    Email,
    /// See [`ALPHA`].
    Alpha,
    /// See [`ALPHANUMERIC`].
    Alphanumeric,
    /// See [`BASE64`].
    Base64,
    /// See [`CREDIT_CARD`].
    CreditCard,
    /// See [`HEX_COLOR`].
    HexColor,
    /// See [`HEXADECIMAL`].
    Hexadecimal,
    /// See [`ASCII`].
    Ascii,
    /// See [`NUMERIC`].
    Numeric,
    /// See [`FLOAT`].
    Float,
    /// See [`IPV4`].
    Ipv4,
    /// See [`IPV6_BLOCK`].
    Ipv6Block,
}

impl PatternName {
    /// Every name, in table order.
    pub const ALL: [PatternName; 12] = [
        PatternName::Email,
        PatternName::Alpha,
        PatternName::Alphanumeric,
        PatternName::Base64,
        PatternName::CreditCard,
        PatternName::HexColor,
        PatternName::Hexadecimal,
        PatternName::Ascii,
        PatternName::Numeric,
        PatternName::Float,
        PatternName::Ipv4,
        PatternName::Ipv6Block,
    ];

    /// The built-in pattern text for this name.
    #[must_use]
    pub const fn default_pattern(self) -> &'static str {
        match self {
            PatternName::Email => EMAIL,
            PatternName::Alpha => ALPHA,
            PatternName::Alphanumeric => ALPHANUMERIC,
            PatternName::Base64 => BASE64,
            PatternName::CreditCard => CREDIT_CARD,
            PatternName::HexColor => HEX_COLOR,
            PatternName::Hexadecimal => HEXADECIMAL,
            PatternName::Ascii => ASCII,
            PatternName::Numeric => NUMERIC,
            PatternName::Float => FLOAT,
            PatternName::Ipv4 => IPV4,
            PatternName::Ipv6Block => IPV6_BLOCK,
        }
    }

    /// Stable lowercase key, used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PatternName::Email => "email",
            PatternName::Alpha => "alpha",
            PatternName::Alphanumeric => "alphanumeric",
            PatternName::Base64 => "base64",
            PatternName::CreditCard => "credit_card",
            PatternName::HexColor => "hex_color",
            PatternName::Hexadecimal => "hexadecimal",
            PatternName::Ascii => "ascii",
            PatternName::Numeric => "numeric",
            PatternName::Float => "float",
            PatternName::Ipv4 => "ipv4",
            PatternName::Ipv6Block => "ipv6_block",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// ISBN flavor. Parsed from the keys `"10"` and `"13"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IsbnVersion {
    /// ISBN-10, mod-11 weighted checksum.
    Isbn10,
    /// ISBN-13, alternating 1/3 weights.
    Isbn13,
}

impl IsbnVersion {
    /// The table key for this version.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            IsbnVersion::Isbn10 => "10",
            IsbnVersion::Isbn13 => "13",
        }
    }
}

impl FromStr for IsbnVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "10" => Ok(IsbnVersion::Isbn10),
            "13" => Ok(IsbnVersion::Isbn13),
            other => Err(ConfigError::UnknownIsbnVersion(other.to_owned())),
        }
    }
}

impl fmt::Display for IsbnVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// COMPILED TABLE
// ============================================================================

#[derive(Debug)]
struct Compiled {
    named: Vec<Regex>,
    phone: BTreeMap<String, Regex>,
    isbn10: Regex,
    isbn13: Regex,
}

/// An immutable, compiled pattern table.
///
/// Cloning is cheap; clones share the compiled matchers.
///
/// # Examples
///
/// ```
/// use textshape_validator::patterns::PatternTable;
///
/// let table = PatternTable::builder()
///     .phone("de-DE", r"(\+?49|0)1[5-7]\d{8,9}")
///     .build()
///     .unwrap();
///
/// assert!(table.phone("de-DE").is_ok());
/// assert!(table.phone("en-GB").is_ok()); // built-ins are kept
/// assert!(table.phone("xx-XX").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PatternTable {
    inner: Arc<Compiled>,
}

static BUILT_IN: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::builder()
        .build()
        .expect("built-in patterns must compile")
});

impl PatternTable {
    /// Starts a builder pre-populated with the built-in patterns.
    #[must_use]
    pub fn builder() -> PatternTableBuilder {
        PatternTableBuilder::new()
    }

    /// The compiled matcher for a fixed-name entry.
    #[must_use]
    pub fn named(&self, name: PatternName) -> &Regex {
        &self.inner.named[name.index()]
    }

    /// The compiled matcher for a phone locale.
    pub fn phone(&self, locale: &str) -> Result<&Regex, ConfigError> {
        self.inner
            .phone
            .get(locale)
            .ok_or_else(|| ConfigError::UnknownLocale(locale.to_owned()))
    }

    /// The compiled digit-shape matcher for an ISBN version.
    #[must_use]
    pub fn isbn(&self, version: IsbnVersion) -> &Regex {
        match version {
            IsbnVersion::Isbn10 => &self.inner.isbn10,
            IsbnVersion::Isbn13 => &self.inner.isbn13,
        }
    }

    /// Registered phone locales in sorted order.
    pub fn phone_locales(&self) -> impl Iterator<Item = &str> {
        self.inner.phone.keys().map(String::as_str)
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        BUILT_IN.clone()
    }
}

/// Builder for [`PatternTable`]. Starts from the built-in patterns.
#[derive(Debug, Clone)]
pub struct PatternTableBuilder {
    named: BTreeMap<PatternName, String>,
    phone: BTreeMap<String, String>,
    isbn: BTreeMap<IsbnVersion, String>,
}

impl PatternTableBuilder {
    fn new() -> Self {
        Self {
            named: PatternName::ALL
                .iter()
                .map(|name| (*name, name.default_pattern().to_owned()))
                .collect(),
            phone: PHONE_PATTERNS
                .iter()
                .map(|(locale, pattern)| ((*locale).to_owned(), (*pattern).to_owned()))
                .collect(),
            isbn: ISBN_PATTERNS
                .iter()
                .filter_map(|(key, pattern)| {
                    key.parse::<IsbnVersion>()
                        .ok()
                        .map(|version| (version, (*pattern).to_owned()))
                })
                .collect(),
        }
    }

    /// Replaces a fixed-name pattern.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(mut self, name: PatternName, pattern: impl Into<String>) -> Self {
        self.named.insert(name, pattern.into());
        self
    }

    /// Adds or replaces a phone locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn phone(mut self, locale: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.phone.insert(locale.into(), pattern.into());
        self
    }

    /// Removes a phone locale.
    #[must_use = "builder methods must be chained or built"]
    pub fn without_phone(mut self, locale: &str) -> Self {
        self.phone.remove(locale);
        self
    }

    /// Replaces the digit-shape pattern for an ISBN version.
    #[must_use = "builder methods must be chained or built"]
    pub fn isbn(mut self, version: IsbnVersion, pattern: impl Into<String>) -> Self {
        self.isbn.insert(version, pattern.into());
        self
    }

    /// Compiles every pattern. Fails on the first pattern that does not
    /// compile.
    pub fn build(self) -> Result<PatternTable, ConfigError> {
        let compile = |key: &str, pattern: &str| {
            matcher::compile(pattern).map_err(|source| ConfigError::InvalidPattern {
                key: key.to_owned(),
                source,
            })
        };

        // `named` always holds every PatternName; BTreeMap iteration follows
        // declaration order, which is the index order.
        let named = self
            .named
            .iter()
            .map(|(name, pattern)| compile(name.as_str(), pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let phone = self
            .phone
            .iter()
            .map(|(locale, pattern)| Ok((locale.clone(), compile(locale, pattern)?)))
            .collect::<Result<BTreeMap<_, _>, ConfigError>>()?;

        let isbn_pattern = |version: IsbnVersion| {
            let pattern = self
                .isbn
                .get(&version)
                .map_or(version_default(version), String::as_str);
            compile(version.key(), pattern)
        };

        Ok(PatternTable {
            inner: Arc::new(Compiled {
                named,
                phone,
                isbn10: isbn_pattern(IsbnVersion::Isbn10)?,
                isbn13: isbn_pattern(IsbnVersion::Isbn13)?,
            }),
        })
    }
}

fn version_default(version: IsbnVersion) -> &'static str {
    ISBN_PATTERNS
        .iter()
        .find(|(key, _)| *key == version.key())
        .map_or("", |(_, pattern)| pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_table_compiles() {
        let table = PatternTable::default();
        for name in PatternName::ALL {
            assert_eq!(
                table.named(name).as_str(),
                matcher::anchor(name.default_pattern())
            );
        }
        assert_eq!(table.phone_locales().count(), PHONE_PATTERNS.len());
    }

    #[test]
    fn test_every_phone_locale_has_a_sample() {
        let table = PatternTable::default();
        let samples = [
            ("zh-CN", "+8613800138000"),
            ("en-ZA", "0821234567"),
            ("en-AU", "0412345678"),
            ("en-HK", "91234567"),
            ("fr-FR", "0612345678"),
            ("pt-PT", "912345678"),
            ("el-GR", "6912345678"),
            ("en-GB", "07911123456"),
            ("en-US", "2125552368"),
            ("en-ZM", "0955123456"),
            ("ru-RU", "+79123456789"),
        ];
        for (locale, number) in samples {
            assert!(
                table.phone(locale).unwrap().is_match(number),
                "{locale} should accept {number}"
            );
        }
    }

    #[test]
    fn test_us_exchange_code_cannot_be_n11() {
        let table = PatternTable::default();
        let us = table.phone("en-US").unwrap();
        assert!(us.is_match("2125102368"));
        assert!(!us.is_match("2125112368"));
        assert!(us.is_match("2125212368"));
        assert!(us.is_match("+12125552368"));
    }

    #[test]
    fn test_unknown_locale() {
        let error = PatternTable::default().phone("xx-XX").unwrap_err();
        assert!(matches!(error, ConfigError::UnknownLocale(locale) if locale == "xx-XX"));
    }

    #[test]
    fn test_isbn_version_parse() {
        assert_eq!("10".parse::<IsbnVersion>().unwrap(), IsbnVersion::Isbn10);
        assert_eq!("13".parse::<IsbnVersion>().unwrap(), IsbnVersion::Isbn13);
        assert!(matches!(
            "11".parse::<IsbnVersion>(),
            Err(ConfigError::UnknownIsbnVersion(_))
        ));
    }

    #[test]
    fn test_builder_override_and_removal() {
        let table = PatternTable::builder()
            .pattern(PatternName::Alpha, "[a-z]+")
            .without_phone("ru-RU")
            .build()
            .unwrap();

        assert!(!table.named(PatternName::Alpha).is_match("ABC"));
        assert!(table.phone("ru-RU").is_err());
        assert!(table.phone("en-GB").is_ok());
    }

    #[test]
    fn test_builder_rejects_bad_pattern() {
        let error = PatternTable::builder()
            .phone("xx-XX", "(")
            .build()
            .unwrap_err();
        assert!(matches!(error, ConfigError::InvalidPattern { ref key, .. } if key == "xx-XX"));
    }
}
