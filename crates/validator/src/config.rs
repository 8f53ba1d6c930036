//! Validator configuration
//!
//! A [`Configuration`] is the predicate factory. It holds the
//! [`ValidationMode`], the [`DateFormat`] and a [`PatternTable`], and every
//! accessor closes the requested check over those fields and its own
//! parameters. Nothing in a configuration changes after construction, so
//! predicates built from it stay valid and consistent for their whole life.
//!
//! Accessors with a parameter that can be wrong (phone locale, ISBN version,
//! reference date) return `Result<Predicate, ConfigError>` and fail here,
//! never later inside the predicate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::date::{DEFAULT_DATE_FORMAT, DateFormat};
use crate::foundation::ConfigError;
use crate::patterns::{IsbnVersion, PatternName, PatternTable};
use crate::predicate::Predicate;
use crate::validators::fqdn::{self, FqdnOptions};
use crate::validators::length::LengthMode;
use crate::validators::{ipv6, isbn, text, uuid};

// ============================================================================
// MODE
// ============================================================================

/// How the empty string is treated by every validator except `is_empty`
/// and `required`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// The empty string passes.
    #[default]
    Default,
    /// The empty string fails.
    Strict,
}

impl ValidationMode {
    /// Outcome of a gated predicate for the empty string.
    #[must_use]
    pub const fn accepts_empty(self) -> bool {
        matches!(self, ValidationMode::Default)
    }
}

// ============================================================================
// SETTINGS
// ============================================================================

/// Serializable configuration input.
///
/// Missing fields take their defaults, so `{}` is a valid document.
///
/// # Examples
///
/// ```
/// use textshape_validator::{Configuration, Settings, ValidationMode};
///
/// let settings = Settings {
///     mode: ValidationMode::Strict,
///     date_format: "yyyy-MM-dd".into(),
/// };
/// let config = Configuration::from_settings(&settings).unwrap();
/// assert!(config.is_date().check("2024-01-31"));
/// assert!(!config.is_date().check(""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Empty-string policy.
    pub mode: ValidationMode,
    /// Date-field pattern, see [`crate::date`].
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Default,
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// The predicate factory.
///
/// # Examples
///
/// ```
/// use textshape_validator::{Configuration, ValidationMode};
///
/// let config = Configuration::new(ValidationMode::Default);
/// let email = config.is_email();
///
/// assert!(email.check("user@example.com"));
/// assert!(!email.check("not an email"));
/// assert!(email.check("")); // Default mode accepts the empty string
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    mode: ValidationMode,
    date_format: DateFormat,
    patterns: PatternTable,
}

impl Configuration {
    /// A configuration with the default date format and built-in patterns.
    #[must_use]
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            date_format: DateFormat::default(),
            patterns: PatternTable::default(),
        }
    }

    /// A configuration with an explicit date-field pattern.
    pub fn with_date_format(mode: ValidationMode, date_format: &str) -> Result<Self, ConfigError> {
        let date_format = DateFormat::new(date_format).map_err(|e| failed("date_format", e))?;
        Ok(Self {
            mode,
            date_format,
            patterns: PatternTable::default(),
        })
    }

    /// A configuration with a substitute pattern table.
    #[must_use]
    pub fn with_patterns(mode: ValidationMode, date_format: DateFormat, patterns: PatternTable) -> Self {
        Self {
            mode,
            date_format,
            patterns,
        }
    }

    /// Builds a configuration from deserialized [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        Self::with_date_format(settings.mode, &settings.date_format)
    }

    /// The empty-string policy.
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// The date format used by `is_date`, `is_before` and `is_after`.
    #[must_use]
    pub fn date_format(&self) -> &DateFormat {
        &self.date_format
    }

    /// The pattern table.
    #[must_use]
    pub fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    fn gated<F>(&self, name: &'static str, check: F) -> Predicate
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Predicate::gated(name, self.mode, check)
    }

    fn pattern(&self, name: &'static str, pattern: PatternName) -> Predicate {
        let regex = self.patterns.named(pattern).clone();
        self.gated(name, move |value| regex.is_match(value))
    }

    // ------------------------------------------------------------------------
    // Emptiness
    // ------------------------------------------------------------------------

    /// Passes only the empty string, in every mode.
    #[must_use]
    pub fn is_empty(&self) -> Predicate {
        Predicate::new("is_empty", str::is_empty)
    }

    /// Passes any non-empty string, in every mode.
    #[must_use]
    pub fn required(&self) -> Predicate {
        Predicate::new("required", |value: &str| !value.is_empty())
    }

    // ------------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------------

    /// The value contains `seed` as a substring.
    #[must_use]
    pub fn contains(&self, seed: impl Into<String>) -> Predicate {
        let seed = seed.into();
        let param = seed.clone();
        self.gated("contains", move |value| value.contains(seed.as_str()))
            .with_param("seed", param)
    }

    /// The value equals `comparison` exactly.
    #[must_use]
    pub fn equals(&self, comparison: impl Into<String>) -> Predicate {
        let comparison = comparison.into();
        let param = comparison.clone();
        self.gated("equals", move |value| value == comparison)
            .with_param("comparison", param)
    }

    /// The value is one of `allow_list`.
    ///
    /// ```
    /// use textshape_validator::{Configuration, ValidationMode};
    ///
    /// let color = Configuration::new(ValidationMode::Strict).is_in(["red", "green"]);
    /// assert!(color.check("green"));
    /// assert!(!color.check("Green"));
    /// ```
    #[must_use]
    pub fn is_in<I, S>(&self, allow_list: I) -> Predicate
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: HashSet<String> = allow_list.into_iter().map(Into::into).collect();
        let mut shown: Vec<&str> = allowed.iter().map(String::as_str).collect();
        shown.sort_unstable();
        let param = shown.join(",");

        self.gated("is_in", move |value| allowed.contains(value))
            .with_param("allow_list", param)
    }

    // ------------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------------

    /// Exactly `length` user-perceived characters.
    #[must_use]
    pub fn exact_length(&self, length: usize) -> Predicate {
        self.exact_length_with(length, LengthMode::Graphemes)
    }

    /// Exactly `length` units under `mode`.
    #[must_use]
    pub fn exact_length_with(&self, length: usize, mode: LengthMode) -> Predicate {
        self.gated("exact_length", move |value| mode.measure(value) == length)
            .with_param("length", length)
    }

    /// At least `min` user-perceived characters.
    #[must_use]
    pub fn min_length(&self, min: usize) -> Predicate {
        self.min_length_with(min, LengthMode::Graphemes)
    }

    /// At least `min` units under `mode`.
    #[must_use]
    pub fn min_length_with(&self, min: usize, mode: LengthMode) -> Predicate {
        self.gated("min_length", move |value| mode.measure(value) >= min)
            .with_param("min", min)
    }

    /// At most `max` user-perceived characters.
    #[must_use]
    pub fn max_length(&self, max: usize) -> Predicate {
        self.max_length_with(max, LengthMode::Graphemes)
    }

    /// At most `max` units under `mode`.
    #[must_use]
    pub fn max_length_with(&self, max: usize, mode: LengthMode) -> Predicate {
        self.gated("max_length", move |value| mode.measure(value) <= max)
            .with_param("max", max)
    }

    // ------------------------------------------------------------------------
    // Simple formats
    // ------------------------------------------------------------------------

    /// 7-bit ASCII only.
    #[must_use]
    pub fn is_ascii(&self) -> Predicate {
        self.pattern("is_ascii", PatternName::Ascii)
    }

    /// ASCII letters only.
    #[must_use]
    pub fn is_alpha(&self) -> Predicate {
        self.pattern("is_alpha", PatternName::Alpha)
    }

    /// ASCII letters and digits only.
    #[must_use]
    pub fn is_alphanumeric(&self) -> Predicate {
        self.pattern("is_alphanumeric", PatternName::Alphanumeric)
    }

    /// Padded base64.
    #[must_use]
    pub fn is_base64(&self) -> Predicate {
        self.pattern("is_base64", PatternName::Base64)
    }

    #[must_use]
    pub fn is_email(&self) -> Predicate {
        self.pattern("is_email", PatternName::Email)
    }

    /// Optionally signed decimal, optional fraction and exponent.
    #[must_use]
    pub fn is_float(&self) -> Predicate {
        self.pattern("is_float", PatternName::Float)
    }

    /// Optionally signed integer.
    #[must_use]
    pub fn is_numeric(&self) -> Predicate {
        self.pattern("is_numeric", PatternName::Numeric)
    }

    /// Same test as [`is_numeric`](Self::is_numeric).
    #[must_use]
    pub fn is_int(&self) -> Predicate {
        self.pattern("is_int", PatternName::Numeric)
    }

    /// Hex digits in either case.
    #[must_use]
    pub fn is_hexadecimal(&self) -> Predicate {
        let regex = self.patterns.named(PatternName::Hexadecimal).clone();
        self.gated("is_hexadecimal", move |value| {
            regex.is_match(&value.to_uppercase())
        })
    }

    /// `#abc`, `#aabbcc`, with or without the `#`, either case.
    #[must_use]
    pub fn is_hex_color(&self) -> Predicate {
        let regex = self.patterns.named(PatternName::HexColor).clone();
        self.gated("is_hex_color", move |value| {
            regex.is_match(&value.to_uppercase())
        })
    }

    /// Card number of a known issuer, dashes and spaces ignored.
    #[must_use]
    pub fn is_credit_card(&self) -> Predicate {
        let regex = self.patterns.named(PatternName::CreditCard).clone();
        self.gated("is_credit_card", move |value| {
            regex.is_match(&text::strip_separators(value))
        })
    }

    /// 24 hex digits, counted in user-perceived characters before the
    /// value is upper-cased.
    #[must_use]
    pub fn is_mongo_id(&self) -> Predicate {
        let regex = self.patterns.named(PatternName::Hexadecimal).clone();
        self.gated("is_mongo_id", move |value| {
            regex.is_match(&value.to_uppercase()) && LengthMode::Graphemes.measure(value) == 24
        })
    }

    // ------------------------------------------------------------------------
    // Case and literals
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn is_lowercase(&self) -> Predicate {
        self.gated("is_lowercase", text::is_lowercase)
    }

    #[must_use]
    pub fn is_uppercase(&self) -> Predicate {
        self.gated("is_uppercase", text::is_uppercase)
    }

    /// `"true"`, any ASCII case.
    #[must_use]
    pub fn is_true(&self) -> Predicate {
        self.gated("is_true", text::is_true)
    }

    /// `"false"`, any ASCII case.
    #[must_use]
    pub fn is_false(&self) -> Predicate {
        self.gated("is_false", text::is_false)
    }

    /// `"true"` or `"false"`, any ASCII case.
    #[must_use]
    pub fn is_bool(&self) -> Predicate {
        self.gated("is_bool", |value| text::is_true(value) || text::is_false(value))
    }

    /// Hyphenated UUID.
    #[must_use]
    pub fn is_uuid(&self) -> Predicate {
        self.gated("is_uuid", uuid::is_uuid)
    }

    // ------------------------------------------------------------------------
    // Network
    // ------------------------------------------------------------------------

    /// Dotted-quad IPv4 address.
    #[must_use]
    pub fn is_ipv4(&self) -> Predicate {
        self.pattern("is_ipv4", PatternName::Ipv4)
    }

    /// IPv6 address, see [`ipv6::is_ipv6`].
    #[must_use]
    pub fn is_ipv6(&self) -> Predicate {
        let v4 = self.patterns.named(PatternName::Ipv4).clone();
        let block = self.patterns.named(PatternName::Ipv6Block).clone();
        self.gated("is_ipv6", move |value| ipv6::is_ipv6(value, &v4, &block))
    }

    /// IPv4 or IPv6 address.
    #[must_use]
    pub fn is_ip(&self) -> Predicate {
        let v4 = self.patterns.named(PatternName::Ipv4).clone();
        let block = self.patterns.named(PatternName::Ipv6Block).clone();
        self.gated("is_ip", move |value| {
            v4.is_match(value) || ipv6::is_ipv6(value, &v4, &block)
        })
    }

    /// Domain name under `options`.
    #[must_use]
    pub fn is_fqdn(&self, options: FqdnOptions) -> Predicate {
        self.gated("is_fqdn", move |value| fqdn::is_fqdn(value, &options))
            .with_param("require_tld", options.require_tld)
            .with_param("allow_underscores", options.allow_underscores)
            .with_param("allow_trailing_dot", options.allow_trailing_dot)
    }

    // ------------------------------------------------------------------------
    // Keyed tables
    // ------------------------------------------------------------------------

    /// Mobile number for `locale` (`"en-US"`, `"fr-FR"`, ...).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownLocale`] if the pattern table has no such locale.
    pub fn is_phone(&self, locale: &str) -> Result<Predicate, ConfigError> {
        let regex = self
            .patterns
            .phone(locale)
            .map_err(|e| failed("is_phone", e))?
            .clone();
        tracing::debug!(validator = "is_phone", locale, "predicate constructed");
        Ok(self
            .gated("is_phone", move |value| regex.is_match(value))
            .with_param("locale", locale))
    }

    /// ISBN of `version` (`"10"` or `"13"`).
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownIsbnVersion`] for any other version key.
    pub fn is_isbn(&self, version: &str) -> Result<Predicate, ConfigError> {
        let version: IsbnVersion = version.parse().map_err(|e| failed("is_isbn", e))?;
        tracing::debug!(validator = "is_isbn", %version, "predicate constructed");
        Ok(self.isbn(version))
    }

    /// ISBN-10.
    #[must_use]
    pub fn is_isbn10(&self) -> Predicate {
        self.isbn(IsbnVersion::Isbn10)
    }

    /// ISBN-13.
    #[must_use]
    pub fn is_isbn13(&self) -> Predicate {
        self.isbn(IsbnVersion::Isbn13)
    }

    fn isbn(&self, version: IsbnVersion) -> Predicate {
        let shape = self.patterns.isbn(version).clone();
        self.gated("is_isbn", move |value| isbn::is_isbn(version, value, &shape))
            .with_param("version", version)
    }

    // ------------------------------------------------------------------------
    // Dates
    // ------------------------------------------------------------------------

    /// The value parses under the configured date format.
    #[must_use]
    pub fn is_date(&self) -> Predicate {
        let format = self.date_format.clone();
        self.gated("is_date", move |value| format.parse(value).is_some())
            .with_param("format", self.date_format.pattern())
    }

    /// The value is a date no later than `reference`. Equal dates pass.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidReferenceDate`] if `reference` does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::{Configuration, ValidationMode};
    ///
    /// let config = Configuration::new(ValidationMode::Strict);
    /// let before = config.is_before("01/06/2020").unwrap();
    /// assert!(before.check("31/05/2020"));
    /// assert!(before.check("01/06/2020"));
    /// assert!(!before.check("02/06/2020"));
    /// assert!(config.is_before("2020-06-01").is_err());
    /// ```
    pub fn is_before(&self, reference: &str) -> Result<Predicate, ConfigError> {
        let limit = self.reference_date("is_before", reference)?;
        let format = self.date_format.clone();
        Ok(self
            .gated("is_before", move |value| {
                format.parse(value).is_some_and(|instant| instant <= limit)
            })
            .with_param("reference", reference))
    }

    /// The value is a date no earlier than `reference`. Equal dates pass.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidReferenceDate`] if `reference` does not parse.
    pub fn is_after(&self, reference: &str) -> Result<Predicate, ConfigError> {
        let limit = self.reference_date("is_after", reference)?;
        let format = self.date_format.clone();
        Ok(self
            .gated("is_after", move |value| {
                format.parse(value).is_some_and(|instant| instant >= limit)
            })
            .with_param("reference", reference))
    }

    fn reference_date(
        &self,
        validator: &'static str,
        reference: &str,
    ) -> Result<crate::date::Instant, ConfigError> {
        let instant = self.date_format.parse(reference).ok_or_else(|| {
            failed(
                validator,
                ConfigError::InvalidReferenceDate {
                    value: reference.to_owned(),
                    format: self.date_format.pattern().to_owned(),
                },
            )
        })?;
        tracing::debug!(validator, reference, %instant, "predicate constructed");
        Ok(instant)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(ValidationMode::Default)
    }
}

/// Logs a construction failure and hands the error back.
pub(crate) fn failed(validator: &str, error: ConfigError) -> ConfigError {
    tracing::warn!(validator, %error, "predicate construction failed");
    error
}
