//! Error types
//!
//! Two kinds of failure exist in the engine:
//!
//! - [`ValidationError`]: a value did not have the expected shape. This is
//!   the normal "does not validate" outcome, reported through
//!   [`Validate`](crate::foundation::Validate) when a caller wants more than
//!   a `bool`.
//! - [`ConfigError`]: a predicate could not be constructed because the
//!   caller supplied a bad parameter (unknown phone locale, unparseable
//!   reference date, ...). These surface at construction time only.
//!
//! Codes and messages use `Cow<'static, str>` so the common case of static
//! codes does not allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured "value does not validate" report.
///
/// # Examples
///
/// ```
/// use textshape_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("exact_length", "Value failed exact_length")
///     .with_param("length", "5");
/// assert_eq!(error.param("length"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Validator code, e.g. `"is_email"` or `"exact_length"`.
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Construction parameters of the failing validator as ordered pairs.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the codes of all collected errors, in insertion order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// A predicate could not be built from the supplied parameters.
///
/// Returned by parameterized accessors such as
/// [`Configuration::is_phone`](crate::Configuration::is_phone) and
/// [`Configuration::is_after`](crate::Configuration::is_after). A predicate
/// that was built successfully never fails this way.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No phone pattern is registered for the locale.
    #[error("unknown phone locale `{0}`")]
    UnknownLocale(String),

    /// No ISBN pattern is registered for the version key.
    #[error("unknown ISBN version `{0}` (expected \"10\" or \"13\")")]
    UnknownIsbnVersion(String),

    /// The reference date for `is_before` / `is_after` does not match the
    /// configured date format.
    #[error("reference date `{value}` does not match date format `{format}`")]
    InvalidReferenceDate {
        /// The offending reference value.
        value: String,
        /// The configured date format pattern.
        format: String,
    },

    /// The date format pattern contains an unsupported field.
    #[error("invalid date format `{format}`: {reason}")]
    InvalidDateFormat {
        /// The offending date format pattern.
        format: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A pattern in the pattern table failed to compile.
    #[error("invalid pattern `{key}`")]
    InvalidPattern {
        /// The table key (validator name or locale).
        key: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// `predicate_for` was asked for a name it does not know.
    #[error("unknown validator `{0}`")]
    UnknownValidator(String),

    /// `predicate_for` was called without the argument the validator needs.
    #[error("validator `{validator}` requires an argument: {expected}")]
    MissingArgument {
        /// The validator name.
        validator: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
    },

    /// `predicate_for` received an argument it could not interpret.
    #[error("validator `{validator}` cannot use argument `{value}`")]
    InvalidArgument {
        /// The validator name.
        validator: &'static str,
        /// The rejected argument.
        value: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("is_email", "Value failed is_email");
        assert_eq!(error.code, "is_email");
        assert_eq!(error.message, "Value failed is_email");
        assert!(error.params.is_empty());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min_length", "Too short")
            .with_param("length", "5")
            .with_param("mode", "graphemes");

        assert_eq!(error.param("length"), Some("5"));
        assert_eq!(error.param("mode"), Some("graphemes"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display_with_params() {
        let error = ValidationError::new("is_phone", "Value failed is_phone")
            .with_param("locale", "en-GB");
        insta::assert_snapshot!(error.to_string(), @"is_phone: Value failed is_phone (params: [locale=en-GB])");
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.add(ValidationError::new("is_alpha", "First"));
        errors.add(ValidationError::new("is_int", "Second"));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.codes(), vec!["is_alpha", "is_int"]);
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "Value is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::InvalidReferenceDate {
            value: "2020-01-01".into(),
            format: "dd/MM/yyyy".into(),
        };
        insta::assert_snapshot!(
            error.to_string(),
            @"reference date `2020-01-01` does not match date format `dd/MM/yyyy`"
        );
        assert_eq!(
            ConfigError::UnknownLocale("xx-XX".into()).to_string(),
            "unknown phone locale `xx-XX`"
        );
    }
}
