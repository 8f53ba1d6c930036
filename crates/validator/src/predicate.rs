//! Predicate values
//!
//! A [`Predicate`] is what every [`Configuration`](crate::Configuration)
//! accessor returns: a named, immutable `&str -> bool` function that is
//! cheap to clone and safe to call from any thread.
//!
//! # Empty-string gate
//!
//! [`Predicate::gated`] wraps a check so that the empty string never reaches
//! it. Instead the outcome is decided by the [`ValidationMode`]: `Default`
//! accepts the empty string, `Strict` rejects it. Only `is_empty` and
//! `required` are built without the gate.
//!
//! # Composition
//!
//! ```
//! use textshape_validator::{Configuration, ValidationMode};
//!
//! let config = Configuration::new(ValidationMode::Strict);
//! let username = config.is_alphanumeric().and(config.min_length(3));
//! let not_numeric = config.is_numeric().not();
//!
//! assert!(username.check("alice42"));
//! assert!(!username.check("al"));
//! assert!(not_numeric.check("abc"));
//! assert!(!not_numeric.check("123"));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::config::ValidationMode;
use crate::foundation::{Validate, ValidationError};

type CheckFn = dyn Fn(&str) -> bool + Send + Sync;

#[derive(Clone)]
enum Check {
    Leaf(Arc<CheckFn>),
    And(Arc<Predicate>, Arc<Predicate>),
    Or(Arc<Predicate>, Arc<Predicate>),
    Not(Arc<Predicate>),
}

/// A named, reusable string check.
///
/// Calling [`check`](Self::check) never mutates anything, so one predicate
/// can serve any number of threads concurrently.
#[derive(Clone)]
pub struct Predicate {
    name: &'static str,
    params: Vec<(&'static str, String)>,
    check: Check,
}

impl Predicate {
    /// Builds a predicate from a bare check, without the empty-string gate.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::Predicate;
    ///
    /// let even = Predicate::new("even_length", |value| value.len() % 2 == 0);
    /// assert!(even.check(""));
    /// assert!(even.check("ab"));
    /// assert!(!even.check("abc"));
    /// ```
    pub fn new<F>(name: &'static str, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name,
            params: Vec::new(),
            check: Check::Leaf(Arc::new(check)),
        }
    }

    /// Builds a predicate whose check only sees non-empty values; the empty
    /// string is decided by `mode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::{Predicate, ValidationMode};
    ///
    /// let lenient = Predicate::gated("digits", ValidationMode::Default, |v| v.bytes().all(|b| b.is_ascii_digit()));
    /// let strict = Predicate::gated("digits", ValidationMode::Strict, |v| v.bytes().all(|b| b.is_ascii_digit()));
    ///
    /// assert!(lenient.check(""));
    /// assert!(!strict.check(""));
    /// assert!(strict.check("42"));
    /// ```
    pub fn gated<F>(name: &'static str, mode: ValidationMode, check: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let on_empty = mode.accepts_empty();
        Self::new(name, move |value| {
            if value.is_empty() {
                on_empty
            } else {
                check(value)
            }
        })
    }

    /// Records a construction parameter, reported by [`Validate`] failures
    /// and by `Debug`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: &'static str, value: impl fmt::Display) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// Applies the predicate to `value`.
    #[must_use]
    pub fn check(&self, value: &str) -> bool {
        match &self.check {
            Check::Leaf(check) => check(value),
            Check::And(left, right) => left.check(value) && right.check(value),
            Check::Or(left, right) => left.check(value) || right.check(value),
            Check::Not(inner) => !inner.check(value),
        }
    }

    /// The validator name, e.g. `"is_email"`. Composites are named `"and"`,
    /// `"or"` and `"not"`.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Construction parameters in the order they were recorded.
    pub fn params(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.params.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Both predicates must pass.
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Self::composite("and", Check::And(Arc::new(self), Arc::new(other)))
    }

    /// At least one predicate must pass.
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        Self::composite("or", Check::Or(Arc::new(self), Arc::new(other)))
    }

    /// Inverts the predicate.
    ///
    /// The inner predicate's gate is inverted too, so `is_email().not()` in
    /// `Default` mode rejects the empty string.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        Self::composite("not", Check::Not(Arc::new(self)))
    }

    /// Converts into a plain closure.
    pub fn into_fn(self) -> impl Fn(&str) -> bool + Send + Sync + 'static {
        move |value: &str| self.check(value)
    }

    fn composite(name: &'static str, check: Check) -> Self {
        Self {
            name,
            params: Vec::new(),
            check,
        }
    }

    fn failure(&self) -> ValidationError {
        let mut error = ValidationError::new(self.name, format!("Value failed {}", self.name));
        for (key, value) in &self.params {
            error = error.with_param(*key, Cow::Owned(value.clone()));
        }
        error
    }
}

impl Validate for Predicate {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        match &self.check {
            Check::Leaf(check) => {
                if check(input) {
                    Ok(())
                } else {
                    Err(self.failure())
                }
            }
            Check::And(left, right) => {
                left.validate(input)?;
                right.validate(input)
            }
            Check::Or(left, right) => {
                if left.check(input) {
                    return Ok(());
                }
                right.validate(input).map_err(|_| {
                    ValidationError::new(
                        "or",
                        format!("Value failed both {} and {}", left.name, right.name),
                    )
                })
            }
            Check::Not(inner) => {
                if inner.check(input) {
                    Err(ValidationError::new(
                        "not",
                        format!("Value must not pass {}", inner.name),
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    fn is_valid(&self, input: &str) -> bool {
        self.check(input)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.check {
            Check::Leaf(_) => {
                let mut tuple = f.debug_tuple(self.name);
                for (key, value) in &self.params {
                    tuple.field(&format_args!("{key}={value:?}"));
                }
                tuple.finish()
            }
            Check::And(left, right) | Check::Or(left, right) => f
                .debug_tuple(self.name)
                .field(left)
                .field(right)
                .finish(),
            Check::Not(inner) => f.debug_tuple(self.name).field(inner).finish(),
        }
    }
}
