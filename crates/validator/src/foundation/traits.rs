//! Core traits for the validation system

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// A check that reports *why* a value failed.
///
/// Every [`Predicate`](crate::Predicate) implements this trait, so a predicate
/// obtained from a [`Configuration`](crate::Configuration) can be used either
/// as a plain `bool` test or through `validate` for a structured error.
///
/// # Examples
///
/// ```
/// use textshape_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "Value must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate("abc").is_ok());
/// assert!(NoSpaces.validate("a b").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` if `validate` succeeds.
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
