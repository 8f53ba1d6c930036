//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`ConfigError`]
//!
//! The rest of the crate is built on these: every
//! [`Predicate`](crate::Predicate) is a `Validate<Input = str>`, and every
//! fallible accessor on [`Configuration`](crate::Configuration) returns
//! `Result<_, ConfigError>`.

pub mod error;
pub mod traits;

pub use error::{ConfigError, ValidationError, ValidationErrors};
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with multiple validators; all must pass.
///
/// Every validator runs, so the error collection lists each failure.
///
/// # Examples
///
/// ```
/// use textshape_validator::foundation::validate_with_all;
/// use textshape_validator::Configuration;
/// use textshape_validator::ValidationMode;
///
/// let config = Configuration::new(ValidationMode::Strict);
/// let checks = [config.is_alpha(), config.min_length(3)];
/// assert!(validate_with_all("hello", &checks).is_ok());
///
/// let errors = validate_with_all("h1", &checks).unwrap_err();
/// assert_eq!(errors.codes(), vec!["is_alpha", "min_length"]);
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[V]) -> Result<(), ValidationErrors>
where
    V: Validate,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// Validates a value with multiple validators; at least one must pass.
///
/// Stops at the first success. An empty validator list fails with an empty
/// error collection.
pub fn validate_with_any<V>(value: &V::Input, validators: &[V]) -> Result<(), ValidationErrors>
where
    V: Validate,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
