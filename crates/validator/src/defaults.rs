//! Shared default configuration
//!
//! [`default_configuration`] is a process-wide [`Configuration`] in
//! [`ValidationMode::Default`] with the `dd/MM/yyyy` date format and the
//! built-in pattern table. The free functions in this module forward to it,
//! for call sites that do not need a configuration of their own.
//!
//! ```
//! use textshape_validator::defaults;
//!
//! assert!(defaults::is_email().check("user@example.com"));
//! assert!(defaults::is_email().check("")); // Default mode
//! assert!(defaults::is_phone("en-AU").unwrap().check("0412345678"));
//! ```

use std::sync::LazyLock;

use crate::config::{Configuration, ValidationMode};
use crate::foundation::ConfigError;
use crate::macros::delegate_to_default;
use crate::predicate::Predicate;
use crate::validators::fqdn::FqdnOptions;
use crate::validators::length::LengthMode;

static DEFAULT: LazyLock<Configuration> =
    LazyLock::new(|| Configuration::new(ValidationMode::Default));

/// The shared default configuration.
#[must_use]
pub fn default_configuration() -> &'static Configuration {
    &DEFAULT
}

delegate_to_default! {
    /// See [`Configuration::contains`].
    fn contains(seed: impl Into<String>) -> Predicate;
    /// See [`Configuration::equals`].
    fn equals(comparison: impl Into<String>) -> Predicate;
    /// See [`Configuration::exact_length`].
    fn exact_length(length: usize) -> Predicate;
    /// See [`Configuration::exact_length_with`].
    fn exact_length_with(length: usize, mode: LengthMode) -> Predicate;
    /// See [`Configuration::min_length`].
    fn min_length(min: usize) -> Predicate;
    /// See [`Configuration::min_length_with`].
    fn min_length_with(min: usize, mode: LengthMode) -> Predicate;
    /// See [`Configuration::max_length`].
    fn max_length(max: usize) -> Predicate;
    /// See [`Configuration::max_length_with`].
    fn max_length_with(max: usize, mode: LengthMode) -> Predicate;
    /// See [`Configuration::is_ascii`].
    fn is_ascii() -> Predicate;
    /// See [`Configuration::is_after`].
    fn is_after(reference: &str) -> Result<Predicate, ConfigError>;
    /// See [`Configuration::is_alpha`].
    fn is_alpha() -> Predicate;
    /// See [`Configuration::is_alphanumeric`].
    fn is_alphanumeric() -> Predicate;
    /// See [`Configuration::is_base64`].
    fn is_base64() -> Predicate;
    /// See [`Configuration::is_before`].
    fn is_before(reference: &str) -> Result<Predicate, ConfigError>;
    /// See [`Configuration::is_bool`].
    fn is_bool() -> Predicate;
    /// See [`Configuration::is_credit_card`].
    fn is_credit_card() -> Predicate;
    /// See [`Configuration::is_date`].
    fn is_date() -> Predicate;
    /// See [`Configuration::is_email`].
    fn is_email() -> Predicate;
    /// See [`Configuration::is_empty`].
    fn is_empty() -> Predicate;
    /// See [`Configuration::is_fqdn`].
    fn is_fqdn(options: FqdnOptions) -> Predicate;
    /// See [`Configuration::is_false`].
    fn is_false() -> Predicate;
    /// See [`Configuration::is_float`].
    fn is_float() -> Predicate;
    /// See [`Configuration::is_hex_color`].
    fn is_hex_color() -> Predicate;
    /// See [`Configuration::is_hexadecimal`].
    fn is_hexadecimal() -> Predicate;
    /// See [`Configuration::is_ip`].
    fn is_ip() -> Predicate;
    /// See [`Configuration::is_ipv4`].
    fn is_ipv4() -> Predicate;
    /// See [`Configuration::is_ipv6`].
    fn is_ipv6() -> Predicate;
    /// See [`Configuration::is_isbn`].
    fn is_isbn(version: &str) -> Result<Predicate, ConfigError>;
    /// See [`Configuration::is_isbn10`].
    fn is_isbn10() -> Predicate;
    /// See [`Configuration::is_isbn13`].
    fn is_isbn13() -> Predicate;
    /// See [`Configuration::is_int`].
    fn is_int() -> Predicate;
    /// See [`Configuration::is_lowercase`].
    fn is_lowercase() -> Predicate;
    /// See [`Configuration::is_mongo_id`].
    fn is_mongo_id() -> Predicate;
    /// See [`Configuration::is_numeric`].
    fn is_numeric() -> Predicate;
    /// See [`Configuration::is_phone`].
    fn is_phone(locale: &str) -> Result<Predicate, ConfigError>;
    /// See [`Configuration::is_true`].
    fn is_true() -> Predicate;
    /// See [`Configuration::is_uuid`].
    fn is_uuid() -> Predicate;
    /// See [`Configuration::is_uppercase`].
    fn is_uppercase() -> Predicate;
    /// See [`Configuration::required`].
    fn required() -> Predicate;
    /// See [`Configuration::predicate_for`].
    fn predicate_for(name: &str, args: &[&str]) -> Result<Predicate, ConfigError>;
}

/// See [`Configuration::is_in`].
pub fn is_in<I, S>(allow_list: I) -> Predicate
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    DEFAULT.is_in(allow_list)
}
