//! # textshape-validator
//!
//! Named, composable string predicates: email, IPv4/IPv6, dates, credit
//! cards, ISBN-10/13, domain names, phone numbers by locale, numeric and
//! alphanumeric content, case, length bounds and allow-lists.
//!
//! ## Quick Start
//!
//! ```
//! use textshape_validator::prelude::*;
//!
//! let config = Configuration::new(ValidationMode::Strict);
//!
//! let username = config.is_alphanumeric().and(config.min_length(3));
//! assert!(username.check("alice42"));
//! assert!(!username.check(""));
//!
//! let isbn = config.is_isbn("13").unwrap();
//! assert!(isbn.check("978-0-306-40615-7"));
//! ```
//!
//! ## Empty strings
//!
//! Every predicate except `is_empty` and `required` decides the empty
//! string by the configuration's [`ValidationMode`] before running its own
//! logic: `Default` accepts it, `Strict` rejects it.
//!
//! ## Construction errors
//!
//! Parameterized accessors validate their parameters up front and return
//! [`ConfigError`] for unknown phone locales, unknown ISBN versions and
//! reference dates that do not parse. A predicate that was built never
//! fails; it only answers `true` or `false`.
//!
//! ## Modules
//!
//! - [`config`]: [`Configuration`], the predicate factory
//! - [`predicate`]: [`Predicate`] and composition
//! - [`registry`]: name-based construction via [`ValidatorKind`]
//! - [`defaults`]: free functions over a shared default configuration
//! - [`patterns`]: the pattern table
//! - [`matcher`]: anchored, memoized regex compilation
//! - [`date`]: date-field patterns
//! - [`validators`]: IPv6, ISBN, FQDN and the other non-regex checks
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and error types

pub mod config;
pub mod date;
pub mod defaults;
pub mod foundation;
mod macros;
pub mod matcher;
pub mod patterns;
pub mod predicate;
pub mod prelude;
pub mod registry;
pub mod validators;

pub use config::{Configuration, Settings, ValidationMode};
pub use date::DateFormat;
pub use foundation::ConfigError;
pub use patterns::{IsbnVersion, PatternName, PatternTable};
pub use predicate::Predicate;
pub use registry::ValidatorKind;
pub use validators::fqdn::FqdnOptions;
pub use validators::length::LengthMode;
