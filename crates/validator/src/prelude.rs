//! Prelude module for convenient imports.
//!
//! `use textshape_validator::prelude::*;` brings in the factory, the
//! predicate type, option types and the `Validate` trait.

// ============================================================================
// FOUNDATION: Core trait and errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, Validate, ValidationError, ValidationErrors, validate_with_all, validate_with_any,
};

// ============================================================================
// FACTORY
// ============================================================================

pub use crate::config::{Configuration, Settings, ValidationMode};
pub use crate::predicate::Predicate;
pub use crate::registry::ValidatorKind;

// ============================================================================
// OPTIONS
// ============================================================================

pub use crate::date::DateFormat;
pub use crate::patterns::{IsbnVersion, PatternName, PatternTable};
pub use crate::validators::fqdn::FqdnOptions;
pub use crate::validators::length::LengthMode;
