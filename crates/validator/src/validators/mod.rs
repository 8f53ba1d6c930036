//! Validators that need more than a single full-string pattern.
//!
//! Each function here is a plain check over `&str`. The
//! [`Configuration`](crate::Configuration) accessors wrap them into
//! [`Predicate`](crate::Predicate) values and add the empty-string gate.

pub mod fqdn;
pub mod ipv6;
pub mod isbn;
pub mod length;
pub mod text;
pub mod uuid;
