//! Internal macros.
//!
//! - [`delegate_to_default!`]: free functions forwarding to the shared
//!   default [`Configuration`](crate::Configuration)

/// Generates free functions that forward to the same-named accessor on
/// [`default_configuration()`](crate::defaults::default_configuration).
///
/// ```rust,ignore
/// delegate_to_default! {
///     /// Docs.
///     fn is_email() -> Predicate;
///     /// Docs.
///     fn contains(seed: impl Into<String>) -> Predicate;
///     /// Docs.
///     fn is_phone(locale: &str) -> Result<Predicate, ConfigError>;
/// }
/// ```
macro_rules! delegate_to_default {
    ($(
        $(#[$meta:meta])*
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $ret:ty;
    )+) => {
        $(
            $(#[$meta])*
            pub fn $name($($arg: $ty),*) -> $ret {
                $crate::defaults::default_configuration().$name($($arg),*)
            }
        )+
    };
}

pub(crate) use delegate_to_default;
