//! Name-based dispatch
//!
//! [`ValidatorKind`] lists every validator a [`Configuration`] can build.
//! Names parse in snake_case (`is_email`) and camelCase (`isEmail`), which
//! lets hosts keep validator names in data files and resolve them at load
//! time with [`Configuration::predicate_for`].

use std::fmt;
use std::str::FromStr;

use crate::config::{Configuration, failed};
use crate::foundation::ConfigError;
use crate::predicate::Predicate;
use crate::validators::fqdn::FqdnOptions;

macro_rules! validator_kinds {
    ($($variant:ident => $name:literal,)+) => {
        /// Every validator known to [`Configuration::predicate_for`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[non_exhaustive]
        pub enum ValidatorKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )+
        }

        impl ValidatorKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [ValidatorKind] = &[$(ValidatorKind::$variant),+];

            /// The canonical snake_case name.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(ValidatorKind::$variant => $name,)+
                }
            }
        }
    };
}

validator_kinds! {
    Contains => "contains",
    Equals => "equals",
    ExactLength => "exact_length",
    MinLength => "min_length",
    MaxLength => "max_length",
    IsAscii => "is_ascii",
    IsAfter => "is_after",
    IsAlpha => "is_alpha",
    IsAlphanumeric => "is_alphanumeric",
    IsBase64 => "is_base64",
    IsBefore => "is_before",
    IsBool => "is_bool",
    IsCreditCard => "is_credit_card",
    IsDate => "is_date",
    IsEmail => "is_email",
    IsEmpty => "is_empty",
    IsFqdn => "is_fqdn",
    IsFalse => "is_false",
    IsFloat => "is_float",
    IsHexColor => "is_hex_color",
    IsHexadecimal => "is_hexadecimal",
    IsIp => "is_ip",
    IsIpv4 => "is_ipv4",
    IsIpv6 => "is_ipv6",
    IsIsbn => "is_isbn",
    IsIsbn10 => "is_isbn10",
    IsIsbn13 => "is_isbn13",
    IsIn => "is_in",
    IsInt => "is_int",
    IsLowercase => "is_lowercase",
    IsMongoId => "is_mongo_id",
    IsNumeric => "is_numeric",
    IsPhone => "is_phone",
    IsTrue => "is_true",
    IsUuid => "is_uuid",
    IsUppercase => "is_uppercase",
    Required => "required",
}

impl ValidatorKind {
    /// Resolves a validator name, ignoring case and underscores.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::ValidatorKind;
    ///
    /// assert_eq!(ValidatorKind::from_name("isEmail"), Some(ValidatorKind::IsEmail));
    /// assert_eq!(ValidatorKind::from_name("is_email"), Some(ValidatorKind::IsEmail));
    /// assert_eq!(ValidatorKind::from_name("isISBN"), Some(ValidatorKind::IsIsbn));
    /// assert_eq!(ValidatorKind::from_name("is_postcode"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        Self::ALL
            .iter()
            .copied()
            .find(|kind| normalize(kind.name()) == wanted)
    }

    /// What the first argument must be, or `None` if the validator takes no
    /// required argument.
    #[must_use]
    pub const fn expected_argument(self) -> Option<&'static str> {
        match self {
            ValidatorKind::Contains => Some("a seed string"),
            ValidatorKind::Equals => Some("a comparison string"),
            ValidatorKind::ExactLength | ValidatorKind::MinLength | ValidatorKind::MaxLength => {
                Some("a length")
            }
            ValidatorKind::IsAfter | ValidatorKind::IsBefore => Some("a reference date"),
            ValidatorKind::IsIsbn => Some("an ISBN version"),
            ValidatorKind::IsIn => Some("at least one allowed value"),
            ValidatorKind::IsPhone => Some("a phone locale"),
            _ => None,
        }
    }

    /// `true` if [`Configuration::predicate_for`] needs at least one argument.
    #[must_use]
    pub const fn requires_argument(self) -> bool {
        self.expected_argument().is_some()
    }
}

impl FromStr for ValidatorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ConfigError::UnknownValidator(s.to_owned()))
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl Configuration {
    /// Builds the predicate named `name` with string arguments.
    ///
    /// Arguments by validator:
    ///
    /// - `contains`, `equals`: the string
    /// - `exact_length`, `min_length`, `max_length`: a decimal length
    /// - `is_after`, `is_before`: a reference date in the configured format
    /// - `is_isbn`: `"10"` or `"13"`
    /// - `is_in`: every argument is an allowed value
    /// - `is_phone`: a locale key
    /// - `is_fqdn`: optional `require_tld=...`, `allow_underscores=...`,
    ///   `allow_trailing_dot=...` flags
    ///
    /// Arguments beyond those listed are ignored.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnknownValidator`] for an unknown name,
    /// [`ConfigError::MissingArgument`] / [`ConfigError::InvalidArgument`] for
    /// bad arguments, and whatever the underlying accessor reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use textshape_validator::{Configuration, ValidationMode};
    ///
    /// let config = Configuration::new(ValidationMode::Strict);
    /// let phone = config.predicate_for("isPhone", &["fr-FR"]).unwrap();
    /// assert!(phone.check("0612345678"));
    ///
    /// assert!(config.predicate_for("is_phone", &[]).is_err());
    /// assert!(config.predicate_for("is_postcode", &[]).is_err());
    /// ```
    pub fn predicate_for(&self, name: &str, args: &[&str]) -> Result<Predicate, ConfigError> {
        let kind: ValidatorKind = name.parse().map_err(|e| failed(name, e))?;

        let first = match (kind.expected_argument(), args.first()) {
            (Some(expected), None) => {
                return Err(failed(
                    kind.name(),
                    ConfigError::MissingArgument {
                        validator: kind.name(),
                        expected,
                    },
                ));
            }
            (_, first) => first.copied().unwrap_or_default(),
        };

        let predicate = match kind {
            ValidatorKind::Contains => self.contains(first),
            ValidatorKind::Equals => self.equals(first),
            ValidatorKind::ExactLength => self.exact_length(length_argument(kind, first)?),
            ValidatorKind::MinLength => self.min_length(length_argument(kind, first)?),
            ValidatorKind::MaxLength => self.max_length(length_argument(kind, first)?),
            ValidatorKind::IsAscii => self.is_ascii(),
            ValidatorKind::IsAfter => self.is_after(first)?,
            ValidatorKind::IsAlpha => self.is_alpha(),
            ValidatorKind::IsAlphanumeric => self.is_alphanumeric(),
            ValidatorKind::IsBase64 => self.is_base64(),
            ValidatorKind::IsBefore => self.is_before(first)?,
            ValidatorKind::IsBool => self.is_bool(),
            ValidatorKind::IsCreditCard => self.is_credit_card(),
            ValidatorKind::IsDate => self.is_date(),
            ValidatorKind::IsEmail => self.is_email(),
            ValidatorKind::IsEmpty => self.is_empty(),
            ValidatorKind::IsFqdn => self.is_fqdn(fqdn_options(args)?),
            ValidatorKind::IsFalse => self.is_false(),
            ValidatorKind::IsFloat => self.is_float(),
            ValidatorKind::IsHexColor => self.is_hex_color(),
            ValidatorKind::IsHexadecimal => self.is_hexadecimal(),
            ValidatorKind::IsIp => self.is_ip(),
            ValidatorKind::IsIpv4 => self.is_ipv4(),
            ValidatorKind::IsIpv6 => self.is_ipv6(),
            ValidatorKind::IsIsbn => self.is_isbn(first)?,
            ValidatorKind::IsIsbn10 => self.is_isbn10(),
            ValidatorKind::IsIsbn13 => self.is_isbn13(),
            ValidatorKind::IsIn => self.is_in(args.iter().copied()),
            ValidatorKind::IsInt => self.is_int(),
            ValidatorKind::IsLowercase => self.is_lowercase(),
            ValidatorKind::IsMongoId => self.is_mongo_id(),
            ValidatorKind::IsNumeric => self.is_numeric(),
            ValidatorKind::IsPhone => self.is_phone(first)?,
            ValidatorKind::IsTrue => self.is_true(),
            ValidatorKind::IsUuid => self.is_uuid(),
            ValidatorKind::IsUppercase => self.is_uppercase(),
            ValidatorKind::Required => self.required(),
        };

        Ok(predicate)
    }
}

fn length_argument(kind: ValidatorKind, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| {
        failed(
            kind.name(),
            ConfigError::InvalidArgument {
                validator: kind.name(),
                value: value.to_owned(),
            },
        )
    })
}

fn fqdn_options(args: &[&str]) -> Result<FqdnOptions, ConfigError> {
    let invalid = |arg: &str| {
        failed(
            "is_fqdn",
            ConfigError::InvalidArgument {
                validator: "is_fqdn",
                value: arg.to_owned(),
            },
        )
    };

    let mut options = FqdnOptions::DEFAULT;
    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| invalid(arg))?;
        let value: bool = value.trim().parse().map_err(|_| invalid(arg))?;
        options = match key.trim() {
            "require_tld" | "requireTLD" => options.require_tld(value),
            "allow_underscores" | "allowUnderscores" => options.allow_underscores(value),
            "allow_trailing_dot" | "allowTrailingDot" => options.allow_trailing_dot(value),
            _ => return Err(invalid(arg)),
        };
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationMode;
    use pretty_assertions::assert_eq;

    fn strict() -> Configuration {
        Configuration::new(ValidationMode::Strict)
    }

    #[test]
    fn test_names_are_unique_and_round_trip() {
        for kind in ValidatorKind::ALL {
            assert_eq!(ValidatorKind::from_name(kind.name()), Some(*kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_camel_case_names() {
        for (name, kind) in [
            ("isIPv6", ValidatorKind::IsIpv6),
            ("isFQDN", ValidatorKind::IsFqdn),
            ("isMongoId", ValidatorKind::IsMongoId),
            ("exactLength", ValidatorKind::ExactLength),
            ("isHexColor", ValidatorKind::IsHexColor),
            ("isUUID", ValidatorKind::IsUuid),
        ] {
            assert_eq!(ValidatorKind::from_name(name), Some(kind), "{name}");
        }
    }

    #[test]
    fn test_unknown_name() {
        let error = "isPostcode".parse::<ValidatorKind>().unwrap_err();
        assert!(matches!(error, ConfigError::UnknownValidator(name) if name == "isPostcode"));
    }

    #[test]
    fn test_every_kind_builds_with_a_sample_argument() {
        let config = strict();
        for kind in ValidatorKind::ALL {
            let args: &[&str] = match kind {
                ValidatorKind::ExactLength
                | ValidatorKind::MinLength
                | ValidatorKind::MaxLength => &["3"],
                ValidatorKind::IsAfter | ValidatorKind::IsBefore => &["01/01/2020"],
                ValidatorKind::IsIsbn => &["13"],
                ValidatorKind::IsPhone => &["en-US"],
                _ if kind.requires_argument() => &["x"],
                _ => &[],
            };
            let predicate = config
                .predicate_for(kind.name(), args)
                .unwrap_or_else(|e| panic!("{kind}: {e}"));
            assert!(!predicate.name().is_empty());
        }
    }

    #[test]
    fn test_predicate_name_matches_kind() {
        let config = strict();
        assert_eq!(config.predicate_for("isEmail", &[]).unwrap().name(), "is_email");
        assert_eq!(config.predicate_for("minLength", &["2"]).unwrap().name(), "min_length");
    }

    #[test]
    fn test_missing_argument() {
        let error = strict().predicate_for("contains", &[]).unwrap_err();
        insta::assert_snapshot!(error.to_string(), @"validator `contains` requires an argument: a seed string");
    }

    #[test]
    fn test_invalid_length_argument() {
        let error = strict().predicate_for("exact_length", &["five"]).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidArgument { validator: "exact_length", ref value } if value == "five"
        ));
    }

    #[test]
    fn test_length_argument() {
        let predicate = strict().predicate_for("max_length", &["3"]).unwrap();
        assert!(predicate.check("abc"));
        assert!(!predicate.check("abcd"));
    }

    #[test]
    fn test_is_in_uses_every_argument() {
        let predicate = strict().predicate_for("isIn", &["a", "b", "c"]).unwrap();
        assert!(predicate.check("c"));
        assert!(!predicate.check("d"));
    }

    #[test]
    fn test_fqdn_flags() {
        let config = strict();
        let plain = config.predicate_for("isFQDN", &[]).unwrap();
        let dotted = config
            .predicate_for("isFQDN", &["allowTrailingDot=true"])
            .unwrap();
        assert!(!plain.check("example.com."));
        assert!(dotted.check("example.com."));

        assert!(config.predicate_for("is_fqdn", &["require_tld"]).is_err());
        assert!(config.predicate_for("is_fqdn", &["require_tld=maybe"]).is_err());
        assert!(config.predicate_for("is_fqdn", &["colour=true"]).is_err());
    }

    #[test]
    fn test_construction_errors_propagate() {
        let config = strict();
        assert!(matches!(
            config.predicate_for("isPhone", &["xx-XX"]),
            Err(ConfigError::UnknownLocale(_))
        ));
        assert!(matches!(
            config.predicate_for("isBefore", &["yesterday"]),
            Err(ConfigError::InvalidReferenceDate { .. })
        ));
    }
}
