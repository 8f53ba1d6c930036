//! Fully-qualified domain name validator.
//!
//! Label rules:
//! - labels are separated by `.`; empty labels fail
//! - with `require_tld`, the last label must be two or more letters
//!   (ASCII lowercase or U+00A1..U+FFFF) or an `xn` ACE label
//! - every other label, after removing underscores, must consist of
//!   lowercase letters, U+00A1..U+FFFF, digits and `-`
//! - a label must not start or end with `-` or contain `---`
//! - `__` is rejected unless underscores are allowed

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::matcher;

static TLD: LazyLock<Regex> = LazyLock::new(|| {
    matcher::compile(r"[a-z\x{00a1}-\x{ffff}]{2,}|xn[a-z0-9-]{2,}").expect("TLD pattern compiles")
});

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    matcher::compile(r"[a-z\x{00a1}-\x{ffff}0-9-]+").expect("label pattern compiles")
});

/// Options for [`is_fqdn`].
///
/// # Examples
///
/// ```
/// use textshape_validator::validators::fqdn::{FqdnOptions, is_fqdn};
///
/// assert!(!is_fqdn("example.com.", &FqdnOptions::DEFAULT));
///
/// let options = FqdnOptions::DEFAULT.allow_trailing_dot(true);
/// assert!(is_fqdn("example.com.", &options));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FqdnOptions {
    /// The last label must be a top-level domain.
    pub require_tld: bool,
    /// Allow `__` inside labels.
    pub allow_underscores: bool,
    /// Accept and ignore a single trailing `.`.
    pub allow_trailing_dot: bool,
}

impl FqdnOptions {
    /// TLD required, no `__`, no trailing dot.
    pub const DEFAULT: FqdnOptions = FqdnOptions {
        require_tld: true,
        allow_underscores: false,
        allow_trailing_dot: false,
    };

    /// Sets `require_tld`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn require_tld(mut self, value: bool) -> Self {
        self.require_tld = value;
        self
    }

    /// Sets `allow_underscores`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_underscores(mut self, value: bool) -> Self {
        self.allow_underscores = value;
        self
    }

    /// Sets `allow_trailing_dot`.
    #[must_use = "builder methods must be chained or built"]
    pub const fn allow_trailing_dot(mut self, value: bool) -> Self {
        self.allow_trailing_dot = value;
        self
    }
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Returns `true` if `value` is a domain name under `options`.
pub fn is_fqdn(value: &str, options: &FqdnOptions) -> bool {
    let name = if options.allow_trailing_dot {
        value.strip_suffix('.').unwrap_or(value)
    } else {
        value
    };

    let mut labels: Vec<&str> = name.split('.').collect();

    if options.require_tld {
        let Some(tld) = labels.pop() else {
            return false;
        };
        if labels.is_empty() || !TLD.is_match(tld) {
            return false;
        }
    }

    labels.iter().all(|label| is_label(label, options))
}

fn is_label(label: &str, options: &FqdnOptions) -> bool {
    if !options.allow_underscores && label.contains("__") {
        return false;
    }

    let stripped = label.replace('_', "");
    if !LABEL.is_match(&stripped) {
        return false;
    }

    !(label.starts_with('-') || label.ends_with('-') || label.contains("---"))
}
