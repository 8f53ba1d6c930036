//! Date parsing against a configured field pattern
//!
//! Date formats are written with Unicode date-field letters (`dd/MM/yyyy`,
//! `yyyy-MM-dd'T'HH:mm:ss`, `EEE, d MMM yyyy`) and translated once into a
//! chrono format string. Parsing succeeds only when the whole value matches.
//!
//! Fields the pattern does not mention default to 2000-01-01 00:00:00, so a
//! time-only format still yields a comparable instant.
//!
//! Supported fields:
//!
//! | Letters        | Meaning                       |
//! |----------------|-------------------------------|
//! | `yyyy`, `y`    | year                          |
//! | `yy`           | two-digit year                |
//! | `MMMM` / `MMM` | full / abbreviated month name |
//! | `MM`, `M`      | month number                  |
//! | `dd`, `d`      | day of month                  |
//! | `EEEE` / `EEE` | full / abbreviated weekday    |
//! | `HH`, `H`      | hour 0-23                     |
//! | `hh`, `h`      | hour 1-12                     |
//! | `mm`, `m`      | minute                        |
//! | `ss`, `s`      | second                        |
//! | `SSS`          | milliseconds                  |
//! | `a`            | AM / PM                       |
//!
//! Text inside single quotes is literal (`''` is a quote). Any other
//! non-letter character is literal as well.

use std::fmt;
use std::sync::LazyLock;

use chrono::format::{Parsed, StrftimeItems};
use chrono::{NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::foundation::ConfigError;
use crate::matcher;

/// The default pattern used when a configuration does not name one.
pub const DEFAULT_DATE_FORMAT: &str = "dd/MM/yyyy";

/// A comparable point in time produced by [`DateFormat::parse`].
pub type Instant = NaiveDateTime;

static DEFAULT: LazyLock<DateFormat> =
    LazyLock::new(|| DateFormat::new(DEFAULT_DATE_FORMAT).expect("default date format is valid"));

/// Which fields a pattern mentions.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
struct Fields {
    year: bool,
    month: bool,
    day: bool,
    hour24: bool,
    hour12: bool,
    meridiem: bool,
    minute: bool,
    second: bool,
    fraction: bool,
}

impl Fields {
    fn has_time(self) -> bool {
        self.hour24
            || self.hour12
            || self.meridiem
            || self.minute
            || self.second
            || self.fraction
    }
}

/// A compiled date-field pattern.
///
/// Numeric fields only accept digits: `dd/MM/yyyy` rejects `01/ 1/2020`
/// and `01/01/+2020`.
///
/// # Examples
///
/// ```
/// use textshape_validator::date::DateFormat;
///
/// let format = DateFormat::new("yyyy-MM-dd").unwrap();
/// assert!(format.parse("2024-02-29").is_some());
/// assert!(format.parse("2023-02-29").is_none()); // not a real day
/// assert!(format.parse("29/02/2024").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DateFormat {
    pattern: String,
    strftime: String,
    grammar: Regex,
    fields: Fields,
}

impl DateFormat {
    /// Translates a date-field pattern.
    pub fn new(pattern: impl Into<String>) -> Result<Self, ConfigError> {
        let pattern = pattern.into();
        let mut strftime = String::with_capacity(pattern.len() * 2);
        let mut grammar = String::with_capacity(pattern.len() * 4);
        let mut fields = Fields::default();

        let invalid = |reason: String| ConfigError::InvalidDateFormat {
            format: pattern.clone(),
            reason,
        };

        let chars: Vec<char> = pattern.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];

            if c == '\'' {
                if chars.get(i + 1) == Some(&'\'') {
                    push_literal(&mut strftime, &mut grammar, '\'');
                    i += 2;
                    continue;
                }
                let close = chars[i + 1..]
                    .iter()
                    .position(|&ch| ch == '\'')
                    .ok_or_else(|| invalid("unterminated quoted literal".into()))?;
                for &ch in &chars[i + 1..i + 1 + close] {
                    push_literal(&mut strftime, &mut grammar, ch);
                }
                i += close + 2;
                continue;
            }

            if !c.is_ascii_alphabetic() {
                push_literal(&mut strftime, &mut grammar, c);
                i += 1;
                continue;
            }

            let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
            let (directive, shape) = match (c, run) {
                ('y', 2) => ("%y", r"\d{2}"),
                ('y', 4) => ("%Y", r"\d{4}"),
                ('y', _) => ("%Y", r"\d+"),
                ('M', 1 | 2) => ("%m", r"\d{1,2}"),
                ('M', 3) => ("%b", r"\p{L}+"),
                ('M', _) => ("%B", r"\p{L}+"),
                ('d', 1 | 2) => ("%d", r"\d{1,2}"),
                ('E', 1..=3) => ("%a", r"\p{L}+"),
                ('E', _) => ("%A", r"\p{L}+"),
                ('H', 1 | 2) => ("%H", r"\d{1,2}"),
                ('h', 1 | 2) => ("%I", r"\d{1,2}"),
                ('m', 1 | 2) => ("%M", r"\d{1,2}"),
                ('s', 1 | 2) => ("%S", r"\d{1,2}"),
                ('S', 3) => ("%3f", r"\d{3}"),
                ('a', 1) => ("%p", r"\p{L}+"),
                _ => {
                    let field: String = std::iter::repeat_n(c, run).collect();
                    return Err(invalid(format!("unsupported field `{field}`")));
                }
            };
            match c {
                'y' => fields.year = true,
                'M' => fields.month = true,
                'd' => fields.day = true,
                'H' => fields.hour24 = true,
                'h' => fields.hour12 = true,
                'a' => fields.meridiem = true,
                'm' => fields.minute = true,
                's' => fields.second = true,
                'S' => fields.fraction = true,
                _ => {}
            }
            strftime.push_str(directive);
            grammar.push_str(shape);
            i += run;
        }

        let grammar = matcher::compile(&grammar).map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            pattern,
            strftime,
            grammar,
            fields,
        })
    }

    /// The pattern as written by the caller.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parses `value`; `None` unless the whole value matches the pattern and
    /// denotes a real calendar date.
    ///
    /// A pattern with any time field defaults its missing minute and second
    /// to zero. A 12-hour field without `a` is read as AM.
    #[must_use]
    pub fn parse(&self, value: &str) -> Option<Instant> {
        if !self.grammar.is_match(value) {
            return None;
        }

        let mut parsed = Parsed::new();
        chrono::format::parse(&mut parsed, value, StrftimeItems::new(&self.strftime)).ok()?;

        let fields = self.fields;
        if !fields.year {
            parsed.set_year(2000).ok()?;
        }
        if !fields.month {
            parsed.set_month(1).ok()?;
        }
        if !fields.day {
            parsed.set_day(1).ok()?;
        }
        let date = parsed.to_naive_date().ok()?;

        if !fields.has_time() {
            return Some(date.and_time(NaiveTime::MIN));
        }

        match (fields.hour24 || fields.hour12, fields.meridiem) {
            (false, false) => parsed.set_hour(0).ok()?,
            (false, true) => parsed.set_hour12(12).ok()?,
            (true, false) if fields.hour12 => parsed.set_ampm(false).ok()?,
            _ => {}
        }
        if !fields.minute {
            parsed.set_minute(0).ok()?;
        }
        if !fields.second {
            parsed.set_second(0).ok()?;
        }

        let time = parsed.to_naive_time().ok()?;
        Some(date.and_time(time))
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

impl PartialEq for DateFormat {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for DateFormat {}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn push_literal(strftime: &mut String, grammar: &mut String, ch: char) {
    if ch == '%' {
        strftime.push_str("%%");
    } else {
        strftime.push(ch);
    }
    grammar.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4])));
}
