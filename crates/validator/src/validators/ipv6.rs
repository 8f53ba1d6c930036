//! IPv6 address validator.
//!
//! Structural check over colon-separated blocks:
//!
//! - at most eight blocks, or seven when the last block is a dotted-quad
//!   IPv4 tail (RFC 3493 `::ffff:a.b.c.d`), which stands for two blocks
//! - at most one `::` omission marker
//! - every other block is 1-4 hex digits
//!
//! Dashes and spaces are stripped before the check.

use regex::Regex;

use crate::validators::text::strip_separators;

/// Returns `true` if `value` is an IPv6 address.
///
/// `ipv4` must match a whole dotted-quad address and `block` a whole 16-bit
/// hex block; both come from the configuration's pattern table.
///
/// # Examples
///
/// ```
/// use textshape_validator::patterns::{PatternName, PatternTable};
/// use textshape_validator::validators::ipv6::is_ipv6;
///
/// let table = PatternTable::default();
/// let (v4, block) = (table.named(PatternName::Ipv4), table.named(PatternName::Ipv6Block));
///
/// assert!(is_ipv6("2001:db8::1", v4, block));
/// assert!(is_ipv6("::ffff:192.0.2.1", v4, block));
/// assert!(!is_ipv6("1::2::3", v4, block));
/// ```
pub fn is_ipv6(value: &str, ipv4: &Regex, block: &Regex) -> bool {
    let address = strip_separators(value);
    let mut blocks: Vec<&str> = address.split(':').collect();

    let ipv4_tail = blocks
        .last()
        .is_some_and(|last| !last.is_empty() && ipv4.is_match(last));
    let expected_blocks = if ipv4_tail { 7 } else { 8 };

    if blocks.len() > expected_blocks {
        return false;
    }

    if address == "::" {
        return true;
    }

    // A leading or trailing `::` yields two empty blocks at that end.
    let mut omission = false;
    if address.starts_with("::") {
        blocks.drain(..2);
        omission = true;
    } else if address.ends_with("::") {
        blocks.truncate(blocks.len() - 2);
        omission = true;
    }

    let last = blocks.len().saturating_sub(1);
    for (i, part) in blocks.iter().enumerate() {
        if part.is_empty() && i > 0 && i < last {
            if omission {
                return false;
            }
            omission = true;
        } else if ipv4_tail && i == last {
            // already matched as IPv4
        } else if !block.is_match(part) {
            return false;
        }
    }

    if omission {
        !blocks.is_empty()
    } else {
        blocks.len() == expected_blocks
    }
}
