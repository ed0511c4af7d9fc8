// buddybuild-rs: Buddybuild CI environment parser
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer parsing for numeric environment values.
//!
//! ```text
//! "42"        -> 42
//! " 1,234 "   -> 1234      grouping: , ' space NBSP NNBSP
//! "1 234 567" -> 1234567
//! "42.00"     -> 42        fraction must be all zeros
//! "42.5"      -> None
//! "12,34"     -> None      groups after the first are 3 digits
//! "-3"        -> -3
//! "1.000"     -> 1         `.` is only ever the decimal point
//! "1.234"     -> None
//! "42,0"      -> None      `,` is only ever a group separator
//! ```
//!
//! Only the English-style convention (comma groups, dot decimals) and the
//! space/apostrophe groupings are recognised. Dot-grouped or comma-decimal
//! values such as `1.234` or `42,0` are rejected.

const GROUP_SEPARATORS: [char; 5] = [',', '\'', ' ', '\u{a0}', '\u{202f}'];

/// Parses a human-formatted integer.
///
/// Returns `None` unless the whole value denotes an integer that fits `i64`.
#[must_use]
pub fn parse_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first()? {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if let Some(fraction) = fraction
        && (fraction.is_empty() || !fraction.bytes().all(|b| b == b'0'))
    {
        return None;
    }

    let digits = strip_grouping(whole)?;
    let magnitude: i128 = digits.parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Removes grouping separators, validating group widths.
fn strip_grouping(whole: &str) -> Option<String> {
    let Some(separator) = whole.chars().find(|c| GROUP_SEPARATORS.contains(c)) else {
        return (!whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()))
            .then(|| whole.to_string());
    };

    let mut groups = whole.split(separator);
    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 || !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut digits = first.to_string();
    for group in groups {
        if group.len() != 3 || !group.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.push_str(group);
    }
    Some(digits)
}
