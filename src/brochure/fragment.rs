// SPDX-License-Identifier: MPL-2.0
//! Codec for the `page-<n>` location fragment and deep links.
//!
//! Reading is lenient in the same way a browser's `parseInt` is: the leading
//! integer after the prefix is used and anything after it is ignored, so
//! `#page-4`, `page-4` and `#page-4-cover` all name page 4.

use super::page::PageIndex;

/// Prefix of every page fragment.
pub const PAGE_PREFIX: &str = "page-";

/// Encodes a page as a fragment (without the leading `#`).
#[must_use]
pub fn encode(page: PageIndex) -> String {
    format!("{PAGE_PREFIX}{page}")
}

/// Extracts the page number from a fragment.
///
/// Accepts an optional leading `#`. Returns `None` when the prefix is
/// missing or no integer follows it. The number is not range-checked.
#[must_use]
pub fn decode(fragment: &str) -> Option<i64> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let rest = fragment.strip_prefix(PAGE_PREFIX)?;
    leading_int(rest)
}

/// Splits a link into its base and fragment (fragment without the `#`).
#[must_use]
pub fn split(link: &str) -> (&str, Option<&str>) {
    match link.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (link, None),
    }
}

/// Normalises user input into a bare fragment.
///
/// The input may be a full link, `#page-4` or `page-4`.
#[must_use]
pub fn from_input(input: &str) -> String {
    let input = input.trim();
    match split(input) {
        (_, Some(fragment)) => fragment.to_string(),
        (bare, None) => bare.to_string(),
    }
}

/// Extracts the launch fragment from a command-line link.
///
/// Unlike [`from_input`], a bare URL without `#` carries no fragment; only a
/// bare `page-<n>` is taken as one.
#[must_use]
pub fn from_link(link: &str) -> Option<String> {
    match split(link.trim()) {
        (_, Some(fragment)) => Some(fragment.to_string()),
        (bare, None) if bare.starts_with(PAGE_PREFIX) => Some(bare.to_string()),
        _ => None,
    }
}

/// Builds a shareable link for `page` from `base`.
///
/// Any fragment already present on `base` is dropped so the link always
/// carries exactly one `#page-<n>`.
#[must_use]
pub fn deep_link(base: &str, page: PageIndex) -> String {
    let (base, _) = split(base);
    format!("{base}#{}", encode(page))
}

/// Parses the leading integer of `text`, ignoring leading whitespace and
/// trailing characters. A single `+` or `-` sign is accepted.
fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
