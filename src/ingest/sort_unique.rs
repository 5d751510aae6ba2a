//! Lines produced by `sort | uniq -c`: `   12 the original line`.

use crate::core::scalar::parse_non_negative;

/// Split a counted line into `(count, remainder)`.
///
/// Grammar: optional leading whitespace, a run of ASCII digits, exactly one
/// whitespace character, then the remainder verbatim (it may contain the
/// field delimiter). Anything else, or a blank remainder, yields `None`.
#[must_use]
pub fn parse_sort_unique(line: &str) -> Option<(f64, &str)> {
    let body = line.trim_start();
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let count = parse_non_negative(&body[..digits])?;

    let mut rest = body[digits..].chars();
    if !rest.next()?.is_whitespace() {
        return None;
    }
    let remainder = rest.as_str();
    if remainder.trim().is_empty() {
        return None;
    }
    Some((count, remainder))
}
