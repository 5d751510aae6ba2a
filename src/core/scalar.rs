//! Token → number conversion with `lexical-core`, no allocation.

use crate::core::constants::MISSING_TOKENS;

/// Signature shared by every scalar parser handed to a grammar.
pub type ScalarFn = fn(&str) -> Option<f64>;

/// Parse one field as a finite real number.
///
/// Blank fields, `.` and `NA` are *absent*; so is anything `lexical-core`
/// refuses and any non-finite result. Never fails loudly.
#[must_use]
pub fn parse_scalar(token: &str) -> Option<f64> {
    let t = token.trim();
    if t.is_empty() || MISSING_TOKENS.contains(&t) {
        return None;
    }
    lexical_core::parse::<f64>(t.as_bytes())
        .ok()
        .filter(|v| v.is_finite())
}

/// [`parse_scalar`], with negative values treated as absent.
#[inline]
#[must_use]
pub fn parse_non_negative(token: &str) -> Option<f64> {
    parse_scalar(token).filter(|v| *v >= 0.0)
}

/// Parse a signed integer coordinate (`start`, `end`, `pos`).
#[inline]
#[must_use]
pub fn parse_coordinate(token: &str) -> Option<i64> {
    lexical_core::parse::<i64>(token.trim().as_bytes()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markers_are_absent() {
        for t in ["", "   ", ".", "NA", " NA "] {
            assert_eq!(parse_scalar(t), None, "{t:?}");
        }
    }

    #[test]
    fn malformed_and_non_finite_are_absent() {
        assert_eq!(parse_scalar("12abc"), None);
        assert_eq!(parse_scalar("NaN"), None);
        assert_eq!(parse_scalar("inf"), None);
        assert_eq!(parse_scalar("1,5"), None);
    }

    #[test]
    fn plain_numbers_parse() {
        assert_eq!(parse_scalar("12"), Some(12.0));
        assert_eq!(parse_scalar(" 0.25\t"), Some(0.25));
        assert_eq!(parse_scalar("1e3"), Some(1000.0));
        assert_eq!(parse_scalar("-4.5"), Some(-4.5));
    }

    #[test]
    fn negatives_are_absent_when_non_negative_required() {
        assert_eq!(parse_non_negative("-1"), None);
        assert_eq!(parse_non_negative("0"), Some(0.0));
    }

    #[test]
    fn coordinates_are_integers() {
        assert_eq!(parse_coordinate("100"), Some(100));
        assert_eq!(parse_coordinate("-3"), Some(-3));
        assert_eq!(parse_coordinate("1.5"), None);
        assert_eq!(parse_coordinate(""), None);
    }
}
