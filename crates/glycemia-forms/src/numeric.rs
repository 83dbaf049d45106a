//! Numeric policy for field values
//!
//! A value is numeric when, after trimming surrounding whitespace, it matches
//!
//! ```text
//! [+-]? ( digits [ "." digits? ] | "." digits ) ( [eE] [+-]? digits )?
//! ```
//!
//! and the parsed `f64` is finite. Trimming strips Unicode whitespace and the
//! byte order mark U+FEFF, matching what browsers strip from form values. Digits are ASCII only. Hexadecimal,
//! `Infinity`, `NaN`, thousands separators and values that overflow `f64`
//! are rejected.

use regex::Regex;
use std::sync::LazyLock;

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
		.expect("NUMBER_REGEX: invalid regex pattern")
});

/// Parse a raw field value under the numeric policy.
///
/// Returns `None` for empty, whitespace-only, malformed or non-finite input.
///
/// # Examples
///
/// ```
/// use glycemia_forms::numeric::parse_number;
///
/// assert_eq!(parse_number(" 28.5 "), Some(28.5));
/// assert_eq!(parse_number("1e5"), Some(100000.0));
/// assert_eq!(parse_number("+5"), Some(5.0));
/// assert_eq!(parse_number("   "), None);
/// assert_eq!(parse_number("0x1A"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
	let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
	if !NUMBER_REGEX.is_match(trimmed) {
		return None;
	}
	trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether a raw field value is numeric under the policy.
pub fn is_number(raw: &str) -> bool {
	parse_number(raw).is_some()
}
