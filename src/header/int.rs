//! Decimal integer parsing and formatting for header values.
//!
//! Parsing only accepts the `1*DIGIT` form used by headers like `Content-Length` and the
//! `max-age` directive: no sign, no whitespace, no trailing bytes.

use std::fmt;

use super::lexer::{digits_len, whitespace_len};
use crate::error::HeaderError;

macro_rules! parse_non_negative {
    ($name:ident, $ty:ty) => {
        #[doc = concat!("Parses a non-negative `", stringify!($ty), "` from ASCII digits.")]
        ///
        /// Returns `None` for empty input, any non-digit byte, or a value that overflows the
        /// signed range.
        pub fn $name(text: &str) -> Option<$ty> {
            if text.is_empty() {
                return None;
            }

            let mut result: $ty = 0;

            for &b in text.as_bytes() {
                if !b.is_ascii_digit() {
                    return None;
                }

                result = result
                    .checked_mul(10)
                    .and_then(|n| n.checked_add((b - b'0') as $ty))?;
            }

            Some(result)
        }
    };
}

parse_non_negative!(try_parse_i32, i32);
parse_non_negative!(try_parse_i64, i64);

/// Formats `value` as a signed decimal string.
pub fn format_i64(value: i64) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(value).to_owned()
}

/// Formats `value` as a decimal string, rejecting negative values.
pub fn format_non_negative_i64(value: i64) -> Result<String, HeaderError> {
    if value < 0 {
        return Err(HeaderError::Range(format_i64(value)));
    }

    Ok(format_i64(value))
}

/// Parses the numeric value of a `name=value` directive whose name ends at `start`.
///
/// Skips whitespace, a single `=`, and more whitespace, then parses the run of digits that
/// follows. Anything after the digits is ignored.
///
/// # Examples
/// ```
/// use actix_header::try_parse_directive_value;
///
/// assert_eq!(try_parse_directive_value(7, "max-age = 30, private"), Some(30));
/// assert_eq!(try_parse_directive_value(7, "max-age"), None);
/// ```
pub fn try_parse_directive_value(start: usize, text: &str) -> Option<i64> {
    let mut idx = start + whitespace_len(text, start);

    if text.as_bytes().get(idx) != Some(&b'=') {
        return None;
    }

    idx += 1;
    idx += whitespace_len(text, idx);

    let len = digits_len(text, idx);
    try_parse_i64(&text[idx..idx + len])
}

/// Writes an integer to a `fmt::Write`.
pub(crate) fn itoa_fmt<W: fmt::Write, V: itoa::Integer>(mut wr: W, value: V) -> fmt::Result {
    let mut buf = itoa::Buffer::new();
    wr.write_str(buf.format(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        assert_eq!(try_parse_i32("0"), Some(0));
        assert_eq!(try_parse_i32("42"), Some(42));
        assert_eq!(try_parse_i32("007"), Some(7));
        assert_eq!(try_parse_i32("2147483647"), Some(i32::MAX));
        assert_eq!(try_parse_i64("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn parse_rejects() {
        assert_eq!(try_parse_i32(""), None);
        assert_eq!(try_parse_i32("-1"), None);
        assert_eq!(try_parse_i32("+1"), None);
        assert_eq!(try_parse_i32(" 1"), None);
        assert_eq!(try_parse_i32("1 "), None);
        assert_eq!(try_parse_i32("12a"), None);
        assert_eq!(try_parse_i32("1.0"), None);
        assert_eq!(try_parse_i32("\u{661}"), None);
    }

    #[test]
    fn parse_overflow() {
        assert_eq!(try_parse_i32("2147483648"), None);
        assert_eq!(try_parse_i32("99999999999"), None);
        assert_eq!(try_parse_i64("9223372036854775808"), None);
        assert_eq!(try_parse_i64("18446744073709551616"), None);
    }

    #[test]
    fn parse_then_format() {
        for s in &["0", "1", "10", "65535", "4294973728", "9223372036854775807"] {
            let n = try_parse_i64(s).unwrap();
            assert_eq!(format_i64(n), *s);
        }

        assert_eq!(format_i64(try_parse_i64("000123").unwrap()), "123");
    }

    #[test]
    fn format() {
        assert_eq!(format_i64(-42), "-42");
        assert_eq!(format_i64(i64::MIN), "-9223372036854775808");
        assert_eq!(format_non_negative_i64(120).unwrap(), "120");
        assert_eq!(
            format_non_negative_i64(-1),
            Err(HeaderError::Range("-1".to_owned()))
        );
    }

    #[test]
    fn directive_values() {
        assert_eq!(try_parse_directive_value(7, "max-age=30"), Some(30));
        assert_eq!(try_parse_directive_value(7, "max-age =\t30"), Some(30));
        assert_eq!(try_parse_directive_value(7, "max-age=30, public"), Some(30));
        assert_eq!(try_parse_directive_value(7, "max-age=30s"), Some(30));

        assert_eq!(try_parse_directive_value(7, "max-age"), None);
        assert_eq!(try_parse_directive_value(7, "max-age="), None);
        assert_eq!(try_parse_directive_value(7, "max-age=abc"), None);
        assert_eq!(try_parse_directive_value(7, "max-age==30"), None);
        assert_eq!(try_parse_directive_value(7, "max-age 30"), None);
        assert_eq!(try_parse_directive_value(7, "max-age=-30"), None);
        assert_eq!(
            try_parse_directive_value(7, "max-age=99999999999999999999"),
            None
        );
        assert_eq!(try_parse_directive_value(50, "max-age=30"), None);
    }
}
