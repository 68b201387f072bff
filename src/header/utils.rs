#[cfg(feature = "http-date")]
use std::time::{Duration, SystemTime};

use crate::{
    builder::InplaceStringBuilder,
    error::{BuilderError, Grammar, HeaderError},
};

/// "Thu, 01 Jan 1970 00:00:00 GMT".len()
#[cfg(feature = "http-date")]
pub const DATE_VALUE_LENGTH: usize = 29;

/// 9999-12-31T23:59:59Z, the last instant with a four digit year.
#[cfg(feature = "http-date")]
const MAX_DATE_SECS: u64 = 253_402_300_799;

/// Formats `time` as an IMF-fixdate, optionally wrapped in double quotes.
///
/// # Errors
/// Fails for times before the Unix epoch or after the year 9999.
///
/// # Examples
/// ```
/// use std::time::{Duration, SystemTime};
/// use actix_header::format_date;
///
/// let time = SystemTime::UNIX_EPOCH + Duration::from_secs(784198117);
/// assert_eq!(format_date(time, false).unwrap(), "Mon, 07 Nov 1994 08:48:37 GMT");
/// assert_eq!(format_date(time, true).unwrap(), "\"Mon, 07 Nov 1994 08:48:37 GMT\"");
/// ```
#[cfg(feature = "http-date")]
pub fn format_date(time: SystemTime, quoted: bool) -> Result<String, HeaderError> {
    let max = SystemTime::UNIX_EPOCH + Duration::from_secs(MAX_DATE_SECS);

    if time < SystemTime::UNIX_EPOCH || time > max {
        return Err(HeaderError::Format("date"));
    }

    let date = httpdate::fmt_http_date(time);
    debug_assert_eq!(date.len(), DATE_VALUE_LENGTH);

    if !quoted {
        return Ok(date);
    }

    let mut buf = InplaceStringBuilder::with_capacity(date.len() + 2);
    write_quoted(&mut buf, &date)
        .and_then(|_| buf.finish())
        .map_err(|err| {
            log::debug!("quoting date failed: {}", err);
            HeaderError::Format("date")
        })
}

#[cfg(feature = "http-date")]
fn write_quoted(buf: &mut InplaceStringBuilder, value: &str) -> Result<(), BuilderError> {
    buf.append_char('"')?;
    buf.append(value)?;
    buf.append_char('"')
}

/// Parses an HTTP date in any of the three formats allowed by RFC 7231.
///
/// # Errors
/// Fails if `text` is not a valid HTTP date.
#[cfg(feature = "http-date")]
pub fn parse_date(text: &str) -> Result<SystemTime, HeaderError> {
    super::lexer::parse_http_date(text).ok_or(HeaderError::Format("date"))
}

/// Returns true if `text` starts and ends with a double quote and has room for both.
pub fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Strips one pair of surrounding double quotes, if present.
///
/// # Examples
/// ```
/// use actix_header::remove_quotes;
///
/// assert_eq!(remove_quotes("\"abc\""), "abc");
/// assert_eq!(remove_quotes("\"abc"), "\"abc");
/// assert_eq!(remove_quotes("\""), "\"");
/// ```
pub fn remove_quotes(text: &str) -> &str {
    if is_quoted(text) {
        &text[1..text.len() - 1]
    } else {
        text
    }
}

/// Wraps `value` in double quotes, escaping embedded `"` and `\` characters.
///
/// # Errors
/// Fails if `value` contains control characters other than horizontal tab, which cannot be
/// represented in a quoted-string.
///
/// # Examples
/// ```
/// use actix_header::escape_as_quoted_string;
///
/// assert_eq!(escape_as_quoted_string(r#"a "b" \c"#).unwrap(), r#""a \"b\" \\c""#);
/// ```
pub fn escape_as_quoted_string(value: &str) -> Result<String, HeaderError> {
    let mut escapes = 0;

    for b in value.bytes() {
        match b {
            b'"' | b'\\' => escapes += 1,
            b'\t' => {}
            b if b.is_ascii_control() => {
                return Err(HeaderError::validation(Grammar::QuotedString, value))
            }
            _ => {}
        }
    }

    let mut buf = InplaceStringBuilder::with_capacity(value.len() + escapes + 2);
    write_escaped(&mut buf, value)
        .and_then(|_| buf.finish())
        .map_err(|err| {
            log::debug!("escaping quoted-string failed: {}", err);
            HeaderError::Format("quoted-string")
        })
}

fn write_escaped(buf: &mut InplaceStringBuilder, value: &str) -> Result<(), BuilderError> {
    buf.append_char('"')?;

    let mut start = 0;
    for (idx, b) in value.bytes().enumerate() {
        if b == b'"' || b == b'\\' {
            buf.append_range(value, start, idx - start)?;
            buf.append_char('\\')?;
            start = idx;
        }
    }

    buf.append_range(value, start, value.len() - start)?;
    buf.append_char('"')
}

/// Reverses [`escape_as_quoted_string`].
///
/// Surrounding whitespace and one pair of double quotes are removed, then each `\x` escape is
/// replaced by `x`. A trailing lone backslash is kept.
pub fn unescape_as_quoted_string(value: &str) -> String {
    let value = remove_quotes(value.trim_matches(|c: char| c == ' ' || c == '\t'));

    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => unescaped.push(escaped),
                None => unescaped.push('\\'),
            },
            ch => unescaped.push(ch),
        }
    }

    unescaped
}
