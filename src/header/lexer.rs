//! Character classification for header field values.
//!
//! Every function takes a start index into `text` and returns a length, never panicking when
//! `start` is at or past the end of input.
//!
//! ```text
//! token          = 1*tchar
//! tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
//!                  "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
//! quoted-string  = DQUOTE *( qdtext / quoted-pair ) DQUOTE
//! qdtext         = HTAB / SP / %x21 / %x23-5B / %x5D-7E / obs-text
//! quoted-pair    = "\" ( HTAB / SP / VCHAR / obs-text )
//! ```

#[cfg(feature = "http-date")]
use std::time::SystemTime;

use derive_more::{Display, Error};

/// Returns true if `b` is a `tchar`.
#[inline]
pub fn is_token_char(b: u8) -> bool {
    matches!(
        b,
        b'!' | b'#'
            | b'$'
            | b'%'
            | b'&'
            | b'\''
            | b'*'
            | b'+'
            | b'-'
            | b'.'
            | b'^'
            | b'_'
            | b'`'
            | b'|'
            | b'~'
            | b'0'..=b'9'
            | b'a'..=b'z'
            | b'A'..=b'Z'
    )
}

/// Returns true for the horizontal whitespace allowed between header value elements.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Length of the longest token starting at `start`; zero if there is none.
pub fn token_len(text: &str, start: usize) -> usize {
    text.as_bytes()
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| is_token_char(b)).count())
}

/// Number of consecutive spaces and horizontal tabs starting at `start`.
pub fn whitespace_len(text: &str, start: usize) -> usize {
    text.as_bytes()
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|&&b| is_whitespace(b)).count())
}

/// Number of consecutive ASCII digits starting at `start`.
pub fn digits_len(text: &str, start: usize) -> usize {
    text.as_bytes()
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Reasons a quoted-string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum QuotedStringError {
    /// Input at the start index is not a double quote.
    #[display(fmt = "no quoted-string at this position")]
    NotQuoted,

    /// Closing double quote is missing.
    #[display(fmt = "unterminated quoted-string")]
    Unterminated,

    /// A control character appeared inside the quotes.
    #[display(fmt = "invalid character in quoted-string at {}", _0)]
    InvalidChar(#[error(not(source))] usize),
}

/// Parses a quoted-string starting at `start`.
///
/// On success returns the consumed length, including both double quotes.
pub fn quoted_string_len(text: &str, start: usize) -> Result<usize, QuotedStringError> {
    let bytes = text.as_bytes();

    if bytes.get(start) != Some(&b'"') {
        return Err(QuotedStringError::NotQuoted);
    }

    let mut idx = start + 1;

    while let Some(&b) = bytes.get(idx) {
        match b {
            b'"' => return Ok(idx + 1 - start),

            b'\\' => match bytes.get(idx + 1) {
                Some(&escaped) if is_qdtext_or_quote(escaped) => idx += 2,
                Some(_) => return Err(QuotedStringError::InvalidChar(idx + 1)),
                None => return Err(QuotedStringError::Unterminated),
            },

            b if is_qdtext_or_quote(b) => idx += 1,

            _ => return Err(QuotedStringError::InvalidChar(idx)),
        }
    }

    Err(QuotedStringError::Unterminated)
}

/// Length of a parameter value at `start`: a token, or failing that a quoted-string.
///
/// Returns zero if neither is present.
pub fn value_len(text: &str, start: usize) -> usize {
    match token_len(text, start) {
        0 => quoted_string_len(text, start).unwrap_or(0),
        len => len,
    }
}

// HTAB, SP, VCHAR and obs-text; callers handle `"` and `\` before falling through
fn is_qdtext_or_quote(b: u8) -> bool {
    b == b'\t' || (b' '..=b'~').contains(&b) || b >= 0x80
}

/// Parses an IMF-fixdate, RFC 850 or asctime timestamp.
#[cfg(feature = "http-date")]
pub fn parse_http_date(text: &str) -> Option<SystemTime> {
    httpdate::parse_http_date(text).ok()
}
