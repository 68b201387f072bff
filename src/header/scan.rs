//! Scanning of comma-separated header lists such as `Cache-Control` and `Connection`.
//!
//! Header values are handed in as the individual field lines of a message; each line is scanned
//! on its own. All functions are tolerant: malformed input reads as "not present".

use std::time::Duration;

use super::{
    int::try_parse_directive_value,
    lexer::{token_len, value_len, whitespace_len},
};

/// Returns true if any line contains `target` as a list element name.
///
/// Elements are `token [ "=" ( token / quoted-string ) ]`; only the name part is compared,
/// ASCII case-insensitively and over its full length.
///
/// # Examples
/// ```
/// use actix_header::contains_token;
///
/// assert!(contains_token(&["no-cache, no-store"], "NO-STORE"));
/// assert!(!contains_token(&["no-cache=\"no-store\""], "no-store"));
/// ```
pub fn contains_token<S: AsRef<str>>(lines: &[S], target: &str) -> bool {
    if lines.is_empty() || target.is_empty() {
        return false;
    }

    lines
        .iter()
        .any(|line| line_contains_token(line.as_ref(), target))
}

fn line_contains_token(line: &str, target: &str) -> bool {
    let bytes = line.as_bytes();
    let mut idx = whitespace_len(line, 0);

    while idx < line.len() {
        let begin = idx;

        let len = token_len(line, idx);
        if len == target.len() && line[idx..idx + len].eq_ignore_ascii_case(target) {
            return true;
        }

        idx += len;
        idx += whitespace_len(line, idx);

        if bytes.get(idx) == Some(&b'=') {
            idx += 1;
            idx += value_len(line, idx);
            idx += whitespace_len(line, idx);
        }

        if bytes.get(idx) == Some(&b',') {
            idx += 1;
            idx += whitespace_len(line, idx);
        }

        // stuck on a byte no rule consumes; resume after the next separator
        if idx == begin {
            idx = match bytes[idx..].iter().position(|&b| b == b',') {
                Some(pos) => {
                    let next = idx + pos + 1;
                    next + whitespace_len(line, next)
                }
                None => line.len(),
            };
        }
    }

    false
}

/// Finds a `name=seconds` directive, e.g. `max-age=30`, and returns its value.
///
/// The first line containing `target` anywhere (ASCII case-insensitively) decides the result:
/// its value is parsed with [`try_parse_directive_value`] and a malformed value yields `None`
/// without looking at later lines.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use actix_header::find_directive_seconds;
///
/// let lines = ["public, max-age=3600"];
/// assert_eq!(
///     find_directive_seconds(&lines, "max-age"),
///     Some(Duration::from_secs(3600)),
/// );
/// ```
pub fn find_directive_seconds<S: AsRef<str>>(lines: &[S], target: &str) -> Option<Duration> {
    if target.is_empty() {
        return None;
    }

    for line in lines {
        let line = line.as_ref();

        let idx = match find_ignore_ascii_case(line, target) {
            Some(idx) => idx,
            None => continue,
        };

        return match try_parse_directive_value(idx + target.len(), line) {
            Some(secs) => Some(Duration::from_secs(secs as u64)),
            None => {
                log::trace!("malformed {} directive in {:?}", target, line);
                None
            }
        };
    }

    None
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();

    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Skips whitespace and an optional list separator starting at `start`.
///
/// Returns the index of the next list element and whether a comma was consumed. With
/// `skip_empty_values`, runs of commas (`a, , ,b`) are collapsed so the returned index points at
/// the next non-empty element.
///
/// # Examples
/// ```
/// use actix_header::advance_past_list_separator;
///
/// assert_eq!(advance_past_list_separator("a , b", 1, false), (4, true));
/// assert_eq!(advance_past_list_separator("a ,, b", 1, true), (5, true));
/// assert_eq!(advance_past_list_separator("a b", 1, false), (2, false));
/// ```
pub fn advance_past_list_separator(
    input: &str,
    start: usize,
    skip_empty_values: bool,
) -> (usize, bool) {
    let bytes = input.as_bytes();
    let mut idx = start + whitespace_len(input, start);

    if bytes.get(idx) != Some(&b',') {
        return (idx, false);
    }

    idx += 1;
    idx += whitespace_len(input, idx);

    if skip_empty_values {
        while bytes.get(idx) == Some(&b',') {
            idx += 1;
            idx += whitespace_len(input, idx);
        }
    }

    (idx, true)
}
