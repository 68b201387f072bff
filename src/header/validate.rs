use super::lexer::{quoted_string_len, token_len};
use crate::error::{Grammar, HeaderError};

/// Checks that `value` is a single, complete token.
///
/// Fails if `value` is empty or contains any non-`tchar` byte.
///
/// # Examples
/// ```
/// use actix_header::check_valid_token;
///
/// assert!(check_valid_token("no-cache").is_ok());
/// assert!(check_valid_token("no cache").is_err());
/// ```
pub fn check_valid_token(value: &str) -> Result<(), HeaderError> {
    if value.is_empty() || token_len(value, 0) != value.len() {
        return Err(HeaderError::validation(Grammar::Token, value));
    }

    Ok(())
}

/// Checks that `value` is exactly one quoted-string, with nothing before or after it.
pub fn check_valid_quoted_string(value: &str) -> Result<(), HeaderError> {
    match quoted_string_len(value, 0) {
        Ok(len) if len == value.len() => Ok(()),
        _ => Err(HeaderError::validation(Grammar::QuotedString, value)),
    }
}
