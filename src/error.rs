//! Error types.

use derive_more::{Display, Error};

/// Errors raised when building outgoing header text from caller supplied values.
///
/// Parsers that deal with untrusted wire data never return this type; they signal malformed
/// input with `None` or `false` instead.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum HeaderError {
    /// Value does not match the token or quoted-string grammar, or a required value was empty.
    #[display(fmt = "invalid {} value: {:?}", kind, value)]
    Validation {
        /// Grammar that was checked.
        #[error(not(source))]
        kind: Grammar,
        /// The rejected value.
        #[error(not(source))]
        value: String,
    },

    /// Numeric value falls outside the range allowed by the header grammar.
    #[display(fmt = "value out of range: {}", _0)]
    Range(#[error(not(source))] String),

    /// Numeric or date text could not be formatted or parsed.
    #[display(fmt = "malformed {}", _0)]
    Format(#[error(not(source))] &'static str),
}

impl HeaderError {
    pub(crate) fn validation(kind: Grammar, value: &str) -> Self {
        HeaderError::Validation {
            kind,
            value: value.to_owned(),
        }
    }
}

/// Header grammar production referenced by [`HeaderError::Validation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Grammar {
    #[display(fmt = "token")]
    Token,

    #[display(fmt = "quoted-string")]
    QuotedString,
}

/// Protocol violations of [`InplaceStringBuilder`](crate::InplaceStringBuilder).
///
/// These always indicate a logic error in the calling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[non_exhaustive]
pub enum BuilderError {
    /// Capacity was reserved after writing had started.
    #[display(fmt = "cannot reserve capacity after writing has started")]
    ReserveAfterWrite,

    /// Finalized before the reserved capacity was exactly filled.
    #[display(fmt = "buffer holds {} of {} reserved bytes", written, capacity)]
    Incomplete { written: usize, capacity: usize },

    /// A write would exceed the reserved capacity.
    #[display(
        fmt = "writing {} bytes at offset {} exceeds reserved capacity {}",
        len,
        offset,
        capacity
    )]
    Capacity {
        len: usize,
        offset: usize,
        capacity: usize,
    },

    /// Requested sub-range is outside the source string or splits a character.
    #[display(fmt = "invalid source range {}..{}", start, end)]
    InvalidRange { start: usize, end: usize },

    /// Reserved capacity overflowed `usize`.
    #[display(fmt = "reserved capacity overflow")]
    Overflow,

    /// Assembled bytes are not valid UTF-8.
    #[display(fmt = "buffer does not hold valid UTF-8")]
    Utf8,
}

impl BuilderError {
    /// Returns true for the state errors of the reserve/write/finish protocol.
    pub fn is_state(&self) -> bool {
        matches!(
            self,
            BuilderError::ReserveAfterWrite | BuilderError::Incomplete { .. }
        )
    }

    /// Returns true if a write did not fit the reserved capacity.
    pub fn is_capacity(&self) -> bool {
        matches!(self, BuilderError::Capacity { .. } | BuilderError::Overflow)
    }
}
