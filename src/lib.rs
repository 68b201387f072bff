//! Low-level primitives for HTTP header field values.
//!
//! These are the building blocks typed headers are made of:
//!
//! - token and quoted-string validation ([`check_valid_token`], [`check_valid_quoted_string`])
//! - overflow safe integer parsing ([`try_parse_i64`], [`try_parse_directive_value`])
//! - `q` parameter handling ([`get_quality`], [`set_quality`])
//! - list scanning ([`contains_token`], [`find_directive_seconds`],
//!   [`advance_past_list_separator`])
//! - order independent parameter comparison ([`are_equal`])
//! - single allocation string assembly ([`InplaceStringBuilder`])
//!
//! Functions meant for data read off the wire return `Option` or `bool` and never fail loudly;
//! functions meant for producing outgoing header text return `Result`.
//!
//! # Crate Features
//! - `http-date` (default): HTTP date parsing and formatting, backed by `httpdate`.

#![deny(rust_2018_idioms, nonstandard_style)]
#![warn(future_incompatible)]
#![doc(html_logo_url = "https://actix.rs/img/logo.png")]
#![doc(html_favicon_url = "https://actix.rs/favicon.ico")]

mod builder;
mod compare;
pub mod error;
pub mod header;

pub use self::builder::InplaceStringBuilder;
pub use self::compare::{are_equal, are_equal_by};
pub use self::error::{BuilderError, HeaderError};
pub use self::header::*;

#[cfg(test)]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(InplaceStringBuilder: Send, Sync);
    assert_impl_all!(ParamList: Send, Sync, Clone);
    assert_impl_all!(HeaderError: Send, Sync, std::error::Error);
    assert_impl_all!(BuilderError: Send, Sync, Copy, std::error::Error);
    assert_impl_all!(Quality: Send, Sync, Copy, Ord);
}
