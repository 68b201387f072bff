//! Parsing and formatting of header field values: token grammar, integers, quality values, and
//! comma-separated lists.

pub mod lexer;

mod int;
mod params;
mod quality;
mod scan;
mod utils;
mod validate;

pub use self::int::{
    format_i64, format_non_negative_i64, try_parse_directive_value, try_parse_i32,
    try_parse_i64,
};
pub use self::params::{Param, ParamList, Parameters};
pub use self::quality::{get_quality, q, set_quality, Quality, QualityOutOfBounds, QUALITY_PARAM};
pub use self::scan::{advance_past_list_separator, contains_token, find_directive_seconds};
pub use self::utils::*;
pub use self::validate::{check_valid_quoted_string, check_valid_token};
