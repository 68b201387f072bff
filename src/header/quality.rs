use std::fmt;

use derive_more::{Display, Error};

use super::{int::itoa_fmt, params::Parameters};
use crate::error::HeaderError;

const MAX_QUALITY_INT: u16 = 1000;
const MAX_QUALITY_FLOAT: f64 = 1.0;

/// Name of the quality parameter.
pub const QUALITY_PARAM: &str = "q";

/// Represents a quality used in q-factor values.
///
/// The default value is equivalent to `q=1.0` (the [max](Self::MAX) value).
///
/// # Implementation notes
/// The quality value is defined as a number between 0.0 and 1.0 with three decimal places.
/// This means there are 1001 possible values, so an `u16` holding thousandths is used to store
/// the quality internally. Conversion from floats rounds half away from zero.
///
/// Formatting always writes one integer digit and between one and three fractional digits,
/// dropping trailing zeroes after the first.
///
/// # Examples
/// ```
/// use actix_header::{q, Quality};
/// assert_eq!(q(1.0), Quality::MAX);
///
/// assert_eq!(q(0.42).to_string(), "0.42");
/// assert_eq!(q(1.0).to_string(), "1.0");
/// assert_eq!(Quality::MIN.to_string(), "0.001");
/// assert_eq!(Quality::ZERO.to_string(), "0.0");
/// ```
///
/// [RFC 7231 §5.3.1]: https://datatracker.ietf.org/doc/html/rfc7231#section-5.3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quality(u16);

impl Quality {
    /// The maximum quality value, equivalent to `q=1.0`.
    pub const MAX: Quality = Quality(MAX_QUALITY_INT);

    /// The minimum, non-zero quality value, equivalent to `q=0.001`.
    pub const MIN: Quality = Quality(1);

    /// The zero quality value, equivalent to `q=0.0`.
    pub const ZERO: Quality = Quality(0);

    /// Converts a float in the range 0.0–1.0 to a `Quality`.
    ///
    /// # Panics
    /// Panics in debug mode when value is not in the range 0.0 <= n <= 1.0.
    fn from_f64(value: f64) -> Self {
        debug_assert!(
            (0.0..=MAX_QUALITY_FLOAT).contains(&value),
            "q value must be between 0.0 and 1.0"
        );

        Quality((value * MAX_QUALITY_INT as f64).round() as u16)
    }

    /// Returns the quality as a float in the range 0.0–1.0.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / MAX_QUALITY_INT as f64
    }
}

/// The default value is [`Quality::MAX`].
impl Default for Quality {
    fn default() -> Quality {
        Quality::MAX
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("0.0"),
            MAX_QUALITY_INT => f.write_str("1.0"),

            // some number in the range 1–999
            x => {
                f.write_str("0.")?;

                if x < 10 {
                    f.write_str("00")?;
                    itoa_fmt(f, x)
                } else if x < 100 {
                    f.write_str("0")?;

                    if x % 10 == 0 {
                        itoa_fmt(f, x / 10)
                    } else {
                        itoa_fmt(f, x)
                    }
                } else if x % 100 == 0 {
                    itoa_fmt(f, x / 100)
                } else if x % 10 == 0 {
                    itoa_fmt(f, x / 10)
                } else {
                    itoa_fmt(f, x)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Display, Error)]
#[display(fmt = "quality out of bounds")]
#[non_exhaustive]
pub struct QualityOutOfBounds;

impl TryFrom<f64> for Quality {
    type Error = QualityOutOfBounds;

    #[inline]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        // NaN fails the range check
        if (0.0..=MAX_QUALITY_FLOAT).contains(&value) {
            Ok(Quality::from_f64(value))
        } else {
            Err(QualityOutOfBounds)
        }
    }
}

impl TryFrom<f32> for Quality {
    type Error = QualityOutOfBounds;

    #[inline]
    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Quality::try_from(value as f64)
    }
}

/// Convenience function to create a [`Quality`] from a float (0.0–1.0).
///
/// Not recommended for use with user input. Rely on the `TryFrom` impls where possible.
///
/// # Panics
/// Panics if value is out of range.
#[inline]
pub fn q<T>(quality: T) -> Quality
where
    T: TryInto<Quality>,
    T::Error: fmt::Debug,
{
    quality.try_into().expect("quality value was out of bounds")
}

/// Reads the `q` parameter from `params`.
///
/// Only plain decimal numbers with a period separator are accepted (`1`, `0.5`, `.5`). Returns
/// `None` when the parameter is missing or its value is not such a number. The value is not
/// range checked.
///
/// # Examples
/// ```
/// use actix_header::{get_quality, ParamList, Parameters};
///
/// let mut params = ParamList::new();
/// assert_eq!(get_quality(&params), None);
///
/// params.add("Q", "0.8".to_owned());
/// assert_eq!(get_quality(&params), Some(0.8));
/// ```
pub fn get_quality<P>(params: &P) -> Option<f64>
where
    P: Parameters + ?Sized,
{
    let value = params.find(QUALITY_PARAM)?;

    match parse_decimal(value) {
        Some(quality) => Some(quality),
        None => {
            log::trace!("ignoring malformed quality value {:?}", value);
            None
        }
    }
}

/// Writes, replaces, or removes the `q` parameter in `params`.
///
/// Passing `None` removes the parameter if present. Otherwise the value must be in 0.0–1.0 and
/// is written in `0.0##` form; an existing `q` keeps its position in the list.
///
/// # Errors
/// Returns [`HeaderError::Range`] for out of range values, leaving `params` unmodified.
pub fn set_quality<P>(params: &mut P, quality: Option<f64>) -> Result<(), HeaderError>
where
    P: Parameters + ?Sized,
{
    let quality = match quality {
        Some(quality) => quality,
        None => {
            params.remove(QUALITY_PARAM);
            return Ok(());
        }
    };

    let value = Quality::try_from(quality)
        .map_err(|_| HeaderError::Range(quality.to_string()))?
        .to_string();

    if !params.replace(QUALITY_PARAM, value.clone()) {
        params.add(QUALITY_PARAM, value);
    }

    Ok(())
}

// DIGIT*, optionally followed by a period and DIGIT*, with at least one digit overall
fn parse_decimal(value: &str) -> Option<f64> {
    let (int, frac) = match value.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (value, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    if int.len() + frac.len() == 0 || !all_digits(int) || !all_digits(frac) {
        return None;
    }

    value.parse().ok()
}
