//! Base-independent canonical numeric values.
//!
//! A [`CanonicalNumber`] is either one of three sentinels or a
//! [`FiniteNumber`]: a sign, a significand digit string with an implied
//! point after its first digit, and a signed exponent digit string. The
//! significand carries neither leading nor trailing zeros, so every finite
//! value has exactly one representation and zero is always `0.e0`.
//! Values are compared structurally and never decoded to machine floats.

mod magnitude;
mod ordering;
mod text;

pub use text::CanonicalTextError;

use std::fmt::{self, LowerExp};

use num_traits::Float;
use thiserror::Error;

use crate::integer_base::DECIMAL;
use crate::sign::OptionalSign;

/// Reasons a canonical value cannot be built from the supplied digits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanonicalError {
    /// Neither an integer nor a fractional digit was supplied.
    #[error("significand has no digits")]
    EmptySignificand,
    /// A significand character is not a decimal digit.
    #[error("'{digit}' is not a decimal digit")]
    InvalidDigit { digit: char },
    /// The significand has a leading or trailing zero.
    #[error("significand {significand:?} is not normalized")]
    UnnormalizedSignificand { significand: String },
    /// The exponent is empty, has a leading zero or a non-decimal digit.
    #[error("exponent {exponent:?} is not a decimal integer without leading zeros")]
    InvalidExponent { exponent: String },
    /// Zero was given a sign or a non-zero exponent.
    #[error("zero must be unsigned with exponent 0")]
    NonCanonicalZero,
}

/// A finite canonical value `sign · d1.d2d3… · 10^(±exponent)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FiniteNumber {
    sign: OptionalSign,
    significand: String,
    exponent_sign: OptionalSign,
    exponent: String,
}

impl FiniteNumber {
    /// Build a value from already normalized parts.
    ///
    /// `Positive` signs are stored as `None`, and the exponent sign is
    /// dropped when the exponent is `0`.
    ///
    /// # Errors
    /// Returns [`CanonicalError`] when any invariant of the canonical shape
    /// is violated.
    pub fn new(
        sign: OptionalSign,
        significand: &str,
        exponent_sign: OptionalSign,
        exponent: &str,
    ) -> Result<Self, CanonicalError> {
        if significand.is_empty() {
            return Err(CanonicalError::EmptySignificand);
        }
        if let Some(digit) = significand.chars().find(|ch| !ch.is_ascii_digit()) {
            return Err(CanonicalError::InvalidDigit { digit });
        }
        if !DECIMAL.is_valid_significand(significand) {
            return Err(CanonicalError::UnnormalizedSignificand {
                significand: significand.to_owned(),
            });
        }
        if !DECIMAL.is_valid_number(exponent, false) {
            return Err(CanonicalError::InvalidExponent {
                exponent: exponent.to_owned(),
            });
        }
        let sign = sign.normalized();
        // Exponent `0` is stored unsigned.
        let exponent_sign = if exponent == "0" {
            OptionalSign::None
        } else {
            exponent_sign.normalized()
        };
        if significand == "0" && (sign.is_negative() || exponent != "0") {
            return Err(CanonicalError::NonCanonicalZero);
        }
        Ok(Self {
            sign,
            significand: significand.to_owned(),
            exponent_sign,
            exponent: exponent.to_owned(),
        })
    }

    #[must_use]
    pub fn zero() -> Self {
        Self {
            sign: OptionalSign::None,
            significand: "0".to_owned(),
            exponent_sign: OptionalSign::None,
            exponent: "0".to_owned(),
        }
    }

    /// Normalize validated decimal digits. The point sits between
    /// `integer` and `fraction`; the exponent is applied on top.
    fn normalize(
        sign: OptionalSign,
        integer: &str,
        fraction: &str,
        exponent_sign: OptionalSign,
        exponent: &str,
    ) -> Self {
        let digits: String = integer.chars().chain(fraction.chars()).collect();
        let Some(first) = digits.find(|ch| ch != '0') else {
            return Self::zero();
        };
        let significand = digits.trim_matches('0').to_owned();
        let shift = signed(integer.len())
            .saturating_sub(signed(first))
            .saturating_sub(1);
        let (negative, exponent) = magnitude::offset(exponent_sign.is_negative(), exponent, shift);
        Self {
            sign: sign.normalized(),
            significand,
            exponent_sign: if negative {
                OptionalSign::Negative
            } else {
                OptionalSign::None
            },
            exponent,
        }
    }

    /// Sign of the value, `None` or `Negative`.
    #[must_use]
    pub const fn sign(&self) -> OptionalSign {
        self.sign
    }

    /// Significand digits with the point implied after the first one.
    #[must_use]
    pub fn significand(&self) -> &str {
        &self.significand
    }

    #[must_use]
    pub const fn exponent_sign(&self) -> OptionalSign {
        self.exponent_sign
    }

    #[must_use]
    pub fn exponent(&self) -> &str {
        &self.exponent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.significand == "0"
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    fn negated(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        Self {
            sign: self.sign.flipped(),
            ..self.clone()
        }
    }

    fn to_i128(&self) -> Option<i128> {
        if self.is_zero() {
            return Some(0);
        }
        if self.exponent_sign.is_negative() {
            return None;
        }
        let exponent: u32 = self.exponent.parse().ok()?;
        let digits = u32::try_from(self.significand.len()).ok()?;
        // Fewer integer places than significand digits means a fraction.
        let padding = exponent.checked_add(1)?.checked_sub(digits)?;
        let magnitude = self
            .significand
            .parse::<i128>()
            .ok()?
            .checked_mul(10_i128.checked_pow(padding)?)?;
        if self.is_negative() {
            magnitude.checked_neg()
        } else {
            Some(magnitude)
        }
    }
}

fn signed(length: usize) -> i64 {
    i64::try_from(length).unwrap_or(i64::MAX)
}

impl fmt::Display for FiniteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.significand.chars();
        let first = digits.next().unwrap_or('0');
        write!(
            f,
            "{}{first}.{}e{}{}",
            self.sign,
            digits.as_str(),
            self.exponent_sign,
            self.exponent
        )
    }
}

/// Canonical value of a numeric literal.
#[derive(Clone, Debug)]
pub enum CanonicalNumber {
    Finite(FiniteNumber),
    NaN,
    PositiveInfinity,
    NegativeInfinity,
}

impl CanonicalNumber {
    /// The single canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::Finite(FiniteNumber::zero())
    }

    /// Build a value from decimal digits around a point, scaled by a
    /// signed exponent.
    ///
    /// Leading and trailing zeros are trimmed and the exponent adjusted so
    /// the result is normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::{CanonicalNumber, OptionalSign};
    ///
    /// let value = CanonicalNumber::from_digits(
    ///     OptionalSign::Negative,
    ///     "12",
    ///     "50",
    ///     OptionalSign::Positive,
    ///     "3",
    /// )
    /// .unwrap();
    /// assert_eq!(value.to_string(), "-1.25e4");
    /// ```
    ///
    /// # Errors
    /// Returns [`CanonicalError`] when both digit runs are empty, when they
    /// contain a non-decimal character, or when `exponent` is not a decimal
    /// integer without leading zeros.
    pub fn from_digits(
        sign: OptionalSign,
        integer: &str,
        fraction: &str,
        exponent_sign: OptionalSign,
        exponent: &str,
    ) -> Result<Self, CanonicalError> {
        if integer.is_empty() && fraction.is_empty() {
            return Err(CanonicalError::EmptySignificand);
        }
        if let Some(digit) = integer
            .chars()
            .chain(fraction.chars())
            .find(|ch| !ch.is_ascii_digit())
        {
            return Err(CanonicalError::InvalidDigit { digit });
        }
        if !DECIMAL.is_valid_number(exponent, false) {
            return Err(CanonicalError::InvalidExponent {
                exponent: exponent.to_owned(),
            });
        }
        Ok(Self::Finite(FiniteNumber::normalize(
            sign,
            integer,
            fraction,
            exponent_sign,
            exponent,
        )))
    }

    /// Decompose a machine float. NaN and infinities map to the sentinels;
    /// both zeros map to the canonical zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::CanonicalNumber;
    ///
    /// assert_eq!(CanonicalNumber::from_float(-1250.0_f64).to_string(), "-1.25e3");
    /// assert!(CanonicalNumber::from_float(f32::NAN).is_nan());
    /// ```
    #[must_use]
    pub fn from_float<F: Float + LowerExp>(value: F) -> Self {
        if value.is_nan() {
            return Self::NaN;
        }
        if value.is_infinite() {
            return if value.is_sign_negative() {
                Self::NegativeInfinity
            } else {
                Self::PositiveInfinity
            };
        }
        let rendered = format!("{value:e}");
        let (sign, unsigned) = rendered
            .strip_prefix('-')
            .map_or((OptionalSign::None, rendered.as_str()), |rest| {
                (OptionalSign::Negative, rest)
            });
        let (mantissa, exponent) = unsigned.split_once('e').unwrap_or((unsigned, "0"));
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let (exponent_sign, exponent) = exponent
            .strip_prefix('-')
            .map_or((OptionalSign::None, exponent), |rest| {
                (OptionalSign::Negative, rest)
            });
        Self::from_digits(sign, integer, fraction, exponent_sign, exponent).unwrap_or_else(|error| {
            log::warn!("float rendering {rendered:?} did not decompose: {error}");
            Self::NaN
        })
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(number) if number.is_zero())
    }

    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::PositiveInfinity | Self::NegativeInfinity)
    }

    /// Whether the value lies below zero. NaN is not negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        match self {
            Self::Finite(number) => number.is_negative(),
            Self::NegativeInfinity => true,
            Self::NaN | Self::PositiveInfinity => false,
        }
    }

    /// The finite payload, if any.
    #[must_use]
    pub const fn as_finite(&self) -> Option<&FiniteNumber> {
        match self {
            Self::Finite(number) => Some(number),
            Self::NaN | Self::PositiveInfinity | Self::NegativeInfinity => None,
        }
    }

    /// The value with its sign reversed. Zero and NaN are their own
    /// opposites.
    #[must_use]
    pub fn negated(&self) -> Self {
        match self {
            Self::Finite(number) => Self::Finite(number.negated()),
            Self::NaN => Self::NaN,
            Self::PositiveInfinity => Self::NegativeInfinity,
            Self::NegativeInfinity => Self::PositiveInfinity,
        }
    }

    /// The exact value as an `i64`, when it is an integer in range.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::CanonicalNumber;
    ///
    /// let value: CanonicalNumber = "-4.2e2".parse().unwrap();
    /// assert_eq!(value.to_i64(), Some(-420));
    /// let half: CanonicalNumber = "5.e-1".parse().unwrap();
    /// assert_eq!(half.to_i64(), None);
    /// ```
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.as_finite()
            .and_then(FiniteNumber::to_i128)
            .and_then(|value| i64::try_from(value).ok())
    }

    /// The exact value as an `i32`, when it is an integer in range.
    #[must_use]
    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|value| i32::try_from(value).ok())
    }
}

impl From<i64> for CanonicalNumber {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            OptionalSign::Negative
        } else {
            OptionalSign::None
        };
        let digits = value.unsigned_abs().to_string();
        Self::Finite(FiniteNumber::normalize(
            sign,
            &digits,
            "",
            OptionalSign::None,
            "0",
        ))
    }
}

impl From<i32> for CanonicalNumber {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<FiniteNumber> for CanonicalNumber {
    fn from(number: FiniteNumber) -> Self {
        Self::Finite(number)
    }
}

impl PartialEq for CanonicalNumber {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => left == right,
            (Self::PositiveInfinity, Self::PositiveInfinity)
            | (Self::NegativeInfinity, Self::NegativeInfinity) => true,
            _ => false,
        }
    }
}

impl fmt::Display for CanonicalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(number) => fmt::Display::fmt(number, f),
            Self::NaN => f.write_str("NaN"),
            Self::PositiveInfinity => f.write_str("Infinity"),
            Self::NegativeInfinity => f.write_str("-Infinity"),
        }
    }
}
