//! Digit radices and the digit-string primitives behind base conversion.
//!
//! Each supported radix is described by one immutable [`IntegerBase`]
//! value: its numeric radix, the literal suffix that marks it in source
//! text, and the digit alphabet. Numbers are plain digit strings of
//! arbitrary length; halving and doubling them digit by digit is enough to
//! move a value between any two radices without a machine integer.

mod convert;

pub use convert::convert;

use num_derive::FromPrimitive as FromPrimitiveDerive;
use num_traits::FromPrimitive;
use thiserror::Error;

/// Upper-case digit alphabet shared by every radix.
const DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// Errors raised when a digit-string primitive is handed text outside its
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    /// The digit string was empty.
    #[error("digit string is empty")]
    Empty,
    /// A character is not a digit of the radix in use.
    #[error("'{digit}' is not a valid base-{radix} digit")]
    InvalidDigit { digit: char, radix: u8 },
    /// The requested radix is not one of 2, 8, 10 or 16.
    #[error("radix {radix} is not supported")]
    UnsupportedRadix { radix: u8 },
}

/// The four supported radices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, FromPrimitiveDerive)]
#[repr(u8)]
pub enum Radix {
    Binary = 2,
    Octal = 8,
    Decimal = 10,
    Hexadecimal = 16,
}

impl Radix {
    /// Radices in the order the scanner gives them priority.
    pub const ALL: [Self; 4] = [Self::Binary, Self::Octal, Self::Decimal, Self::Hexadecimal];

    /// Numeric value of the radix.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The descriptor for this radix.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::Radix;
    ///
    /// assert_eq!(Radix::Hexadecimal.base().suffix(), ":H");
    /// assert_eq!(Radix::Decimal.base().suffix(), "");
    /// ```
    #[must_use]
    pub const fn base(self) -> &'static IntegerBase {
        match self {
            Self::Binary => &BINARY,
            Self::Octal => &OCTAL,
            Self::Decimal => &DECIMAL,
            Self::Hexadecimal => &HEXADECIMAL,
        }
    }
}

impl TryFrom<u8> for Radix {
    type Error = BaseError;

    fn try_from(radix: u8) -> Result<Self, Self::Error> {
        Self::from_u8(radix).ok_or(BaseError::UnsupportedRadix { radix })
    }
}

/// Description of one radix: value, source suffix and digit handling.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct IntegerBase {
    radix: Radix,
    suffix: &'static str,
}

pub const BINARY: IntegerBase = IntegerBase {
    radix: Radix::Binary,
    suffix: ":B",
};

pub const OCTAL: IntegerBase = IntegerBase {
    radix: Radix::Octal,
    suffix: ":O",
};

pub const DECIMAL: IntegerBase = IntegerBase {
    radix: Radix::Decimal,
    suffix: "",
};

pub const HEXADECIMAL: IntegerBase = IntegerBase {
    radix: Radix::Hexadecimal,
    suffix: ":H",
};

fn digit_char(value: u8) -> char {
    DIGITS
        .get(usize::from(value))
        .copied()
        .unwrap_or_else(|| unreachable!("digit value {value} exceeds the hexadecimal alphabet"))
}

impl IntegerBase {
    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Literal suffix marking this radix in source text, empty for decimal.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        self.suffix
    }

    /// Value of `ch` when it is a digit of this radix.
    ///
    /// Letter digits are accepted in either case.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::integer_base::{HEXADECIMAL, OCTAL};
    ///
    /// assert_eq!(HEXADECIMAL.is_valid_digit('b'), Some(11));
    /// assert_eq!(OCTAL.is_valid_digit('8'), None);
    /// ```
    #[must_use]
    pub fn is_valid_digit(&self, ch: char) -> Option<u8> {
        ch.to_digit(u32::from(self.radix.value()))
            .and_then(|value| u8::try_from(value).ok())
    }

    /// Upper-case digit for `value`, or `None` when `value` is not below the
    /// radix.
    #[must_use]
    pub fn to_digit(&self, value: u8) -> Option<char> {
        (value < self.radix.value()).then(|| digit_char(value))
    }

    /// Whether `text` is a non-empty run of digits of this radix.
    ///
    /// A leading zero is only tolerated in a longer run when
    /// `allow_leading_zeros` is set.
    #[must_use]
    pub fn is_valid_number(&self, text: &str, allow_leading_zeros: bool) -> bool {
        if text.is_empty() {
            return false;
        }
        if !allow_leading_zeros && text.len() > 1 && text.starts_with('0') {
            return false;
        }
        text.chars().all(|ch| self.is_valid_digit(ch).is_some())
    }

    /// Whether `text` is a normalized significand: `0`, or digits with
    /// neither a leading nor a trailing zero.
    #[must_use]
    pub fn is_valid_significand(&self, text: &str) -> bool {
        self.is_valid_number(text, false) && (text == "0" || !text.ends_with('0'))
    }

    fn digit_values(&self, digits: &str) -> Result<Vec<u8>, BaseError> {
        if digits.is_empty() {
            return Err(BaseError::Empty);
        }
        digits
            .chars()
            .map(|digit| {
                self.is_valid_digit(digit).ok_or(BaseError::InvalidDigit {
                    digit,
                    radix: self.radix.value(),
                })
            })
            .collect()
    }

    /// Halve a digit string, returning the quotient and whether a remainder
    /// of one was left.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::integer_base::DECIMAL;
    ///
    /// assert_eq!(DECIMAL.divided_by_two("13"), Ok(("6".to_owned(), true)));
    /// assert_eq!(DECIMAL.divided_by_two("1"), Ok(("0".to_owned(), true)));
    /// ```
    ///
    /// # Errors
    /// Returns [`BaseError`] when `digits` is empty or holds a character
    /// that is not a digit of this radix.
    pub fn divided_by_two(&self, digits: &str) -> Result<(String, bool), BaseError> {
        let values = self.digit_values(digits)?;
        let radix = self.radix.value();
        let mut quotient = String::with_capacity(values.len());
        let mut carry = 0_u8;
        for (index, value) in values.iter().enumerate() {
            let current = value + carry;
            let digit = current >> 1;
            carry = if current & 1 == 1 { radix } else { 0 };
            if index == 0 && digit == 0 && values.len() > 1 {
                continue;
            }
            quotient.push(digit_char(digit));
        }
        Ok((quotient, carry != 0))
    }

    /// Double a digit string, adding one when `add_carry` is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::integer_base::HEXADECIMAL;
    ///
    /// assert_eq!(HEXADECIMAL.multiplied_by_two("8", false), Ok("10".to_owned()));
    /// assert_eq!(HEXADECIMAL.multiplied_by_two("7", true), Ok("F".to_owned()));
    /// ```
    ///
    /// # Errors
    /// Returns [`BaseError`] when `digits` is empty or holds a character
    /// that is not a digit of this radix.
    pub fn multiplied_by_two(&self, digits: &str, add_carry: bool) -> Result<String, BaseError> {
        let values = self.digit_values(digits)?;
        let radix = self.radix.value();
        let mut carry = u8::from(add_carry);
        let mut reversed = Vec::with_capacity(values.len() + 1);
        for value in values.iter().rev() {
            let mut current = value * 2 + carry;
            carry = 0;
            if current >= radix {
                current -= radix;
                carry = 1;
            }
            reversed.push(digit_char(current));
        }
        if carry == 1 {
            reversed.push('1');
        }
        Ok(reversed.into_iter().rev().collect())
    }
}
