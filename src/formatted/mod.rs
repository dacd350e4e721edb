//! Scanned literals that remember how they were written.
//!
//! A [`FormattedNumber`] pairs a [`CanonicalNumber`] with the exact source
//! fragments it was read from, so `to_string()` reproduces the input
//! byte for byte while comparisons use the canonical value. `007` prints as
//! `007` yet equals `7`.

mod cst;

use std::fmt;

use crate::canonical::CanonicalNumber;
use crate::integer_base::Radix;
use crate::language::SyntaxNode;
use crate::sign::OptionalSign;

/// Fields shared by every kind of literal.
#[derive(Clone, Debug)]
struct NumberCommon {
    invalid_text: String,
    canonical: CanonicalNumber,
}

/// Input with no numeric prefix.
#[derive(Clone, Debug)]
pub struct FormattedInvalid {
    common: NumberCommon,
}

impl FormattedInvalid {
    pub(crate) const fn new(invalid_text: String, canonical: CanonicalNumber) -> Self {
        Self {
            common: NumberCommon {
                invalid_text,
                canonical,
            },
        }
    }
}

/// An integer literal in one of the four radices.
#[derive(Clone, Debug)]
pub struct FormattedInteger {
    radix: Radix,
    sign: OptionalSign,
    leading_zero_count: usize,
    integer_text: String,
    common: NumberCommon,
}

impl FormattedInteger {
    pub(crate) const fn new(
        radix: Radix,
        sign: OptionalSign,
        leading_zero_count: usize,
        integer_text: String,
        invalid_text: String,
        canonical: CanonicalNumber,
    ) -> Self {
        Self {
            radix,
            sign,
            leading_zero_count,
            integer_text,
            common: NumberCommon {
                invalid_text,
                canonical,
            },
        }
    }

    #[must_use]
    pub const fn radix(&self) -> Radix {
        self.radix
    }

    /// Suffix written after the digits, empty for decimal.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        self.radix.base().suffix()
    }

    #[must_use]
    pub const fn sign(&self) -> OptionalSign {
        self.sign
    }

    #[must_use]
    pub const fn leading_zero_count(&self) -> usize {
        self.leading_zero_count
    }

    /// Digits after the leading zeros, as written.
    #[must_use]
    pub fn integer_text(&self) -> &str {
        &self.integer_text
    }

    #[must_use]
    pub const fn canonical(&self) -> &CanonicalNumber {
        &self.common.canonical
    }
}

/// Source fragments of a real literal.
#[derive(Clone, Debug, Default)]
pub(crate) struct RealParts {
    pub(crate) sign: OptionalSign,
    pub(crate) leading_zero_count: usize,
    pub(crate) integer_text: String,
    pub(crate) separator: Option<char>,
    pub(crate) fractional_text: String,
    pub(crate) exponent_marker: Option<char>,
    pub(crate) exponent_sign: OptionalSign,
    pub(crate) exponent_text: String,
}

/// A decimal real literal with a separator, an exponent, or both.
#[derive(Clone, Debug)]
pub struct FormattedReal {
    parts: RealParts,
    common: NumberCommon,
}

impl FormattedReal {
    pub(crate) const fn new(
        parts: RealParts,
        invalid_text: String,
        canonical: CanonicalNumber,
    ) -> Self {
        Self {
            parts,
            common: NumberCommon {
                invalid_text,
                canonical,
            },
        }
    }

    #[must_use]
    pub const fn sign(&self) -> OptionalSign {
        self.parts.sign
    }

    #[must_use]
    pub const fn leading_zero_count(&self) -> usize {
        self.parts.leading_zero_count
    }

    /// Integer digits after the leading zeros; empty for `.5`.
    #[must_use]
    pub fn integer_text(&self) -> &str {
        &self.parts.integer_text
    }

    /// The separator character actually read.
    #[must_use]
    pub const fn separator(&self) -> Option<char> {
        self.parts.separator
    }

    #[must_use]
    pub fn fractional_text(&self) -> &str {
        &self.parts.fractional_text
    }

    /// `e` or `E` when an exponent was read.
    #[must_use]
    pub const fn exponent_marker(&self) -> Option<char> {
        self.parts.exponent_marker
    }

    #[must_use]
    pub const fn exponent_sign(&self) -> OptionalSign {
        self.parts.exponent_sign
    }

    #[must_use]
    pub fn exponent_text(&self) -> &str {
        &self.parts.exponent_text
    }

    #[must_use]
    pub const fn canonical(&self) -> &CanonicalNumber {
        &self.common.canonical
    }
}

/// A scanned literal.
#[derive(Clone, Debug)]
pub enum FormattedNumber {
    Invalid(FormattedInvalid),
    Integer(FormattedInteger),
    Real(FormattedReal),
}

fn leading_zeros(count: usize) -> String {
    "0".repeat(count)
}

fn push_char(out: &mut String, ch: Option<char>) {
    if let Some(ch) = ch {
        out.push(ch);
    }
}

impl FormattedNumber {
    const fn common(&self) -> &NumberCommon {
        match self {
            Self::Invalid(invalid) => &invalid.common,
            Self::Integer(integer) => &integer.common,
            Self::Real(real) => &real.common,
        }
    }

    /// The canonical value. Invalid literals carry NaN.
    #[must_use]
    pub const fn canonical(&self) -> &CanonicalNumber {
        &self.common().canonical
    }

    /// Text following the recognised prefix.
    #[must_use]
    pub fn invalid_text(&self) -> &str {
        &self.common().invalid_text
    }

    /// Whether a numeric prefix was found and nothing trails it.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_)) && self.invalid_text().is_empty()
    }

    #[must_use]
    pub const fn sign(&self) -> OptionalSign {
        match self {
            Self::Invalid(_) => OptionalSign::None,
            Self::Integer(integer) => integer.sign,
            Self::Real(real) => real.parts.sign,
        }
    }

    #[must_use]
    pub const fn leading_zero_count(&self) -> usize {
        match self {
            Self::Invalid(_) => 0,
            Self::Integer(integer) => integer.leading_zero_count,
            Self::Real(real) => real.parts.leading_zero_count,
        }
    }

    /// Radix of an integer literal; reals are decimal.
    #[must_use]
    pub const fn radix(&self) -> Option<Radix> {
        match self {
            Self::Invalid(_) => None,
            Self::Integer(integer) => Some(integer.radix),
            Self::Real(_) => Some(Radix::Decimal),
        }
    }

    /// Everything up to the exponent digits: sign, leading zeros and
    /// digits, then the radix suffix for integers, or the separator,
    /// fractional digits and exponent marker for reals.
    #[must_use]
    pub fn significand_part(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Invalid(_) => {}
            Self::Integer(integer) => {
                out.push_str(integer.sign.as_str());
                out.push_str(&leading_zeros(integer.leading_zero_count));
                out.push_str(&integer.integer_text);
                out.push_str(integer.suffix());
            }
            Self::Real(real) => {
                let parts = &real.parts;
                out.push_str(parts.sign.as_str());
                out.push_str(&leading_zeros(parts.leading_zero_count));
                out.push_str(&parts.integer_text);
                push_char(&mut out, parts.separator);
                out.push_str(&parts.fractional_text);
                push_char(&mut out, parts.exponent_marker);
            }
        }
        out
    }

    /// Exponent sign and digits as written; empty for integers, invalid
    /// input and reals without an exponent.
    #[must_use]
    pub fn exponent_part(&self) -> String {
        match self {
            Self::Real(real) => {
                format!("{}{}", real.parts.exponent_sign, real.parts.exponent_text)
            }
            Self::Invalid(_) | Self::Integer(_) => String::new(),
        }
    }

    /// Radix suffix as written; empty for decimal, reals and invalid input.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Integer(integer) => integer.suffix(),
            Self::Invalid(_) | Self::Real(_) => "",
        }
    }

    /// Slash-separated breakdown of the stored fragments, for debugging.
    ///
    /// Leading zeros are written out. Invalid input shows its canonical
    /// value before the text.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::parse;
    ///
    /// assert_eq!(parse("-001A:Hz").diagnostic(), "-/00/1A/:H/z");
    /// assert_eq!(parse("1.5e-3").diagnostic(), "//1/./5/e/-/3/");
    /// assert_eq!(parse("abc").diagnostic(), "NaN/abc");
    /// ```
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self {
            Self::Invalid(invalid) => format!(
                "{}/{}",
                invalid.common.canonical, invalid.common.invalid_text
            ),
            Self::Integer(integer) => format!(
                "{}/{}/{}/{}/{}",
                integer.sign,
                leading_zeros(integer.leading_zero_count),
                integer.integer_text,
                integer.suffix(),
                integer.common.invalid_text
            ),
            Self::Real(real) => {
                let parts = &real.parts;
                format!(
                    "{}/{}/{}/{}/{}/{}/{}/{}/{}",
                    parts.sign,
                    leading_zeros(parts.leading_zero_count),
                    parts.integer_text,
                    parts.separator.map(String::from).unwrap_or_default(),
                    parts.fractional_text,
                    parts.exponent_marker.map(String::from).unwrap_or_default(),
                    parts.exponent_sign,
                    parts.exponent_text,
                    real.common.invalid_text
                )
            }
        }
    }

    /// Render a canonical value as a fresh literal.
    ///
    /// Finite values become a real with one integer digit, `.` and at least
    /// one fractional digit, plus an exponent when it is not zero.
    /// Sentinels become an invalid literal whose text is the sentinel name.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::{CanonicalNumber, FormattedNumber};
    ///
    /// let rendered = FormattedNumber::from_canonical(CanonicalNumber::from(-26));
    /// assert_eq!(rendered.to_string(), "-2.6e1");
    /// let seven = FormattedNumber::from_canonical(CanonicalNumber::from(7));
    /// assert_eq!(seven.to_string(), "7.0");
    /// ```
    #[must_use]
    pub fn from_canonical(canonical: CanonicalNumber) -> Self {
        let Some(finite) = canonical.as_finite() else {
            return Self::Invalid(FormattedInvalid::new(canonical.to_string(), canonical));
        };
        let mut digits = finite.significand().chars();
        let integer_text = digits.next().map(String::from).unwrap_or_default();
        let fractional_text = match digits.as_str() {
            "" => "0".to_owned(),
            rest => rest.to_owned(),
        };
        let has_exponent = finite.exponent() != "0";
        let parts = RealParts {
            sign: finite.sign(),
            leading_zero_count: 0,
            integer_text,
            separator: Some('.'),
            fractional_text,
            exponent_marker: has_exponent.then_some('e'),
            exponent_sign: if has_exponent {
                finite.exponent_sign()
            } else {
                OptionalSign::None
            },
            exponent_text: if has_exponent {
                finite.exponent().to_owned()
            } else {
                String::new()
            },
        };
        Self::Real(FormattedReal::new(parts, String::new(), canonical))
    }

    /// Lossless syntax tree of the literal; its text equals `to_string()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::{SyntaxKind, parse};
    ///
    /// let tree = parse("+0.5E3!").syntax();
    /// assert_eq!(tree.kind(), SyntaxKind::N_REAL);
    /// assert_eq!(tree.text().to_string(), "+0.5E3!");
    /// ```
    #[must_use]
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(cst::build_green(self))
    }
}

impl fmt::Display for FormattedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.significand_part(),
            self.exponent_part(),
            self.invalid_text()
        )
    }
}

#[cfg(test)]
mod tests;
