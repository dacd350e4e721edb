//! Parsing canonical text back into a [`CanonicalNumber`].
//!
//! The accepted grammar is the one `Display` produces, slightly widened:
//! the integer part may hold several digits, the fractional digits and the
//! exponent may be omitted, and an explicit `+` is allowed. Finite input is
//! normalized, so `12.50e1` reads as `1.25e2`.

use std::str::FromStr;

use chumsky::prelude::*;
use chumsky::Stream;
use thiserror::Error;

use super::{CanonicalError, CanonicalNumber};
use crate::sign::OptionalSign;
use crate::tokenizer::{Span, tokenize};
use crate::SyntaxKind;

/// Failure to read canonical text.
#[derive(Debug, Error)]
pub enum CanonicalTextError {
    /// A character outside the canonical alphabet.
    #[error("unexpected text at {span:?}")]
    Lex { span: Span },
    /// Tokens in an order the grammar does not accept.
    #[error("malformed canonical number: {errors:?}")]
    Syntax { errors: Vec<Simple<SyntaxKind>> },
    /// Digits that do not form a canonical value.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}

/// Finite or infinite value before its sign is applied.
#[derive(Clone, Debug)]
enum Body {
    Infinity,
    Finite {
        integer: Span,
        fraction: Option<Span>,
        exponent: Option<(Option<Span>, Span)>,
    },
}

#[derive(Clone, Debug)]
enum Shape {
    NaN,
    Signed { sign: Option<Span>, body: Body },
}

fn shape() -> impl Parser<SyntaxKind, Shape, Error = Simple<SyntaxKind>> {
    let sign = just(SyntaxKind::T_SIGN)
        .map_with_span(|_, span: Span| span)
        .or_not();
    let digits = just(SyntaxKind::T_DIGITS).map_with_span(|_, span: Span| span);
    let fraction = just(SyntaxKind::T_SEPARATOR).ignore_then(digits.clone().or_not());
    let exponent = just(SyntaxKind::T_EXPONENT_MARKER)
        .ignore_then(sign.clone())
        .then(digits.clone());
    let finite = digits
        .then(fraction.or_not())
        .then(exponent.or_not())
        .map(|((integer, fraction), exponent)| Body::Finite {
            integer,
            fraction: fraction.flatten(),
            exponent,
        });
    let infinity = just(SyntaxKind::K_INFINITY).to(Body::Infinity);
    let signed = sign
        .then(infinity.or(finite))
        .map(|(sign, body)| Shape::Signed { sign, body });
    just(SyntaxKind::K_NAN)
        .to(Shape::NaN)
        .or(signed)
        .then_ignore(end())
}

fn text_of(src: &str, span: Option<Span>) -> &str {
    span.and_then(|span| src.get(span)).unwrap_or_default()
}

fn sign_of(src: &str, span: Option<Span>) -> OptionalSign {
    text_of(src, span)
        .chars()
        .next()
        .and_then(OptionalSign::from_char)
        .unwrap_or_default()
}

impl Shape {
    fn into_canonical(self, src: &str) -> Result<CanonicalNumber, CanonicalError> {
        let (sign, body) = match self {
            Self::NaN => return Ok(CanonicalNumber::NaN),
            Self::Signed { sign, body } => (sign_of(src, sign), body),
        };
        match body {
            Body::Infinity if sign.is_negative() => Ok(CanonicalNumber::NegativeInfinity),
            Body::Infinity => Ok(CanonicalNumber::PositiveInfinity),
            Body::Finite {
                integer,
                fraction,
                exponent,
            } => {
                let (exponent_sign, exponent) = exponent.map_or(
                    (OptionalSign::None, "0"),
                    |(exponent_sign, digits)| {
                        (sign_of(src, exponent_sign), text_of(src, Some(digits)))
                    },
                );
                CanonicalNumber::from_digits(
                    sign,
                    text_of(src, Some(integer)),
                    text_of(src, fraction),
                    exponent_sign,
                    exponent,
                )
            }
        }
    }
}

impl FromStr for CanonicalNumber {
    type Err = CanonicalTextError;

    /// Read canonical text such as `-1.25e4`, `NaN` or `Infinity`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::CanonicalNumber;
    ///
    /// let value: CanonicalNumber = "2.6e1".parse().unwrap();
    /// assert_eq!(value, CanonicalNumber::from(26));
    /// assert!("1.5x".parse::<CanonicalNumber>().is_err());
    /// ```
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(src);
        if let Some((_, span)) = tokens.iter().find(|(kind, _)| *kind == SyntaxKind::N_ERROR) {
            log::debug!("canonical text {src:?} has an unknown token at {span:?}");
            return Err(CanonicalTextError::Lex { span: span.clone() });
        }
        let stream = Stream::from_iter(src.len()..src.len(), tokens.into_iter());
        let shape = shape()
            .parse(stream)
            .map_err(|errors| CanonicalTextError::Syntax { errors })?;
        Ok(shape.into_canonical(src)?)
    }
}
