//! Real number grammar.
//!
//! `[+-]? digits* (SEP digits*)? ([eE] [+-]? [1-9] digits*)?` with at least
//! one significand digit. Without a separator the exponent is mandatory, so
//! plain integers are left to the decimal grammar. An exponent that never
//! reaches a valid first digit is dropped and the match falls back to the
//! text before the marker.

use crate::canonical::CanonicalNumber;
use crate::formatted::{FormattedNumber, FormattedReal, RealParts};
use crate::sign::OptionalSign;
use crate::tokenizer::Span;

use super::integer::slice;
use super::{BuildError, ParseOptions};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    Integer,
    Fraction,
    ExponentSign,
    ExponentFirstDigit,
    ExponentDigits,
    Stopped,
}

/// Automaton recognising a decimal real number.
#[derive(Clone, Debug)]
pub(super) struct RealScanner {
    options: ParseOptions,
    state: State,
    sign: OptionalSign,
    integer: Span,
    leading_zeros: usize,
    significant: bool,
    separator: Option<char>,
    fraction: Span,
    marker: Option<char>,
    exponent_sign: OptionalSign,
    exponent: Span,
    length_successful: Option<usize>,
}

impl RealScanner {
    pub(super) const fn new(options: ParseOptions) -> Self {
        Self {
            options,
            state: State::Start,
            sign: OptionalSign::None,
            integer: 0..0,
            leading_zeros: 0,
            significant: false,
            separator: None,
            fraction: 0..0,
            marker: None,
            exponent_sign: OptionalSign::None,
            exponent: 0..0,
            length_successful: None,
        }
    }

    pub(super) fn is_running(&self) -> bool {
        self.state != State::Stopped
    }

    pub(super) const fn length_successful(&self) -> Option<usize> {
        self.length_successful
    }

    pub(super) fn step(&mut self, offset: usize, ch: char) {
        self.state = self.transition(self.state, offset, ch);
    }

    fn has_digits(&self) -> bool {
        !self.integer.is_empty() || !self.fraction.is_empty()
    }

    fn start_exponent(&mut self, ch: char) -> State {
        self.marker = Some(ch);
        State::ExponentSign
    }

    fn transition(&mut self, state: State, offset: usize, ch: char) -> State {
        let end = offset + ch.len_utf8();
        match state {
            State::Start => {
                if let Some(sign) = OptionalSign::from_char(ch) {
                    self.sign = sign;
                    self.integer = end..end;
                    State::Integer
                } else {
                    self.transition(State::Integer, offset, ch)
                }
            }
            State::Integer => {
                if ch.is_ascii_digit() {
                    if ch == '0' && !self.significant {
                        self.leading_zeros += 1;
                    } else {
                        self.significant = true;
                    }
                    self.integer.end = end;
                    State::Integer
                } else if self.options.is_separator(ch) {
                    self.separator = Some(ch);
                    self.fraction = end..end;
                    if self.has_digits() {
                        self.length_successful = Some(end);
                    }
                    State::Fraction
                } else if matches!(ch, 'e' | 'E') && self.has_digits() {
                    self.start_exponent(ch)
                } else {
                    State::Stopped
                }
            }
            State::Fraction => {
                if ch.is_ascii_digit() {
                    self.fraction.end = end;
                    self.length_successful = Some(end);
                    State::Fraction
                } else if matches!(ch, 'e' | 'E') && self.has_digits() {
                    self.start_exponent(ch)
                } else {
                    State::Stopped
                }
            }
            State::ExponentSign => {
                if let Some(sign) = OptionalSign::from_char(ch) {
                    self.exponent_sign = sign;
                    State::ExponentFirstDigit
                } else {
                    self.transition(State::ExponentFirstDigit, offset, ch)
                }
            }
            State::ExponentFirstDigit => {
                if matches!(ch, '1'..='9') {
                    self.exponent = offset..end;
                    self.length_successful = Some(end);
                    State::ExponentDigits
                } else {
                    State::Stopped
                }
            }
            State::ExponentDigits => {
                if ch.is_ascii_digit() {
                    self.exponent.end = end;
                    self.length_successful = Some(end);
                    State::ExponentDigits
                } else {
                    State::Stopped
                }
            }
            State::Stopped => State::Stopped,
        }
    }

    /// Build the literal recognised over `text`.
    pub(super) fn build(&self, text: &str) -> Result<FormattedNumber, BuildError> {
        let length = self.length_successful.ok_or(BuildError::NoMatch)?;
        let leading_zeros = if self.leading_zeros == self.integer.len() {
            self.leading_zeros.saturating_sub(1)
        } else {
            self.leading_zeros
        };
        let integer_text = slice(text, self.integer.start + leading_zeros..self.integer.end)?;
        let fractional_text = slice(text, self.fraction.clone())?;
        // An exponent only counts once its first digit was accepted.
        let has_exponent = !self.exponent.is_empty();
        let (exponent_marker, exponent_sign, exponent_text) = if has_exponent {
            (
                self.marker,
                self.exponent_sign,
                slice(text, self.exponent.clone())?,
            )
        } else {
            (None, OptionalSign::None, "")
        };
        let canonical = CanonicalNumber::from_digits(
            self.sign,
            integer_text,
            fractional_text,
            exponent_sign,
            if has_exponent { exponent_text } else { "0" },
        )?;
        Ok(FormattedNumber::Real(FormattedReal::new(
            RealParts {
                sign: self.sign,
                leading_zero_count: leading_zeros,
                integer_text: integer_text.to_owned(),
                separator: self.separator,
                fractional_text: fractional_text.to_owned(),
                exponent_marker,
                exponent_sign,
                exponent_text: exponent_text.to_owned(),
            },
            slice(text, length..text.len())?.to_owned(),
            canonical,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(text: &str, options: ParseOptions) -> RealScanner {
        let mut scanner = RealScanner::new(options);
        for (offset, ch) in text.char_indices() {
            if !scanner.is_running() {
                break;
            }
            scanner.step(offset, ch);
        }
        scanner
    }

    #[rstest]
    #[case::fraction("1.5", Some(3))]
    #[case::bare_separator("1.", Some(2))]
    #[case::leading_separator(".5", Some(2))]
    #[case::separator_only(".", None)]
    #[case::integer_only("12", None)]
    #[case::exponent_without_separator("1e5", Some(3))]
    #[case::dangling_marker("1e", None)]
    #[case::zero_exponent("1e0", None)]
    #[case::zero_exponent_after_fraction("1.5e0", Some(3))]
    #[case::signed_exponent("-2.5E-12x", Some(8))]
    #[case::exponent_sign_only("2.5e+", Some(3))]
    #[case::marker_first("e5", None)]
    #[case::separator_then_marker(".e5", None)]
    #[case::comma_rejected("1,5", None)]
    fn records_success(#[case] text: &str, #[case] expected: Option<usize>) {
        assert_eq!(
            run(text, ParseOptions::default()).length_successful(),
            expected,
            "scanning {text:?}"
        );
    }

    #[rstest]
    fn custom_separator_is_accepted_alongside_dot() {
        let options = ParseOptions::default().with_decimal_separator(',');
        assert_eq!(run("1,5", options).length_successful(), Some(3));
        assert_eq!(run("1.5", options).length_successful(), Some(3));
    }

    #[rstest]
    fn multibyte_separator_advances_by_bytes() {
        let options = ParseOptions::default().with_decimal_separator('٫');
        let scanner = run("3٫25", options);
        assert_eq!(scanner.length_successful(), Some("3٫25".len()));
        let Ok(FormattedNumber::Real(real)) = scanner.build("3٫25") else {
            panic!("3٫25 should build a real");
        };
        assert_eq!(real.separator(), Some('٫'));
        assert_eq!(real.fractional_text(), "25");
    }
}
