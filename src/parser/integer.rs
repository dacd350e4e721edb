//! Integer grammar for one radix.
//!
//! `[+-]? digits suffix`, where the suffix is `:B`, `:O` or `:H` for the
//! non-decimal radices and absent for decimal. A suffixed grammar records
//! success only once its whole suffix has been read; the decimal grammar
//! records success after every digit.

use crate::canonical::CanonicalNumber;
use crate::formatted::{FormattedInteger, FormattedNumber};
use crate::integer_base::{DECIMAL, IntegerBase, convert};
use crate::sign::OptionalSign;
use crate::tokenizer::Span;

use super::BuildError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Start,
    LeadingZeros,
    Digits,
    Suffix { matched: usize },
    Stopped,
}

/// Automaton recognising an integer written in `base`.
#[derive(Clone, Debug)]
pub(super) struct IntegerScanner {
    base: &'static IntegerBase,
    state: State,
    sign: OptionalSign,
    digits: Span,
    leading_zeros: usize,
    length_successful: Option<usize>,
}

impl IntegerScanner {
    pub(super) const fn new(base: &'static IntegerBase) -> Self {
        Self {
            base,
            state: State::Start,
            sign: OptionalSign::None,
            digits: 0..0,
            leading_zeros: 0,
            length_successful: None,
        }
    }

    pub(super) const fn base(&self) -> &'static IntegerBase {
        self.base
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

    fn is_suffixed(&self) -> bool {
        !self.base.suffix().is_empty()
    }

    fn transition(&mut self, state: State, offset: usize, ch: char) -> State {
        let end = offset + ch.len_utf8();
        match state {
            State::Start => {
                if let Some(sign) = OptionalSign::from_char(ch) {
                    self.sign = sign;
                    self.digits = end..end;
                    State::LeadingZeros
                } else {
                    self.transition(State::LeadingZeros, offset, ch)
                }
            }
            State::LeadingZeros | State::Digits => match self.base.is_valid_digit(ch) {
                Some(value) => {
                    self.digits.end = end;
                    if !self.is_suffixed() {
                        self.length_successful = Some(end);
                    }
                    if value == 0 && state == State::LeadingZeros {
                        self.leading_zeros += 1;
                        State::LeadingZeros
                    } else {
                        State::Digits
                    }
                }
                None if self.is_suffixed() && !self.digits.is_empty() => {
                    self.transition(State::Suffix { matched: 0 }, offset, ch)
                }
                None => State::Stopped,
            },
            State::Suffix { matched } => {
                let suffix = self.base.suffix();
                if suffix.chars().nth(matched) != Some(ch) {
                    return State::Stopped;
                }
                let matched = matched + 1;
                if matched == suffix.chars().count() {
                    self.length_successful = Some(end);
                    State::Stopped
                } else {
                    State::Suffix { matched }
                }
            }
            State::Stopped => State::Stopped,
        }
    }

    /// Build the literal recognised over `text`.
    pub(super) fn build(&self, text: &str) -> Result<FormattedNumber, BuildError> {
        let length = self.length_successful.ok_or(BuildError::NoMatch)?;
        let digit_count = self.digits.len();
        let leading_zeros = if self.leading_zeros == digit_count {
            self.leading_zeros.saturating_sub(1)
        } else {
            self.leading_zeros
        };
        let integer_span = self.digits.start + leading_zeros..self.digits.end;
        let integer_text = slice(text, integer_span)?;
        let decimal = convert(integer_text, self.base, &DECIMAL)?;
        let canonical =
            CanonicalNumber::from_digits(self.sign, &decimal, "", OptionalSign::None, "0")?;
        Ok(FormattedNumber::Integer(FormattedInteger::new(
            self.base.radix(),
            self.sign,
            leading_zeros,
            integer_text.to_owned(),
            slice(text, length..text.len())?.to_owned(),
            canonical,
        )))
    }
}

pub(super) fn slice(text: &str, span: Span) -> Result<&str, BuildError> {
    text.get(span.clone())
        .ok_or(BuildError::OutOfBounds { span })
}
