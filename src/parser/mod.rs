//! Longest-match scanner for numeric literals.
//!
//! Five automata read the input in lockstep: binary, octal, decimal and
//! hexadecimal integers, then reals. Each stops on the first character it
//! cannot consume and remembers the longest prefix it accepted. The
//! longest prefix wins; on equal length the automaton listed first wins.
//! Whatever follows the winning prefix is kept verbatim as trailing text,
//! and input no automaton accepts becomes an invalid literal.

mod integer;
mod options;
mod real;

#[cfg(test)]
mod tests;

pub use options::ParseOptions;

use thiserror::Error;

use crate::canonical::{CanonicalError, CanonicalNumber};
use crate::formatted::{FormattedInvalid, FormattedNumber};
use crate::integer_base::{BINARY, BaseError, DECIMAL, HEXADECIMAL, OCTAL, Radix};
use crate::tokenizer::Span;

use integer::IntegerScanner;
use real::RealScanner;

/// Failures while turning a recognised prefix into a literal.
#[derive(Debug, Error)]
pub(crate) enum BuildError {
    #[error("automaton recorded no match")]
    NoMatch,
    #[error("span {span:?} out of bounds")]
    OutOfBounds { span: Span },
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
}

#[derive(Clone, Debug)]
enum Automaton {
    Integer(IntegerScanner),
    Real(RealScanner),
}

impl Automaton {
    fn name(&self) -> &'static str {
        match self {
            Self::Integer(scanner) => match scanner.base().radix() {
                Radix::Binary => "binary",
                Radix::Octal => "octal",
                Radix::Decimal => "decimal",
                Radix::Hexadecimal => "hexadecimal",
            },
            Self::Real(_) => "real",
        }
    }

    fn is_running(&self) -> bool {
        match self {
            Self::Integer(scanner) => scanner.is_running(),
            Self::Real(scanner) => scanner.is_running(),
        }
    }

    fn step(&mut self, offset: usize, ch: char) {
        match self {
            Self::Integer(scanner) => scanner.step(offset, ch),
            Self::Real(scanner) => scanner.step(offset, ch),
        }
    }

    fn length_successful(&self) -> Option<usize> {
        match self {
            Self::Integer(scanner) => scanner.length_successful(),
            Self::Real(scanner) => scanner.length_successful(),
        }
    }

    fn build(&self, text: &str) -> Result<FormattedNumber, BuildError> {
        match self {
            Self::Integer(scanner) => scanner.build(text),
            Self::Real(scanner) => scanner.build(text),
        }
    }
}

/// Automata in priority order.
fn automata(options: ParseOptions) -> [Automaton; 5] {
    [
        Automaton::Integer(IntegerScanner::new(&BINARY)),
        Automaton::Integer(IntegerScanner::new(&OCTAL)),
        Automaton::Integer(IntegerScanner::new(&DECIMAL)),
        Automaton::Integer(IntegerScanner::new(&HEXADECIMAL)),
        Automaton::Real(RealScanner::new(options)),
    ]
}

fn invalid(text: &str) -> FormattedNumber {
    FormattedNumber::Invalid(FormattedInvalid::new(
        text.to_owned(),
        CanonicalNumber::NaN,
    ))
}

/// Scan `text` with the default options.
///
/// Never fails: input without a numeric prefix yields
/// [`FormattedNumber::Invalid`].
///
/// # Examples
///
/// ```
/// use formatted_number::{FormattedNumber, parse};
///
/// let number = parse("007x");
/// assert!(matches!(number, FormattedNumber::Integer(_)));
/// assert_eq!(number.leading_zero_count(), 2);
/// assert_eq!(number.invalid_text(), "x");
/// assert_eq!(number.to_string(), "007x");
/// ```
#[must_use]
pub fn parse(text: &str) -> FormattedNumber {
    parse_with(text, &ParseOptions::default())
}

/// Scan `text`, accepting the separator configured in `options`.
#[must_use]
pub fn parse_with(text: &str, options: &ParseOptions) -> FormattedNumber {
    let mut race = automata(*options);
    for (offset, ch) in text.char_indices() {
        let mut running = false;
        for automaton in race.iter_mut().filter(|automaton| automaton.is_running()) {
            automaton.step(offset, ch);
            if automaton.is_running() {
                running = true;
            } else {
                log::trace!(
                    "{} automaton stopped at byte {offset} having matched {:?}",
                    automaton.name(),
                    automaton.length_successful()
                );
            }
        }
        if !running {
            break;
        }
    }

    let mut winner: Option<(&Automaton, usize)> = None;
    for automaton in &race {
        let Some(length) = automaton.length_successful() else {
            continue;
        };
        if winner.is_none_or(|(_, best)| length > best) {
            winner = Some((automaton, length));
        }
    }

    let Some((automaton, length)) = winner else {
        log::debug!("no numeric prefix in {text:?}");
        return invalid(text);
    };
    log::debug!(
        "{} literal matched {length} of {} bytes in {text:?}",
        automaton.name(),
        text.len()
    );
    automaton.build(text).unwrap_or_else(|error| {
        log::warn!("could not build {} literal from {text:?}: {error}", automaton.name());
        invalid(text)
    })
}
