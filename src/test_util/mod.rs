//! Helpers for scanning literals and asserting over the results in tests.
//!
//! These functions reduce boilerplate when a test needs a specific literal
//! variant or wants to check lexical fidelity and canonical values.

mod assertions;

pub use assertions::{assert_canonical, assert_round_trip, assert_same_value};

use crate::{CanonicalNumber, FormattedInteger, FormattedNumber, FormattedReal, parse};

/// Read canonical text, panicking with the offending input on failure.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use formatted_number::test_util::canonical;
/// assert_eq!(canonical("2.6e1").to_i64(), Some(26));
/// # }
/// ```
///
/// # Panics
/// Panics if `text` is not canonical text.
#[must_use]
#[track_caller]
pub fn canonical(text: &str) -> CanonicalNumber {
    text.parse()
        .unwrap_or_else(|err| panic!("{text:?} is not canonical text: {err}"))
}

/// Scan `text` and return its integer literal.
///
/// # Panics
/// Panics if `text` does not scan as an integer.
#[must_use]
#[track_caller]
pub fn scan_integer(text: &str) -> FormattedInteger {
    match parse(text) {
        FormattedNumber::Integer(integer) => integer,
        other => panic!("{text:?} should scan as an integer, got {other:?}"),
    }
}

/// Scan `text` and return its real literal.
///
/// # Panics
/// Panics if `text` does not scan as a real.
#[must_use]
#[track_caller]
pub fn scan_real(text: &str) -> FormattedReal {
    match parse(text) {
        FormattedNumber::Real(real) => real,
        other => panic!("{text:?} should scan as a real, got {other:?}"),
    }
}
