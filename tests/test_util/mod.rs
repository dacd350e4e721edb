//! Shared test utilities for integration tests.
//!
//! These helpers mirror a subset of `formatted_number::test_util` without
//! requiring the `test-support` feature, so integration tests compile
//! against the published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use formatted_number::{CanonicalNumber, FormattedNumber, parse};

/// Read canonical text, panicking with the offending input on failure.
#[track_caller]
pub fn canonical(text: &str) -> CanonicalNumber {
    text.parse()
        .unwrap_or_else(|err| panic!("{text:?} is not canonical text: {err}"))
}

/// Scan `text` and check that it reproduces itself.
#[track_caller]
pub fn scan(text: &str) -> FormattedNumber {
    let number = parse(text);
    assert_eq!(number.to_string(), text, "display of {number:?}");
    assert_eq!(number.syntax().text().to_string(), text, "tree of {number:?}");
    number
}

/// Short name of the literal variant, for table-driven assertions.
pub fn variant(number: &FormattedNumber) -> &'static str {
    match number {
        FormattedNumber::Invalid(_) => "invalid",
        FormattedNumber::Integer(_) => "integer",
        FormattedNumber::Real(_) => "real",
    }
}
