//! Assertion helpers for verifying scanned literals in tests.

use crate::{CanonicalNumber, FormattedNumber, parse};

/// Assert that scanning `text` reproduces it through both `Display` and the
/// syntax tree.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use formatted_number::test_util::assert_round_trip;
/// assert_round_trip("-0012.5e3 tail");
/// # }
/// ```
///
/// # Panics
/// Panics if either rendering differs from `text`.
#[track_caller]
pub fn assert_round_trip(text: &str) {
    let number = parse(text);
    assert_eq!(number.to_string(), text, "display of {number:?}");
    assert_eq!(
        number.syntax().text().to_string(),
        text,
        "syntax tree of {number:?}"
    );
}

/// Assert that `number` carries the canonical value printed as `expected`.
///
/// # Panics
/// Panics if the canonical text differs.
#[track_caller]
pub fn assert_canonical(number: &FormattedNumber, expected: &str) {
    assert_eq!(
        number.canonical().to_string(),
        expected,
        "canonical value of {:?}",
        number.to_string()
    );
}

/// Assert that every text in `texts` scans to the same canonical value as
/// `expected`.
///
/// # Panics
/// Panics on the first text whose value differs.
#[track_caller]
pub fn assert_same_value(texts: &[&str], expected: &CanonicalNumber) {
    for text in texts {
        assert_eq!(parse(text).canonical(), expected, "value of {text:?}");
    }
}
