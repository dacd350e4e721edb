//! Integration tests for canonical values: ordering, text and conversions.

mod test_util;

use formatted_number::{CanonicalNumber, FormattedNumber, parse};
use rstest::rstest;
use std::cmp::Ordering;
use test_util::canonical;

#[rstest]
#[case::radix_independent("1A:H", "26", Ordering::Equal)]
#[case::padding("007", "7.0", Ordering::Equal)]
#[case::negative_below_zero("-1e-9", "0", Ordering::Less)]
#[case::small_positive("1e-9", "0", Ordering::Greater)]
#[case::negatives("-2", "-10:B", Ordering::Equal)]
#[case::exponent_dominates("9.99", "1e1", Ordering::Less)]
#[case::significand_breaks_tie("1.25e3", "1.2e3", Ordering::Greater)]
fn scanned_values_compare(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
    let (left_value, right_value) = (parse(left), parse(right));
    assert_eq!(
        left_value.canonical().partial_cmp(right_value.canonical()),
        Some(expected),
        "{left} against {right}"
    );
}

#[rstest]
fn ordering_is_transitive() {
    let values: Vec<CanonicalNumber> = ["-1.e2", "-5.e-1", "0.e0", "3.e-2", "3.1e-2", "4.e1"]
        .into_iter()
        .map(canonical)
        .collect();
    for a in &values {
        for b in &values {
            for c in &values {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[rstest]
fn float_and_integer_paths_agree_with_scanning() {
    assert_eq!(CanonicalNumber::from_float(0.125_f64), *parse("0.125").canonical());
    assert_eq!(CanonicalNumber::from(-4096_i64), *parse("-1000:H").canonical());
}

#[rstest]
fn canonical_text_renders_back_into_a_literal() {
    let value = canonical("-3.0625e2");
    let literal = FormattedNumber::from_canonical(value.clone());
    assert_eq!(literal.to_string(), "-3.0625e2");
    assert_eq!(parse(&literal.to_string()).canonical(), &value);
    assert_eq!(value.to_i32(), None);
    assert_eq!(canonical("-3.0625e4").to_i32(), Some(-30625));
}
