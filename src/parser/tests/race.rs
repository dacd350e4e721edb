//! Tests for selecting the winner among the competing grammars.

use crate::test_util::assert_canonical;
use crate::{FormattedNumber, Radix, parse};
use rstest::rstest;

#[rstest]
#[case::decimal_only("0", Some(Radix::Decimal))]
#[case::suffix_beats_decimal("10:B", Some(Radix::Binary))]
#[case::octal_suffix("777:O", Some(Radix::Octal))]
#[case::hex_suffix("09:H", Some(Radix::Hexadecimal))]
#[case::broken_suffix_falls_back("10:Bx", Some(Radix::Binary))]
#[case::partial_suffix("10:", Some(Radix::Decimal))]
#[case::separator_beats_decimal("10.", Some(Radix::Decimal))]
#[case::nothing("x10", None)]
fn longest_match_wins(#[case] input: &str, #[case] radix: Option<Radix>) {
    assert_eq!(parse(input).radix(), radix, "{input}");
}

#[rstest]
fn real_wins_when_longer_than_decimal() {
    assert!(matches!(parse("10.5"), FormattedNumber::Real(_)));
    assert!(matches!(parse("10."), FormattedNumber::Real(_)));
    assert!(matches!(parse("10e"), FormattedNumber::Integer(_)));
}

#[rstest]
fn empty_input_is_invalid() {
    let number = parse("");
    assert!(matches!(number, FormattedNumber::Invalid(_)));
    assert_eq!(number.invalid_text(), "");
    assert!(number.canonical().is_nan());
}

#[rstest]
#[case::letters("abc")]
#[case::leading_space(" 1")]
#[case::sign_only("+")]
#[case::double_sign("--1")]
#[case::unicode_digit("٣")]
#[case::infinity_word("Infinity")]
fn unrecognised_input_is_kept_whole(#[case] input: &str) {
    let number = parse(input);
    assert!(matches!(number, FormattedNumber::Invalid(_)), "{input}: {number:?}");
    assert_eq!(number.invalid_text(), input);
    assert_canonical(&number, "NaN");
}

#[rstest]
fn trailing_text_may_be_multibyte() {
    let number = parse("12€ and more");
    assert_canonical(&number, "1.2e1");
    assert_eq!(number.invalid_text(), "€ and more");
}
