//! Integration tests for converting digit strings between radices.

use formatted_number::{BaseError, Radix, integer_base::convert};
use rstest::rstest;

#[rstest]
#[case::binary("1011")]
#[case::octal("755")]
#[case::decimal("65535")]
#[case::hexadecimal("C0FFEE")]
fn conversions_round_trip(#[case] digits: &str) {
    for from in Radix::ALL {
        if !from.base().is_valid_number(digits, false) {
            continue;
        }
        for to in Radix::ALL {
            let there = convert(digits, from.base(), to.base());
            let back = there.and_then(|text| convert(&text, to.base(), from.base()));
            assert_eq!(back.as_deref(), Ok(digits), "{digits} in {from:?} via {to:?}");
        }
    }
}

#[rstest]
fn leading_zeros_are_normalized_on_both_sides() {
    let there = convert("000101", Radix::Binary.base(), Radix::Hexadecimal.base());
    assert_eq!(there.as_deref(), Ok("5"));
    let back = convert("5", Radix::Hexadecimal.base(), Radix::Binary.base());
    assert_eq!(back.as_deref(), Ok("101"));
}

#[rstest]
fn contract_violations_are_reported() {
    assert_eq!(
        convert("12", Radix::Binary.base(), Radix::Decimal.base()),
        Err(BaseError::InvalidDigit {
            digit: '2',
            radix: 2
        })
    );
    assert_eq!(Radix::try_from(3), Err(BaseError::UnsupportedRadix { radix: 3 }));
}
