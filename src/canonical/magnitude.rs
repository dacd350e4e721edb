//! Unsigned decimal digit strings of arbitrary length.
//!
//! Exponents are kept as text so that their range is never limited by a
//! machine integer. These helpers provide the little arithmetic the
//! canonical model needs on them: comparison, and shifting a signed
//! exponent by a machine-sized offset.

use std::cmp::Ordering;

/// Compare two digit strings without leading zeros by numeric value.
pub(crate) fn compare(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

fn digit_value(byte: Option<u8>) -> u8 {
    byte.map_or(0, |digit| digit.wrapping_sub(b'0'))
}

fn collect_reversed(reversed: Vec<u8>) -> String {
    let text: String = reversed.into_iter().rev().map(char::from).collect();
    let trimmed = text.trim_start_matches('0');
    if trimmed.is_empty() {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn add(left: &str, right: &str) -> String {
    let mut lhs = left.bytes().rev();
    let mut rhs = right.bytes().rev();
    let mut reversed = Vec::with_capacity(left.len().max(right.len()) + 1);
    let mut carry = 0;
    loop {
        let (l, r) = (lhs.next(), rhs.next());
        if l.is_none() && r.is_none() {
            break;
        }
        let mut sum = digit_value(l) + digit_value(r) + carry;
        carry = 0;
        if sum >= 10 {
            sum -= 10;
            carry = 1;
        }
        reversed.push(b'0' + sum);
    }
    if carry == 1 {
        reversed.push(b'1');
    }
    collect_reversed(reversed)
}

/// `larger - smaller`; the caller guarantees `larger >= smaller`.
fn subtract(larger: &str, smaller: &str) -> String {
    let mut rhs = smaller.bytes().rev();
    let mut reversed = Vec::with_capacity(larger.len());
    let mut borrow = 0;
    for byte in larger.bytes().rev() {
        let subtrahend = digit_value(rhs.next()) + borrow;
        let mut minuend = digit_value(Some(byte));
        borrow = 0;
        if minuend < subtrahend {
            minuend += 10;
            borrow = 1;
        }
        reversed.push(b'0' + (minuend - subtrahend));
    }
    collect_reversed(reversed)
}

/// Add `delta` to the signed value `(negative, digits)`.
///
/// Returns the sign and magnitude of the sum. Zero is never negative.
pub(crate) fn offset(negative: bool, digits: &str, delta: i64) -> (bool, String) {
    if delta == 0 {
        return (negative && digits != "0", digits.to_owned());
    }
    let delta_negative = delta < 0;
    let delta_digits = delta.unsigned_abs().to_string();
    if negative == delta_negative {
        return (negative, add(digits, &delta_digits));
    }
    match compare(digits, &delta_digits) {
        Ordering::Greater => (negative, subtract(digits, &delta_digits)),
        Ordering::Less => (delta_negative, subtract(&delta_digits, digits)),
        Ordering::Equal => (false, "0".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::shorter("99", "100", Ordering::Less)]
    #[case::same_length("123", "122", Ordering::Greater)]
    #[case::equal("7", "7", Ordering::Equal)]
    fn compares_numerically(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(compare(left, right), expected, "{left} vs {right}");
    }

    #[rstest]
    #[case::grow(false, "3", 1, false, "4")]
    #[case::carry(false, "999", 1, false, "1000")]
    #[case::cross_zero(false, "2", -5, true, "3")]
    #[case::to_zero(true, "4", 4, false, "0")]
    #[case::negative_shrinks(true, "10", 3, true, "7")]
    #[case::negative_grows(true, "10", -3, true, "13")]
    #[case::from_zero(false, "0", -3, true, "3")]
    #[case::unchanged(false, "12", 0, false, "12")]
    #[case::huge(false, "99999999999999999999999", 1, false, "100000000000000000000000")]
    fn offsets_signed_values(
        #[case] negative: bool,
        #[case] digits: &str,
        #[case] delta: i64,
        #[case] expected_negative: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(
            offset(negative, digits, delta),
            (expected_negative, expected.to_owned()),
            "{digits} shifted by {delta}"
        );
    }
}
