//! Mathematical ordering of canonical values.
//!
//! Finite values are ordered without decoding them: sign first, then the
//! signed exponent, then the significand digits, which share an implied
//! scale once exponents agree. Infinities bound the finite values and NaN
//! is unordered.

use std::cmp::Ordering;

use super::{CanonicalNumber, FiniteNumber, magnitude};

fn signum(number: &FiniteNumber) -> i8 {
    if number.is_zero() {
        0
    } else if number.is_negative() {
        -1
    } else {
        1
    }
}

/// Order two non-zero magnitudes, ignoring the sign of the values.
fn compare_magnitudes(left: &FiniteNumber, right: &FiniteNumber) -> Ordering {
    let left_small = left.exponent_sign().is_negative();
    let right_small = right.exponent_sign().is_negative();
    let by_exponent = match (left_small, right_small) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => magnitude::compare(left.exponent(), right.exponent()),
        (true, true) => magnitude::compare(right.exponent(), left.exponent()),
    };
    by_exponent.then_with(|| left.significand().cmp(right.significand()))
}

impl Ord for FiniteNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        let (left_sign, right_sign) = (signum(self), signum(other));
        match left_sign.cmp(&right_sign) {
            Ordering::Equal => match left_sign {
                0 => Ordering::Equal,
                1 => compare_magnitudes(self, other),
                _ => compare_magnitudes(other, self),
            },
            unequal => unequal,
        }
    }
}

impl PartialOrd for FiniteNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialOrd for CanonicalNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => None,
            (Self::Finite(left), Self::Finite(right)) => Some(left.cmp(right)),
            (Self::NegativeInfinity, Self::NegativeInfinity)
            | (Self::PositiveInfinity, Self::PositiveInfinity) => Some(Ordering::Equal),
            (Self::NegativeInfinity, _) | (_, Self::PositiveInfinity) => Some(Ordering::Less),
            (Self::PositiveInfinity, _) | (_, Self::NegativeInfinity) => Some(Ordering::Greater),
        }
    }
}
