//! Conversion of digit strings between radices through a binary pivot.

use super::{BaseError, IntegerBase};

/// Convert `text`, written in `from`, into the digits of `to`.
///
/// The value is halved in its source radix until nothing is left, which
/// yields its bits; the bits are then folded most significant first into
/// the target radix by doubling. Leading zeros of `text` are dropped, so the
/// result never has one unless it is `0` itself. Letter digits come out in
/// upper case.
///
/// # Examples
///
/// ```
/// use formatted_number::integer_base::{convert, BINARY, DECIMAL, HEXADECIMAL};
///
/// assert_eq!(convert("1A", &HEXADECIMAL, &DECIMAL), Ok("26".to_owned()));
/// assert_eq!(convert("26", &DECIMAL, &BINARY), Ok("11010".to_owned()));
/// ```
///
/// # Errors
/// Returns [`BaseError`] when `text` is empty or is not made of digits of
/// `from`.
pub fn convert(text: &str, from: &IntegerBase, to: &IntegerBase) -> Result<String, BaseError> {
    if text.is_empty() {
        return Err(BaseError::Empty);
    }
    if let Some(digit) = text.chars().find(|&ch| from.is_valid_digit(ch).is_none()) {
        return Err(BaseError::InvalidDigit {
            digit,
            radix: from.radix().value(),
        });
    }

    let trimmed = text.trim_start_matches('0');
    let mut remaining = if trimmed.is_empty() { "0" } else { trimmed }.to_owned();

    // Least significant bit first.
    let mut bits = Vec::new();
    while remaining != "0" {
        let (quotient, odd) = from.divided_by_two(&remaining)?;
        bits.push(odd);
        remaining = quotient;
    }

    let mut converted = String::from("0");
    for &bit in bits.iter().rev() {
        converted = to.multiplied_by_two(&converted, bit)?;
    }
    log::trace!(
        "converted {text} from base {} to {converted} in base {} through {} bits",
        from.radix().value(),
        to.radix().value(),
        bits.len()
    );
    Ok(converted)
}
