//! Scanner configuration.

/// Options controlling how literals are recognised.
///
/// The ASCII `.` is always accepted as a decimal separator. The configured
/// `decimal_separator` is accepted alongside it, which is how a
/// culture-specific separator such as `,` is supplied.
///
/// # Examples
///
/// ```
/// use formatted_number::{ParseOptions, parse_with};
///
/// let options = ParseOptions::default().with_decimal_separator(',');
/// let number = parse_with("3,25", &options);
/// assert_eq!(number.canonical().to_string(), "3.25e0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    decimal_separator: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl ParseOptions {
    /// Accept `separator` in addition to `.` between integer and fractional
    /// digits.
    #[must_use]
    pub const fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    #[must_use]
    pub const fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub(crate) fn is_separator(&self, ch: char) -> bool {
        ch == '.' || ch == self.decimal_separator
    }
}
