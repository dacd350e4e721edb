//! Optional sign attached to a significand or an exponent.
//!
//! `None` and `Positive` denote the same value. They are kept apart so a
//! parsed literal can reproduce whether an explicit `+` was written.

use std::fmt;

/// Sign as it appeared in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OptionalSign {
    /// No sign character was present.
    #[default]
    None,
    /// An explicit `+`.
    Positive,
    /// An explicit `-`.
    Negative,
}

impl OptionalSign {
    /// Recognise a sign character.
    ///
    /// # Examples
    ///
    /// ```
    /// use formatted_number::OptionalSign;
    ///
    /// assert_eq!(OptionalSign::from_char('-'), Some(OptionalSign::Negative));
    /// assert_eq!(OptionalSign::from_char('x'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Positive),
            '-' => Some(Self::Negative),
            _ => None,
        }
    }

    /// The source text of the sign, empty for [`OptionalSign::None`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::Negative)
    }

    /// Collapse `Positive` into `None`, the only forms a canonical value
    /// stores.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Negative => Self::Negative,
            Self::None | Self::Positive => Self::None,
        }
    }

    /// The opposite sign in canonical form.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::None,
            Self::None | Self::Positive => Self::Negative,
        }
    }
}

impl fmt::Display for OptionalSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::none(OptionalSign::None, OptionalSign::None)]
    #[case::positive(OptionalSign::Positive, OptionalSign::None)]
    #[case::negative(OptionalSign::Negative, OptionalSign::Negative)]
    fn normalization_drops_explicit_plus(
        #[case] sign: OptionalSign,
        #[case] expected: OptionalSign,
    ) {
        assert_eq!(sign.normalized(), expected);
    }

    #[rstest]
    fn display_matches_source_text() {
        assert_eq!(OptionalSign::Positive.to_string(), "+");
        assert_eq!(OptionalSign::None.to_string(), "");
        assert_eq!(OptionalSign::Negative.flipped(), OptionalSign::None);
        assert_eq!(OptionalSign::Positive.flipped(), OptionalSign::Negative);
    }
}
