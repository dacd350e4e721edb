//! `rowan` integration and numeric literal syntax kinds.
//!
//! `SyntaxKind` names every fragment a scanned literal can be split into
//! and the nodes grouping them. The same kinds tag the tokens of canonical
//! text. `NumberLanguage` implements `rowan::Language` through the
//! conversions provided by `num_derive`.

use num_derive::{FromPrimitive as FromPrimitiveDerive, ToPrimitive as ToPrimitiveDerive};
use num_traits::{FromPrimitive, ToPrimitive};
use rowan::Language as RowanLanguage;
use rowan::SyntaxKind as RowanSyntaxKind;

/// Every token or node of a numeric literal tree.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitiveDerive, ToPrimitiveDerive,
)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "kinds follow the rowan naming scheme")]
pub enum SyntaxKind {
    // Tokens
    T_SIGN,
    T_LEADING_ZEROS,
    T_DIGITS,
    T_SUFFIX,
    T_SEPARATOR,
    T_FRACTION_DIGITS,
    T_EXPONENT_MARKER,
    T_EXPONENT_SIGN,
    T_EXPONENT_DIGITS,
    T_INVALID,

    // Keywords of canonical text
    K_NAN,
    K_INFINITY,

    // Nodes
    N_INTEGER,
    N_REAL,
    N_SIGNIFICAND,
    N_EXPONENT,
    N_INVALID,
    N_ERROR,
}

impl From<SyntaxKind> for RowanSyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        NumberLanguage::kind_to_raw(kind)
    }
}

/// Marker type tying [`SyntaxKind`] to `rowan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumberLanguage {}

impl RowanLanguage for NumberLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: RowanSyntaxKind) -> Self::Kind {
        SyntaxKind::from_u16(raw.0).unwrap_or(SyntaxKind::N_ERROR)
    }

    fn kind_to_raw(kind: Self::Kind) -> RowanSyntaxKind {
        RowanSyntaxKind(
            kind.to_u16()
                .unwrap_or_else(|| unreachable!("all SyntaxKind variants map to u16")),
        )
    }
}

/// Syntax node of a numeric literal tree.
pub type SyntaxNode = rowan::SyntaxNode<NumberLanguage>;

/// Syntax token of a numeric literal tree.
pub type SyntaxToken = rowan::SyntaxToken<NumberLanguage>;
