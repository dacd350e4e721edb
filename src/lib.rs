//! Library crate for scanning numeric literals.
//!
//! Recognises binary, octal, decimal and hexadecimal integers and decimal
//! reals at the start of arbitrary text, keeps the exact source fragments
//! for display, and reduces each literal to a canonical decimal value that
//! supports exact comparison.

#![forbid(unsafe_code)]

pub mod canonical;
pub mod formatted;
pub mod integer_base;
pub mod language;
pub mod parser;
pub mod sign;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use canonical::{CanonicalError, CanonicalNumber, CanonicalTextError, FiniteNumber};
pub use formatted::{FormattedInteger, FormattedInvalid, FormattedNumber, FormattedReal};
pub use integer_base::{BaseError, IntegerBase, Radix};
pub use language::{NumberLanguage, SyntaxKind, SyntaxNode, SyntaxToken};
pub use parser::{ParseOptions, parse, parse_with};
pub use sign::OptionalSign;
pub use tokenizer::{Span, tokenize};
