//! Lexical analysis for canonical numeric text.
//!
//! Canonical values print as `-1.25e4`, `7.e0`, `NaN` or `-Infinity`.
//! [`tokenize`] splits such text into `(SyntaxKind, Span)` pairs using the
//! `logos` crate; words are resolved through a keyword table. Anything not
//! part of the canonical alphabet becomes an `N_ERROR` token.

use logos::Logos;
use phf::phf_map;

use crate::SyntaxKind;

/// Byte range of a token or fragment within its source text.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[A-Za-z]+")]
    Word,
    #[regex(r"[0-9]+")]
    Digits,
    #[token(".")]
    Dot,
    #[token("+")]
    #[token("-")]
    Sign,
}

static KEYWORDS: phf::Map<&'static str, SyntaxKind> = phf_map! {
    "NaN" => SyntaxKind::K_NAN,
    "Infinity" => SyntaxKind::K_INFINITY,
    "e" => SyntaxKind::T_EXPONENT_MARKER,
    "E" => SyntaxKind::T_EXPONENT_MARKER,
};

fn keyword_kind(word: &str) -> Option<SyntaxKind> {
    KEYWORDS.get(word).copied()
}

/// Tokenise canonical numeric text.
///
/// # Examples
///
/// ```rust
/// use formatted_number::{tokenize, SyntaxKind};
///
/// let kinds: Vec<_> = tokenize("-1.5e3").into_iter().map(|(kind, _)| kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         SyntaxKind::T_SIGN,
///         SyntaxKind::T_DIGITS,
///         SyntaxKind::T_SEPARATOR,
///         SyntaxKind::T_DIGITS,
///         SyntaxKind::T_EXPONENT_MARKER,
///         SyntaxKind::T_DIGITS,
///     ]
/// );
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Word => src
                .get(span.clone())
                .and_then(keyword_kind)
                .unwrap_or(SyntaxKind::N_ERROR),
            Token::Digits => SyntaxKind::T_DIGITS,
            Token::Dot => SyntaxKind::T_SEPARATOR,
            Token::Sign => SyntaxKind::T_SIGN,
        };
        out.push((kind, span));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(src: &str) -> Vec<SyntaxKind> {
        tokenize(src).into_iter().map(|(kind, _)| kind).collect()
    }

    #[rstest]
    #[case::nan("NaN", vec![SyntaxKind::K_NAN])]
    #[case::negative_infinity("-Infinity", vec![SyntaxKind::T_SIGN, SyntaxKind::K_INFINITY])]
    #[case::upper_marker("1E5", vec![SyntaxKind::T_DIGITS, SyntaxKind::T_EXPONENT_MARKER, SyntaxKind::T_DIGITS])]
    #[case::unknown_word("1.5x", vec![SyntaxKind::T_DIGITS, SyntaxKind::T_SEPARATOR, SyntaxKind::T_DIGITS, SyntaxKind::N_ERROR])]
    #[case::unknown_char("1 e", vec![SyntaxKind::T_DIGITS, SyntaxKind::N_ERROR, SyntaxKind::T_EXPONENT_MARKER])]
    #[case::empty("", vec![])]
    fn token_kinds(#[case] src: &str, #[case] expected: Vec<SyntaxKind>) {
        assert_eq!(kinds(src), expected, "tokens of {src:?}");
    }

    #[rstest]
    fn spans_cover_the_source() {
        let tokens = tokenize("2.6e1");
        let spans: Vec<Span> = tokens.into_iter().map(|(_, span)| span).collect();
        assert_eq!(spans, vec![0..1, 1..2, 2..3, 3..4, 4..5]);
    }
}
