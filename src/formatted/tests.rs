//! Unit tests for literal rendering and syntax trees.

use super::*;
use crate::language::SyntaxKind;
use crate::parse;
use rstest::rstest;

fn token_kinds(node: &SyntaxNode) -> Vec<SyntaxKind> {
    node.descendants_with_tokens()
        .filter_map(|element| element.into_token())
        .map(|token| token.kind())
        .collect()
}

#[rstest]
#[case::integer("-007:Ox", "-007:O", ":O", "", "x")]
#[case::hex_suffix("1A:H", "1A:H", ":H", "", "")]
#[case::real("+00.50E-3;", "+00.50E", "", "-3", ";")]
#[case::signed_exponent("-12.50e+3x", "-12.50e", "", "+3", "x")]
#[case::unsigned_exponent("2e7", "2e", "", "7", "")]
#[case::no_exponent("1.5", "1.5", "", "", "")]
#[case::invalid("hello", "", "", "", "hello")]
fn parts_split_the_display_text(
    #[case] text: &str,
    #[case] significand: &str,
    #[case] suffix: &str,
    #[case] exponent: &str,
    #[case] invalid: &str,
) {
    let number = parse(text);
    assert_eq!(number.significand_part(), significand, "significand of {text:?}");
    assert_eq!(number.suffix(), suffix, "suffix of {text:?}");
    assert_eq!(number.exponent_part(), exponent, "exponent of {text:?}");
    assert_eq!(number.invalid_text(), invalid, "trailing text of {text:?}");
    assert_eq!(number.to_string(), text);
}

#[rstest]
#[case::decimal("007", "/00/7//")]
#[case::signed_hex("-001A:Hz", "-/00/1A/:H/z")]
#[case::real("+0.5E-3;", "+//0/./5/E/-/3/;")]
#[case::real_without_exponent("12.", "//12/./////")]
#[case::invalid("abc", "NaN/abc")]
#[case::empty("", "NaN/")]
fn diagnostic_lists_every_fragment(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(parse(text).diagnostic(), expected, "{text:?}");
}

#[rstest]
#[case::integer("26", "2.6e1")]
#[case::single_digit("7", "7.0")]
#[case::zero("0", "0.0")]
#[case::negative_fraction("-0.00125", "-1.25e-3")]
#[case::large("1e40", "1.0e40")]
fn canonical_values_render_as_reals(#[case] source: &str, #[case] expected: &str) {
    let canonical = parse(source).canonical().clone();
    let rendered = FormattedNumber::from_canonical(canonical.clone());
    assert!(matches!(rendered, FormattedNumber::Real(_)), "{rendered:?}");
    assert_eq!(rendered.to_string(), expected);
    assert_eq!(rendered.canonical(), &canonical);
    assert_eq!(parse(expected).canonical(), &canonical, "reparsing {expected}");
}

#[rstest]
#[case::nan(CanonicalNumber::NaN, "NaN")]
#[case::infinity(CanonicalNumber::PositiveInfinity, "Infinity")]
#[case::negative_infinity(CanonicalNumber::NegativeInfinity, "-Infinity")]
fn sentinels_render_as_invalid(#[case] canonical: CanonicalNumber, #[case] expected: &str) {
    let rendered = FormattedNumber::from_canonical(canonical);
    assert!(matches!(rendered, FormattedNumber::Invalid(_)));
    assert_eq!(rendered.to_string(), expected);
    assert!(!rendered.is_valid());
}

#[rstest]
fn integer_tree_has_one_token_per_fragment() {
    let tree = parse("-00FF:Hzz").syntax();
    assert_eq!(tree.kind(), SyntaxKind::N_INTEGER);
    assert_eq!(
        token_kinds(&tree),
        vec![
            SyntaxKind::T_SIGN,
            SyntaxKind::T_LEADING_ZEROS,
            SyntaxKind::T_DIGITS,
            SyntaxKind::T_SUFFIX,
            SyntaxKind::T_INVALID,
        ]
    );
    assert_eq!(tree.text().to_string(), "-00FF:Hzz");
}

#[rstest]
fn real_tree_groups_significand_and_exponent() {
    let tree = parse(".5e+7").syntax();
    assert_eq!(tree.kind(), SyntaxKind::N_REAL);
    let nodes: Vec<SyntaxKind> = tree.children().map(|child| child.kind()).collect();
    assert_eq!(nodes, vec![SyntaxKind::N_SIGNIFICAND, SyntaxKind::N_EXPONENT]);
    assert_eq!(
        token_kinds(&tree),
        vec![
            SyntaxKind::T_SEPARATOR,
            SyntaxKind::T_FRACTION_DIGITS,
            SyntaxKind::T_EXPONENT_MARKER,
            SyntaxKind::T_EXPONENT_SIGN,
            SyntaxKind::T_EXPONENT_DIGITS,
        ]
    );
}

#[rstest]
fn empty_input_has_an_empty_tree() {
    let tree = parse("").syntax();
    assert_eq!(tree.kind(), SyntaxKind::N_INVALID);
    assert_eq!(tree.children_with_tokens().count(), 0);
}

#[rstest]
#[case::valid("12", true)]
#[case::trailing("12 ", false)]
#[case::invalid("x", false)]
#[case::empty("", false)]
fn validity_requires_a_complete_match(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(parse(text).is_valid(), expected, "{text:?}");
}
