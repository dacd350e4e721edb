//! Green tree construction for scanned literals.
//!
//! Every stored fragment becomes one token, grouped under nodes for the
//! significand and exponent of reals. Empty fragments produce no token, so
//! the tree text is exactly the literal's display text.

use rowan::{GreenNode, GreenNodeBuilder};

use super::FormattedNumber;
use crate::SyntaxKind;

fn push_token(builder: &mut GreenNodeBuilder<'_>, kind: SyntaxKind, text: &str) {
    if !text.is_empty() {
        builder.token(kind.into(), text);
    }
}

fn push_char(builder: &mut GreenNodeBuilder<'_>, kind: SyntaxKind, ch: Option<char>) {
    if let Some(ch) = ch {
        let mut buffer = [0; 4];
        push_token(builder, kind, ch.encode_utf8(&mut buffer));
    }
}

pub(super) fn build_green(number: &FormattedNumber) -> GreenNode {
    let mut builder = GreenNodeBuilder::new();
    match number {
        FormattedNumber::Invalid(_) => {
            builder.start_node(SyntaxKind::N_INVALID.into());
        }
        FormattedNumber::Integer(integer) => {
            builder.start_node(SyntaxKind::N_INTEGER.into());
            push_token(&mut builder, SyntaxKind::T_SIGN, integer.sign.as_str());
            push_token(
                &mut builder,
                SyntaxKind::T_LEADING_ZEROS,
                &"0".repeat(integer.leading_zero_count),
            );
            push_token(&mut builder, SyntaxKind::T_DIGITS, &integer.integer_text);
            push_token(&mut builder, SyntaxKind::T_SUFFIX, integer.suffix());
        }
        FormattedNumber::Real(real) => {
            let parts = &real.parts;
            builder.start_node(SyntaxKind::N_REAL.into());
            builder.start_node(SyntaxKind::N_SIGNIFICAND.into());
            push_token(&mut builder, SyntaxKind::T_SIGN, parts.sign.as_str());
            push_token(
                &mut builder,
                SyntaxKind::T_LEADING_ZEROS,
                &"0".repeat(parts.leading_zero_count),
            );
            push_token(&mut builder, SyntaxKind::T_DIGITS, &parts.integer_text);
            push_char(&mut builder, SyntaxKind::T_SEPARATOR, parts.separator);
            push_token(
                &mut builder,
                SyntaxKind::T_FRACTION_DIGITS,
                &parts.fractional_text,
            );
            builder.finish_node();
            if parts.exponent_marker.is_some() {
                builder.start_node(SyntaxKind::N_EXPONENT.into());
                push_char(&mut builder, SyntaxKind::T_EXPONENT_MARKER, parts.exponent_marker);
                push_token(
                    &mut builder,
                    SyntaxKind::T_EXPONENT_SIGN,
                    parts.exponent_sign.as_str(),
                );
                push_token(
                    &mut builder,
                    SyntaxKind::T_EXPONENT_DIGITS,
                    &parts.exponent_text,
                );
                builder.finish_node();
            }
        }
    }
    push_token(&mut builder, SyntaxKind::T_INVALID, number.invalid_text());
    builder.finish_node();
    builder.finish()
}
