//! Superscript power normalization
//!
//! Rewrites every `Superscript` token into an explicit caret power, so
//! `x²` and `x^2` reach the parser as the same stream. A multi-digit run
//! like `x¹²` was already collapsed to a single `Superscript(12)` token by
//! the lexer, so the rewrite is local: one token becomes two.

use std::ops::Range;

use super::super::tokens::Token;

/// Expand `Superscript(n)` into `Operator('^'), Number(n)`.
///
/// Both synthetic tokens carry the superscript's source span, so errors
/// reported against them still point at the superscript characters.
pub fn superscript_powers(
    tokens: Vec<(Token, Range<usize>)>,
) -> Vec<(Token, Range<usize>)> {
    let mut result = Vec::with_capacity(tokens.len());

    for (token, span) in tokens {
        match token {
            Token::Superscript(value) => {
                result.push((Token::Operator('^'), span.clone()));
                result.push((Token::Number(value), span));
            }
            other => result.push((other, span)),
        }
    }

    result
}
