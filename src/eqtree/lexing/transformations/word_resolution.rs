//! Word resolution
//!
//! The raw lexer emits every letter run as one `Word` token, so `xy` and
//! `sin` look the same at that stage. This transformation decides what a
//! word is:
//!
//! - a known function name directly followed by `(` becomes one `Function`
//!   token (`sin(x)`, `log(x)`)
//! - anything else splits into single-letter `Identifier` tokens, so `xy`
//!   means the product `x*y` and an unknown `foo(` is three variables with
//!   the last one called
//!
//! Single-letter words become `Identifier` unconditionally; whether `f(x)`
//! is a call is the parser's decision, not ours.

use std::collections::HashSet;
use std::ops::Range;

use once_cell::sync::Lazy;

use super::super::tokens::Token;

/// Function names the lexer recognizes as callable words.
///
/// The classifier consults this same set: a call to a name outside it is an
/// unknown function and can make an equation functional.
pub static KNOWN_FUNCTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["log", "ln", "exp", "sin", "cos", "tan", "sqrt"]
        .into_iter()
        .collect()
});

/// Resolve every `Word` token into `Function` or `Identifier` tokens.
pub fn word_resolution(tokens: Vec<(Token, Range<usize>)>) -> Vec<(Token, Range<usize>)> {
    let mut result = Vec::with_capacity(tokens.len());

    for (index, (token, span)) in tokens.iter().enumerate() {
        match token {
            Token::Word(word) => {
                let called = matches!(tokens.get(index + 1), Some((Token::LParen, _)));
                if called && word.len() > 1 && KNOWN_FUNCTIONS.contains(word.as_str()) {
                    result.push((Token::Function(word.clone()), span.clone()));
                } else {
                    split_into_identifiers(word, span.start, &mut result);
                }
            }
            other => result.push((other.clone(), span.clone())),
        }
    }

    result
}

/// Emit one single-letter `Identifier` per character, each with its own
/// one-byte span. The letters here are ASCII, so byte arithmetic is exact.
fn split_into_identifiers(
    word: &str,
    start: usize,
    result: &mut Vec<(Token, Range<usize>)>,
) {
    let mut offset = start;
    for ch in word.chars() {
        let end = offset + ch.len_utf8();
        result.push((Token::Identifier(ch.to_string()), offset..end));
        offset = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eqtree::lexing::base_tokenization::tokenize_raw;

    fn resolve(source: &str) -> Vec<Token> {
        word_resolution(tokenize_raw(source).unwrap())
            .into_iter()
            .map(|(token, _)| token)
            .collect()
    }

    #[test]
    fn test_known_function_before_paren_is_promoted() {
        assert_eq!(
            resolve("log(x)"),
            vec![
                Token::Function("log".to_string()),
                Token::LParen,
                Token::Identifier("x".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_known_function_without_call_splits() {
        // "log" with no argument list is just three variables.
        assert_eq!(
            resolve("log"),
            vec![
                Token::Identifier("l".to_string()),
                Token::Identifier("o".to_string()),
                Token::Identifier("g".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_word_splits_even_when_called() {
        assert_eq!(
            resolve("foo(2)"),
            vec![
                Token::Identifier("f".to_string()),
                Token::Identifier("o".to_string()),
                Token::Identifier("o".to_string()),
                Token::LParen,
                Token::Number(2.0),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_single_letter_stays_identifier() {
        assert_eq!(
            resolve("f(x)"),
            vec![
                Token::Identifier("f".to_string()),
                Token::LParen,
                Token::Identifier("x".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_adjacent_letters_split_into_variables() {
        assert_eq!(
            resolve("xy"),
            vec![
                Token::Identifier("x".to_string()),
                Token::Identifier("y".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_identifiers_get_per_letter_spans() {
        let tokens = word_resolution(tokenize_raw("ab").unwrap());
        assert_eq!(tokens[0].1, 0..1);
        assert_eq!(tokens[1].1, 1..2);
    }

    #[test]
    fn test_number_adjacency_is_preserved() {
        // "2x" stays Number then Identifier; the parser inserts the product.
        assert_eq!(
            resolve("2x"),
            vec![Token::Number(2.0), Token::Identifier("x".to_string())]
        );
    }

    #[test]
    fn test_space_before_paren_still_promotes() {
        // Whitespace is skipped during lexing, so promotion keys on the
        // next token and "sin (x)" behaves like "sin(x)".
        assert_eq!(resolve("sin (x)")[0], Token::Function("sin".to_string()));
    }
}
