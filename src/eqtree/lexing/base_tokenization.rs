//! Raw tokenization of one equation line
//!
//! This stage runs the logos lexer and nothing else. The token stream it
//! produces still contains `Word` and `Superscript` tokens; the
//! transformations module rewrites those into the forms the parser
//! understands. Keeping this stage dumb means every later stage can be
//! tested against a plain token vector.

use logos::Logos;

use super::tokens::Token;
use super::LexError;

/// Tokenize one line into `(token, span)` pairs.
///
/// Spans are byte ranges into `source`. The only failures at this stage are
/// lexical: a character no token matches, or a malformed number spelling
/// such as `1.2.3` or a trailing `1.`.
pub fn tokenize_raw(source: &str) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(Token::MalformedNumber) => {
                return Err(LexError::MalformedNumber {
                    position: span.start,
                })
            }
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let character = source[span.clone()].chars().next().unwrap_or(' ');
                return Err(LexError::UnrecognizedCharacter {
                    position: span.start,
                    character,
                });
            }
        }
    }

    Ok(tokens)
}
