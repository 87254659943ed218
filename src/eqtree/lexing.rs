//! Lexical analysis of equation lines
//!
//! Lexing is staged: `base_tokenization` produces the raw spanned token
//! stream, then the `transformations` run in order to normalize superscript
//! powers and resolve words. [`tokenize`] is the composed entry point the
//! rest of the pipeline uses; the stages stay public so tests can pin down
//! each one in isolation.

pub mod base_tokenization;
pub mod tokens;
pub mod transformations;

use std::fmt;

pub use base_tokenization::tokenize_raw;
pub use tokens::Token;

/// A lexical failure in one line.
///
/// Positions are byte offsets into the trimmed line.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character no token pattern matches.
    UnrecognizedCharacter { position: usize, character: char },
    /// A number spelled with a trailing dot or more than one dot.
    MalformedNumber { position: usize },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnrecognizedCharacter {
                position,
                character,
            } => write!(
                f,
                "unrecognized character '{}' at byte {}",
                character, position
            ),
            LexError::MalformedNumber { position } => {
                write!(f, "malformed number at byte {}", position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize one line and run every transformation.
///
/// The result is parser-ready: no `Word` or `Superscript` tokens remain.
pub fn tokenize(source: &str) -> Result<Vec<(Token, logos::Span)>, LexError> {
    let raw = tokenize_raw(source)?;
    let powered = transformations::superscript_powers(raw);
    Ok(transformations::word_resolution(powered))
}
