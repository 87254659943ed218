//! Parsing of token streams into expression trees
//!
//! Parsing happens in two steps. The `splitter` finds the top-level
//! relational operator and divides the stream into a left and a right side;
//! the `expression` parser then turns each side into an [`Expr`] tree by
//! precedence climbing. Piecewise definition lines take a detour through the
//! `piecewise` module, which understands the brace-and-semicolon branch
//! notation.
//!
//! [`Expr`]: crate::eqtree::ast::Expr

pub mod expression;
pub mod piecewise;
pub mod splitter;

use std::fmt;

pub use expression::parse_expression;
pub use piecewise::{function_def, is_piecewise_line, parse_piecewise};
pub use splitter::{split_relation, SplitLine};

use crate::eqtree::lexing::Token;

/// A structural failure in one line.
///
/// Positions are byte offsets into the trimmed line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A token that cannot appear where it did.
    UnexpectedToken { position: usize, token: Token },
    /// An opening bracket without its closer, or a closer without an opener.
    UnbalancedBrackets { position: usize },
    /// An odd or mispaired set of absolute value bars.
    UnbalancedBars { position: usize },
    /// An expression was required but the span is empty.
    EmptyExpression { position: usize },
    /// No relational operator at the top nesting level.
    NoRelationFound,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { position, token } => {
                write!(f, "unexpected token `{}` at byte {}", token, position)
            }
            ParseError::UnbalancedBrackets { position } => {
                write!(f, "unbalanced brackets at byte {}", position)
            }
            ParseError::UnbalancedBars { position } => {
                write!(f, "unbalanced absolute value bars at byte {}", position)
            }
            ParseError::EmptyExpression { position } => {
                write!(f, "empty expression at byte {}", position)
            }
            ParseError::NoRelationFound => {
                write!(f, "no relation found at the top level")
            }
        }
    }
}

impl std::error::Error for ParseError {}
