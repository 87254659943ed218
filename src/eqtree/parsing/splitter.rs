//! Relation splitting
//!
//! Scans a token stream left to right for the first relational operator at
//! the top nesting level and divides the stream around it. Depth counts
//! parentheses, braces, and square brackets; absolute value bars toggle an
//! inside flag since they pair rather than nest. Relationals inside a
//! piecewise body therefore never split the line: they sit behind the
//! opening brace.

use std::ops::Range;

use super::ParseError;
use crate::eqtree::ast::RelOp;
use crate::eqtree::lexing::Token;

/// One line divided around its top-level relation.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLine {
    pub lhs: Vec<(Token, Range<usize>)>,
    pub relation: RelOp,
    pub relation_span: Range<usize>,
    pub rhs: Vec<(Token, Range<usize>)>,
}

/// Split `tokens` at the first top-level relational operator.
///
/// Returns [`ParseError::NoRelationFound`] when no relational sits at depth
/// zero; the caller decides whether that is an error or a bare-expression
/// line. Unbalanced brackets are not detected here, the expression parser
/// reports them with better positions.
pub fn split_relation(tokens: &[(Token, Range<usize>)]) -> Result<SplitLine, ParseError> {
    let mut depth: usize = 0;
    let mut inside_bars = false;

    for (index, (token, span)) in tokens.iter().enumerate() {
        if token.is_opening_bracket() {
            depth += 1;
        } else if token.is_closing_bracket() {
            depth = depth.saturating_sub(1);
        } else if matches!(token, Token::Pipe) {
            inside_bars = !inside_bars;
        } else if let Token::Relational(relation) = token {
            if depth == 0 && !inside_bars {
                return Ok(SplitLine {
                    lhs: tokens[..index].to_vec(),
                    relation: *relation,
                    relation_span: span.clone(),
                    rhs: tokens[index + 1..].to_vec(),
                });
            }
        }
    }

    Err(ParseError::NoRelationFound)
}
