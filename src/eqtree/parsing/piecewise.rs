//! Piecewise definition parsing
//!
//! A piecewise line has the shape `f(x) = { ... }`. The brace body is a
//! semicolon-separated list of segments, each of which is one of:
//!
//! - `expression , condition`: one branch with an explicit condition
//! - `expression`: one branch with the always true condition `Constant(1)`
//! - a bare condition (it contains a top-level relational): attaches to the
//!   branch before it, so `{ x + 1 ; x < 0 }` is a single conditioned
//!   branch, not two
//!
//! Conditions parse as `expr relation expr` into a `Relational` node, or as
//! a bare expression when no relational is present. The `Relational`
//! variant exists solely for these conditions; it never appears elsewhere
//! in a finished record.

use std::ops::Range;

use super::expression::parse_expression;
use super::splitter::{split_relation, SplitLine};
use super::ParseError;
use crate::eqtree::ast::{Branch, Expr, RelOp};
use crate::eqtree::lexing::Token;

/// Match the `name ( variable )` head of a definition line.
///
/// Anything longer than the exact four-token shape (extra arguments, a
/// compound parameter) is not a definition head and parses as an ordinary
/// call expression instead.
pub fn function_def(tokens: &[(Token, Range<usize>)]) -> Option<(String, String)> {
    match tokens {
        [(Token::Identifier(name), _), (Token::LParen, _), (Token::Identifier(variable), _), (Token::RParen, _)] => {
            Some((name.clone(), variable.clone()))
        }
        _ => None,
    }
}

/// True when a split line is a piecewise definition: `f(x)` on the left,
/// `=` as the relation, and a single brace block as the whole right side.
pub fn is_piecewise_line(split: &SplitLine) -> bool {
    split.relation == RelOp::Eq
        && matches!(split.rhs.first(), Some((Token::LBrace, _)))
        && matches!(split.rhs.last(), Some((Token::RBrace, _)))
        && function_def(&split.lhs).is_some()
}

/// Parse a brace-delimited piecewise body into a `Piecewise` node.
///
/// `tokens` is the full right side including both braces.
pub fn parse_piecewise(tokens: &[(Token, Range<usize>)]) -> Result<Expr, ParseError> {
    let (body_start, body) = match brace_body(tokens) {
        Some(parts) => parts,
        None => {
            let position = tokens.first().map(|(_, span)| span.start).unwrap_or(0);
            return Err(ParseError::UnbalancedBrackets { position });
        }
    };
    if body.is_empty() {
        return Err(ParseError::EmptyExpression {
            position: body_start,
        });
    }

    let mut branches: Vec<(Expr, Option<Expr>)> = Vec::new();

    for (fallback, segment) in split_segments(body, body_start) {
        match last_top_level_comma(segment) {
            Some(comma_index) => {
                let comma_span = segment[comma_index].1.clone();
                let expression = parse_expression(&segment[..comma_index], fallback)?;
                let condition = parse_condition(&segment[comma_index + 1..], comma_span.end)?;
                branches.push((expression, Some(condition)));
            }
            None => match top_level_relational(segment) {
                Some(relational_index) => {
                    let condition = parse_condition(segment, fallback)?;
                    match branches.last_mut() {
                        Some((_, slot)) if slot.is_none() => *slot = Some(condition),
                        _ => {
                            let (token, span) = &segment[relational_index];
                            return Err(ParseError::UnexpectedToken {
                                position: span.start,
                                token: token.clone(),
                            });
                        }
                    }
                }
                None => {
                    let expression = parse_expression(segment, fallback)?;
                    branches.push((expression, None));
                }
            },
        }
    }

    Ok(Expr::Piecewise {
        branches: branches
            .into_iter()
            .map(|(expression, condition)| Branch {
                condition: condition.unwrap_or_else(|| Expr::constant(1.0)),
                expression,
            })
            .collect(),
    })
}

/// Strip the outer braces, returning the body and the byte position just
/// after the opening brace (used for empty-body errors).
fn brace_body(
    tokens: &[(Token, Range<usize>)],
) -> Option<(usize, &[(Token, Range<usize>)])> {
    match (tokens.first(), tokens.last()) {
        (Some((Token::LBrace, open)), Some((Token::RBrace, _))) if tokens.len() >= 2 => {
            Some((open.end, &tokens[1..tokens.len() - 1]))
        }
        _ => None,
    }
}

/// Divide the body at top-level semicolons. Each segment is paired with a
/// fallback byte position for empty-segment errors.
fn split_segments<'a>(
    body: &'a [(Token, Range<usize>)],
    first_fallback: usize,
) -> Vec<(usize, &'a [(Token, Range<usize>)])> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut inside_bars = false;
    let mut start = 0;
    let mut fallback = first_fallback;

    for (index, (token, span)) in body.iter().enumerate() {
        if token.is_opening_bracket() {
            depth += 1;
        } else if token.is_closing_bracket() {
            depth = depth.saturating_sub(1);
        } else if matches!(token, Token::Pipe) {
            inside_bars = !inside_bars;
        } else if matches!(token, Token::Semicolon) && depth == 0 && !inside_bars {
            segments.push((fallback, &body[start..index]));
            start = index + 1;
            fallback = span.end;
        }
    }
    segments.push((fallback, &body[start..]));

    segments
}

/// Index of the last top-level comma in a segment, if any. The last one
/// divides expression from condition, so commas inside call argument lists
/// stay invisible.
fn last_top_level_comma(segment: &[(Token, Range<usize>)]) -> Option<usize> {
    let mut depth: usize = 0;
    let mut inside_bars = false;
    let mut found = None;

    for (index, (token, _)) in segment.iter().enumerate() {
        if token.is_opening_bracket() {
            depth += 1;
        } else if token.is_closing_bracket() {
            depth = depth.saturating_sub(1);
        } else if matches!(token, Token::Pipe) {
            inside_bars = !inside_bars;
        } else if matches!(token, Token::Comma) && depth == 0 && !inside_bars {
            found = Some(index);
        }
    }

    found
}

fn top_level_relational(segment: &[(Token, Range<usize>)]) -> Option<usize> {
    let mut depth: usize = 0;
    let mut inside_bars = false;

    for (index, (token, _)) in segment.iter().enumerate() {
        if token.is_opening_bracket() {
            depth += 1;
        } else if token.is_closing_bracket() {
            depth = depth.saturating_sub(1);
        } else if matches!(token, Token::Pipe) {
            inside_bars = !inside_bars;
        } else if matches!(token, Token::Relational(_)) && depth == 0 && !inside_bars {
            return Some(index);
        }
    }

    None
}

/// Parse a condition span: `expr relation expr` becomes a `Relational`
/// node, anything else parses as a bare expression.
fn parse_condition(
    tokens: &[(Token, Range<usize>)],
    fallback: usize,
) -> Result<Expr, ParseError> {
    match split_relation(tokens) {
        Ok(split) => {
            let lhs = parse_expression(&split.lhs, fallback)?;
            let rhs = parse_expression(&split.rhs, split.relation_span.end)?;
            Ok(Expr::relational(split.relation, lhs, rhs))
        }
        Err(ParseError::NoRelationFound) => parse_expression(tokens, fallback),
        Err(error) => Err(error),
    }
}
