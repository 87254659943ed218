//! Line assembly
//!
//! [`parse_line`] is the whole pipeline for one line: tokenize, split at
//! the relation, parse both sides, collect variables, classify, and build
//! the record. It is a pure function of the line text and the caller's id,
//! so lines can be processed in any order or in parallel.
//!
//! A line with no top-level relation is not an error: it parses as a bare
//! expression and records as `lhs = 0` with the relation `=`. Such records
//! classify as `constant` when the expression has no variables and `other`
//! when it does, without consulting the full classifier.

use std::collections::BTreeSet;
use std::fmt;

use super::ast::{EquationRecord, EquationType, Expr, RelOp};
use super::classifying;
use super::lexing::{self, LexError};
use super::parsing::{self, ParseError, SplitLine};

/// Why one line failed to become a record.
#[derive(Debug, Clone, PartialEq)]
pub enum LineError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Lex(error) => write!(f, "{}", error),
            LineError::Parse(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for LineError {}

impl From<LexError> for LineError {
    fn from(error: LexError) -> Self {
        LineError::Lex(error)
    }
}

impl From<ParseError> for LineError {
    fn from(error: ParseError) -> Self {
        LineError::Parse(error)
    }
}

/// Parse one source line into an equation record.
///
/// `id` is recorded as given; the file processor passes 1-based line
/// numbers. The line is trimmed before lexing and the trimmed text becomes
/// the record's `raw` field.
pub fn parse_line(raw: &str, id: usize) -> Result<EquationRecord, LineError> {
    let trimmed = raw.trim();
    let tokens = lexing::tokenize(trimmed)?;

    match parsing::split_relation(&tokens) {
        Ok(split) => {
            let (lhs, rhs) = parse_sides(&split)?;
            Ok(assemble(id, trimmed, lhs, split.relation, rhs))
        }
        Err(ParseError::NoRelationFound) => {
            let expression = parsing::parse_expression(&tokens, 0)?;
            Ok(assemble_bare(id, trimmed, expression))
        }
        Err(error) => Err(LineError::Parse(error)),
    }
}

fn parse_sides(split: &SplitLine) -> Result<(Expr, Expr), LineError> {
    if let Some((name, variable)) = parsing::function_def(&split.lhs) {
        if parsing::is_piecewise_line(split) {
            let rhs = parsing::parse_piecewise(&split.rhs)?;
            return Ok((Expr::FunctionDef { name, variable }, rhs));
        }
    }
    let lhs = parsing::parse_expression(&split.lhs, 0)?;
    let rhs = parsing::parse_expression(&split.rhs, split.relation_span.end)?;
    Ok((lhs, rhs))
}

fn assemble(id: usize, raw: &str, lhs: Expr, relation: RelOp, rhs: Expr) -> EquationRecord {
    let mut names = BTreeSet::new();
    lhs.collect_variables(&mut names);
    rhs.collect_variables(&mut names);
    let equation_type = classifying::classify(&lhs, &rhs, relation, &names);

    EquationRecord {
        id,
        raw: raw.to_string(),
        variables: names.into_iter().collect(),
        equation_type,
        relation,
        lhs,
        rhs,
    }
}

fn assemble_bare(id: usize, raw: &str, expression: Expr) -> EquationRecord {
    let mut names = BTreeSet::new();
    expression.collect_variables(&mut names);
    let equation_type = if names.is_empty() {
        EquationType::Constant
    } else {
        EquationType::Other
    };

    EquationRecord {
        id,
        raw: raw.to_string(),
        variables: names.into_iter().collect(),
        equation_type,
        relation: RelOp::Eq,
        lhs: expression,
        rhs: Expr::constant(0.0),
    }
}
