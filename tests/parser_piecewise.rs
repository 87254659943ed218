//! Integration tests for piecewise definition lines
//!
//! These run whole lines through `parse_line` and check the finished
//! records: the `FunctionDef` left side, the branch structure on the right,
//! and how definition lines interact with classification and fallbacks.

use eqtree::eqtree::ast::{Branch, EquationType, Expr, RelOp};
use eqtree::eqtree::assembling::{parse_line, LineError};
use eqtree::eqtree::parsing::ParseError;

#[test]
fn test_single_branch_definition() {
    let record = parse_line("f(x) = { x + 1 ; x < 0 }", 1).unwrap();

    assert_eq!(record.equation_type, EquationType::Piecewise);
    assert_eq!(
        record.lhs,
        Expr::FunctionDef {
            name: "f".to_string(),
            variable: "x".to_string(),
        }
    );
    assert_eq!(
        record.rhs,
        Expr::Piecewise {
            branches: vec![Branch {
                condition: Expr::relational(
                    RelOp::Lt,
                    Expr::variable("x"),
                    Expr::constant(0.0),
                ),
                expression: Expr::sum(vec![Expr::variable("x"), Expr::constant(1.0)]),
            }],
        }
    );
    assert_eq!(record.variables, vec!["x".to_string()]);
}

#[test]
fn test_two_branch_definition_with_otherwise() {
    let record = parse_line("g(x) = { x^2 , x >= 0 ; -x }", 1).unwrap();

    let branches = match record.rhs {
        Expr::Piecewise { branches } => branches,
        other => panic!("expected a piecewise right side, got {:?}", other),
    };
    assert_eq!(branches.len(), 2);
    assert_eq!(
        branches[0].condition,
        Expr::relational(RelOp::Ge, Expr::variable("x"), Expr::constant(0.0))
    );
    assert_eq!(
        branches[0].expression,
        Expr::power(Expr::variable("x"), Expr::constant(2.0))
    );
    // The branch without a condition is the default: condition 1.
    assert_eq!(branches[1].condition, Expr::constant(1.0));
    assert_eq!(
        branches[1].expression,
        Expr::product(vec![Expr::constant(-1.0), Expr::variable("x")])
    );
}

#[test]
fn test_definition_shape_wins_over_branch_notation() {
    // A log call inside a branch does not make the line logarithmic; the
    // definition shape decides first.
    let record = parse_line("p(x) = { log(x) , x > 0 ; 0 }", 1).unwrap();
    assert_eq!(record.equation_type, EquationType::Piecewise);
}

#[test]
fn test_parameter_is_recorded_even_without_body_uses() {
    let record = parse_line("c(t) = { 5 , t > 0 ; 0 }", 1).unwrap();
    assert_eq!(record.variables, vec!["t".to_string()]);
}

#[test]
fn test_branch_bodies_may_call_known_functions() {
    let record = parse_line("h(x) = { sin(x) , x > 0 ; 0 }", 1).unwrap();

    let branches = match record.rhs {
        Expr::Piecewise { branches } => branches,
        other => panic!("expected a piecewise right side, got {:?}", other),
    };
    assert_eq!(
        branches[0].expression,
        Expr::call("sin", vec![Expr::variable("x")])
    );
}

#[test]
fn test_call_head_without_braces_is_an_ordinary_equation() {
    // f(x) = x + 1 is functional notation, not a piecewise definition.
    let record = parse_line("f(x) = x + 1", 1).unwrap();
    assert_eq!(record.equation_type, EquationType::Functional);
    assert_eq!(record.lhs, Expr::call("f", vec![Expr::variable("x")]));
}

#[test]
fn test_braces_without_a_definition_head_fail() {
    // Only f(x) = { ... } lines may use braces; elsewhere a brace is not
    // an expression.
    let result = parse_line("x = { 1 }", 1);
    assert!(matches!(
        result,
        Err(LineError::Parse(ParseError::UnexpectedToken { .. }))
    ));
}

#[test]
fn test_empty_brace_body_fails() {
    let result = parse_line("f(x) = { }", 1);
    assert!(matches!(
        result,
        Err(LineError::Parse(ParseError::EmptyExpression { .. }))
    ));
}

#[test]
fn test_trailing_tokens_after_the_brace_block_fail() {
    // The brace block must be the whole right side, so the line is parsed
    // as an ordinary equation and the brace is rejected.
    let result = parse_line("f(x) = { 1 } + 2", 1);
    assert!(matches!(
        result,
        Err(LineError::Parse(ParseError::UnexpectedToken { .. }))
    ));
}
