//! Structural classification of equations
//!
//! [`classify`] looks at the two parsed sides and assigns one
//! [`EquationType`]. It is a fixed decision list; the first matching rule
//! wins, so order is behavior:
//!
//! 1. function definition with a piecewise right side
//! 2. logarithm call anywhere
//! 3. variable in any exponent (exponential)
//! 4. square root call or fractional exponent (radical)
//! 5. absolute value anywhere
//! 6. non-equality relations (the inequality family, graded by degree)
//! 7. no variables at all (constant)
//! 8. one side names a function of the other (functional)
//! 9. both sides identical up to reordering (identity)
//! 10. polynomial degree ladder (constant, linear, quadratic, polynomial)
//! 11. reciprocal powers (bare: power, embedded: rational)
//! 12. other
//!
//! Notation checks (1 through 5) outrank the relation check on purpose:
//! `|x| < 3` is an absolute value fact first and an inequality second. The
//! identity rule sits before the degree ladder so `x + 1 = 1 + x` never
//! reports as linear.

pub mod shape;

use std::collections::BTreeSet;

use super::ast::{ordering, EquationType, Expr, RelOp};
use super::lexing::transformations::KNOWN_FUNCTIONS;

/// Classify one equation from its parsed sides.
///
/// `variables` is the combined variable set of both sides, as collected for
/// the record.
pub fn classify(
    lhs: &Expr,
    rhs: &Expr,
    relation: RelOp,
    variables: &BTreeSet<String>,
) -> EquationType {
    if matches!(lhs, Expr::FunctionDef { .. }) && matches!(rhs, Expr::Piecewise { .. }) {
        return EquationType::Piecewise;
    }

    if either(lhs, rhs, |side| shape::calls_any(side, &["log", "ln"])) {
        return EquationType::Logarithmic;
    }
    if either(lhs, rhs, shape::has_variable_exponent) {
        return EquationType::Exponential;
    }
    if either(lhs, rhs, |side| shape::calls_any(side, &["sqrt"]))
        || either(lhs, rhs, shape::has_fractional_exponent)
    {
        return EquationType::Radical;
    }
    if either(lhs, rhs, shape::has_absolute_value) {
        return EquationType::Absolute;
    }

    if relation != RelOp::Eq {
        return match (shape::degree(lhs), shape::degree(rhs)) {
            (Some(left), Some(right)) if left.max(right) <= 1 => EquationType::InequalityLinear,
            (Some(_), Some(_)) => EquationType::InequalityPolynomial,
            _ => EquationType::Inequality,
        };
    }

    if variables.is_empty() {
        return EquationType::Constant;
    }

    if is_functional(lhs, rhs) {
        return EquationType::Functional;
    }

    if ordering::structurally_equal(lhs, rhs) {
        return EquationType::Identity;
    }

    if let (Some(left), Some(right)) = (shape::degree(lhs), shape::degree(rhs)) {
        return match left.max(right) {
            0 => EquationType::Constant,
            1 => EquationType::Linear,
            2 => EquationType::Quadratic,
            _ => EquationType::Polynomial,
        };
    }

    if either(lhs, rhs, shape::is_reciprocal_power) {
        return EquationType::Power;
    }
    if either(lhs, rhs, shape::has_reciprocal_power) {
        return EquationType::Rational;
    }

    EquationType::Other
}

fn either(lhs: &Expr, rhs: &Expr, predicate: impl Fn(&Expr) -> bool) -> bool {
    predicate(lhs) || predicate(rhs)
}

/// One side names a function of the other: a call to an unknown name on
/// exactly one side (`f(x) = x + 1`), or a bare variable on exactly one
/// side that does not occur on the other (`y = 2x + 1`). Known function
/// names do not qualify; `sin(x) = x` is not a definition.
fn is_functional(lhs: &Expr, rhs: &Expr) -> bool {
    match (functional_head(lhs), functional_head(rhs)) {
        (true, false) => functional_pair(lhs, rhs),
        (false, true) => functional_pair(rhs, lhs),
        _ => false,
    }
}

fn functional_head(expr: &Expr) -> bool {
    match expr {
        Expr::Variable { .. } => true,
        Expr::FunctionCall { name, .. } => !KNOWN_FUNCTIONS.contains(name.as_str()),
        _ => false,
    }
}

fn functional_pair(head: &Expr, body: &Expr) -> bool {
    match head {
        Expr::FunctionCall { .. } => shape::has_variable(body),
        Expr::Variable { name } => {
            let mut names = BTreeSet::new();
            body.collect_variables(&mut names);
            !names.is_empty() && !names.contains(name)
        }
        _ => false,
    }
}
