//! Structural predicates over expression trees
//!
//! The classifier is a decision list over a handful of shape questions:
//! does the tree call a logarithm anywhere, does any exponent contain a
//! variable, what is the polynomial degree. Everything here is a pure walk
//! over one tree; the decision order lives in the parent module.

use crate::eqtree::ast::Expr;

/// True when `predicate` holds for any node in the tree, the root included.
pub fn any_node(expr: &Expr, predicate: &dyn Fn(&Expr) -> bool) -> bool {
    if predicate(expr) {
        return true;
    }
    match expr {
        Expr::Constant { .. } | Expr::Variable { .. } | Expr::FunctionDef { .. } => false,
        Expr::Sum { terms } => terms.iter().any(|term| any_node(term, predicate)),
        Expr::Product { factors } => factors.iter().any(|factor| any_node(factor, predicate)),
        Expr::Power { base, exponent } => {
            any_node(base, predicate) || any_node(exponent, predicate)
        }
        Expr::AbsoluteValue { operand } => any_node(operand, predicate),
        Expr::FunctionCall { arguments, .. } => arguments
            .iter()
            .any(|argument| any_node(argument, predicate)),
        Expr::Relational { lhs, rhs, .. } => any_node(lhs, predicate) || any_node(rhs, predicate),
        Expr::Piecewise { branches } => branches.iter().any(|branch| {
            any_node(&branch.condition, predicate) || any_node(&branch.expression, predicate)
        }),
    }
}

/// True for finite values with no fractional part.
pub fn is_integer(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

pub fn has_variable(expr: &Expr) -> bool {
    any_node(expr, &|node| matches!(node, Expr::Variable { .. }))
}

/// True when the tree calls any of `names` anywhere.
pub fn calls_any(expr: &Expr, names: &[&str]) -> bool {
    any_node(expr, &|node| match node {
        Expr::FunctionCall { name, .. } => names.contains(&name.as_str()),
        _ => false,
    })
}

/// True when any power in the tree has a variable in its exponent
/// (`2^x`, and also `x^x`).
pub fn has_variable_exponent(expr: &Expr) -> bool {
    any_node(expr, &|node| match node {
        Expr::Power { exponent, .. } => has_variable(exponent),
        _ => false,
    })
}

/// True when any power has a non-integer constant exponent (`x^0.5`).
pub fn has_fractional_exponent(expr: &Expr) -> bool {
    any_node(expr, &|node| match node {
        Expr::Power { exponent, .. } => {
            matches!(&**exponent, Expr::Constant { value } if !is_integer(*value))
        }
        _ => false,
    })
}

pub fn has_absolute_value(expr: &Expr) -> bool {
    any_node(expr, &|node| matches!(node, Expr::AbsoluteValue { .. }))
}

/// True when the node itself is a power of a variable-bearing base with a
/// negative integer constant exponent, the shape `x^-2` parses to.
pub fn is_reciprocal_power(expr: &Expr) -> bool {
    match expr {
        Expr::Power { base, exponent } => {
            has_variable(base)
                && matches!(&**exponent, Expr::Constant { value } if is_integer(*value) && *value < 0.0)
        }
        _ => false,
    }
}

/// True when a reciprocal power appears anywhere in the tree, which is how
/// division by a variable (`1/x`) surfaces after parsing.
pub fn has_reciprocal_power(expr: &Expr) -> bool {
    any_node(expr, &is_reciprocal_power)
}

/// Structural polynomial degree of the tree, or `None` when the tree is
/// not polynomial in its variables.
///
/// The degree is syntactic, not algebraic: no cancellation or evaluation
/// happens, so `0*x` has degree 1 and `x - x` degree 1. Powers contribute
/// `exponent * degree(base)` for non-negative integer constant exponents.
/// A negative integer exponent is polynomial only over a constant base
/// (`2^-1` is a constant; `x^-1` is not a polynomial). Calls, absolute
/// values, and the piecewise shapes have no degree.
pub fn degree(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Constant { .. } => Some(0),
        Expr::Variable { .. } => Some(1),
        Expr::Sum { terms } => {
            let mut highest = 0;
            for term in terms {
                highest = highest.max(degree(term)?);
            }
            Some(highest)
        }
        Expr::Product { factors } => {
            let mut total: i64 = 0;
            for factor in factors {
                total = total.checked_add(degree(factor)?)?;
            }
            Some(total)
        }
        Expr::Power { base, exponent } => {
            let base_degree = degree(base)?;
            match &**exponent {
                Expr::Constant { value }
                    if is_integer(*value) && *value >= 0.0 && *value <= i64::MAX as f64 =>
                {
                    (*value as i64).checked_mul(base_degree)
                }
                Expr::Constant { value } if is_integer(*value) && base_degree == 0 => Some(0),
                _ => None,
            }
        }
        Expr::AbsoluteValue { .. }
        | Expr::FunctionCall { .. }
        | Expr::Relational { .. }
        | Expr::FunctionDef { .. }
        | Expr::Piecewise { .. } => None,
    }
}
