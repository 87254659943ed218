//! Canonical ordering of expression trees
//!
//! Sums and products are unordered mathematically but ordered in the AST, so
//! `x + 1` and `1 + x` parse to different trees. [`canonical`] rebuilds a
//! tree with every sum's terms and every product's factors sorted under a
//! total structural order, which makes commutative rearrangements compare
//! equal. The classifier uses this to detect identities.

use std::cmp::Ordering;

use super::expression::{Branch, Expr};

/// Total structural order over expression trees.
///
/// Nodes order first by variant rank, then by their scalar fields, then by
/// children left to right (shorter child lists first on a shared prefix).
/// Constants compare with `f64::total_cmp`, so NaN values still order
/// consistently instead of poisoning the sort.
pub fn compare(a: &Expr, b: &Expr) -> Ordering {
    match (a, b) {
        (Expr::Constant { value: va }, Expr::Constant { value: vb }) => va.total_cmp(vb),
        (Expr::Variable { name: na }, Expr::Variable { name: nb }) => na.cmp(nb),
        (Expr::Sum { terms: ta }, Expr::Sum { terms: tb }) => compare_children(ta, tb),
        (Expr::Product { factors: fa }, Expr::Product { factors: fb }) => compare_children(fa, fb),
        (
            Expr::Power {
                base: ba,
                exponent: ea,
            },
            Expr::Power {
                base: bb,
                exponent: eb,
            },
        ) => compare(ba, bb).then_with(|| compare(ea, eb)),
        (Expr::AbsoluteValue { operand: oa }, Expr::AbsoluteValue { operand: ob }) => {
            compare(oa, ob)
        }
        (
            Expr::FunctionCall {
                name: na,
                arguments: aa,
            },
            Expr::FunctionCall {
                name: nb,
                arguments: ab,
            },
        ) => na.cmp(nb).then_with(|| compare_children(aa, ab)),
        (
            Expr::Relational {
                relation: ra,
                lhs: la,
                rhs: rha,
            },
            Expr::Relational {
                relation: rb,
                lhs: lb,
                rhs: rhb,
            },
        ) => ra
            .cmp(rb)
            .then_with(|| compare(la, lb))
            .then_with(|| compare(rha, rhb)),
        (
            Expr::FunctionDef {
                name: na,
                variable: va,
            },
            Expr::FunctionDef {
                name: nb,
                variable: vb,
            },
        ) => na.cmp(nb).then_with(|| va.cmp(vb)),
        (Expr::Piecewise { branches: ba }, Expr::Piecewise { branches: bb }) => {
            compare_branches(ba, bb)
        }
        _ => rank(a).cmp(&rank(b)),
    }
}

fn compare_children(a: &[Expr], b: &[Expr]) -> Ordering {
    for (child_a, child_b) in a.iter().zip(b.iter()) {
        let ordering = compare(child_a, child_b);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

fn compare_branches(a: &[Branch], b: &[Branch]) -> Ordering {
    for (branch_a, branch_b) in a.iter().zip(b.iter()) {
        let ordering = compare(&branch_a.condition, &branch_b.condition)
            .then_with(|| compare(&branch_a.expression, &branch_b.expression));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    a.len().cmp(&b.len())
}

fn rank(expr: &Expr) -> u8 {
    match expr {
        Expr::Constant { .. } => 0,
        Expr::Variable { .. } => 1,
        Expr::Sum { .. } => 2,
        Expr::Product { .. } => 3,
        Expr::Power { .. } => 4,
        Expr::AbsoluteValue { .. } => 5,
        Expr::FunctionCall { .. } => 6,
        Expr::Relational { .. } => 7,
        Expr::FunctionDef { .. } => 8,
        Expr::Piecewise { .. } => 9,
    }
}

/// Rebuild `expr` with sums and products recursively sorted under
/// [`compare`]. Function call arguments and piecewise branches keep their
/// order; only the commutative nodes are sorted.
pub fn canonical(expr: &Expr) -> Expr {
    match expr {
        Expr::Constant { .. } | Expr::Variable { .. } | Expr::FunctionDef { .. } => expr.clone(),
        Expr::Sum { terms } => {
            let mut sorted: Vec<Expr> = terms.iter().map(canonical).collect();
            sorted.sort_by(compare);
            Expr::Sum { terms: sorted }
        }
        Expr::Product { factors } => {
            let mut sorted: Vec<Expr> = factors.iter().map(canonical).collect();
            sorted.sort_by(compare);
            Expr::Product { factors: sorted }
        }
        Expr::Power { base, exponent } => Expr::power(canonical(base), canonical(exponent)),
        Expr::AbsoluteValue { operand } => Expr::absolute(canonical(operand)),
        Expr::FunctionCall { name, arguments } => Expr::FunctionCall {
            name: name.clone(),
            arguments: arguments.iter().map(canonical).collect(),
        },
        Expr::Relational { relation, lhs, rhs } => {
            Expr::relational(*relation, canonical(lhs), canonical(rhs))
        }
        Expr::Piecewise { branches } => Expr::Piecewise {
            branches: branches
                .iter()
                .map(|branch| Branch {
                    condition: canonical(&branch.condition),
                    expression: canonical(&branch.expression),
                })
                .collect(),
        },
    }
}

/// True when two trees are equal up to reordering of sums and products.
pub fn structurally_equal(a: &Expr, b: &Expr) -> bool {
    canonical(a) == canonical(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commuted_sum_is_structurally_equal() {
        let a = Expr::sum(vec![Expr::variable("x"), Expr::constant(1.0)]);
        let b = Expr::sum(vec![Expr::constant(1.0), Expr::variable("x")]);
        assert!(structurally_equal(&a, &b));
    }

    #[test]
    fn test_commuted_nested_product_is_structurally_equal() {
        // 2xy + 1 versus 1 + yx2
        let a = Expr::sum(vec![
            Expr::product(vec![
                Expr::constant(2.0),
                Expr::variable("x"),
                Expr::variable("y"),
            ]),
            Expr::constant(1.0),
        ]);
        let b = Expr::sum(vec![
            Expr::constant(1.0),
            Expr::product(vec![
                Expr::variable("y"),
                Expr::variable("x"),
                Expr::constant(2.0),
            ]),
        ]);
        assert!(structurally_equal(&a, &b));
    }

    #[test]
    fn test_different_trees_stay_unequal() {
        let a = Expr::sum(vec![Expr::variable("x"), Expr::constant(1.0)]);
        let b = Expr::sum(vec![Expr::variable("x"), Expr::constant(2.0)]);
        assert!(!structurally_equal(&a, &b));
    }

    #[test]
    fn test_function_arguments_keep_their_order() {
        // f(x, y) and f(y, x) are different calls.
        let a = Expr::call("f", vec![Expr::variable("x"), Expr::variable("y")]);
        let b = Expr::call("f", vec![Expr::variable("y"), Expr::variable("x")]);
        assert!(!structurally_equal(&a, &b));
    }

    #[test]
    fn test_power_is_not_commutative() {
        let a = Expr::power(Expr::variable("x"), Expr::constant(2.0));
        let b = Expr::power(Expr::constant(2.0), Expr::variable("x"));
        assert!(!structurally_equal(&a, &b));
    }

    #[test]
    fn test_compare_is_a_total_order_on_mixed_variants() {
        let mut nodes = vec![
            Expr::variable("y"),
            Expr::constant(3.0),
            Expr::power(Expr::variable("x"), Expr::constant(2.0)),
            Expr::variable("x"),
            Expr::constant(-1.0),
        ];
        nodes.sort_by(compare);
        assert_eq!(
            nodes,
            vec![
                Expr::constant(-1.0),
                Expr::constant(3.0),
                Expr::variable("x"),
                Expr::variable("y"),
                Expr::power(Expr::variable("x"), Expr::constant(2.0)),
            ]
        );
    }
}
