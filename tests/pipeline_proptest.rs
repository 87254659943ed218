//! Property-based tests for the equation pipeline
//!
//! These cover the properties the pipeline promises regardless of input:
//! parsing never panics, notation variants produce identical trees, degree
//! follows the sum/product/power laws, and canonical ordering is stable
//! under commutative rearrangement.

use proptest::prelude::*;

use eqtree::eqtree::assembling::parse_line;
use eqtree::eqtree::ast::{ordering, Expr};
use eqtree::eqtree::classifying::shape;

/// Map an exponent to its superscript spelling (`12` becomes `¹²`).
fn superscript(exponent: u32) -> String {
    exponent
        .to_string()
        .chars()
        .map(|digit| match digit {
            '0' => '⁰',
            '1' => '¹',
            '2' => '²',
            '3' => '³',
            '4' => '⁴',
            '5' => '⁵',
            '6' => '⁶',
            '7' => '⁷',
            '8' => '⁸',
            _ => '⁹',
        })
        .collect()
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    /// Arbitrary line noise: printable ascii plus the unicode notation the
    /// lexer knows. Most of these lines are invalid; the pipeline must
    /// reject them with an error instead of panicking.
    fn line_noise_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[ -~]{0,40}",
            "[0-9xyz+\\-*/^=<>|(){},; .]{0,40}",
            "[a-z0-9 ²³¹⁴⁵≤≥=+\\-^]{0,30}",
        ]
    }

    fn leaf_strategy() -> impl Strategy<Value = Expr> {
        prop_oneof![
            (-50i32..=50).prop_map(|value| Expr::constant(value as f64)),
            "[a-z]".prop_map(Expr::variable),
        ]
    }

    /// Trees of sums, products, and powers over constant and variable
    /// leaves; the shapes the canonical ordering has to handle.
    fn expr_strategy() -> impl Strategy<Value = Expr> {
        leaf_strategy().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 2..4)
                    .prop_map(|terms| Expr::Sum { terms }),
                prop::collection::vec(inner.clone(), 2..4)
                    .prop_map(|factors| Expr::Product { factors }),
                (inner.clone(), inner)
                    .prop_map(|(base, exponent)| Expr::power(base, exponent)),
            ]
        })
    }

    proptest! {
        #[test]
        fn test_parse_line_never_panics(line in line_noise_strategy()) {
            // Ok or Err are both acceptable; a panic is not.
            let _ = parse_line(&line, 1);
        }

        #[test]
        fn test_single_variable_linear_lines_classify_linear(
            a in -99i32..=99,
            b in -99i32..=99,
            c in -99i32..=99,
        ) {
            let line = format!("{}x + {} = {}", a, b, c);
            let record = parse_line(&line, 1).unwrap();
            assert_eq!(record.equation_type.as_str(), "linear");
            assert_eq!(record.variables, vec!["x".to_string()]);
        }

        #[test]
        fn test_superscripts_parse_like_carets(exponent in 0u32..=99, c in -9i32..=9) {
            let with_superscript =
                parse_line(&format!("x{} + {} = 1", superscript(exponent), c), 1).unwrap();
            let with_caret =
                parse_line(&format!("x^{} + {} = 1", exponent, c), 1).unwrap();
            assert_eq!(with_superscript.lhs, with_caret.lhs);
            assert_eq!(with_superscript.equation_type, with_caret.equation_type);
        }

        #[test]
        fn test_sum_degree_is_the_maximum(
            exponents in prop::collection::vec(0i64..=6, 1..6),
        ) {
            let terms = exponents
                .iter()
                .map(|e| Expr::power(Expr::variable("x"), Expr::constant(*e as f64)))
                .collect();
            let expected = exponents.iter().copied().max();
            assert_eq!(shape::degree(&Expr::sum(terms)), expected);
        }

        #[test]
        fn test_product_degree_is_the_total(
            exponents in prop::collection::vec(0i64..=6, 1..6),
        ) {
            let factors = exponents
                .iter()
                .map(|e| Expr::power(Expr::variable("x"), Expr::constant(*e as f64)))
                .collect();
            let expected: i64 = exponents.iter().sum();
            assert_eq!(shape::degree(&Expr::product(factors)), Some(expected));
        }

        #[test]
        fn test_power_degree_multiplies(inner in 0i64..=5, outer in 0i64..=5) {
            let expr = Expr::power(
                Expr::power(Expr::variable("x"), Expr::constant(inner as f64)),
                Expr::constant(outer as f64),
            );
            assert_eq!(shape::degree(&expr), Some(inner * outer));
        }

        #[test]
        fn test_canonical_is_idempotent(expr in expr_strategy()) {
            let once = ordering::canonical(&expr);
            let twice = ordering::canonical(&once);
            assert_eq!(once, twice);
        }

        #[test]
        fn test_shuffled_sums_are_structurally_equal(
            (terms, shuffled) in prop::collection::vec(leaf_strategy(), 2..5)
                .prop_flat_map(|terms| (Just(terms.clone()), Just(terms).prop_shuffle())),
        ) {
            let left = Expr::Sum { terms };
            let right = Expr::Sum { terms: shuffled };
            assert!(ordering::structurally_equal(&left, &right));
        }

        #[test]
        fn test_variables_report_sorted_and_deduplicated(
            letters in prop::collection::vec("[a-z]", 1..6),
        ) {
            let line = format!("{} = 0", letters.join(" + "));
            let record = parse_line(&line, 1).unwrap();

            let mut expected = letters.clone();
            expected.sort();
            expected.dedup();
            assert_eq!(record.variables, expected);
        }
    }
}

/// Hand-picked inputs that have tripped naive parsers: deep nesting, stray
/// operators, and numbers too large for exact integer handling.
#[cfg(test)]
mod edge_case_tests {
    use super::*;

    #[test]
    fn test_deep_nesting_parses() {
        let record = parse_line("((((((((((x))))))))))", 1).unwrap();
        assert_eq!(record.lhs, Expr::variable("x"));
    }

    #[test]
    fn test_degenerate_lines_error_without_panicking() {
        for line in ["x^^2", "=", "||", ")(", "x = = 3", "x << 3", "+", ","] {
            assert!(parse_line(line, 1).is_err(), "line should fail: {}", line);
        }
    }

    #[test]
    fn test_division_by_zero_is_a_parse_level_non_event() {
        // The tree records the structure; no evaluation happens.
        let record = parse_line("1/0", 1).unwrap();
        assert_eq!(
            record.lhs,
            Expr::product(vec![
                Expr::constant(1.0),
                Expr::power(Expr::constant(0.0), Expr::constant(-1.0)),
            ])
        );
    }

    #[test]
    fn test_enormous_exponents_do_not_overflow_degree() {
        let record = parse_line("x^999999999999999999999 = 1", 1).unwrap();
        assert!(shape::degree(&record.lhs).is_none());
    }

    #[test]
    fn test_long_products_keep_every_factor() {
        let record = parse_line("abcdefghij = 0", 1).unwrap();
        match &record.lhs {
            Expr::Product { factors } => assert_eq!(factors.len(), 10),
            other => panic!("expected a product, got {:?}", other),
        }
        assert_eq!(record.variables.len(), 10);
    }
}
