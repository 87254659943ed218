//! Expression tree types for parsed equations
//!
//! This module defines the AST produced by the expression parser. Every node
//! is a plain value: parents own their children exclusively and the tree is
//! destroyed as one unit. Classification and serialization are implemented as
//! functions over these variants rather than methods on them, so the tree
//! stays free of behavior.
//!
//! The serde representation is the wire schema: nodes serialize as objects
//! tagged by a `"type"` field with snake_case tags (`constant`, `variable`,
//! `sum`, `product`, `power`, `absolute_value`, `function_call`, `relational`,
//! `function_def`, `piecewise`).

use std::collections::BTreeSet;
use std::fmt;

/// A relational operator between two expression sides.
///
/// Serializes as its surface symbol (`"="`, `"<"`, `">"`, `"<="`, `">="`),
/// which is also the form the record's `relation` field uses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum RelOp {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
}

impl RelOp {
    /// The surface symbol for this relation.
    pub fn symbol(&self) -> &'static str {
        match self {
            RelOp::Eq => "=",
            RelOp::Lt => "<",
            RelOp::Gt => ">",
            RelOp::Le => "<=",
            RelOp::Ge => ">=",
        }
    }
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One branch of a piecewise definition: the expression that applies while
/// the condition holds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Branch {
    pub condition: Expr,
    pub expression: Expr,
}

/// A node in the expression tree.
///
/// Invariants maintained by the parser:
/// - `Sum` and `Product` hold at least two children; a single-child sum or
///   product collapses to the child during construction (use [`Expr::sum`]
///   and [`Expr::product`]).
/// - Subtraction is represented as addition of negated terms and division as
///   multiplication by a `Power` with exponent `Constant(-1)`, so `Sum` and
///   `Product` are the only n-ary nodes.
/// - `Relational` appears only inside piecewise branch conditions, and
///   `FunctionDef` only as the left side of a piecewise definition line.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expr {
    Constant {
        #[serde(
            serialize_with = "serialize_constant_value",
            deserialize_with = "deserialize_constant_value"
        )]
        value: f64,
    },
    Variable {
        name: String,
    },
    Sum {
        terms: Vec<Expr>,
    },
    Product {
        factors: Vec<Expr>,
    },
    Power {
        base: Box<Expr>,
        exponent: Box<Expr>,
    },
    AbsoluteValue {
        operand: Box<Expr>,
    },
    FunctionCall {
        name: String,
        arguments: Vec<Expr>,
    },
    Relational {
        relation: RelOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    FunctionDef {
        name: String,
        variable: String,
    },
    Piecewise {
        branches: Vec<Branch>,
    },
}

impl Expr {
    pub fn constant(value: f64) -> Expr {
        Expr::Constant { value }
    }

    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable { name: name.into() }
    }

    /// Build a sum, collapsing a single term to the term itself.
    pub fn sum(mut terms: Vec<Expr>) -> Expr {
        if terms.len() == 1 {
            terms.remove(0)
        } else {
            Expr::Sum { terms }
        }
    }

    /// Build a product, collapsing a single factor to the factor itself.
    pub fn product(mut factors: Vec<Expr>) -> Expr {
        if factors.len() == 1 {
            factors.remove(0)
        } else {
            Expr::Product { factors }
        }
    }

    pub fn power(base: Expr, exponent: Expr) -> Expr {
        Expr::Power {
            base: Box::new(base),
            exponent: Box::new(exponent),
        }
    }

    pub fn absolute(operand: Expr) -> Expr {
        Expr::AbsoluteValue {
            operand: Box::new(operand),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    pub fn relational(relation: RelOp, lhs: Expr, rhs: Expr) -> Expr {
        Expr::Relational {
            relation,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Negate an expression the way the parser folds signs.
    ///
    /// A constant flips its value, a product negates its leading constant
    /// factor (or gains a `Constant(-1)` factor), and anything else is
    /// wrapped as `Product{Constant(-1), expr}`. Sums keep net-signed terms
    /// this way instead of carrying a negation node.
    pub fn negated(self) -> Expr {
        match self {
            Expr::Constant { value } => Expr::Constant { value: -value },
            Expr::Product { mut factors } => {
                if let Some(Expr::Constant { value }) = factors.first() {
                    let negated = -*value;
                    factors[0] = Expr::constant(negated);
                } else {
                    factors.insert(0, Expr::constant(-1.0));
                }
                Expr::Product { factors }
            }
            other => Expr::Product {
                factors: vec![Expr::constant(-1.0), other],
            },
        }
    }

    /// Collect every variable name in the tree into `names`.
    ///
    /// `FunctionDef` contributes its bound variable, so a piecewise line
    /// reports its parameter even when every branch body is constant.
    pub fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Constant { .. } => {}
            Expr::Variable { name } => {
                names.insert(name.clone());
            }
            Expr::Sum { terms } => {
                for term in terms {
                    term.collect_variables(names);
                }
            }
            Expr::Product { factors } => {
                for factor in factors {
                    factor.collect_variables(names);
                }
            }
            Expr::Power { base, exponent } => {
                base.collect_variables(names);
                exponent.collect_variables(names);
            }
            Expr::AbsoluteValue { operand } => operand.collect_variables(names),
            Expr::FunctionCall { arguments, .. } => {
                for argument in arguments {
                    argument.collect_variables(names);
                }
            }
            Expr::Relational { lhs, rhs, .. } => {
                lhs.collect_variables(names);
                rhs.collect_variables(names);
            }
            Expr::FunctionDef { variable, .. } => {
                names.insert(variable.clone());
            }
            Expr::Piecewise { branches } => {
                for branch in branches {
                    branch.condition.collect_variables(names);
                    branch.expression.collect_variables(names);
                }
            }
        }
    }
}

/// Serialize integral constants as JSON integers and everything else as
/// floats, matching the documented schema (`{"type":"constant","value":2}`
/// rather than `2.0`). Beyond 2^53 an f64 no longer represents every
/// integer, so such values stay floats.
fn serialize_constant_value<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn deserialize_constant_value<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(deserializer)
}
