//! Equation records and documents
//!
//! An [`EquationRecord`] is the canonical unit of output: one source line
//! with its parsed sides, classification, and variable inventory. An
//! [`EquationDocument`] wraps the records parsed from one input file.

use std::fmt;

use super::expression::{Expr, RelOp};

/// Structural classification of an equation line.
///
/// Serializes in snake_case (`inequality_linear`, `absolute`, ...). The
/// `Parametric` label is part of the published taxonomy but the classifier
/// never produces it: a parametric system needs several coordinated lines
/// and each record is classified from a single line in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationType {
    Linear,
    Quadratic,
    Polynomial,
    Rational,
    Power,
    Radical,
    Exponential,
    Logarithmic,
    Inequality,
    InequalityLinear,
    InequalityPolynomial,
    Piecewise,
    Absolute,
    Parametric,
    Functional,
    Identity,
    Constant,
    Other,
}

impl EquationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquationType::Linear => "linear",
            EquationType::Quadratic => "quadratic",
            EquationType::Polynomial => "polynomial",
            EquationType::Rational => "rational",
            EquationType::Power => "power",
            EquationType::Radical => "radical",
            EquationType::Exponential => "exponential",
            EquationType::Logarithmic => "logarithmic",
            EquationType::Inequality => "inequality",
            EquationType::InequalityLinear => "inequality_linear",
            EquationType::InequalityPolynomial => "inequality_polynomial",
            EquationType::Piecewise => "piecewise",
            EquationType::Absolute => "absolute",
            EquationType::Parametric => "parametric",
            EquationType::Functional => "functional",
            EquationType::Identity => "identity",
            EquationType::Constant => "constant",
            EquationType::Other => "other",
        }
    }
}

impl fmt::Display for EquationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One parsed equation line.
///
/// Field order is the wire order. `id` is the 1-based line number of the
/// source line, `raw` the trimmed source text, and `variables` the sorted,
/// deduplicated names appearing anywhere in either side (piecewise
/// conditions and the defined function's parameter included).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquationRecord {
    pub id: usize,
    pub raw: String,
    pub variables: Vec<String>,
    pub equation_type: EquationType,
    pub relation: RelOp,
    pub lhs: Expr,
    pub rhs: Expr,
}

/// All records parsed from one input file.
///
/// `count` is the number of parsed records, not the number of source lines;
/// blank and unparseable lines consume ids but do not appear here.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EquationDocument {
    pub source_file: String,
    pub count: usize,
    pub equations: Vec<EquationRecord>,
}
