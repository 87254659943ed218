//! Curated equation corpus
//!
//! One or two lines for every classification the pipeline can produce,
//! including both piecewise surface forms and the unicode notation
//! variants. `parametric` is deliberately absent: the taxonomy includes it
//! but no single line classifies as parametric.

use crate::eqtree::ast::EquationType;

/// One corpus line and the classification it must receive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleEquation {
    pub line: &'static str,
    pub equation_type: EquationType,
}

pub const SAMPLES: &[SampleEquation] = &[
    SampleEquation {
        line: "2*x + 3 = 7",
        equation_type: EquationType::Linear,
    },
    SampleEquation {
        line: "7x - 4 = 10",
        equation_type: EquationType::Linear,
    },
    SampleEquation {
        line: "x^2 + 2x + 1 = 0",
        equation_type: EquationType::Quadratic,
    },
    SampleEquation {
        line: "x² - 4 = 0",
        equation_type: EquationType::Quadratic,
    },
    SampleEquation {
        line: "x^3 - 2x = 4",
        equation_type: EquationType::Polynomial,
    },
    SampleEquation {
        line: "1/x + 1 = 2",
        equation_type: EquationType::Rational,
    },
    SampleEquation {
        line: "x^-2 = 5",
        equation_type: EquationType::Power,
    },
    SampleEquation {
        line: "sqrt(x) = 4",
        equation_type: EquationType::Radical,
    },
    SampleEquation {
        line: "x^0.5 = 3",
        equation_type: EquationType::Radical,
    },
    SampleEquation {
        line: "2^x = 8",
        equation_type: EquationType::Exponential,
    },
    SampleEquation {
        line: "log(x) = 1",
        equation_type: EquationType::Logarithmic,
    },
    SampleEquation {
        line: "ln(x + 1) = 0",
        equation_type: EquationType::Logarithmic,
    },
    SampleEquation {
        line: "|2x - 1| = 5",
        equation_type: EquationType::Absolute,
    },
    SampleEquation {
        line: "|x - 1| <= 3",
        equation_type: EquationType::Absolute,
    },
    SampleEquation {
        line: "2x + 1 < 7",
        equation_type: EquationType::InequalityLinear,
    },
    SampleEquation {
        line: "x ≥ 0",
        equation_type: EquationType::InequalityLinear,
    },
    SampleEquation {
        line: "x^2 - 1 >= 0",
        equation_type: EquationType::InequalityPolynomial,
    },
    SampleEquation {
        line: "1/x > 2",
        equation_type: EquationType::Inequality,
    },
    SampleEquation {
        line: "f(x) = { 9x + 10 , x >= 0 ; 6x - 14 , x < 0 }",
        equation_type: EquationType::Piecewise,
    },
    SampleEquation {
        line: "f(x) = { x + 1 ; x < 0 }",
        equation_type: EquationType::Piecewise,
    },
    SampleEquation {
        line: "f(x) = x^2 + 1",
        equation_type: EquationType::Functional,
    },
    SampleEquation {
        line: "y = 2x + 1",
        equation_type: EquationType::Functional,
    },
    SampleEquation {
        line: "x + 1 = 1 + x",
        equation_type: EquationType::Identity,
    },
    SampleEquation {
        line: "x*y = y*x",
        equation_type: EquationType::Identity,
    },
    SampleEquation {
        line: "3 + 4 = 7",
        equation_type: EquationType::Constant,
    },
    SampleEquation {
        line: "sin(x) = 1",
        equation_type: EquationType::Other,
    },
    SampleEquation {
        line: "2x",
        equation_type: EquationType::Other,
    },
];

/// The corpus as file content, one equation per line.
pub fn sample_file_body() -> String {
    let mut body = String::new();
    for sample in SAMPLES {
        body.push_str(sample.line);
        body.push('\n');
    }
    body
}
