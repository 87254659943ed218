//! AST and record types shared across the pipeline
//!
//! - `expression`: the expression tree and relational operators
//! - `ordering`: canonical ordering used for identity detection
//! - `record`: equation records, documents, and the type taxonomy

pub mod expression;
pub mod ordering;
pub mod record;

pub use expression::{Branch, Expr, RelOp};
pub use record::{EquationDocument, EquationRecord, EquationType};
