//! Main module for eqtree library functionality

pub mod assembling;
pub mod ast;
pub mod classifying;
pub mod lexing;
pub mod parsing;
pub mod processing;
pub mod testing;

pub use assembling::{parse_line, LineError};
pub use ast::{EquationDocument, EquationRecord, EquationType, Expr, RelOp};
