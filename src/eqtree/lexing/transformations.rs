//! Token stream transformations
//!
//! Each transformation takes the spanned token vector and returns a rewritten
//! one. They run in a fixed order after raw tokenization:
//!
//! 1. `superscript_powers`: rewrite superscript digit runs into caret powers
//! 2. `word_resolution`: promote known function names, split other words
//!    into single-letter variables
//!
//! Order matters only in that both must run before parsing; neither inspects
//! the other's output shapes.

pub mod superscript_powers;
pub mod word_resolution;

pub use superscript_powers::superscript_powers;
pub use word_resolution::{word_resolution, KNOWN_FUNCTIONS};
