//! # eqtree
//!
//! eqtree converts free-form mathematical equation text into canonical
//! expression-tree records. Each input line holds one equation in everyday
//! notation, including implicit multiplication (`2x`), unicode superscripts
//! (`x²`), absolute value bars (`|x - 1|`), and piecewise definitions
//! (`f(x) = { x + 1 ; x < 0 }`). Each output record holds the parsed sides
//! as JSON-friendly trees, the variables involved, and a structural
//! classification such as `linear`, `radical`, or `piecewise`.
//!
//! The pipeline per line: tokenize, normalize the token stream, split at
//! the top-level relation, parse each side by precedence climbing, then
//! classify. [`eqtree::assembling::parse_line`] runs all of it for one
//! line; [`eqtree::processing::process_file`] drives whole `.txt` files and
//! the `eqtree` binary wraps that for the command line.

pub mod eqtree;
