//! Shared test fixtures
//!
//! The `samples` module carries a small curated corpus of equation lines
//! with their expected classifications. Integration tests iterate it so a
//! classifier change that shifts any published example fails loudly, and
//! file-level tests write it out as an input file.

pub mod samples;

pub use samples::{sample_file_body, SampleEquation, SAMPLES};
