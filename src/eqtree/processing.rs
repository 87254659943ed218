//! File processing
//!
//! Drives [`parse_line`] over a whole `.txt` input: one equation per line,
//! 1-based line numbers as record ids. Blank lines and (under the skip
//! policy) unparseable lines consume their line number but produce no
//! record, so id sequences may have holes; `count` is always the number of
//! records actually produced.
//!
//! The library stays silent about skipped lines. They come back in the
//! [`ProcessReport`] and the command line front end decides how loudly to
//! report them.
//!
//! [`parse_line`]: crate::eqtree::assembling::parse_line

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use super::assembling::{self, LineError};
use super::ast::EquationDocument;

/// What to do when one line fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Drop the line, keep its error in the report, keep going.
    #[default]
    Skip,
    /// Fail the whole file on the first bad line.
    Abort,
}

impl ErrorPolicy {
    pub fn from_string(policy: &str) -> Result<Self, ProcessingError> {
        match policy {
            "skip" => Ok(ErrorPolicy::Skip),
            "abort" => Ok(ErrorPolicy::Abort),
            other => Err(ProcessingError::InvalidPolicy(other.to_string())),
        }
    }
}

/// Serialization format for the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty JSON with two-space indentation.
    #[default]
    Json,
    /// JSON on one line.
    JsonCompact,
    Yaml,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }

    /// File extension for output paths in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::JsonCompact => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Errors for the file processing pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    FileNotFound(String),
    InvalidExtension(String),
    InvalidFormat(String),
    InvalidPolicy(String),
    IoError(String),
    /// One line failed under the abort policy.
    Line {
        number: usize,
        line: String,
        error: LineError,
    },
    Serialize(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::FileNotFound(path) => write!(f, "file not found: {}", path),
            ProcessingError::InvalidExtension(path) => {
                write!(f, "expected a .txt input file, got: {}", path)
            }
            ProcessingError::InvalidFormat(format) => {
                write!(f, "unknown output format: {} (expected json or yaml)", format)
            }
            ProcessingError::InvalidPolicy(policy) => {
                write!(f, "unknown error policy: {} (expected skip or abort)", policy)
            }
            ProcessingError::IoError(message) => write!(f, "io error: {}", message),
            ProcessingError::Line {
                number,
                line,
                error,
            } => write!(f, "line {}: {}: {}", number, error, line),
            ProcessingError::Serialize(message) => {
                write!(f, "serialization failed: {}", message)
            }
        }
    }
}

/// One line dropped under the skip policy.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    pub number: usize,
    pub line: String,
    pub error: LineError,
}

/// The document plus everything that did not make it in.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessReport {
    pub document: EquationDocument,
    pub skipped: Vec<SkippedLine>,
}

/// Process already-loaded text as if it were the content of `source_file`.
pub fn process_source(
    source_file: &str,
    content: &str,
    policy: ErrorPolicy,
) -> Result<ProcessReport, ProcessingError> {
    let mut equations = Vec::new();
    let mut skipped = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }
        match assembling::parse_line(line, number) {
            Ok(record) => equations.push(record),
            Err(error) => match policy {
                ErrorPolicy::Skip => skipped.push(SkippedLine {
                    number,
                    line: line.trim().to_string(),
                    error,
                }),
                ErrorPolicy::Abort => {
                    return Err(ProcessingError::Line {
                        number,
                        line: line.trim().to_string(),
                        error,
                    })
                }
            },
        }
    }

    let count = equations.len();
    Ok(ProcessReport {
        document: EquationDocument {
            source_file: source_file.to_string(),
            count,
            equations,
        },
        skipped,
    })
}

/// Read and process one `.txt` equation file.
pub fn process_file<P: AsRef<Path>>(
    input_path: P,
    policy: ErrorPolicy,
) -> Result<ProcessReport, ProcessingError> {
    let input_path = input_path.as_ref();

    if !input_path.exists() {
        return Err(ProcessingError::FileNotFound(
            input_path.display().to_string(),
        ));
    }
    let is_txt = input_path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case("txt"))
        .unwrap_or(false);
    if !is_txt {
        return Err(ProcessingError::InvalidExtension(
            input_path.display().to_string(),
        ));
    }

    let content = fs::read_to_string(input_path)
        .map_err(|error| ProcessingError::IoError(error.to_string()))?;
    let source_file = input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| input_path.display().to_string());

    process_source(&source_file, &content, policy)
}

/// Serialize a document in the requested format.
///
/// Pretty JSON matches the documented record layout: two-space indentation,
/// no trailing newline.
pub fn serialize_document(
    document: &EquationDocument,
    format: OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map_err(|error| ProcessingError::Serialize(error.to_string())),
        OutputFormat::JsonCompact => serde_json::to_string(document)
            .map_err(|error| ProcessingError::Serialize(error.to_string())),
        OutputFormat::Yaml => serde_yaml::to_string(document)
            .map_err(|error| ProcessingError::Serialize(error.to_string())),
    }
}

/// The output path used when the caller does not name one: the input path
/// with the format's extension.
pub fn default_output_path<P: AsRef<Path>>(input_path: P, format: OutputFormat) -> PathBuf {
    input_path.as_ref().with_extension(format.extension())
}

/// Serialize and write a document, correcting the path extension to match
/// the format. Returns the path actually written.
pub fn write_output<P: AsRef<Path>>(
    document: &EquationDocument,
    output_path: P,
    format: OutputFormat,
) -> Result<PathBuf, ProcessingError> {
    let mut output_path = output_path.as_ref().to_path_buf();
    let extension_matches = output_path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case(format.extension()))
        .unwrap_or(false);
    if !extension_matches {
        output_path.set_extension(format.extension());
    }

    let serialized = serialize_document(document, format)?;
    fs::write(&output_path, serialized)
        .map_err(|error| ProcessingError::IoError(error.to_string()))?;
    Ok(output_path)
}
